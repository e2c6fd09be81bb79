//! Deferred declarations, resolved exactly once.
//!
//! Types referencing each other (an `Author` with `posts`, a `Post` with an
//! `author`) can't all be built before one another. Their fields, interfaces
//! and union members are therefore declared as a [`Thunk`]: either a ready
//! value, or a producer called once every declaration of the batch exists.

use std::{
    fmt, mem,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

/// Declaration of a value that's either available right away or produced on
/// demand.
pub enum Thunk<T> {
    /// Value available at declaration time.
    Ready(T),

    /// Producer deferring the value until it's first needed.
    Deferred(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T> Thunk<T> {
    /// Declares a value produced by the provided `producer` on demand.
    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(producer))
    }

    /// Indicates whether this [`Thunk`] defers its value.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Produces an owned value out of this [`Thunk`].
    ///
    /// Ready values are cloned, so the declaration itself is never handed out
    /// for modification.
    pub fn force(&self) -> T
    where
        T: Clone,
    {
        match self {
            Self::Ready(v) => v.clone(),
            Self::Deferred(f) => f(),
        }
    }

    /// Consumes this [`Thunk`], producing its value.
    ///
    /// Unlike [`Thunk::force()`], the producer of a deferred value is dropped
    /// afterwards, along with everything it captured.
    pub fn into_value(self) -> T {
        match self {
            Self::Ready(v) => v,
            Self::Deferred(f) => f(),
        }
    }
}

impl<T> From<T> for Thunk<T> {
    fn from(value: T) -> Self {
        Self::Ready(value)
    }
}

impl<T: Default> Default for Thunk<T> {
    fn default() -> Self {
        Self::Ready(T::default())
    }
}

impl<T> Clone for Thunk<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Ready(v) => Self::Ready(v.clone()),
            Self::Deferred(f) => Self::Deferred(f.clone()),
        }
    }
}

/// Ready values compare by value, deferred ones by producer identity.
impl<T: PartialEq> PartialEq for Thunk<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Ready(a), Self::Ready(b)) => a == b,
            (Self::Deferred(a), Self::Deferred(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(v) => f.debug_tuple("Ready").field(v).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Resolve-once cell over a [`Thunk`].
///
/// The first [`ThunkCell::resolve_with()`] call forces the [`Thunk`], passes
/// the value through the provided `finish` step (validation, normalization)
/// and caches the outcome. Every later call returns the cached outcome
/// without invoking anything. Concurrent first calls are serialized, so the
/// producer runs once per cell even when shared across threads.
///
/// Once forced, the producer is dropped but the forced value is kept, as it
/// may own whatever the outcome only refers to. [`ThunkCell::release()`]
/// drops it as well.
pub struct ThunkCell<T, R = T> {
    declaration: Mutex<Declaration<T>>,
    resolved: OnceLock<R>,
}

enum Declaration<T> {
    Pending(Thunk<T>),
    Forced(T),
    Released,
}

impl<T, R> ThunkCell<T, R> {
    /// Wraps the provided `thunk` into an unresolved cell.
    pub fn new(thunk: Thunk<T>) -> Self {
        Self {
            declaration: Mutex::new(Declaration::Pending(thunk)),
            resolved: OnceLock::new(),
        }
    }

    /// Resolves this cell, running `finish` over the forced value on the
    /// first call only.
    pub fn resolve_with(&self, finish: impl FnOnce(&T) -> R) -> &R {
        self.resolved.get_or_init(|| {
            let pending = mem::replace(&mut *self.declaration(), Declaration::Released);
            let value = match pending {
                Declaration::Pending(thunk) => {
                    tracing::trace!(deferred = thunk.is_deferred(), "forcing thunk");
                    thunk.into_value()
                }
                Declaration::Forced(value) => value,
                // Released cells are always resolved already.
                Declaration::Released => unreachable!(),
            };
            let resolved = finish(&value);
            *self.declaration() = Declaration::Forced(value);
            resolved
        })
    }

    /// Returns the cached outcome, if this cell has been resolved already.
    pub fn get(&self) -> Option<&R> {
        self.resolved.get()
    }

    /// Indicates whether this cell has been resolved already.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Drops the forced value kept since resolution, keeping the outcome only.
    ///
    /// Does nothing until this cell is resolved.
    pub fn release(&self) {
        if self.is_resolved() {
            *self.declaration() = Declaration::Released;
        }
    }

    fn declaration(&self) -> MutexGuard<'_, Declaration<T>> {
        self.declaration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> ThunkCell<T> {
    /// Resolves this cell, returning the forced value as is.
    pub fn resolve(&self) -> &T {
        self.resolve_with(T::clone)
    }
}

impl<T, R: fmt::Debug> fmt::Debug for ThunkCell<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved.get() {
            Some(r) => f.debug_tuple("Resolved").field(r).finish(),
            None => f.write_str("Unresolved"),
        }
    }
}

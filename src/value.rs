//! Values and callables carried by declarations.
//!
//! Values use [`serde_json::Value`] as their representation: internal values
//! of enums, argument defaults, and the inputs and outputs of scalar
//! coercions. Callables are stored and handed out, but never invoked by the
//! type definitions themselves (except scalar coercion helpers).

use std::{fmt, sync::Arc};

use arcstr::ArcStr;
use indexmap::IndexMap;

pub use serde_json::Value;

/// Argument values passed to a field resolver, in declaration order.
pub type Arguments = IndexMap<ArcStr, Value>;

/// Outcome of a value coercion, with a human-readable error on failure.
pub type CoercionResult = Result<Value, String>;

/// Field resolver: produces a field's value out of its parent value and
/// arguments.
pub type ResolveFn = dyn Fn(&Value, &Arguments) -> Value + Send + Sync;

/// Runtime-type discriminator of an abstract type: returns the name of the
/// object type the provided value belongs to.
pub type ResolveTypeFn = dyn Fn(&Value) -> Option<ArcStr> + Send + Sync;

/// Object type predicate: checks whether the provided value belongs to it.
pub type IsTypeOfFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Scalar output coercion: internal value into its external representation.
pub type SerializeFn = dyn Fn(&Value) -> CoercionResult + Send + Sync;

/// Scalar input coercion of a variable value.
pub type ParseValueFn = dyn Fn(&Value) -> CoercionResult + Send + Sync;

/// Scalar input coercion of a literal (already lowered to a [`Value`] by the
/// parser).
pub type ParseLiteralFn = dyn Fn(&Value) -> CoercionResult + Send + Sync;

/// Shared callable of the `F` signature.
///
/// Two [`Callable`]s are equal only if they share the same function instance.
pub struct Callable<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Callable<F> {
    /// Wraps an already shared function.
    pub fn from_arc(f: Arc<F>) -> Self {
        Self(f)
    }

    /// Returns the wrapped function.
    pub fn get(&self) -> &F {
        &self.0
    }
}

impl<F: ?Sized> Clone for Callable<F> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<F: ?Sized> PartialEq for Callable<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> fmt::Debug for Callable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

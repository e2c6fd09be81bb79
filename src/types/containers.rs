use derive_more::with_trait::Display;

use crate::{error::SchemaError, schema::meta::NamedType, types::base::Type};

/// List type wrapping another type, e.g. `[Int]`.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("[{_0}]")]
pub struct ListType(Box<Type>);

impl ListType {
    /// Builds a new [`ListType`] of the provided `of_type`.
    ///
    /// Any type may be wrapped into a list, including another list or a
    /// non-null type.
    pub fn new(of_type: impl Into<Type>) -> Self {
        Self(Box::new(of_type.into()))
    }

    /// Returns the type of this list's items.
    pub fn of_type(&self) -> &Type {
        &self.0
    }
}

/// Non-null type wrapping a nullable type, e.g. `Int!`.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{_0}!")]
pub struct NonNullType(Box<Type>);

impl NonNullType {
    /// Builds a new [`NonNullType`] of the provided `of_type`.
    ///
    /// # Errors
    ///
    /// If `of_type` is a [`NonNullType`] itself.
    pub fn new(of_type: impl Into<Type>) -> Result<Self, SchemaError> {
        match of_type.into() {
            Type::NonNull(nn) => Err(SchemaError::AlreadyNonNull {
                of_type: nn.to_string(),
            }),
            t => Ok(Self(Box::new(t))),
        }
    }

    /// Returns the nullable type this type makes non-null.
    pub fn of_type(&self) -> &Type {
        &self.0
    }
}

/// Named types are always nullable, so making one non-null can't fail.
impl From<NamedType> for NonNullType {
    fn from(named: NamedType) -> Self {
        Self(Box::new(Type::Named(named)))
    }
}

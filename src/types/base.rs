use std::fmt;

use derive_more::with_trait::{Display, From};
use serde::{Serialize, Serializer};

use crate::{
    error::SchemaError,
    schema::meta::{NamedType, NamedTypeRef},
    types::containers::{ListType, NonNullType},
};

/// GraphQL type kind
///
/// The GraphQL specification defines a number of type kinds - the meta type
/// of a type.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum TypeKind {
    /// ## Scalar types
    ///
    /// Scalar types appear as the leaf nodes of GraphQL queries. Strings,
    /// numbers, and booleans are the built in types, and while it's possible
    /// to define your own, it's relatively uncommon.
    #[display("SCALAR")]
    Scalar,

    /// ## Object types
    ///
    /// The most common type to be implemented by users. Objects have fields
    /// and can implement interfaces.
    #[display("OBJECT")]
    Object,

    /// ## Interface types
    ///
    /// Interface types are used to represent overlapping fields between
    /// multiple types, and can be queried for their concrete type.
    #[display("INTERFACE")]
    Interface,

    /// ## Union types
    ///
    /// Unions are similar to interfaces but can not contain any fields on
    /// their own.
    #[display("UNION")]
    Union,

    /// ## Enum types
    ///
    /// Like scalars, enum types appear as the leaf nodes of GraphQL queries.
    #[display("ENUM")]
    Enum,

    /// ## Input objects
    ///
    /// Represents complex values provided in queries _into_ the system.
    #[display("INPUT_OBJECT")]
    InputObject,

    /// ## List types
    ///
    /// Represent lists of other types.
    #[display("LIST")]
    List,

    /// ## Non-null types
    ///
    /// In GraphQL, nullable types are the default. By putting a `!` after a
    /// type, it becomes non-nullable.
    #[display("NON_NULL")]
    NonNull,
}

/// Any GraphQL type: a named type, or a list or non-null wrapper around
/// another type.
///
/// The [`Display`] form is the canonical one used in GraphQL documents, e.g.
/// `[Int!]!`. Serialization produces the very same string.
///
/// Two [`Type`]s are equal when they're built of the same wrappers around the
/// same named type instance.
#[derive(Clone, Debug, Display, Eq, From, PartialEq)]
pub enum Type {
    /// Named type, e.g. `Int`.
    Named(NamedType),
    /// List type, e.g. `[Int]`.
    List(ListType),
    /// Non-null type, e.g. `Int!`.
    NonNull(NonNullType),
}

impl Type {
    /// Wraps this type into a list, e.g. `Int` into `[Int]`.
    pub fn list(self) -> Self {
        ListType::new(self).into()
    }

    /// Wraps this type into a non-null one, e.g. `Int` into `Int!`.
    ///
    /// # Errors
    ///
    /// If this type is non-null already.
    pub fn non_null(self) -> Result<Self, SchemaError> {
        NonNullType::new(self).map(Into::into)
    }

    /// Returns the type wrapped by a list or non-null type.
    pub fn of_type(&self) -> Option<&Self> {
        match self {
            Self::Named(_) => None,
            Self::List(l) => Some(l.of_type()),
            Self::NonNull(n) => Some(n.of_type()),
        }
    }

    /// Returns the named type at the core of this type, stripping every list
    /// and non-null wrapper, e.g. `Int` out of `[Int!]!`.
    pub fn named_type(&self) -> &NamedType {
        match self {
            Self::Named(n) => n,
            Self::List(l) => l.of_type().named_type(),
            Self::NonNull(n) => n.of_type().named_type(),
        }
    }

    /// Strips the outermost non-null wrapper, if any.
    pub fn nullable_type(&self) -> &Self {
        match self {
            Self::NonNull(n) => n.of_type(),
            t => t,
        }
    }

    /// Returns the [`TypeKind`] of this type.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Named(n) => n.kind(),
            Self::List(_) => TypeKind::List,
            Self::NonNull(_) => TypeKind::NonNull,
        }
    }

    /// Indicates whether this type is a non-null one.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Indicates whether this type, or the type it makes non-null, is a list.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable_type(), Self::List(_))
    }

    /// Indicates whether this type may be used for arguments and input fields.
    pub fn is_input(&self) -> bool {
        self.named_type().is_input()
    }

    /// Indicates whether this type may be used for fields.
    pub fn is_output(&self) -> bool {
        self.named_type().is_output()
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Non-owning counterpart of a [`Type`], held by live fields and input
/// fields.
///
/// Displays and compares just like the [`Type`] it was made of, without
/// keeping its named type alive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeRef {
    /// Named type, e.g. `Int`.
    Named(NamedTypeRef),
    /// List type, e.g. `[Int]`.
    List(Box<TypeRef>),
    /// Non-null type, e.g. `Int!`.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Returns the reference to the named type at the core of this type.
    pub fn named_type(&self) -> &NamedTypeRef {
        match self {
            Self::Named(n) => n,
            Self::List(t) | Self::NonNull(t) => t.named_type(),
        }
    }

    /// Indicates whether this type is a non-null one.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Indicates whether this type may be used for arguments and input fields.
    pub fn is_input(&self) -> bool {
        self.named_type().is_input()
    }

    /// Indicates whether this type may be used for fields.
    pub fn is_output(&self) -> bool {
        self.named_type().is_output()
    }

    /// Returns the [`Type`] this reference was made of.
    ///
    /// # Errors
    ///
    /// If its named type has been dropped already.
    pub fn upgrade(&self) -> Result<Type, SchemaError> {
        match self {
            Self::Named(n) => n.upgrade().map(Type::Named),
            Self::List(t) => t.upgrade().map(Type::list),
            Self::NonNull(t) => t.upgrade()?.non_null(),
        }
    }
}

impl From<&Type> for TypeRef {
    fn from(ty: &Type) -> Self {
        match ty {
            Type::Named(n) => Self::Named(n.downgrade()),
            Type::List(l) => Self::List(Box::new(l.of_type().into())),
            Type::NonNull(n) => Self::NonNull(Box::new(n.of_type().into())),
        }
    }
}

impl PartialEq<Type> for TypeRef {
    fn eq(&self, other: &Type) -> bool {
        match (self, other) {
            (Self::Named(r), Type::Named(n)) => r.refers_to(n),
            (Self::List(r), Type::List(l)) => **r == *l.of_type(),
            (Self::NonNull(r), Type::NonNull(n)) => **r == *n.of_type(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::List(t) => write!(f, "[{t}]"),
            Self::NonNull(t) => write!(f, "{t}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::SchemaError, schema::meta::ScalarType, types::base::TypeKind};

    use super::{Type, TypeRef};

    fn int() -> Type {
        ScalarType::int().into()
    }

    #[test]
    fn stringifies_wrappers() {
        assert_eq!(int().to_string(), "Int");
        assert_eq!(int().list().to_string(), "[Int]");
        assert_eq!(int().non_null().unwrap().to_string(), "Int!");
        assert_eq!(int().non_null().unwrap().list().to_string(), "[Int!]");
        assert_eq!(int().list().non_null().unwrap().to_string(), "[Int]!");
        assert_eq!(int().list().list().to_string(), "[[Int]]");
        assert_eq!(
            int().non_null().unwrap().list().non_null().unwrap().to_string(),
            "[Int!]!",
        );
    }

    #[test]
    fn rejects_non_null_of_non_null() {
        let err = int().non_null().unwrap().non_null().unwrap_err();

        assert_eq!(
            err,
            SchemaError::AlreadyNonNull {
                of_type: "Int!".into(),
            },
        );

        let err = int().list().non_null().unwrap().non_null().unwrap_err();

        assert_eq!(
            err,
            SchemaError::AlreadyNonNull {
                of_type: "[Int]!".into(),
            },
        );
    }

    #[test]
    fn serializes_to_canonical_string() {
        let ty = int().non_null().unwrap().list();

        assert_eq!(serde_json::to_string(&ty).unwrap(), r#""[Int!]""#);
        assert_eq!(
            serde_json::to_string(&ScalarType::string()).unwrap(),
            r#""String""#,
        );
    }

    #[test]
    fn unwraps_named_type() {
        let ty = int().non_null().unwrap().list().non_null().unwrap();

        assert_eq!(ty.named_type().name(), "Int");
        assert_eq!(ty.kind(), TypeKind::NonNull);
        assert_eq!(ty.nullable_type().kind(), TypeKind::List);
        assert!(ty.is_list());
        assert!(ty.is_non_null());
        assert!(ty.is_input());
        assert!(ty.is_output());
        assert_eq!(ty.of_type().unwrap().to_string(), "[Int!]");
        assert_eq!(int().of_type(), None);
    }

    #[test]
    fn mirrors_types_by_reference() {
        let ty = int().non_null().unwrap().list();
        let reference = TypeRef::from(&ty);

        assert_eq!(reference.to_string(), "[Int!]");
        assert_eq!(reference, ty);
        assert_ne!(reference, int().list());
        assert_eq!(reference.named_type().name(), "Int");
        assert!(!reference.is_non_null());
        assert!(reference.is_input());
        assert_eq!(reference.upgrade(), Ok(ty));
    }

    #[test]
    fn compares_structurally_around_instances() {
        assert_eq!(int().list(), int().list());
        assert_ne!(int().list(), int());
        assert_ne!(
            int().list(),
            Type::from(ScalarType::float()).list(),
        );
    }
}

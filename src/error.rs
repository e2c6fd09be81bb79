//! Errors raised while defining types and assembling schemas.

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

/// Error in a type declaration or in a schema assembled from declarations.
///
/// All of these are configuration errors: nothing here is transient or worth
/// retrying. Messages name the offending type (and its field, argument or
/// value where applicable) so they can be reported to the schema author as is.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum SchemaError {
    /// A `NonNull` type was asked to wrap a type that is non-null already.
    #[display("Can only create NonNull of a nullable type, but `{of_type}` is already non-null")]
    AlreadyNonNull {
        /// Canonical string form of the rejected type.
        of_type: String,
    },

    /// A type, field, argument or enum value name is not a valid GraphQL name.
    #[display("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \"{name}\" does not")]
    InvalidName {
        /// The rejected name.
        name: ArcStr,
    },

    /// A name starts with `__`, which is reserved for introspection.
    #[display(
        "Name \"{name}\" must not begin with \"__\", which is reserved by GraphQL introspection"
    )]
    ReservedName {
        /// The rejected name, qualified by its owner.
        name: String,
    },

    /// A field or enum value uses the legacy `is_deprecated` flag.
    #[display("{coordinate} should provide \"deprecationReason\" instead of \"isDeprecated\"")]
    LegacyDeprecation {
        /// `Type.field` or `Enum.VALUE`.
        coordinate: String,
    },

    /// A field of an object or interface type has a non-output type.
    #[display("The type of {coordinate} must be an output type, but got: {found}")]
    NotOutputType {
        /// `Type.field`.
        coordinate: String,
        /// Canonical string form of the rejected type.
        found: String,
    },

    /// An argument or input field has a non-input type.
    #[display("The type of {coordinate} must be an input type, but got: {found}")]
    NotInputType {
        /// `Type.field(arg:)`, `@directive(arg:)` or `Input.field`.
        coordinate: String,
        /// Canonical string form of the rejected type.
        found: String,
    },

    /// An input object field defines a resolver.
    #[display(
        "{coordinate} field has a resolve property, but Input Types cannot define resolvers"
    )]
    InputFieldResolver {
        /// `Input.field`.
        coordinate: String,
    },

    /// A scalar type doesn't provide its `serialize` function.
    #[display(
        "{type_name} must provide \"serialize\" function. If this custom Scalar is also \
         used as an input type, ensure \"parseValue\" and \"parseLiteral\" functions are \
         also provided"
    )]
    MissingSerialize {
        /// Name of the scalar type.
        type_name: ArcStr,
    },

    /// A scalar type provides only one of `parse_value` and `parse_literal`.
    #[display("{type_name} must provide both \"parseValue\" and \"parseLiteral\" functions")]
    IncompleteParseFunctions {
        /// Name of the scalar type.
        type_name: ArcStr,
    },

    /// An enum value is named `true`, `false` or `null`.
    #[display("Name \"{coordinate}\" can not be used as an Enum value")]
    ReservedEnumValue {
        /// `Enum.value`.
        coordinate: String,
    },

    /// An object type lists the same interface more than once.
    #[display("Type {type_name} can only implement {interface} once")]
    DuplicateInterface {
        /// Name of the object type.
        type_name: ArcStr,
        /// Name of the repeated interface.
        interface: ArcStr,
    },

    /// A union type lists the same member more than once.
    #[display("Union type {union_name} can only include type {member} once")]
    DuplicateUnionMember {
        /// Name of the union type.
        union_name: ArcStr,
        /// Name of the repeated member.
        member: ArcStr,
    },

    /// Two distinct type instances share a name within one schema.
    #[display(
        "Schema must contain uniquely named types but contains multiple types named \"{name}\""
    )]
    DuplicateType {
        /// The colliding name.
        name: ArcStr,
    },

    /// A type was reached through a reference after every owner of it (the
    /// schemas registering it and the declarations referring to it) had been
    /// dropped.
    #[display("Type \"{name}\" is no longer owned by any schema or declaration")]
    DroppedType {
        /// Name of the dropped type.
        name: ArcStr,
    },

    /// Two directives share a name within one schema.
    #[display(
        "Schema must contain uniquely named directives but contains multiple directives \
         named \"@{name}\""
    )]
    DuplicateDirective {
        /// The colliding name.
        name: ArcStr,
    },

    /// An object, interface or input object type has no fields.
    #[display("Type {type_name} must define one or more fields")]
    NoFields {
        /// Name of the type.
        type_name: ArcStr,
    },

    /// A union type has no members.
    #[display("Union type {union_name} must define one or more member types")]
    NoUnionMembers {
        /// Name of the union type.
        union_name: ArcStr,
    },

    /// An enum type has no values.
    #[display("Enum type {type_name} must define one or more values")]
    NoEnumValues {
        /// Name of the enum type.
        type_name: ArcStr,
    },

    /// An object doesn't provide a field required by one of its interfaces.
    #[display("Interface field {interface}.{field} expected but {object} does not provide it")]
    MissingInterfaceField {
        /// Name of the interface.
        interface: ArcStr,
        /// Name of the field.
        field: ArcStr,
        /// Name of the implementing object.
        object: ArcStr,
    },

    /// An object field isn't a subtype of the interface field it implements.
    #[display(
        "Interface field {interface}.{field} expects type {expected} but \
         {object}.{field} is type {found}"
    )]
    InterfaceFieldTypeMismatch {
        /// Name of the interface.
        interface: ArcStr,
        /// Name of the field.
        field: ArcStr,
        /// Name of the implementing object.
        object: ArcStr,
        /// Type of the interface field.
        expected: String,
        /// Type of the object field.
        found: String,
    },

    /// An object field lacks an argument of the interface field.
    #[display(
        "Interface field argument {interface}.{field}({argument}:) expected but \
         {object}.{field} does not provide it"
    )]
    MissingInterfaceArgument {
        /// Name of the interface.
        interface: ArcStr,
        /// Name of the field.
        field: ArcStr,
        /// Name of the argument.
        argument: ArcStr,
        /// Name of the implementing object.
        object: ArcStr,
    },

    /// An object field argument has another type than the interface one.
    #[display(
        "Interface field argument {interface}.{field}({argument}:) expects type {expected} \
         but {object}.{field}({argument}:) is type {found}"
    )]
    InterfaceArgumentTypeMismatch {
        /// Name of the interface.
        interface: ArcStr,
        /// Name of the field.
        field: ArcStr,
        /// Name of the argument.
        argument: ArcStr,
        /// Name of the implementing object.
        object: ArcStr,
        /// Type of the interface argument.
        expected: String,
        /// Type of the object argument.
        found: String,
    },

    /// An object field adds a required argument missing from the interface.
    #[display(
        "Object field argument {object}.{field}({argument}:) is of required type {found} \
         but is not also provided by the Interface field {interface}.{field}"
    )]
    RequiredExtraArgument {
        /// Name of the implementing object.
        object: ArcStr,
        /// Name of the field.
        field: ArcStr,
        /// Name of the argument.
        argument: ArcStr,
        /// Type of the argument.
        found: String,
        /// Name of the interface.
        interface: ArcStr,
    },
}

impl SchemaError {
    pub(crate) fn invalid_name(name: &ArcStr) -> Self {
        Self::InvalidName { name: name.clone() }
    }
}

#[cfg(test)]
mod tests {
    use arcstr::literal;

    use super::SchemaError;

    #[test]
    fn names_offending_coordinates() {
        assert_eq!(
            SchemaError::AlreadyNonNull {
                of_type: "Int!".into(),
            }
            .to_string(),
            "Can only create NonNull of a nullable type, but `Int!` is already non-null",
        );
        assert_eq!(
            SchemaError::InputFieldResolver {
                coordinate: "SomeInput.field".into(),
            }
            .to_string(),
            "SomeInput.field field has a resolve property, \
             but Input Types cannot define resolvers",
        );
        assert_eq!(
            SchemaError::DuplicateType {
                name: literal!("String"),
            }
            .to_string(),
            "Schema must contain uniquely named types \
             but contains multiple types named \"String\"",
        );
    }
}

//! Validation of type declarations and assembled schemas.
//!
//! Declarations are validated once their lazily declared parts are first
//! forced, turning configs into live [`Field`](crate::meta::Field)s,
//! [`EnumValue`](crate::meta::EnumValue)s and so on. Rules spanning several
//! types at once (interface conformance, non-empty types) run over the whole
//! [`Schema`](crate::Schema) instead.

mod composite;
mod fields;
mod leaf;
mod schema;

use arcstr::ArcStr;

use crate::{error::SchemaError, types::name::is_valid_name};

pub(crate) use self::{
    composite::{define_interfaces, define_union_members},
    fields::{define_arguments, define_field_map, define_input_field_map},
    leaf::{define_enum_values, define_scalar_coercion},
    schema::validate_schema,
};

/// Checks that `name` matches the GraphQL name syntax.
pub(crate) fn validate_name(name: &ArcStr) -> Result<(), SchemaError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(SchemaError::invalid_name(name))
    }
}

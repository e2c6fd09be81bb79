use arcstr::ArcStr;

use crate::{
    error::SchemaError,
    schema::{
        config::{ArgumentConfigMap, FieldConfigMap, InputFieldConfigMap},
        meta::{Argument, DeprecationStatus, Field, FieldMap, InputField, InputFieldMap},
    },
    types::base::TypeRef,
};

use super::validate_name;

/// Turns field declarations of the `type_name` object or interface into live
/// [`Field`]s, referring to their types without owning them.
pub(crate) fn define_field_map(
    type_name: &ArcStr,
    configs: &FieldConfigMap,
) -> Result<FieldMap, SchemaError> {
    configs
        .iter()
        .map(|(name, config)| {
            validate_name(name)?;
            let coordinate = format!("{type_name}.{name}");

            if config.is_deprecated.is_some() {
                return Err(SchemaError::LegacyDeprecation { coordinate });
            }
            if !config.field_type.is_output() {
                return Err(SchemaError::NotOutputType {
                    coordinate,
                    found: config.field_type.to_string(),
                });
            }

            let field = Field {
                name: name.clone(),
                description: config.description.clone(),
                arguments: define_arguments(&coordinate, &config.args)?,
                field_type: TypeRef::from(&config.field_type),
                resolve: config.resolve.clone(),
                deprecation_status: DeprecationStatus::from_reason(
                    config.deprecation_reason.clone(),
                ),
                ast_node: config.ast_node.clone(),
            };
            Ok((name.clone(), field))
        })
        .collect()
}

/// Turns argument declarations of the `owner` field or directive into live
/// [`Argument`]s, keeping their declaration order.
pub(crate) fn define_arguments(
    owner: &str,
    configs: &ArgumentConfigMap,
) -> Result<Vec<Argument>, SchemaError> {
    configs
        .iter()
        .map(|(name, config)| {
            validate_name(name)?;
            if !config.arg_type.is_input() {
                return Err(SchemaError::NotInputType {
                    coordinate: format!("{owner}({name}:)"),
                    found: config.arg_type.to_string(),
                });
            }
            Ok(Argument {
                name: name.clone(),
                description: config.description.clone(),
                arg_type: config.arg_type.clone(),
                default_value: config.default_value.clone(),
                ast_node: config.ast_node.clone(),
            })
        })
        .collect()
}

/// Turns field declarations of the `type_name` input object into live
/// [`InputField`]s.
pub(crate) fn define_input_field_map(
    type_name: &ArcStr,
    configs: &InputFieldConfigMap,
) -> Result<InputFieldMap, SchemaError> {
    configs
        .iter()
        .map(|(name, config)| {
            validate_name(name)?;
            let coordinate = format!("{type_name}.{name}");

            if config.resolve.is_some() {
                return Err(SchemaError::InputFieldResolver { coordinate });
            }
            if !config.field_type.is_input() {
                return Err(SchemaError::NotInputType {
                    coordinate,
                    found: config.field_type.to_string(),
                });
            }

            let field = InputField {
                name: name.clone(),
                description: config.description.clone(),
                field_type: TypeRef::from(&config.field_type),
                default_value: config.default_value.clone(),
                ast_node: config.ast_node.clone(),
            };
            Ok((name.clone(), field))
        })
        .collect()
}

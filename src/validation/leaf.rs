use arcstr::ArcStr;

use crate::{
    error::SchemaError,
    schema::{
        config::EnumValueConfigMap,
        meta::{DeclaredCoercion, DeprecationStatus, EnumValue, ScalarCoercion},
    },
    value::Value,
};

use super::validate_name;

/// Names that would be ambiguous with the literals of GraphQL documents.
const RESERVED_ENUM_VALUES: [&str; 3] = ["true", "false", "null"];

/// Checks that the `type_name` scalar provides its output coercion, and either
/// both input coercions or none of them.
pub(crate) fn define_scalar_coercion(
    type_name: &ArcStr,
    declared: &DeclaredCoercion,
) -> Result<ScalarCoercion, SchemaError> {
    let serialize = declared
        .serialize
        .clone()
        .ok_or_else(|| SchemaError::MissingSerialize {
            type_name: type_name.clone(),
        })?;
    if declared.parse_value.is_some() != declared.parse_literal.is_some() {
        return Err(SchemaError::IncompleteParseFunctions {
            type_name: type_name.clone(),
        });
    }
    Ok(ScalarCoercion {
        serialize,
        parse_value: declared.parse_value.clone(),
        parse_literal: declared.parse_literal.clone(),
    })
}

/// Turns value declarations of the `type_name` enum into live [`EnumValue`]s.
///
/// A value without an explicit internal value stands for its own name.
pub(crate) fn define_enum_values(
    type_name: &ArcStr,
    configs: &EnumValueConfigMap,
) -> Result<Vec<EnumValue>, SchemaError> {
    configs
        .iter()
        .map(|(name, config)| {
            validate_name(name)?;
            let coordinate = format!("{type_name}.{name}");

            if RESERVED_ENUM_VALUES.contains(&name.as_str()) {
                return Err(SchemaError::ReservedEnumValue { coordinate });
            }
            if config.is_deprecated.is_some() {
                return Err(SchemaError::LegacyDeprecation { coordinate });
            }

            Ok(EnumValue {
                value: config
                    .value
                    .clone()
                    .unwrap_or_else(|| Value::String(name.to_string())),
                name: name.clone(),
                description: config.description.clone(),
                deprecation_status: DeprecationStatus::from_reason(
                    config.deprecation_reason.clone(),
                ),
                ast_node: config.ast_node.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use arcstr::literal;
    use indexmap::indexmap;
    use serde_json::json;

    use crate::{
        error::SchemaError,
        schema::{
            config::{EnumConfig, EnumValueConfig, ScalarConfig},
            meta::{EnumType, ScalarType},
        },
    };

    fn scalar(config: ScalarConfig) -> Result<(), SchemaError> {
        ScalarType::new(config).validate()
    }

    #[test]
    fn requires_serialize() {
        assert_eq!(
            scalar(ScalarConfig::new("SomeScalar")),
            Err(SchemaError::MissingSerialize {
                type_name: literal!("SomeScalar"),
            }),
        );
        assert_eq!(
            scalar(ScalarConfig::new("SomeScalar"))
                .unwrap_err()
                .to_string(),
            "SomeScalar must provide \"serialize\" function. If this custom Scalar is also \
             used as an input type, ensure \"parseValue\" and \"parseLiteral\" functions are \
             also provided",
        );
    }

    #[test]
    fn requires_both_parse_functions() {
        let only_value = ScalarConfig::new("SomeScalar")
            .serialize(|v| Ok(v.clone()))
            .parse_value(|v| Ok(v.clone()));
        let only_literal = ScalarConfig::new("SomeScalar")
            .serialize(|v| Ok(v.clone()))
            .parse_literal(|v| Ok(v.clone()));
        let both = only_value.clone().parse_literal(|v| Ok(v.clone()));

        assert_eq!(
            scalar(only_value).unwrap_err().to_string(),
            "SomeScalar must provide both \"parseValue\" and \"parseLiteral\" functions",
        );
        assert!(scalar(only_literal).is_err());
        assert_eq!(scalar(both), Ok(()));
    }

    #[test]
    fn accepts_input_as_is_without_parse_functions() {
        let scalar = ScalarType::new(
            ScalarConfig::new("Opaque").serialize(|v| Ok(json!(v.to_string()))),
        );
        let coercion = scalar.coercion().unwrap();

        assert_eq!(coercion.serialize(&json!(1)), Ok(json!("1")));
        assert_eq!(coercion.parse_value(&json!([1])), Ok(json!([1])));
        assert_eq!(coercion.parse_literal(&json!(null)), Ok(json!(null)));
    }

    #[test]
    fn rejects_reserved_enum_values() {
        for reserved in ["true", "false", "null"] {
            let enum_type = EnumType::new(EnumConfig::new(
                "SomeEnum",
                indexmap! { reserved.into() => EnumValueConfig::new() },
            ));

            assert_eq!(
                enum_type.validate().unwrap_err().to_string(),
                format!("Name \"SomeEnum.{reserved}\" can not be used as an Enum value"),
            );
        }
    }

    #[test]
    fn rejects_legacy_enum_deprecation() {
        let enum_type = EnumType::new(EnumConfig::new(
            "SomeEnum",
            indexmap! { literal!("FOO") => EnumValueConfig::new().is_deprecated(true) },
        ));

        assert_eq!(
            enum_type.validate().unwrap_err().to_string(),
            "SomeEnum.FOO should provide \"deprecationReason\" instead of \"isDeprecated\"",
        );
    }
}

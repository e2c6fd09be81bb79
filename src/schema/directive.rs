//! Directive definitions.

use std::sync::LazyLock;

use arcstr::{ArcStr, literal};
use derive_more::with_trait::Display;

use crate::{
    ast::AstNode,
    error::SchemaError,
    schema::{
        config::DirectiveConfig,
        meta::{Argument, NamedType, ScalarType},
    },
    types::base::Type,
    validation,
    value::Value,
};

/// Reason of deprecation used when `@deprecated` is applied without one.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Location a directive may be applied at.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    /// Query operation.
    #[display("QUERY")]
    Query,
    /// Mutation operation.
    #[display("MUTATION")]
    Mutation,
    /// Subscription operation.
    #[display("SUBSCRIPTION")]
    Subscription,
    /// Field selection.
    #[display("FIELD")]
    Field,
    /// Fragment definition.
    #[display("FRAGMENT_DEFINITION")]
    FragmentDefinition,
    /// Fragment spread.
    #[display("FRAGMENT_SPREAD")]
    FragmentSpread,
    /// Inline fragment.
    #[display("INLINE_FRAGMENT")]
    InlineFragment,
    /// Variable definition.
    #[display("VARIABLE_DEFINITION")]
    VariableDefinition,
    /// Schema definition.
    #[display("SCHEMA")]
    Schema,
    /// Scalar definition.
    #[display("SCALAR")]
    Scalar,
    /// Object definition.
    #[display("OBJECT")]
    Object,
    /// Field definition.
    #[display("FIELD_DEFINITION")]
    FieldDefinition,
    /// Argument definition.
    #[display("ARGUMENT_DEFINITION")]
    ArgumentDefinition,
    /// Interface definition.
    #[display("INTERFACE")]
    Interface,
    /// Union definition.
    #[display("UNION")]
    Union,
    /// Enum definition.
    #[display("ENUM")]
    Enum,
    /// Enum value definition.
    #[display("ENUM_VALUE")]
    EnumValue,
    /// Input object definition.
    #[display("INPUT_OBJECT")]
    InputObject,
    /// Input field definition.
    #[display("INPUT_FIELD_DEFINITION")]
    InputFieldDefinition,
}

/// Directive definition: a name, the locations it applies at, and its
/// arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    /// Name of the directive, without the leading `@`.
    pub name: ArcStr,
    /// Optional description of the directive.
    pub description: Option<ArcStr>,
    /// Locations the directive may be applied at.
    pub locations: Vec<DirectiveLocation>,
    /// Arguments of the directive, in declaration order.
    pub arguments: Vec<Argument>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
}

impl Directive {
    /// Builds a new [`Directive`] out of the provided declaration.
    ///
    /// Unlike named types, directives are validated right away.
    ///
    /// # Errors
    ///
    /// If the name of the directive or of one of its arguments is invalid, or
    /// if an argument isn't of an input type.
    pub fn new(config: DirectiveConfig) -> Result<Self, SchemaError> {
        validation::validate_name(&config.name)?;
        let arguments = validation::define_arguments(&format!("@{}", config.name), &config.args)?;
        Ok(Self {
            name: config.name,
            description: config.description,
            locations: config.locations,
            arguments,
            ast_node: config.ast_node,
        })
    }

    /// Access an argument's metadata given its name.
    pub fn argument_by_name(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// `@include(if: Boolean!)` directive.
    pub fn include() -> Self {
        INCLUDE.clone()
    }

    /// `@skip(if: Boolean!)` directive.
    pub fn skip() -> Self {
        SKIP.clone()
    }

    /// `@deprecated(reason: String = "No longer supported")` directive.
    pub fn deprecated() -> Self {
        DEPRECATED.clone()
    }
}

fn non_null_boolean() -> Type {
    Type::NonNull(NamedType::from(ScalarType::boolean()).into())
}

fn condition(name: ArcStr, description: ArcStr, if_description: ArcStr) -> Directive {
    Directive {
        name,
        description: Some(description),
        locations: vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ],
        arguments: vec![Argument {
            name: literal!("if"),
            description: Some(if_description),
            arg_type: non_null_boolean(),
            default_value: None,
            ast_node: None,
        }],
        ast_node: None,
    }
}

static INCLUDE: LazyLock<Directive> = LazyLock::new(|| {
    condition(
        literal!("include"),
        literal!(
            "Directs the executor to include this field or fragment only when the `if` \
             argument is true."
        ),
        literal!("Included when true."),
    )
});

static SKIP: LazyLock<Directive> = LazyLock::new(|| {
    condition(
        literal!("skip"),
        literal!(
            "Directs the executor to skip this field or fragment when the `if` argument is \
             true."
        ),
        literal!("Skipped when true."),
    )
});

static DEPRECATED: LazyLock<Directive> = LazyLock::new(|| Directive {
    name: literal!("deprecated"),
    description: Some(literal!(
        "Marks an element of a GraphQL schema as no longer supported."
    )),
    locations: vec![
        DirectiveLocation::FieldDefinition,
        DirectiveLocation::EnumValue,
    ],
    arguments: vec![Argument {
        name: literal!("reason"),
        description: Some(literal!(
            "Explains why this element was deprecated, usually also including a suggestion \
             for how to access supported similar data. Formatted using the Markdown syntax \
             (as specified by [CommonMark](https://commonmark.org/)."
        )),
        arg_type: ScalarType::string().into(),
        default_value: Some(Value::from(DEFAULT_DEPRECATION_REASON)),
        ast_node: None,
    }],
    ast_node: None,
});

/// Returns every directive defined by the GraphQL specification.
pub fn specified_directives() -> Vec<Directive> {
    vec![Directive::include(), Directive::skip(), Directive::deprecated()]
}

/// Checks whether the provided directive is one of the
/// [`specified_directives()`].
///
/// A custom directive merely named like a specified one doesn't qualify.
pub fn is_specified_directive(directive: &Directive) -> bool {
    [&*INCLUDE, &*SKIP, &*DEPRECATED].contains(&directive)
}

#[cfg(test)]
mod tests {
    use arcstr::literal;
    use indexmap::IndexMap;

    use crate::{
        error::SchemaError,
        schema::{
            config::{ArgumentConfig, DirectiveConfig, ObjectConfig},
            meta::{ObjectType, ScalarType},
        },
    };

    use super::{
        DEFAULT_DEPRECATION_REASON, Directive, DirectiveLocation, is_specified_directive,
        specified_directives,
    };

    #[test]
    fn defines_specified_directives() {
        let names = specified_directives()
            .into_iter()
            .map(|d| d.name)
            .collect::<Vec<_>>();

        assert_eq!(names, [literal!("include"), literal!("skip"), literal!("deprecated")]);

        let skip = Directive::skip();
        let arg = skip.argument_by_name("if").unwrap();
        assert_eq!(arg.arg_type.to_string(), "Boolean!");
        assert!(is_specified_directive(&skip));

        let deprecated = Directive::deprecated();
        let reason = deprecated.argument_by_name("reason").unwrap();
        assert_eq!(reason.arg_type.to_string(), "String");
        assert_eq!(
            reason.default_value.as_ref().and_then(|v| v.as_str()),
            Some(DEFAULT_DEPRECATION_REASON),
        );
        assert_eq!(DirectiveLocation::EnumValue.to_string(), "ENUM_VALUE");
    }

    #[test]
    fn validates_arguments_eagerly() {
        let custom = Directive::new(
            DirectiveConfig::new("cached", &[DirectiveLocation::FieldDefinition])
                .argument("ttl", ArgumentConfig::new(ScalarType::int()).default_value(60)),
        )
        .unwrap();

        assert_eq!(custom.arguments.len(), 1);
        assert!(!is_specified_directive(&custom));

        let object = ObjectType::new(ObjectConfig::new("SomeObject", IndexMap::new()));
        let err = Directive::new(
            DirectiveConfig::new("bad", &[DirectiveLocation::Field])
                .argument("arg", ArgumentConfig::new(object)),
        )
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::NotInputType {
                coordinate: "@bad(arg:)".into(),
                found: "SomeObject".into(),
            },
        );
        assert!(Directive::new(DirectiveConfig::new("in valid", &[])).is_err());
    }

    #[test]
    fn tells_custom_directives_from_specified_ones() {
        let custom_skip = Directive::new(
            DirectiveConfig::new("skip", &[DirectiveLocation::Field])
                .argument("if", ArgumentConfig::new(ScalarType::boolean())),
        )
        .unwrap();
        assert!(!is_specified_directive(&custom_skip));

        let redeclared = Directive::new(Directive::skip().to_config()).unwrap();
        assert!(is_specified_directive(&redeclared));
    }
}

//! Snapshots of live types as declarations.
//!
//! A snapshot forces every lazily declared part of a type and renders it as a
//! ready value, so types declared eagerly and types declared through deferred
//! producers project onto equal configs. Unset optional attributes stay
//! [`None`] in the snapshot.

use derive_more::with_trait::From;

use crate::{
    error::SchemaError,
    schema::{
        config::{
            ArgumentConfig, ArgumentConfigMap, DirectiveConfig, EnumConfig, EnumValueConfig,
            FieldConfig, FieldConfigMap, InputFieldConfig, InputFieldConfigMap, InputObjectConfig,
            InterfaceConfig, ObjectConfig, ScalarConfig, SchemaConfig, UnionConfig,
        },
        directive::Directive,
        meta::{
            Argument, EnumType, Field, FieldMap, InputObjectType, InterfaceType, NamedType,
            ObjectType, ScalarType, UnionType,
        },
        model::Schema,
    },
    thunk::Thunk,
};

/// Snapshot of any [`NamedType`].
#[derive(Clone, Debug, From, PartialEq)]
pub enum NamedTypeConfig {
    /// Scalar declaration.
    Scalar(ScalarConfig),
    /// Object declaration.
    Object(ObjectConfig),
    /// Interface declaration.
    Interface(InterfaceConfig),
    /// Union declaration.
    Union(UnionConfig),
    /// Enum declaration.
    Enum(EnumConfig),
    /// Input object declaration.
    InputObject(InputObjectConfig),
}

fn argument_configs(arguments: &[Argument]) -> ArgumentConfigMap {
    arguments
        .iter()
        .map(|a| {
            let config = ArgumentConfig {
                arg_type: a.arg_type.clone(),
                default_value: a.default_value.clone(),
                description: a.description.clone(),
                ast_node: a.ast_node.clone(),
            };
            (a.name.clone(), config)
        })
        .collect()
}

fn field_config(field: &Field) -> Result<FieldConfig, SchemaError> {
    Ok(FieldConfig {
        field_type: field.field_type.upgrade()?,
        args: argument_configs(&field.arguments),
        resolve: field.resolve.clone(),
        description: field.description.clone(),
        deprecation_reason: field.deprecation_reason().cloned(),
        is_deprecated: None,
        ast_node: field.ast_node.clone(),
    })
}

fn field_configs(fields: &FieldMap) -> Result<FieldConfigMap, SchemaError> {
    fields
        .iter()
        .map(|(name, f)| Ok((name.clone(), field_config(f)?)))
        .collect()
}

impl ScalarType {
    /// Projects this scalar onto its declaration.
    ///
    /// # Errors
    ///
    /// If the declaration of this scalar is invalid.
    pub fn to_config(&self) -> Result<ScalarConfig, SchemaError> {
        let coercion = self.coercion()?;
        Ok(ScalarConfig {
            name: self.name().clone(),
            description: self.description().cloned(),
            serialize: Some(coercion.serialize.clone()),
            parse_value: coercion.parse_value.clone(),
            parse_literal: coercion.parse_literal.clone(),
            ast_node: self.ast_node().cloned(),
            extension_ast_nodes: self.extension_ast_nodes().to_vec(),
        })
    }
}

impl ObjectType {
    /// Projects this object onto its declaration, with fields and interfaces
    /// forced.
    ///
    /// # Errors
    ///
    /// - If the declaration of this object is invalid.
    /// - If a type it refers to has been dropped already.
    pub fn to_config(&self) -> Result<ObjectConfig, SchemaError> {
        Ok(ObjectConfig {
            name: self.name().clone(),
            description: self.description().cloned(),
            fields: Thunk::Ready(field_configs(self.fields()?)?),
            interfaces: Thunk::Ready(self.interfaces()?),
            is_type_of: self.0.is_type_of.clone(),
            ast_node: self.ast_node().cloned(),
            extension_ast_nodes: self.extension_ast_nodes().to_vec(),
        })
    }
}

impl InterfaceType {
    /// Projects this interface onto its declaration, with fields forced.
    ///
    /// # Errors
    ///
    /// If the declaration of this interface is invalid.
    pub fn to_config(&self) -> Result<InterfaceConfig, SchemaError> {
        Ok(InterfaceConfig {
            name: self.name().clone(),
            description: self.description().cloned(),
            fields: Thunk::Ready(field_configs(self.fields()?)?),
            resolve_type: self.0.resolve_type.clone(),
            ast_node: self.ast_node().cloned(),
            extension_ast_nodes: self.extension_ast_nodes().to_vec(),
        })
    }
}

impl UnionType {
    /// Projects this union onto its declaration, with members forced.
    ///
    /// # Errors
    ///
    /// If the declaration of this union is invalid.
    pub fn to_config(&self) -> Result<UnionConfig, SchemaError> {
        Ok(UnionConfig {
            name: self.name().clone(),
            description: self.description().cloned(),
            types: Thunk::Ready(self.types()?),
            resolve_type: self.0.resolve_type.clone(),
            ast_node: self.ast_node().cloned(),
            extension_ast_nodes: self.extension_ast_nodes().to_vec(),
        })
    }
}

impl EnumType {
    /// Projects this enum onto its declaration.
    ///
    /// Every value carries its internal value explicitly, even when it was
    /// defaulted to the value's name.
    ///
    /// # Errors
    ///
    /// If the declaration of this enum is invalid.
    pub fn to_config(&self) -> Result<EnumConfig, SchemaError> {
        let values = self
            .values()?
            .iter()
            .map(|v| {
                let config = EnumValueConfig {
                    value: Some(v.value.clone()),
                    description: v.description.clone(),
                    deprecation_reason: v.deprecation_reason().cloned(),
                    is_deprecated: None,
                    ast_node: v.ast_node.clone(),
                };
                (v.name.clone(), config)
            })
            .collect();
        Ok(EnumConfig {
            name: self.name().clone(),
            description: self.description().cloned(),
            values,
            ast_node: self.ast_node().cloned(),
            extension_ast_nodes: self.extension_ast_nodes().to_vec(),
        })
    }
}

impl InputObjectType {
    /// Projects this input object onto its declaration, with fields forced.
    ///
    /// # Errors
    ///
    /// If the declaration of this input object is invalid.
    pub fn to_config(&self) -> Result<InputObjectConfig, SchemaError> {
        let fields = self
            .fields()?
            .iter()
            .map(|(name, f)| {
                let config = InputFieldConfig {
                    field_type: f.field_type.upgrade()?,
                    default_value: f.default_value.clone(),
                    description: f.description.clone(),
                    resolve: None,
                    ast_node: f.ast_node.clone(),
                };
                Ok((name.clone(), config))
            })
            .collect::<Result<InputFieldConfigMap, SchemaError>>()?;
        Ok(InputObjectConfig {
            name: self.name().clone(),
            description: self.description().cloned(),
            fields: Thunk::Ready(fields),
            ast_node: self.ast_node().cloned(),
            extension_ast_nodes: self.extension_ast_nodes().to_vec(),
        })
    }
}

impl NamedType {
    /// Projects the type onto its declaration.
    ///
    /// # Errors
    ///
    /// If the declaration of the type is invalid.
    pub fn to_config(&self) -> Result<NamedTypeConfig, SchemaError> {
        Ok(match self {
            Self::Scalar(t) => t.to_config()?.into(),
            Self::Object(t) => t.to_config()?.into(),
            Self::Interface(t) => t.to_config()?.into(),
            Self::Union(t) => t.to_config()?.into(),
            Self::Enum(t) => t.to_config()?.into(),
            Self::InputObject(t) => t.to_config()?.into(),
        })
    }
}

impl Directive {
    /// Projects this directive onto its declaration.
    pub fn to_config(&self) -> DirectiveConfig {
        DirectiveConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            locations: self.locations.clone(),
            args: argument_configs(&self.arguments),
            ast_node: self.ast_node.clone(),
        }
    }
}

impl Schema {
    /// Projects this schema onto its declaration.
    ///
    /// Every registered type is listed in [`SchemaConfig::types`], and
    /// directives are listed explicitly, so that the declaration assembles
    /// back into an equivalent schema.
    pub fn to_config(&self) -> SchemaConfig {
        SchemaConfig {
            query: self.query.clone(),
            mutation: self.mutation.clone(),
            subscription: self.subscription.clone(),
            types: self.type_map.values().cloned().collect(),
            directives: Some(self.directives.clone()),
            assume_valid: self.assume_valid,
            ast_node: self.ast_node.clone(),
            extension_ast_nodes: self.extension_ast_nodes.clone(),
        }
    }
}

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

mod ast;
mod error;
pub(crate) mod schema;
mod thunk;
mod types;
mod validation;
mod value;

#[cfg(test)]
mod tests;

pub use crate::{
    ast::AstNode,
    error::SchemaError,
    schema::{
        config::{
            ArgumentConfig, ArgumentConfigMap, DirectiveConfig, EnumConfig, EnumValueConfig,
            EnumValueConfigMap, FieldConfig, FieldConfigMap, InputFieldConfig,
            InputFieldConfigMap, InputObjectConfig, InterfaceConfig, ObjectConfig, ScalarConfig,
            SchemaConfig, UnionConfig,
        },
        directive::{
            DEFAULT_DEPRECATION_REASON, Directive, DirectiveLocation, is_specified_directive,
            specified_directives,
        },
        meta::{
            self, EnumType, InputObjectType, InterfaceType, NamedType, NamedTypeRef, ObjectType,
            ScalarType, UnionType,
        },
        model::{Schema, TypeMap},
        snapshot::NamedTypeConfig,
    },
    thunk::{Thunk, ThunkCell},
    types::{
        base::{Type, TypeKind, TypeRef},
        containers::{ListType, NonNullType},
        scalars::{is_specified_scalar_type, specified_scalar_types},
    },
    value::{
        Arguments, Callable, CoercionResult, IsTypeOfFn, ParseLiteralFn, ParseValueFn,
        ResolveFn, ResolveTypeFn, SerializeFn, Value,
    },
};

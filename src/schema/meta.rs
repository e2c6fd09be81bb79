//! Types used to describe a `GraphQL` schema

use std::{
    fmt, ptr,
    sync::{Arc, Weak},
};

use arcstr::ArcStr;
use derive_more::with_trait::{Display, From};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::{
    ast::AstNode,
    error::SchemaError,
    schema::config::{
        EnumConfig, EnumValueConfigMap, FieldConfigMap, InputFieldConfigMap, InputObjectConfig,
        InterfaceConfig, ObjectConfig, ScalarConfig, UnionConfig,
    },
    thunk::ThunkCell,
    types::base::{Type, TypeKind, TypeRef},
    validation,
    value::{
        Callable, CoercionResult, IsTypeOfFn, ParseLiteralFn, ParseValueFn, ResolveFn,
        ResolveTypeFn, SerializeFn, Value,
    },
};

/// Whether an item is deprecated, with context.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// The field/variant is not deprecated.
    Current,
    /// The field/variant is deprecated, with an optional reason
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// If this deprecation status indicates the item is deprecated.
    pub fn is_deprecated(&self) -> bool {
        match self {
            Self::Current => false,
            Self::Deprecated(_) => true,
        }
    }

    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&ArcStr> {
        match self {
            Self::Current => None,
            Self::Deprecated(rsn) => rsn.as_ref(),
        }
    }

    pub(crate) fn from_reason(reason: Option<ArcStr>) -> Self {
        reason.map_or(Self::Current, |r| Self::Deprecated(Some(r)))
    }
}

/// Fields of an object or interface type, in declaration order.
pub type FieldMap = IndexMap<ArcStr, Field>;

/// Fields of an input object type, in declaration order.
pub type InputFieldMap = IndexMap<ArcStr, InputField>;

/// Metadata for a field
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// Name of the field.
    pub name: ArcStr,
    /// Optional description of the field.
    pub description: Option<ArcStr>,
    /// Arguments of the field, in declaration order.
    pub arguments: Vec<Argument>,
    /// Output type of the field.
    pub field_type: TypeRef,
    /// Resolver of the field, if any.
    pub resolve: Option<Callable<ResolveFn>>,
    /// Whether the field is deprecated or not, with an optional reason.
    pub deprecation_status: DeprecationStatus,
    /// Source annotation of the field declaration.
    pub ast_node: Option<AstNode>,
}

impl Field {
    /// Access an argument's metadata given its name.
    pub fn argument_by_name(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Indicates whether this field is deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_status.is_deprecated()
    }

    /// Returns the deprecation reason of this field, if deprecated.
    pub fn deprecation_reason(&self) -> Option<&ArcStr> {
        self.deprecation_status.reason()
    }
}

/// Metadata for an argument to a field
///
/// Unlike fields, arguments own their types: input types never refer back to
/// the types declaring arguments, so no cycle goes through them.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    /// Name of the argument.
    pub name: ArcStr,
    /// Optional description of the argument.
    pub description: Option<ArcStr>,
    /// Input type of the argument.
    pub arg_type: Type,
    /// Value used when the argument isn't provided.
    pub default_value: Option<Value>,
    /// Source annotation of the argument declaration.
    pub ast_node: Option<AstNode>,
}

/// Metadata for a field of an input object.
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    /// Name of the input field.
    pub name: ArcStr,
    /// Optional description of the input field.
    pub description: Option<ArcStr>,
    /// Input type of the input field.
    pub field_type: TypeRef,
    /// Value used when the input field isn't provided.
    pub default_value: Option<Value>,
    /// Source annotation of the input field declaration.
    pub ast_node: Option<AstNode>,
}

/// Metadata for a single value in an enum
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    /// The name of the enum value
    ///
    /// This is the string literal representation of the enum in responses.
    pub name: ArcStr,
    /// The optional description of the enum value.
    ///
    /// Note: this is not the description of the enum itself; it's the
    /// description of this enum _value_.
    pub description: Option<ArcStr>,
    /// The internal value this enum value stands for.
    ///
    /// Defaults to the `name` when not declared.
    pub value: Value,
    /// Whether the field is deprecated or not, with an optional reason.
    pub deprecation_status: DeprecationStatus,
    /// Source annotation of the enum value declaration.
    pub ast_node: Option<AstNode>,
}

impl EnumValue {
    /// Indicates whether this enum value is deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_status.is_deprecated()
    }

    /// Returns the deprecation reason of this enum value, if deprecated.
    pub fn deprecation_reason(&self) -> Option<&ArcStr> {
        self.deprecation_status.reason()
    }
}

/// Validated coercion functions of a scalar type.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarCoercion {
    /// Output coercion.
    pub serialize: Callable<SerializeFn>,
    /// Input coercion of variable values, if declared.
    pub parse_value: Option<Callable<ParseValueFn>>,
    /// Input coercion of literals, if declared.
    pub parse_literal: Option<Callable<ParseLiteralFn>>,
}

impl ScalarCoercion {
    /// Coerces an internal value into its external representation.
    pub fn serialize(&self, value: &Value) -> CoercionResult {
        (self.serialize.get())(value)
    }

    /// Coerces a variable value. Without a declared input coercion, the value
    /// is accepted as is.
    pub fn parse_value(&self, value: &Value) -> CoercionResult {
        match &self.parse_value {
            Some(f) => (f.get())(value),
            None => Ok(value.clone()),
        }
    }

    /// Coerces a literal. Without a declared input coercion, the literal is
    /// accepted as is.
    pub fn parse_literal(&self, literal: &Value) -> CoercionResult {
        match &self.parse_literal {
            Some(f) => (f.get())(literal),
            None => Ok(literal.clone()),
        }
    }
}

/// Coercion functions of a scalar declaration, prior to validation.
#[derive(Clone)]
pub(crate) struct DeclaredCoercion {
    pub(crate) serialize: Option<Callable<SerializeFn>>,
    pub(crate) parse_value: Option<Callable<ParseValueFn>>,
    pub(crate) parse_literal: Option<Callable<ParseLiteralFn>>,
}

pub(crate) struct ScalarMeta {
    pub(crate) name: ArcStr,
    pub(crate) description: Option<ArcStr>,
    pub(crate) coercion: ThunkCell<DeclaredCoercion, Result<ScalarCoercion, SchemaError>>,
    pub(crate) ast_node: Option<AstNode>,
    pub(crate) extension_ast_nodes: Vec<AstNode>,
}

pub(crate) struct ObjectMeta {
    pub(crate) name: ArcStr,
    pub(crate) description: Option<ArcStr>,
    pub(crate) fields: ThunkCell<FieldConfigMap, Result<FieldMap, SchemaError>>,
    pub(crate) interfaces:
        ThunkCell<Vec<InterfaceType>, Result<Vec<Link<InterfaceMeta>>, SchemaError>>,
    pub(crate) is_type_of: Option<Callable<IsTypeOfFn>>,
    pub(crate) ast_node: Option<AstNode>,
    pub(crate) extension_ast_nodes: Vec<AstNode>,
}

pub(crate) struct InterfaceMeta {
    pub(crate) name: ArcStr,
    pub(crate) description: Option<ArcStr>,
    pub(crate) fields: ThunkCell<FieldConfigMap, Result<FieldMap, SchemaError>>,
    pub(crate) resolve_type: Option<Callable<ResolveTypeFn>>,
    pub(crate) ast_node: Option<AstNode>,
    pub(crate) extension_ast_nodes: Vec<AstNode>,
}

pub(crate) struct UnionMeta {
    pub(crate) name: ArcStr,
    pub(crate) description: Option<ArcStr>,
    pub(crate) types: ThunkCell<Vec<ObjectType>, Result<Vec<Link<ObjectMeta>>, SchemaError>>,
    pub(crate) resolve_type: Option<Callable<ResolveTypeFn>>,
    pub(crate) ast_node: Option<AstNode>,
    pub(crate) extension_ast_nodes: Vec<AstNode>,
}

pub(crate) struct EnumMeta {
    pub(crate) name: ArcStr,
    pub(crate) description: Option<ArcStr>,
    pub(crate) values: ThunkCell<EnumValueConfigMap, Result<Vec<EnumValue>, SchemaError>>,
    pub(crate) ast_node: Option<AstNode>,
    pub(crate) extension_ast_nodes: Vec<AstNode>,
}

pub(crate) struct InputObjectMeta {
    pub(crate) name: ArcStr,
    pub(crate) description: Option<ArcStr>,
    pub(crate) fields: ThunkCell<InputFieldConfigMap, Result<InputFieldMap, SchemaError>>,
    pub(crate) ast_node: Option<AstNode>,
    pub(crate) extension_ast_nodes: Vec<AstNode>,
}

/// Non-owning handle to a type instance, keeping its name for reporting.
pub(crate) struct Link<M> {
    name: ArcStr,
    meta: Weak<M>,
}

impl<M> Link<M> {
    fn new(name: &ArcStr, meta: &Arc<M>) -> Self {
        Self {
            name: name.clone(),
            meta: Arc::downgrade(meta),
        }
    }

    fn upgrade(&self) -> Result<Arc<M>, SchemaError> {
        self.meta.upgrade().ok_or_else(|| SchemaError::DroppedType {
            name: self.name.clone(),
        })
    }

    fn refers_to(&self, meta: &Arc<M>) -> bool {
        ptr::eq(self.meta.as_ptr(), Arc::as_ptr(meta))
    }
}

impl<M> Clone for Link<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            meta: self.meta.clone(),
        }
    }
}

impl<M> PartialEq for Link<M> {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.meta, &other.meta)
    }
}

impl<M> fmt::Debug for Link<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Link").field(&self.name).finish()
    }
}

/// Scalar type: a leaf value with custom coercion.
#[derive(Clone)]
pub struct ScalarType(pub(crate) Arc<ScalarMeta>);

/// Object type: a set of named fields, possibly implementing interfaces.
#[derive(Clone)]
pub struct ObjectType(pub(crate) Arc<ObjectMeta>);

/// Interface type: a set of fields shared by the objects implementing it.
#[derive(Clone)]
pub struct InterfaceType(pub(crate) Arc<InterfaceMeta>);

/// Union type: one of several object types.
#[derive(Clone)]
pub struct UnionType(pub(crate) Arc<UnionMeta>);

/// Enum type: one of a finite set of named values.
#[derive(Clone)]
pub struct EnumType(pub(crate) Arc<EnumMeta>);

/// Input object type: a structured value provided as an input.
#[derive(Clone)]
pub struct InputObjectType(pub(crate) Arc<InputObjectMeta>);

macro_rules! impl_named_type {
    ($ty:ident, $meta:ident) => {
        impl $ty {
            /// Returns the name of this type.
            pub fn name(&self) -> &ArcStr {
                &self.0.name
            }

            /// Returns the description of this type, if any.
            pub fn description(&self) -> Option<&ArcStr> {
                self.0.description.as_ref()
            }

            /// Returns the source annotation of this type's declaration.
            pub fn ast_node(&self) -> Option<&AstNode> {
                self.0.ast_node.as_ref()
            }

            /// Returns the source annotations of this type's extensions.
            pub fn extension_ast_nodes(&self) -> &[AstNode] {
                &self.0.extension_ast_nodes
            }

            /// Indicates whether both handles refer to the same type instance.
            pub fn ptr_eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }

            pub(crate) fn link(&self) -> Link<$meta> {
                Link::new(&self.0.name, &self.0)
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.ptr_eq(other)
            }
        }

        impl Eq for $ty {}

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($ty)).field(&self.0.name).finish()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.name)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl From<$ty> for Type {
            fn from(t: $ty) -> Self {
                Self::Named(t.into())
            }
        }
    };
}

impl_named_type!(ScalarType, ScalarMeta);
impl_named_type!(ObjectType, ObjectMeta);
impl_named_type!(InterfaceType, InterfaceMeta);
impl_named_type!(UnionType, UnionMeta);
impl_named_type!(EnumType, EnumMeta);
impl_named_type!(InputObjectType, InputObjectMeta);

fn cached<T>(res: &Result<T, SchemaError>) -> Result<&T, SchemaError> {
    res.as_ref().map_err(Clone::clone)
}

impl ScalarType {
    /// Builds a new [`ScalarType`] out of the provided declaration.
    ///
    /// The declaration is validated once its coercion is first accessed.
    pub fn new(config: ScalarConfig) -> Self {
        let ScalarConfig {
            name,
            description,
            serialize,
            parse_value,
            parse_literal,
            ast_node,
            extension_ast_nodes,
        } = config;
        Self(Arc::new(ScalarMeta {
            name,
            description,
            coercion: ThunkCell::new(
                DeclaredCoercion {
                    serialize,
                    parse_value,
                    parse_literal,
                }
                .into(),
            ),
            ast_node,
            extension_ast_nodes,
        }))
    }

    /// Returns the validated coercion functions of this scalar.
    pub fn coercion(&self) -> Result<&ScalarCoercion, SchemaError> {
        cached(self.0.coercion.resolve_with(|declared| {
            validation::validate_name(&self.0.name)?;
            validation::define_scalar_coercion(&self.0.name, declared)
        }))
    }

    /// Forces and validates this scalar's declaration.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.coercion().map(drop)
    }
}

impl ObjectType {
    /// Builds a new [`ObjectType`] out of the provided declaration.
    ///
    /// Fields and interfaces may be declared lazily, so they're validated
    /// once first accessed.
    pub fn new(config: ObjectConfig) -> Self {
        let ObjectConfig {
            name,
            description,
            fields,
            interfaces,
            is_type_of,
            ast_node,
            extension_ast_nodes,
        } = config;
        Self(Arc::new(ObjectMeta {
            name,
            description,
            fields: ThunkCell::new(fields),
            interfaces: ThunkCell::new(interfaces),
            is_type_of,
            ast_node,
            extension_ast_nodes,
        }))
    }

    /// Returns the validated fields of this object.
    pub fn fields(&self) -> Result<&FieldMap, SchemaError> {
        cached(self.0.fields.resolve_with(|configs| {
            validation::validate_name(&self.0.name)?;
            validation::define_field_map(&self.0.name, configs)
        }))
    }

    /// Access a field's metadata given its name.
    pub fn field_by_name(&self, name: &str) -> Result<Option<&Field>, SchemaError> {
        Ok(self.fields()?.get(name))
    }

    /// Returns the validated interfaces this object implements.
    ///
    /// # Errors
    ///
    /// - If the interfaces of this object are declared incorrectly.
    /// - If one of the interfaces has been dropped already.
    pub fn interfaces(&self) -> Result<Vec<InterfaceType>, SchemaError> {
        cached(self.0.interfaces.resolve_with(|interfaces| {
            validation::define_interfaces(&self.0.name, interfaces)
        }))?
        .iter()
        .map(|i| i.upgrade().map(InterfaceType))
        .collect()
    }

    /// Returns the predicate checking whether a value belongs to this object.
    pub fn is_type_of(&self) -> Option<&IsTypeOfFn> {
        self.0.is_type_of.as_ref().map(Callable::get)
    }

    /// Forces and validates this object's declaration.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.fields()?;
        self.interfaces().map(drop)
    }
}

impl InterfaceType {
    /// Builds a new [`InterfaceType`] out of the provided declaration.
    pub fn new(config: InterfaceConfig) -> Self {
        let InterfaceConfig {
            name,
            description,
            fields,
            resolve_type,
            ast_node,
            extension_ast_nodes,
        } = config;
        Self(Arc::new(InterfaceMeta {
            name,
            description,
            fields: ThunkCell::new(fields),
            resolve_type,
            ast_node,
            extension_ast_nodes,
        }))
    }

    /// Returns the validated fields of this interface.
    pub fn fields(&self) -> Result<&FieldMap, SchemaError> {
        cached(self.0.fields.resolve_with(|configs| {
            validation::validate_name(&self.0.name)?;
            validation::define_field_map(&self.0.name, configs)
        }))
    }

    /// Access a field's metadata given its name.
    pub fn field_by_name(&self, name: &str) -> Result<Option<&Field>, SchemaError> {
        Ok(self.fields()?.get(name))
    }

    /// Returns the runtime-type discriminator of this interface.
    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.0.resolve_type.as_ref().map(Callable::get)
    }

    /// Forces and validates this interface's declaration.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.fields().map(drop)
    }
}

impl UnionType {
    /// Builds a new [`UnionType`] out of the provided declaration.
    pub fn new(config: UnionConfig) -> Self {
        let UnionConfig {
            name,
            description,
            types,
            resolve_type,
            ast_node,
            extension_ast_nodes,
        } = config;
        Self(Arc::new(UnionMeta {
            name,
            description,
            types: ThunkCell::new(types),
            resolve_type,
            ast_node,
            extension_ast_nodes,
        }))
    }

    /// Returns the validated member types of this union.
    ///
    /// # Errors
    ///
    /// - If the members of this union are declared incorrectly.
    /// - If one of the members has been dropped already.
    pub fn types(&self) -> Result<Vec<ObjectType>, SchemaError> {
        cached(self.0.types.resolve_with(|members| {
            validation::validate_name(&self.0.name)?;
            validation::define_union_members(&self.0.name, members)
        }))?
        .iter()
        .map(|m| m.upgrade().map(ObjectType))
        .collect()
    }

    /// Returns the runtime-type discriminator of this union.
    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.0.resolve_type.as_ref().map(Callable::get)
    }

    /// Forces and validates this union's declaration.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.types().map(drop)
    }
}

impl EnumType {
    /// Builds a new [`EnumType`] out of the provided declaration.
    pub fn new(config: EnumConfig) -> Self {
        let EnumConfig {
            name,
            description,
            values,
            ast_node,
            extension_ast_nodes,
        } = config;
        Self(Arc::new(EnumMeta {
            name,
            description,
            values: ThunkCell::new(values.into()),
            ast_node,
            extension_ast_nodes,
        }))
    }

    /// Returns the validated values of this enum, in declaration order.
    pub fn values(&self) -> Result<&[EnumValue], SchemaError> {
        cached(self.0.values.resolve_with(|configs| {
            validation::validate_name(&self.0.name)?;
            validation::define_enum_values(&self.0.name, configs)
        }))
        .map(Vec::as_slice)
    }

    /// Access an enum value given its name.
    pub fn value_by_name(&self, name: &str) -> Result<Option<&EnumValue>, SchemaError> {
        Ok(self.values()?.iter().find(|v| v.name == name))
    }

    /// Returns the enum value standing for the provided internal `value`.
    ///
    /// # Errors
    ///
    /// If the values of this enum are declared incorrectly.
    pub fn serialize(&self, value: &Value) -> Result<Option<&EnumValue>, SchemaError> {
        Ok(self.values()?.iter().find(|v| &v.value == value))
    }

    /// Returns the internal value of the enum value with the provided `name`.
    ///
    /// # Errors
    ///
    /// If the values of this enum are declared incorrectly.
    pub fn parse_value(&self, name: &str) -> Result<Option<&Value>, SchemaError> {
        Ok(self.value_by_name(name)?.map(|v| &v.value))
    }

    /// Forces and validates this enum's declaration.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.values().map(drop)
    }
}

impl InputObjectType {
    /// Builds a new [`InputObjectType`] out of the provided declaration.
    pub fn new(config: InputObjectConfig) -> Self {
        let InputObjectConfig {
            name,
            description,
            fields,
            ast_node,
            extension_ast_nodes,
        } = config;
        Self(Arc::new(InputObjectMeta {
            name,
            description,
            fields: ThunkCell::new(fields),
            ast_node,
            extension_ast_nodes,
        }))
    }

    /// Returns the validated fields of this input object.
    pub fn fields(&self) -> Result<&InputFieldMap, SchemaError> {
        cached(self.0.fields.resolve_with(|configs| {
            validation::validate_name(&self.0.name)?;
            validation::define_input_field_map(&self.0.name, configs)
        }))
    }

    /// Access an input field's metadata given its name.
    pub fn field_by_name(&self, name: &str) -> Result<Option<&InputField>, SchemaError> {
        Ok(self.fields()?.get(name))
    }

    /// Forces and validates this input object's declaration.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.fields().map(drop)
    }
}

/// Named type: one of the six kinds of types identified by a name.
#[derive(Clone, Debug, Display, Eq, From, PartialEq)]
pub enum NamedType {
    /// Scalar type.
    Scalar(ScalarType),
    /// Object type.
    Object(ObjectType),
    /// Interface type.
    Interface(InterfaceType),
    /// Union type.
    Union(UnionType),
    /// Enum type.
    Enum(EnumType),
    /// Input object type.
    InputObject(InputObjectType),
}

impl NamedType {
    /// Access the name of the type
    pub fn name(&self) -> &ArcStr {
        match self {
            Self::Scalar(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Union(t) => t.name(),
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
        }
    }

    /// Access the description of the type, if any
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Union(t) => t.description(),
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
        }
    }

    /// Returns the source annotation of the type's declaration.
    pub fn ast_node(&self) -> Option<&AstNode> {
        match self {
            Self::Scalar(t) => t.ast_node(),
            Self::Object(t) => t.ast_node(),
            Self::Interface(t) => t.ast_node(),
            Self::Union(t) => t.ast_node(),
            Self::Enum(t) => t.ast_node(),
            Self::InputObject(t) => t.ast_node(),
        }
    }

    /// Returns the [`TypeKind`] of the type.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Indicates whether both handles refer to the same type instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns a [`NamedTypeRef`] to the type, not keeping it alive.
    pub fn downgrade(&self) -> NamedTypeRef {
        NamedTypeRef(match self {
            Self::Scalar(t) => NamedLink::Scalar(t.link()),
            Self::Object(t) => NamedLink::Object(t.link()),
            Self::Interface(t) => NamedLink::Interface(t.link()),
            Self::Union(t) => NamedLink::Union(t.link()),
            Self::Enum(t) => NamedLink::Enum(t.link()),
            Self::InputObject(t) => NamedLink::InputObject(t.link()),
        })
    }

    /// Drops the declarations the type keeps since its lazy parts were
    /// forced, leaving the types it refers to owned by others.
    pub(crate) fn release_declarations(&self) {
        match self {
            Self::Scalar(t) => t.0.coercion.release(),
            Self::Object(t) => {
                t.0.fields.release();
                t.0.interfaces.release();
            }
            Self::Interface(t) => t.0.fields.release(),
            Self::Union(t) => t.0.types.release(),
            Self::Enum(t) => t.0.values.release(),
            Self::InputObject(t) => t.0.fields.release(),
        }
    }

    /// Forces and validates every lazily declared part of the type.
    pub fn validate(&self) -> Result<(), SchemaError> {
        match self {
            Self::Scalar(t) => t.validate(),
            Self::Object(t) => t.validate(),
            Self::Interface(t) => t.validate(),
            Self::Union(t) => t.validate(),
            Self::Enum(t) => t.validate(),
            Self::InputObject(t) => t.validate(),
        }
    }

    /// Returns true if the type can be used in input positions, e.g. arguments or variables
    ///
    /// Only scalars, enums, and input objects are input types.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Returns true if the type can be used as a field type.
    ///
    /// Everything but input objects is an output type.
    pub fn is_output(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    /// Returns true if the type can occur in leaf positions in queries
    ///
    /// Only enums and scalars are leaf types.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_))
    }

    /// Returns true if the type is a composite type
    ///
    /// Objects, interfaces, and unions are composite.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    /// Returns true if the type is abstract
    ///
    /// Only interfaces and unions are abstract types.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Returns the object type, if this is one.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the interface type, if this is one.
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Self::Interface(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the input object type, if this is one.
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            Self::InputObject(t) => Some(t),
            _ => None,
        }
    }
}

impl Serialize for NamedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Non-owning reference to a [`NamedType`], held by the types referring to it.
///
/// Named types never own each other, so circular references among them are
/// no ownership cycles. They're kept alive by the schemas registering them,
/// and until first assembled into one, by the declarations referring to them.
#[derive(Clone, PartialEq)]
pub struct NamedTypeRef(NamedLink);

#[derive(Clone, PartialEq)]
enum NamedLink {
    Scalar(Link<ScalarMeta>),
    Object(Link<ObjectMeta>),
    Interface(Link<InterfaceMeta>),
    Union(Link<UnionMeta>),
    Enum(Link<EnumMeta>),
    InputObject(Link<InputObjectMeta>),
}

impl NamedTypeRef {
    /// Returns the name of the referred type.
    pub fn name(&self) -> &ArcStr {
        match &self.0 {
            NamedLink::Scalar(l) => &l.name,
            NamedLink::Object(l) => &l.name,
            NamedLink::Interface(l) => &l.name,
            NamedLink::Union(l) => &l.name,
            NamedLink::Enum(l) => &l.name,
            NamedLink::InputObject(l) => &l.name,
        }
    }

    /// Returns the [`TypeKind`] of the referred type.
    pub fn kind(&self) -> TypeKind {
        match &self.0 {
            NamedLink::Scalar(_) => TypeKind::Scalar,
            NamedLink::Object(_) => TypeKind::Object,
            NamedLink::Interface(_) => TypeKind::Interface,
            NamedLink::Union(_) => TypeKind::Union,
            NamedLink::Enum(_) => TypeKind::Enum,
            NamedLink::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Returns the referred type.
    ///
    /// # Errors
    ///
    /// If the referred type has been dropped already.
    pub fn upgrade(&self) -> Result<NamedType, SchemaError> {
        Ok(match &self.0 {
            NamedLink::Scalar(l) => ScalarType(l.upgrade()?).into(),
            NamedLink::Object(l) => ObjectType(l.upgrade()?).into(),
            NamedLink::Interface(l) => InterfaceType(l.upgrade()?).into(),
            NamedLink::Union(l) => UnionType(l.upgrade()?).into(),
            NamedLink::Enum(l) => EnumType(l.upgrade()?).into(),
            NamedLink::InputObject(l) => InputObjectType(l.upgrade()?).into(),
        })
    }

    /// Indicates whether this reference points to the provided type instance.
    pub fn refers_to(&self, ty: &NamedType) -> bool {
        match (&self.0, ty) {
            (NamedLink::Scalar(l), NamedType::Scalar(t)) => l.refers_to(&t.0),
            (NamedLink::Object(l), NamedType::Object(t)) => l.refers_to(&t.0),
            (NamedLink::Interface(l), NamedType::Interface(t)) => l.refers_to(&t.0),
            (NamedLink::Union(l), NamedType::Union(t)) => l.refers_to(&t.0),
            (NamedLink::Enum(l), NamedType::Enum(t)) => l.refers_to(&t.0),
            (NamedLink::InputObject(l), NamedType::InputObject(t)) => l.refers_to(&t.0),
            _ => false,
        }
    }

    /// Returns true if the referred type can be used in input positions.
    pub fn is_input(&self) -> bool {
        matches!(
            self.kind(),
            TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject,
        )
    }

    /// Returns true if the referred type can be used as a field type.
    pub fn is_output(&self) -> bool {
        self.kind() != TypeKind::InputObject
    }
}

impl PartialEq<NamedType> for NamedTypeRef {
    fn eq(&self, other: &NamedType) -> bool {
        self.refers_to(other)
    }
}

impl Eq for NamedTypeRef {}

impl fmt::Debug for NamedTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamedTypeRef").field(self.name()).finish()
    }
}

impl fmt::Display for NamedTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static_assertions::assert_impl_all!(NamedType: Send, Sync);
static_assertions::assert_impl_all!(NamedTypeRef: Send, Sync);
static_assertions::assert_impl_all!(Type: Send, Sync);

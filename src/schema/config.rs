//! Declarations of GraphQL types.
//!
//! Every declaration is a plain struct with explicitly enumerated optional
//! attributes, plus builder-style setters. Unset attributes are [`None`], which
//! is also how they show up in the snapshots produced out of live types.

use std::sync::Arc;

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::{
    ast::AstNode,
    schema::{
        directive::{Directive, DirectiveLocation},
        meta::{InterfaceType, NamedType, ObjectType},
    },
    thunk::Thunk,
    types::base::Type,
    value::{
        Arguments, Callable, CoercionResult, IsTypeOfFn, ParseLiteralFn, ParseValueFn,
        ResolveFn, ResolveTypeFn, SerializeFn, Value,
    },
};

/// Declarations of fields, keyed by field name.
pub type FieldConfigMap = IndexMap<ArcStr, FieldConfig>;

/// Declarations of arguments, keyed by argument name.
pub type ArgumentConfigMap = IndexMap<ArcStr, ArgumentConfig>;

/// Declarations of input fields, keyed by field name.
pub type InputFieldConfigMap = IndexMap<ArcStr, InputFieldConfig>;

/// Declarations of enum values, keyed by value name.
pub type EnumValueConfigMap = IndexMap<ArcStr, EnumValueConfig>;

/// Declaration of a [`ScalarType`](crate::ScalarType).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarConfig {
    /// Name of the scalar.
    pub name: ArcStr,
    /// Optional description of the scalar.
    pub description: Option<ArcStr>,
    /// Output coercion. Required.
    pub serialize: Option<Callable<SerializeFn>>,
    /// Input coercion of variable values. Required along with `parse_literal`.
    pub parse_value: Option<Callable<ParseValueFn>>,
    /// Input coercion of literals. Required along with `parse_value`.
    pub parse_literal: Option<Callable<ParseLiteralFn>>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
    /// Source annotations of the type's extensions.
    pub extension_ast_nodes: Vec<AstNode>,
}

impl ScalarConfig {
    /// Starts a declaration of a scalar with the provided `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    /// Sets the `description` of this scalar.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the output coercion of this scalar.
    #[must_use]
    pub fn serialize<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> CoercionResult + Send + Sync + 'static,
    {
        self.serialize = Some(Callable::from_arc(Arc::new(f)));
        self
    }

    /// Sets the input coercion of variable values of this scalar.
    #[must_use]
    pub fn parse_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> CoercionResult + Send + Sync + 'static,
    {
        self.parse_value = Some(Callable::from_arc(Arc::new(f)));
        self
    }

    /// Sets the input coercion of literals of this scalar.
    #[must_use]
    pub fn parse_literal<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> CoercionResult + Send + Sync + 'static,
    {
        self.parse_literal = Some(Callable::from_arc(Arc::new(f)));
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }

    /// Adds a source annotation of an extension of this type.
    #[must_use]
    pub fn extension_ast_node(mut self, node: AstNode) -> Self {
        self.extension_ast_nodes.push(node);
        self
    }
}

/// Declaration of an [`ObjectType`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectConfig {
    /// Name of the object.
    pub name: ArcStr,
    /// Optional description of the object.
    pub description: Option<ArcStr>,
    /// Fields of the object, possibly deferred.
    pub fields: Thunk<FieldConfigMap>,
    /// Interfaces the object implements, possibly deferred.
    pub interfaces: Thunk<Vec<InterfaceType>>,
    /// Predicate checking whether a value belongs to the object.
    pub is_type_of: Option<Callable<IsTypeOfFn>>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
    /// Source annotations of the type's extensions.
    pub extension_ast_nodes: Vec<AstNode>,
}

impl ObjectConfig {
    /// Starts a declaration of an object with the provided `name` and
    /// `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: impl Into<Thunk<FieldConfigMap>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.into(),
            interfaces: Thunk::default(),
            is_type_of: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    /// Sets the `description` of this object.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the `interfaces` this object implements.
    ///
    /// Overwrites any previously set list of interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: impl Into<Thunk<Vec<InterfaceType>>>) -> Self {
        self.interfaces = interfaces.into();
        self
    }

    /// Sets the predicate checking whether a value belongs to this object.
    #[must_use]
    pub fn is_type_of<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.is_type_of = Some(Callable::from_arc(Arc::new(f)));
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }

    /// Adds a source annotation of an extension of this type.
    #[must_use]
    pub fn extension_ast_node(mut self, node: AstNode) -> Self {
        self.extension_ast_nodes.push(node);
        self
    }
}

/// Declaration of an [`InterfaceType`].
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceConfig {
    /// Name of the interface.
    pub name: ArcStr,
    /// Optional description of the interface.
    pub description: Option<ArcStr>,
    /// Fields of the interface, possibly deferred.
    pub fields: Thunk<FieldConfigMap>,
    /// Runtime-type discriminator.
    pub resolve_type: Option<Callable<ResolveTypeFn>>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
    /// Source annotations of the type's extensions.
    pub extension_ast_nodes: Vec<AstNode>,
}

impl InterfaceConfig {
    /// Starts a declaration of an interface with the provided `name` and
    /// `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: impl Into<Thunk<FieldConfigMap>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.into(),
            resolve_type: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    /// Sets the `description` of this interface.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the runtime-type discriminator of this interface.
    #[must_use]
    pub fn resolve_type<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Option<ArcStr> + Send + Sync + 'static,
    {
        self.resolve_type = Some(Callable::from_arc(Arc::new(f)));
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }

    /// Adds a source annotation of an extension of this type.
    #[must_use]
    pub fn extension_ast_node(mut self, node: AstNode) -> Self {
        self.extension_ast_nodes.push(node);
        self
    }
}

/// Declaration of a [`UnionType`](crate::UnionType).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionConfig {
    /// Name of the union.
    pub name: ArcStr,
    /// Optional description of the union.
    pub description: Option<ArcStr>,
    /// Member types of the union, possibly deferred. Empty by default.
    pub types: Thunk<Vec<ObjectType>>,
    /// Runtime-type discriminator.
    pub resolve_type: Option<Callable<ResolveTypeFn>>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
    /// Source annotations of the type's extensions.
    pub extension_ast_nodes: Vec<AstNode>,
}

impl UnionConfig {
    /// Starts a declaration of a union with the provided `name` and no
    /// members.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            types: Thunk::default(),
            resolve_type: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    /// Sets the `description` of this union.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the member `types` of this union.
    ///
    /// Overwrites any previously set members.
    #[must_use]
    pub fn types(mut self, types: impl Into<Thunk<Vec<ObjectType>>>) -> Self {
        self.types = types.into();
        self
    }

    /// Sets the runtime-type discriminator of this union.
    #[must_use]
    pub fn resolve_type<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Option<ArcStr> + Send + Sync + 'static,
    {
        self.resolve_type = Some(Callable::from_arc(Arc::new(f)));
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }

    /// Adds a source annotation of an extension of this type.
    #[must_use]
    pub fn extension_ast_node(mut self, node: AstNode) -> Self {
        self.extension_ast_nodes.push(node);
        self
    }
}

/// Declaration of an [`EnumType`](crate::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumConfig {
    /// Name of the enum.
    pub name: ArcStr,
    /// Optional description of the enum.
    pub description: Option<ArcStr>,
    /// Values of the enum.
    pub values: EnumValueConfigMap,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
    /// Source annotations of the type's extensions.
    pub extension_ast_nodes: Vec<AstNode>,
}

impl EnumConfig {
    /// Starts a declaration of an enum with the provided `name` and `values`.
    pub fn new(name: impl Into<ArcStr>, values: EnumValueConfigMap) -> Self {
        Self {
            name: name.into(),
            description: None,
            values,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    /// Sets the `description` of this enum.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }

    /// Adds a source annotation of an extension of this type.
    #[must_use]
    pub fn extension_ast_node(mut self, node: AstNode) -> Self {
        self.extension_ast_nodes.push(node);
        self
    }
}

/// Declaration of an [`InputObjectType`](crate::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectConfig {
    /// Name of the input object.
    pub name: ArcStr,
    /// Optional description of the input object.
    pub description: Option<ArcStr>,
    /// Fields of the input object, possibly deferred.
    pub fields: Thunk<InputFieldConfigMap>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
    /// Source annotations of the type's extensions.
    pub extension_ast_nodes: Vec<AstNode>,
}

impl InputObjectConfig {
    /// Starts a declaration of an input object with the provided `name` and
    /// `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: impl Into<Thunk<InputFieldConfigMap>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.into(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    /// Sets the `description` of this input object.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }

    /// Adds a source annotation of an extension of this type.
    #[must_use]
    pub fn extension_ast_node(mut self, node: AstNode) -> Self {
        self.extension_ast_nodes.push(node);
        self
    }
}

/// Declaration of a field of an object or interface.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Output type of the field.
    pub field_type: Type,
    /// Arguments of the field.
    pub args: ArgumentConfigMap,
    /// Resolver of the field.
    pub resolve: Option<Callable<ResolveFn>>,
    /// Optional description of the field.
    pub description: Option<ArcStr>,
    /// Reason of the field's deprecation. The field is deprecated if set.
    pub deprecation_reason: Option<ArcStr>,
    /// Legacy deprecation flag, always rejected in favor of
    /// `deprecation_reason`.
    pub is_deprecated: Option<bool>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
}

impl FieldConfig {
    /// Starts a declaration of a field of the provided `field_type`.
    pub fn new(field_type: impl Into<Type>) -> Self {
        Self {
            field_type: field_type.into(),
            args: ArgumentConfigMap::new(),
            resolve: None,
            description: None,
            deprecation_reason: None,
            is_deprecated: None,
            ast_node: None,
        }
    }

    /// Adds an `argument` to this field.
    ///
    /// Replaces any previously added argument of the same `name`, keeping its
    /// position.
    #[must_use]
    pub fn argument(mut self, name: impl Into<ArcStr>, argument: ArgumentConfig) -> Self {
        self.args.insert(name.into(), argument);
        self
    }

    /// Sets the resolver of this field.
    #[must_use]
    pub fn resolve<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &Arguments) -> Value + Send + Sync + 'static,
    {
        self.resolve = Some(Callable::from_arc(Arc::new(f)));
        self
    }

    /// Sets the `description` of this field.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks this field as deprecated for the provided `reason`.
    #[must_use]
    pub fn deprecated(mut self, reason: impl Into<ArcStr>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Sets the legacy deprecation flag.
    ///
    /// Declarations carrying it are rejected once validated: use
    /// [`FieldConfig::deprecated()`] instead.
    #[must_use]
    pub fn is_deprecated(mut self, is_deprecated: bool) -> Self {
        self.is_deprecated = Some(is_deprecated);
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }
}

/// Declaration of an argument of a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentConfig {
    /// Input type of the argument.
    pub arg_type: Type,
    /// Value used when the argument isn't provided.
    pub default_value: Option<Value>,
    /// Optional description of the argument.
    pub description: Option<ArcStr>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
}

impl ArgumentConfig {
    /// Starts a declaration of an argument of the provided `arg_type`.
    pub fn new(arg_type: impl Into<Type>) -> Self {
        Self {
            arg_type: arg_type.into(),
            default_value: None,
            description: None,
            ast_node: None,
        }
    }

    /// Sets the default value of this argument.
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the `description` of this argument.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }
}

/// Declaration of a field of an input object.
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldConfig {
    /// Input type of the field.
    pub field_type: Type,
    /// Value used when the field isn't provided.
    pub default_value: Option<Value>,
    /// Optional description of the field.
    pub description: Option<ArcStr>,
    /// Resolver carried over from an output field declaration.
    ///
    /// Input fields can't be resolved, so declarations carrying one are
    /// rejected once validated.
    pub resolve: Option<Callable<ResolveFn>>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
}

impl InputFieldConfig {
    /// Starts a declaration of an input field of the provided `field_type`.
    pub fn new(field_type: impl Into<Type>) -> Self {
        Self {
            field_type: field_type.into(),
            default_value: None,
            description: None,
            resolve: None,
            ast_node: None,
        }
    }

    /// Sets the default value of this input field.
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the `description` of this input field.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }
}

/// Reuses an output field declaration as an input one.
///
/// Arguments and deprecation don't apply to input fields and are dropped,
/// while a resolver is kept so that validation reports it.
impl From<FieldConfig> for InputFieldConfig {
    fn from(field: FieldConfig) -> Self {
        Self {
            field_type: field.field_type,
            default_value: None,
            description: field.description,
            resolve: field.resolve,
            ast_node: field.ast_node,
        }
    }
}

/// Declaration of an enum value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumValueConfig {
    /// Internal value. Defaults to the value's name.
    pub value: Option<Value>,
    /// Optional description of the value.
    pub description: Option<ArcStr>,
    /// Reason of the value's deprecation. The value is deprecated if set.
    pub deprecation_reason: Option<ArcStr>,
    /// Legacy deprecation flag, always rejected in favor of
    /// `deprecation_reason`.
    pub is_deprecated: Option<bool>,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
}

impl EnumValueConfig {
    /// Starts a declaration of an enum value standing for its own name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the internal `value` of this enum value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the `description` of this enum value.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks this enum value as deprecated for the provided `reason`.
    #[must_use]
    pub fn deprecated(mut self, reason: impl Into<ArcStr>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Sets the legacy deprecation flag.
    ///
    /// Declarations carrying it are rejected once validated: use
    /// [`EnumValueConfig::deprecated()`] instead.
    #[must_use]
    pub fn is_deprecated(mut self, is_deprecated: bool) -> Self {
        self.is_deprecated = Some(is_deprecated);
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }
}

/// Declaration of a [`Directive`].
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveConfig {
    /// Name of the directive, without the leading `@`.
    pub name: ArcStr,
    /// Optional description of the directive.
    pub description: Option<ArcStr>,
    /// Locations the directive may be applied at.
    pub locations: Vec<DirectiveLocation>,
    /// Arguments of the directive.
    pub args: ArgumentConfigMap,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
}

impl DirectiveConfig {
    /// Starts a declaration of a directive with the provided `name`,
    /// applicable at the provided `locations`.
    pub fn new(name: impl Into<ArcStr>, locations: &[DirectiveLocation]) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: locations.to_vec(),
            args: ArgumentConfigMap::new(),
            ast_node: None,
        }
    }

    /// Sets the `description` of this directive.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an `argument` to this directive.
    #[must_use]
    pub fn argument(mut self, name: impl Into<ArcStr>, argument: ArgumentConfig) -> Self {
        self.args.insert(name.into(), argument);
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }
}

/// Declaration of a [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaConfig {
    /// Root type of query operations.
    pub query: ObjectType,
    /// Root type of mutation operations.
    pub mutation: Option<ObjectType>,
    /// Root type of subscription operations.
    pub subscription: Option<ObjectType>,
    /// Types registered in the schema even if not reachable from its roots,
    /// e.g. objects implementing an interface.
    pub types: Vec<NamedType>,
    /// Directives of the schema. The specified directives if unset.
    pub directives: Option<Vec<Directive>>,
    /// Skips whole-schema validation, trusting the declarations to be valid.
    pub assume_valid: bool,
    /// Source annotation of the declaration.
    pub ast_node: Option<AstNode>,
    /// Source annotations of the schema's extensions.
    pub extension_ast_nodes: Vec<AstNode>,
}

impl SchemaConfig {
    /// Starts a declaration of a schema with the provided `query` root type.
    pub fn new(query: ObjectType) -> Self {
        Self {
            query,
            mutation: None,
            subscription: None,
            types: vec![],
            directives: None,
            assume_valid: false,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    /// Sets the root type of mutation operations.
    #[must_use]
    pub fn mutation(mut self, mutation: ObjectType) -> Self {
        self.mutation = Some(mutation);
        self
    }

    /// Sets the root type of subscription operations.
    #[must_use]
    pub fn subscription(mut self, subscription: ObjectType) -> Self {
        self.subscription = Some(subscription);
        self
    }

    /// Adds a type to register in the schema, even if not reachable from its
    /// roots.
    #[must_use]
    pub fn register(mut self, ty: impl Into<NamedType>) -> Self {
        self.types.push(ty.into());
        self
    }

    /// Sets the `directives` of the schema.
    ///
    /// Overwrites the specified directives, which have to be listed
    /// explicitly to be kept.
    #[must_use]
    pub fn directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = Some(directives);
        self
    }

    /// Skips whole-schema validation.
    #[must_use]
    pub fn assume_valid(mut self, assume_valid: bool) -> Self {
        self.assume_valid = assume_valid;
        self
    }

    /// Attaches a source annotation to this declaration.
    #[must_use]
    pub fn ast_node(mut self, node: AstNode) -> Self {
        self.ast_node = Some(node);
        self
    }

    /// Adds a source annotation of an extension of the schema.
    #[must_use]
    pub fn extension_ast_node(mut self, node: AstNode) -> Self {
        self.extension_ast_nodes.push(node);
        self
    }
}

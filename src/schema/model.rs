use std::{collections::VecDeque, sync::OnceLock};

use arcstr::ArcStr;
use fnv::{FnvBuildHasher, FnvHashMap, FnvHashSet};
use indexmap::IndexMap;

use crate::{
    ast::AstNode,
    error::SchemaError,
    schema::{
        config::SchemaConfig,
        directive::{Directive, specified_directives},
        meta::{InterfaceType, NamedType, ObjectType},
    },
    types::base::Type,
    validation,
};

/// Every named type of a [`Schema`], keyed by name, in registration order.
pub type TypeMap = IndexMap<ArcStr, NamedType, FnvBuildHasher>;

/// Assembled schema: root operation types, every named type reachable from
/// them, and directives.
///
/// The [`TypeMap`] is collected once, by [`Schema::new()`], and never
/// recomputed: the type graph is expected to stay the same afterwards.
///
/// The [`TypeMap`] owns the registered types. Types only refer to each other,
/// so a circular type graph is freed once its schemas and every outside
/// handle to its types are dropped.
#[derive(Debug)]
pub struct Schema {
    pub(crate) query: ObjectType,
    pub(crate) mutation: Option<ObjectType>,
    pub(crate) subscription: Option<ObjectType>,
    pub(crate) type_map: TypeMap,
    pub(crate) directives: Vec<Directive>,
    implementations: FnvHashMap<ArcStr, Vec<ObjectType>>,
    pub(crate) assume_valid: bool,
    validation: OnceLock<Vec<SchemaError>>,
    pub(crate) ast_node: Option<AstNode>,
    pub(crate) extension_ast_nodes: Vec<AstNode>,
}

impl Schema {
    /// Assembles a new [`Schema`] out of the provided declaration.
    ///
    /// Starting from the root operation types, the explicitly listed
    /// [`SchemaConfig::types`] and the argument types of directives, every
    /// reachable named type is validated and registered under its name.
    /// Objects implementing an interface aren't discovered through that
    /// interface: they have to be reachable themselves, or listed explicitly.
    ///
    /// # Errors
    ///
    /// - If a reachable type fails its declaration validation.
    /// - If two distinct type instances share a name, even when declared
    ///   identically.
    /// - If two directives share a name.
    /// - If a referenced type has been dropped along with the schemas owning
    ///   it.
    pub fn new(config: SchemaConfig) -> Result<Self, SchemaError> {
        let SchemaConfig {
            query,
            mutation,
            subscription,
            types,
            directives,
            assume_valid,
            ast_node,
            extension_ast_nodes,
        } = config;

        let directives = directives.unwrap_or_else(specified_directives);
        let mut directive_names = FnvHashSet::default();
        for d in &directives {
            if !directive_names.insert(d.name.clone()) {
                return Err(SchemaError::DuplicateDirective {
                    name: d.name.clone(),
                });
            }
        }

        let mut pending = VecDeque::new();
        pending.push_back(NamedType::from(query.clone()));
        pending.extend(mutation.iter().cloned().map(NamedType::from));
        pending.extend(subscription.iter().cloned().map(NamedType::from));
        pending.extend(types);
        pending.extend(
            directives
                .iter()
                .flat_map(|d| &d.arguments)
                .map(|a| a.arg_type.named_type().clone()),
        );

        let type_map = collect_types(pending)?;
        let implementations = collect_implementations(&type_map)?;
        // From now on, the type map keeps the types alive.
        for ty in type_map.values() {
            ty.release_declarations();
        }

        tracing::debug!(
            query = %query,
            types = type_map.len(),
            directives = directives.len(),
            "assembled schema"
        );

        Ok(Self {
            query,
            mutation,
            subscription,
            type_map,
            directives,
            implementations,
            assume_valid,
            validation: OnceLock::new(),
            ast_node,
            extension_ast_nodes,
        })
    }

    /// Returns the root type of query operations.
    pub fn query_type(&self) -> &ObjectType {
        &self.query
    }

    /// Returns the root type of mutation operations, if any.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation.as_ref()
    }

    /// Returns the root type of subscription operations, if any.
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription.as_ref()
    }

    /// Returns every named type of this schema.
    pub fn type_map(&self) -> &TypeMap {
        &self.type_map
    }

    /// Get a type by name.
    pub fn type_by_name(&self, name: &str) -> Option<&NamedType> {
        self.type_map.get(name)
    }

    /// Returns the directives of this schema.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Get a directive by name.
    pub fn directive_by_name(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }

    /// Returns the source annotation of this schema's declaration.
    pub fn ast_node(&self) -> Option<&AstNode> {
        self.ast_node.as_ref()
    }

    /// Returns the source annotations of this schema's extensions.
    pub fn extension_ast_nodes(&self) -> &[AstNode] {
        &self.extension_ast_nodes
    }

    /// Returns the registered objects implementing the provided `interface`.
    ///
    /// Interfaces not registered in this schema have no implementations, even
    /// when named like a registered one.
    pub fn implementations(&self, interface: &InterfaceType) -> &[ObjectType] {
        let registered = self
            .type_map
            .get(interface.name())
            .and_then(NamedType::as_interface);
        if !registered.is_some_and(|i| i.ptr_eq(interface)) {
            return &[];
        }
        self.implementations
            .get(interface.name())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the object types the provided abstract type may resolve to.
    ///
    /// Non-abstract types have no possible types.
    pub fn possible_types(&self, abstract_type: &NamedType) -> Vec<ObjectType> {
        match abstract_type {
            NamedType::Union(u) => u.types().unwrap_or_default(),
            NamedType::Interface(i) => self.implementations(i).to_vec(),
            _ => vec![],
        }
    }

    /// Checks whether the provided `possible_type` is one of the object types
    /// the `abstract_type` may resolve to.
    pub fn is_possible_type(&self, abstract_type: &NamedType, possible_type: &ObjectType) -> bool {
        match abstract_type {
            NamedType::Union(u) => u
                .types()
                .is_ok_and(|members| members.iter().any(|m| m.ptr_eq(possible_type))),
            NamedType::Interface(i) => self
                .implementations(i)
                .iter()
                .any(|o| o.ptr_eq(possible_type)),
            _ => false,
        }
    }

    /// Checks whether a value of `sub_type` is also a value of `super_type`.
    ///
    /// Holds for equal types, for objects possible for an abstract type, for
    /// non-null types of a nullable subtype, and for lists of subtypes.
    pub fn is_subtype(&self, sub_type: &Type, super_type: &Type) -> bool {
        if sub_type == super_type {
            return true;
        }

        match (sub_type, super_type) {
            (Type::NonNull(sub), Type::NonNull(sup)) => {
                self.is_subtype(sub.of_type(), sup.of_type())
            }
            (_, Type::NonNull(_)) => false,
            (Type::NonNull(sub), sup) => self.is_subtype(sub.of_type(), sup),
            (Type::List(sub), Type::List(sup)) => self.is_subtype(sub.of_type(), sup.of_type()),
            (_, Type::List(_)) | (Type::List(_), _) => false,
            (Type::Named(sub), Type::Named(sup)) => self.is_named_subtype(sub, sup),
        }
    }

    /// Checks whether the `sub_type` named type is also a `super_type` one.
    pub fn is_named_subtype(&self, sub_type: &NamedType, super_type: &NamedType) -> bool {
        if sub_type == super_type {
            return true;
        }
        match sub_type {
            NamedType::Object(o) => super_type.is_abstract() && self.is_possible_type(super_type, o),
            _ => false,
        }
    }

    /// Validates rules spanning several types of this schema, returning every
    /// violation found.
    ///
    /// Computed once and cached. Always empty for schemas declared with
    /// [`SchemaConfig::assume_valid`].
    pub fn validate(&self) -> &[SchemaError] {
        if self.assume_valid {
            return &[];
        }
        self.validation
            .get_or_init(|| validation::validate_schema(self))
    }
}

/// Walks the type graph from the `pending` types, registering each named
/// type once.
fn collect_types(mut pending: VecDeque<NamedType>) -> Result<TypeMap, SchemaError> {
    let mut type_map = TypeMap::default();

    while let Some(ty) = pending.pop_front() {
        if let Some(registered) = type_map.get(ty.name()) {
            if registered.ptr_eq(&ty) {
                continue;
            }
            return Err(SchemaError::DuplicateType {
                name: ty.name().clone(),
            });
        }

        ty.validate()?;
        pending.extend(referenced_types(&ty)?);

        tracing::debug!(name = %ty.name(), kind = %ty.kind(), "registered type");
        type_map.insert(ty.name().clone(), ty);
    }

    Ok(type_map)
}

/// Returns the named types the provided one refers to directly: through
/// fields, arguments, interfaces or union members.
fn referenced_types(ty: &NamedType) -> Result<Vec<NamedType>, SchemaError> {
    let fields = match ty {
        NamedType::Scalar(_) | NamedType::Enum(_) => return Ok(vec![]),
        NamedType::Object(o) => o.fields()?,
        NamedType::Interface(i) => i.fields()?,
        NamedType::Union(u) => {
            return Ok(u.types()?.into_iter().map(NamedType::from).collect());
        }
        NamedType::InputObject(io) => {
            return io
                .fields()?
                .values()
                .map(|f| f.field_type.named_type().upgrade())
                .collect();
        }
    };

    let mut referenced = vec![];
    for field in fields.values() {
        referenced.push(field.field_type.named_type().upgrade()?);
        referenced.extend(field.arguments.iter().map(|a| a.arg_type.named_type().clone()));
    }
    if let NamedType::Object(o) = ty {
        referenced.extend(o.interfaces()?.into_iter().map(NamedType::from));
    }
    Ok(referenced)
}

fn collect_implementations(
    type_map: &TypeMap,
) -> Result<FnvHashMap<ArcStr, Vec<ObjectType>>, SchemaError> {
    let mut implementations = FnvHashMap::<ArcStr, Vec<ObjectType>>::default();
    for object in type_map.values().filter_map(NamedType::as_object) {
        for interface in object.interfaces()? {
            implementations
                .entry(interface.name().clone())
                .or_default()
                .push(object.clone());
        }
    }
    Ok(implementations)
}

static_assertions::assert_impl_all!(Schema: Send, Sync);

use arcstr::ArcStr;

use crate::{
    error::SchemaError,
    schema::{
        meta::{FieldMap, InterfaceType, NamedType, ObjectType},
        model::Schema,
    },
    types::name::is_reserved_name,
};

/// Validates rules spanning several types of the `schema`.
pub(crate) fn validate_schema(schema: &Schema) -> Vec<SchemaError> {
    let mut errors = vec![];

    for (name, ty) in schema.type_map() {
        if is_reserved_name(name) {
            errors.push(SchemaError::ReservedName {
                name: name.to_string(),
            });
        }

        match ty {
            NamedType::Scalar(_) => {}
            NamedType::Object(o) => {
                check_fields(&mut errors, name, o.fields());
                match o.interfaces() {
                    Ok(interfaces) => {
                        for i in &interfaces {
                            check_implementation(&mut errors, schema, o, i);
                        }
                    }
                    Err(e) => errors.push(e),
                }
            }
            NamedType::Interface(i) => check_fields(&mut errors, name, i.fields()),
            NamedType::Union(u) => match u.types() {
                Ok(members) if members.is_empty() => errors.push(SchemaError::NoUnionMembers {
                    union_name: name.clone(),
                }),
                Ok(_) => {}
                Err(e) => errors.push(e),
            },
            NamedType::Enum(e) => match e.values() {
                Ok([]) => errors.push(SchemaError::NoEnumValues {
                    type_name: name.clone(),
                }),
                Ok(_) => {}
                Err(e) => errors.push(e),
            },
            NamedType::InputObject(io) => match io.fields() {
                Ok(fields) => {
                    if fields.is_empty() {
                        errors.push(SchemaError::NoFields {
                            type_name: name.clone(),
                        });
                    }
                    for field_name in fields.keys().filter(|n| is_reserved_name(n)) {
                        errors.push(SchemaError::ReservedName {
                            name: format!("{name}.{field_name}"),
                        });
                    }
                }
                Err(e) => errors.push(e),
            },
        }
    }

    errors
}

fn check_fields(
    errors: &mut Vec<SchemaError>,
    type_name: &ArcStr,
    fields: Result<&FieldMap, SchemaError>,
) {
    let fields = match fields {
        Ok(fields) => fields,
        Err(e) => {
            errors.push(e);
            return;
        }
    };

    if fields.is_empty() {
        errors.push(SchemaError::NoFields {
            type_name: type_name.clone(),
        });
    }
    for (field_name, field) in fields {
        if is_reserved_name(field_name) {
            errors.push(SchemaError::ReservedName {
                name: format!("{type_name}.{field_name}"),
            });
        }
        for arg in field.arguments.iter().filter(|a| is_reserved_name(&a.name)) {
            errors.push(SchemaError::ReservedName {
                name: format!("{type_name}.{field_name}({}:)", arg.name),
            });
        }
    }
}

/// Checks that the `object` provides every field of the `interface`, with
/// compatible types and arguments.
fn check_implementation(
    errors: &mut Vec<SchemaError>,
    schema: &Schema,
    object: &ObjectType,
    interface: &InterfaceType,
) {
    let (Ok(object_fields), Ok(interface_fields)) = (object.fields(), interface.fields()) else {
        // Already reported while checking fields of these types.
        return;
    };

    for (field_name, iface_field) in interface_fields {
        let Some(obj_field) = object_fields.get(field_name) else {
            errors.push(SchemaError::MissingInterfaceField {
                interface: interface.name().clone(),
                field: field_name.clone(),
                object: object.name().clone(),
            });
            continue;
        };

        match (obj_field.field_type.upgrade(), iface_field.field_type.upgrade()) {
            (Ok(found), Ok(expected)) => {
                if !schema.is_subtype(&found, &expected) {
                    errors.push(SchemaError::InterfaceFieldTypeMismatch {
                        interface: interface.name().clone(),
                        field: field_name.clone(),
                        object: object.name().clone(),
                        expected: expected.to_string(),
                        found: found.to_string(),
                    });
                }
            }
            (Err(e), _) | (_, Err(e)) => errors.push(e),
        }

        for iface_arg in &iface_field.arguments {
            match obj_field.argument_by_name(&iface_arg.name) {
                None => errors.push(SchemaError::MissingInterfaceArgument {
                    interface: interface.name().clone(),
                    field: field_name.clone(),
                    argument: iface_arg.name.clone(),
                    object: object.name().clone(),
                }),
                Some(obj_arg) if obj_arg.arg_type != iface_arg.arg_type => {
                    errors.push(SchemaError::InterfaceArgumentTypeMismatch {
                        interface: interface.name().clone(),
                        field: field_name.clone(),
                        argument: iface_arg.name.clone(),
                        object: object.name().clone(),
                        expected: iface_arg.arg_type.to_string(),
                        found: obj_arg.arg_type.to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        for obj_arg in &obj_field.arguments {
            let required = obj_arg.arg_type.is_non_null() && obj_arg.default_value.is_none();
            if required && iface_field.argument_by_name(&obj_arg.name).is_none() {
                errors.push(SchemaError::RequiredExtraArgument {
                    object: object.name().clone(),
                    field: field_name.clone(),
                    argument: obj_arg.name.clone(),
                    found: obj_arg.arg_type.to_string(),
                    interface: interface.name().clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use arcstr::literal;
    use indexmap::{IndexMap, indexmap};

    use crate::{
        error::SchemaError,
        schema::{
            config::{
                ArgumentConfig, EnumConfig, FieldConfig, FieldConfigMap, InputObjectConfig,
                InterfaceConfig, ObjectConfig, SchemaConfig, UnionConfig,
            },
            meta::{EnumType, InputObjectType, InterfaceType, ObjectType, ScalarType, UnionType},
            model::Schema,
        },
        types::base::Type,
    };

    fn query_with(field_type: impl Into<Type>) -> ObjectType {
        ObjectType::new(ObjectConfig::new(
            "Query",
            indexmap! { literal!("f") => FieldConfig::new(field_type) },
        ))
    }

    fn named_node(fields: FieldConfigMap) -> InterfaceType {
        InterfaceType::new(InterfaceConfig::new("Node", fields))
    }

    fn errors_of(schema: &Schema) -> Vec<String> {
        schema.validate().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn accepts_valid_schema() {
        let node = named_node(indexmap! {
            literal!("id") => FieldConfig::new(Type::from(ScalarType::id()).non_null().unwrap()),
        });
        let user = ObjectType::new(
            ObjectConfig::new(
                "User",
                indexmap! {
                    literal!("id") => FieldConfig::new(
                        Type::from(ScalarType::id()).non_null().unwrap(),
                    ),
                    literal!("name") => FieldConfig::new(ScalarType::string()),
                },
            )
            .interfaces(vec![node.clone()]),
        );
        let schema = Schema::new(SchemaConfig::new(query_with(node)).register(user)).unwrap();

        assert!(schema.validate().is_empty());
    }

    #[test]
    fn rejects_empty_types() {
        let empty_union = UnionType::new(UnionConfig::new("Nothing"));
        let empty_enum = EnumType::new(EnumConfig::new("NoValues", IndexMap::new()));
        let empty_input = InputObjectType::new(InputObjectConfig::new("NoFields", IndexMap::new()));
        let query = ObjectType::new(ObjectConfig::new(
            "Query",
            indexmap! {
                literal!("u") => FieldConfig::new(empty_union),
                literal!("e") => FieldConfig::new(empty_enum)
                    .argument("i", ArgumentConfig::new(empty_input)),
            },
        ));
        let schema = Schema::new(SchemaConfig::new(query)).unwrap();

        assert_eq!(
            errors_of(&schema),
            [
                "Union type Nothing must define one or more member types",
                "Enum type NoValues must define one or more values",
                "Type NoFields must define one or more fields",
            ],
        );
    }

    #[test]
    fn rejects_reserved_names() {
        let reserved = ObjectType::new(ObjectConfig::new(
            "__Reserved",
            indexmap! { literal!("__f") => FieldConfig::new(ScalarType::int()) },
        ));
        let schema = Schema::new(SchemaConfig::new(query_with(reserved))).unwrap();

        assert_eq!(
            schema.validate(),
            &[
                SchemaError::ReservedName {
                    name: "__Reserved".into(),
                },
                SchemaError::ReservedName {
                    name: "__Reserved.__f".into(),
                },
            ],
        );
    }

    #[test]
    fn rejects_incorrect_implementations() {
        let node = named_node(indexmap! {
            literal!("id") => FieldConfig::new(Type::from(ScalarType::id()).non_null().unwrap()),
            literal!("friends") => FieldConfig::new(ScalarType::int())
                .argument("first", ArgumentConfig::new(ScalarType::int())),
            literal!("name") => FieldConfig::new(ScalarType::string()),
        });
        let user = ObjectType::new(
            ObjectConfig::new(
                "User",
                indexmap! {
                    literal!("id") => FieldConfig::new(ScalarType::id()),
                    literal!("friends") => FieldConfig::new(ScalarType::int())
                        .argument("first", ArgumentConfig::new(ScalarType::string()))
                        .argument(
                            "after",
                            ArgumentConfig::new(Type::from(ScalarType::id()).non_null().unwrap()),
                        ),
                },
            )
            .interfaces(vec![node.clone()]),
        );
        let schema = Schema::new(SchemaConfig::new(query_with(node)).register(user)).unwrap();

        assert_eq!(
            errors_of(&schema),
            [
                "Interface field Node.id expects type ID! but User.id is type ID",
                "Interface field argument Node.friends(first:) expects type Int \
                 but User.friends(first:) is type String",
                "Object field argument User.friends(after:) is of required type ID! \
                 but is not also provided by the Interface field Node.friends",
                "Interface field Node.name expected but User does not provide it",
            ],
        );
    }

    #[test]
    fn accepts_covariant_field_types() {
        let node = named_node(indexmap! {
            literal!("id") => FieldConfig::new(ScalarType::id()),
        });
        let user = ObjectType::new(
            ObjectConfig::new(
                "User",
                indexmap! {
                    literal!("id") => FieldConfig::new(Type::from(ScalarType::id()).non_null().unwrap()),
                },
            )
            .interfaces(vec![node.clone()]),
        );
        let schema = Schema::new(SchemaConfig::new(query_with(node)).register(user)).unwrap();

        assert!(schema.validate().is_empty());
    }

    #[test]
    fn skips_validation_when_assumed_valid() {
        let empty = UnionType::new(UnionConfig::new("Nothing"));
        let schema = Schema::new(SchemaConfig::new(query_with(empty)).assume_valid(true)).unwrap();

        assert!(schema.validate().is_empty());
    }
}

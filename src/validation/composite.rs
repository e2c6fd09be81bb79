use arcstr::ArcStr;
use itertools::Itertools as _;

use crate::{
    error::SchemaError,
    schema::meta::{InterfaceMeta, InterfaceType, Link, ObjectMeta, ObjectType},
};

/// Checks that the `type_name` object lists each of its interfaces once,
/// linking to them without owning them.
pub(crate) fn define_interfaces(
    type_name: &ArcStr,
    interfaces: &[InterfaceType],
) -> Result<Vec<Link<InterfaceMeta>>, SchemaError> {
    if let Some(dup) = interfaces.iter().duplicates_by(|i| i.name().clone()).next() {
        return Err(SchemaError::DuplicateInterface {
            type_name: type_name.clone(),
            interface: dup.name().clone(),
        });
    }
    Ok(interfaces.iter().map(InterfaceType::link).collect())
}

/// Checks that the `union_name` union lists each of its members once.
///
/// An empty list is accepted here, and reported by schema validation instead.
pub(crate) fn define_union_members(
    union_name: &ArcStr,
    members: &[ObjectType],
) -> Result<Vec<Link<ObjectMeta>>, SchemaError> {
    if let Some(dup) = members.iter().duplicates_by(|m| m.name().clone()).next() {
        return Err(SchemaError::DuplicateUnionMember {
            union_name: union_name.clone(),
            member: dup.name().clone(),
        });
    }
    Ok(members.iter().map(ObjectType::link).collect())
}

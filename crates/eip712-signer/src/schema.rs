//! The schema collector (C4): a recursive pull protocol that materialises a
//! closed set of struct definitions from the host.

use crate::field_type::FieldType;
use crate::host::HostLink;
use crate::type_table::{StructDef, TypeTable};
use crate::Error;

/// Recursively collects `name` and every struct it (transitively)
/// references into `types`, mutating it in place.
///
/// Termination is by the cycle check — a name already present in `types`
/// is never re-requested — which also deduplicates diamond references
/// (spec §4.4).
///
/// # Errors
///
/// Propagates [`Error::TransportError`] from the host link.
pub fn collect_types(host: &mut dyn HostLink, name: &str, types: &mut TypeTable) -> Result<(), Error> {
    if types.contains(name) {
        return Ok(());
    }

    tracing::debug!(struct_name = name, "requesting struct definition");
    let ack = host.request_struct(name)?;
    let def = StructDef::new(ack.members.clone());
    types.insert(name.to_string(), def);

    for member in &ack.members {
        collect_from_field_type(host, &member.field_type, types)?;
    }

    Ok(())
}

fn collect_from_field_type(
    host: &mut dyn HostLink,
    field_type: &FieldType,
    types: &mut TypeTable,
) -> Result<(), Error> {
    match field_type {
        FieldType::Struct { name } => collect_types(host, name, types),
        FieldType::Array { entry, .. } => collect_from_field_type(host, entry, types),
        _ => Ok(()),
    }
}

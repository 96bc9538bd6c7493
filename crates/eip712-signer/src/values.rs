//! The value collector (C6): a path-addressed pull protocol that streams
//! field values on demand, validating each against its declared type
//! before use.
//!
//! Arrays of arrays are not supported: an `entry` whose type is itself an
//! `Array` surfaces [`Error::DataError`] rather than being silently
//! descended into (spec §4.6, §9 open questions).

use crate::field_type::FieldType;
use crate::host::HostLink;
use crate::type_table::TypeTable;
use crate::validate::validate;
use crate::value_tree::ValueTree;
use crate::Error;

/// Collects every value reachable from `type_name`'s definition, starting
/// at `path`, into a [`ValueTree`].
///
/// Traversal order is deterministic pre-order: members in declaration
/// order; within an array, the length request precedes element requests,
/// and elements are requested in ascending index order (spec §5).
///
/// # Errors
///
/// Propagates [`Error::TransportError`] from the host link,
/// [`Error::SchemaError`] if `type_name` or a referenced struct is
/// missing from `types`, and [`Error::DataError`] on validation failure or
/// an unsupported array-of-arrays member.
pub fn collect_values(
    host: &mut dyn HostLink,
    type_name: &str,
    types: &TypeTable,
    path: &[u32],
) -> Result<ValueTree, Error> {
    let def = types.require(type_name)?;
    let mut value = ValueTree::empty_struct();

    for (ordinal, member) in def.members.iter().enumerate() {
        let mut member_path = path.to_vec();
        member_path.push(ordinal as u32);

        let member_value = match &member.field_type {
            FieldType::Struct { name } => collect_values(host, name, types, &member_path)?,
            FieldType::Array { entry, .. } => {
                collect_array(host, &member.name, entry, types, &member_path)?
            }
            other => {
                tracing::debug!(field = member.name.as_str(), path = ?member_path, "requesting value");
                let bytes = host.request_value(&member_path)?;
                validate(other, &member.name, &bytes)?;
                ValueTree::Leaf(bytes)
            }
        };

        value.insert_member(member.name.clone(), member_value);
    }

    Ok(value)
}

fn collect_array(
    host: &mut dyn HostLink,
    member_name: &str,
    entry: &FieldType,
    types: &TypeTable,
    member_path: &[u32],
) -> Result<ValueTree, Error> {
    if matches!(entry, FieldType::Array { .. }) {
        return Err(Error::data(member_name, "nested arrays unsupported"));
    }

    tracing::debug!(field = member_name, path = ?member_path, "requesting array length");
    let length_bytes = host.request_value(member_path)?;
    let length = bytes_to_u64(&length_bytes)?;

    let mut elements = Vec::with_capacity(length as usize);
    for i in 0..length {
        let mut element_path = member_path.to_vec();
        element_path.push(i as u32);

        let element = match entry {
            FieldType::Struct { name } => collect_values(host, name, types, &element_path)?,
            _ => {
                let bytes = host.request_value(&element_path)?;
                validate(entry, member_name, &bytes)?;
                ValueTree::Leaf(bytes)
            }
        };
        elements.push(element);
    }

    Ok(ValueTree::Array(elements))
}

/// Decodes a big-endian array-length prefix.
///
/// The host is untrusted, so a length that doesn't fit a `u64` (more than 8
/// bytes) is rejected rather than silently folded into a smaller value.
fn bytes_to_u64(bytes: &[u8]) -> Result<u64, Error> {
    if bytes.len() > 8 {
        return Err(Error::Overflow);
    }
    Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64))
}

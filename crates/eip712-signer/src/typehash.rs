//! The type encoder and dependency finder (C7): `encodeType` and
//! `findTypedDependencies`.

use crate::type_table::TypeTable;
use crate::Error;

/// Finds every struct name (transitively) referenced from `primary_type`,
/// primary-type first-discovered, deduplicated, in `acc`.
///
/// Array type names collapse to their base type (`"Mail[]"` → `"Mail"`)
/// before the lookup. A name already in `acc`, or not present in `types`,
/// is skipped without error — absence here is not itself a failure;
/// [`encode_type`] is what requires every dependency to resolve.
pub fn find_typed_dependencies(primary_type: &str, types: &TypeTable, acc: &mut Vec<String>) {
    let base = strip_array_suffix(primary_type);

    if acc.iter().any(|n| n == base) || !types.contains(base) {
        return;
    }

    acc.push(base.to_string());

    let def = types.get(base).expect("checked contains above");
    for member in &def.members {
        if let crate::field_type::FieldType::Struct { name } = &member.field_type {
            find_typed_dependencies(name, types, acc);
        } else if let crate::field_type::FieldType::Array { entry, .. } = &member.field_type {
            if let crate::field_type::FieldType::Struct { name } = entry.as_ref() {
                find_typed_dependencies(name, types, acc);
            }
        }
    }
}

fn strip_array_suffix(name: &str) -> &str {
    if name.ends_with(']') {
        if let Some(idx) = name.find('[') {
            return &name[..idx];
        }
    }
    name
}

/// Computes the canonical EIP-712 `encodeType` byte string for
/// `primary_type`: the primary type's own signature, followed by its
/// dependencies' signatures in lexicographic order by name (spec §4.7).
///
/// # Errors
///
/// Returns [`Error::SchemaError`] if `primary_type` or any dependency is
/// missing from `types`, and propagates [`Error::UnsupportedType`] from
/// member type-name resolution.
pub fn encode_type(primary_type: &str, types: &TypeTable) -> Result<Vec<u8>, Error> {
    types.require(primary_type)?;

    let mut deps = Vec::new();
    find_typed_dependencies(primary_type, types, &mut deps);

    let mut non_primary: Vec<&str> = deps
        .iter()
        .map(String::as_str)
        .filter(|n| *n != primary_type)
        .collect();
    non_primary.sort_unstable();

    let mut ordered = vec![primary_type];
    ordered.extend(non_primary);

    let mut result = Vec::new();
    for type_name in ordered {
        let def = types.require(type_name)?;
        let mut fields = Vec::with_capacity(def.members.len());
        for member in &def.members {
            fields.push(format!("{} {}", member.field_type.type_name()?, member.name));
        }
        result.extend_from_slice(type_name.as_bytes());
        result.push(b'(');
        result.extend_from_slice(fields.join(",").as_bytes());
        result.push(b')');
    }

    Ok(result)
}

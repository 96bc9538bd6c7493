//! The struct hasher (C8): `hashStruct` = `keccak(typeHash ‖ encodeData)`.

use crate::encode::encode_field;
use crate::hash_writer::HashWriter;
use crate::type_table::TypeTable;
use crate::typehash::encode_type;
use crate::value_tree::ValueTree;
use crate::Error;

/// Computes `hashStruct(name, value, types, v4_compat)`: the typeHash
/// followed by the encoded member data, both streamed into one
/// [`HashWriter`] (spec §4.8).
///
/// # Errors
///
/// Propagates [`Error::SchemaError`], [`Error::DataError`], and
/// [`Error::Overflow`] from `encodeType`/`encodeData`.
pub fn hash_struct(
    name: &str,
    value: &ValueTree,
    types: &TypeTable,
    v4_compat: bool,
) -> Result<[u8; 32], Error> {
    let mut w = HashWriter::new();
    let type_hash = crate::hash_writer::keccak256(&encode_type(name, types)?);
    w.extend(&type_hash);
    encode_data(&mut w, name, value, types, v4_compat)?;
    Ok(w.digest())
}

/// Streams the encoded member values of `name`'s struct into `w`, in
/// declaration order (spec §4.8).
///
/// # Errors
///
/// Propagates errors from [`encode_field`] and from looking up `name` in
/// `types`.
pub fn encode_data(
    w: &mut HashWriter,
    name: &str,
    value: &ValueTree,
    types: &TypeTable,
    v4_compat: bool,
) -> Result<(), Error> {
    let def = types.require(name)?;
    for member in &def.members {
        let member_value = value.member(&member.name)?;
        encode_field(w, &member.field_type, member_value, types, false, v4_compat)?;
    }
    Ok(())
}

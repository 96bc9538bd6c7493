//! Decoding raw field bytes for operator display (C10).
//!
//! The value tree holds only raw bytes (spec §3); this is the one place
//! they are interpreted into a human-readable string, for the [`crate::Confirmer`]
//! full-view checkpoints. Signed integers are decoded by hand — never by a
//! runtime signed-from-bytes conversion — since the width is host-supplied
//! and arbitrary between 1 and 32 bytes, not one of Rust's fixed integer
//! widths (spec §9).

use crate::field_type::FieldType;
use crate::Error;

/// Renders `bytes`, validated against `field`, as a display string.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `field` is a `Struct` or `Array`
/// (those are rendered by recursing over the value tree, not by this
/// function) and [`Error::DataError`] if `bytes` is not valid UTF-8 for a
/// `string` field.
pub fn decode_for_display(bytes: &[u8], field: &FieldType) -> Result<String, Error> {
    match field {
        FieldType::Uint { .. } => Ok(decode_uint(bytes)),
        FieldType::Int { .. } => Ok(decode_int(bytes)),
        FieldType::Bool => Ok(if bytes == [0x01] { "true" } else { "false" }.to_string()),
        FieldType::Address => Ok(crate::address::Address::from_slice(bytes)?.to_checksum_string()),
        FieldType::Bytes { .. } => Ok(format!("0x{}", hex::encode(bytes))),
        FieldType::String => std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| Error::data("string", "invalid UTF-8")),
        FieldType::Struct { name } => Err(Error::UnsupportedType(format!(
            "struct `{}` has no flat display form",
            name
        ))),
        FieldType::Array { .. } => Err(Error::UnsupportedType(
            "array has no flat display form".to_string(),
        )),
    }
}

/// Decodes a big-endian unsigned integer of arbitrary byte width as
/// decimal.
fn decode_uint(bytes: &[u8]) -> String {
    let mut digits = vec![0u8]; // big-endian base-10 digits, most significant first
    for &byte in bytes {
        let mut carry = byte as u32;
        for digit in digits.iter_mut().rev() {
            let value = *digit as u32 * 256 + carry;
            *digit = (value % 10) as u8;
            carry = value / 10;
        }
        while carry > 0 {
            digits.insert(0, (carry % 10) as u8);
            carry /= 10;
        }
    }
    let s: String = digits.iter().map(|d| (d + b'0') as char).collect();
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Decodes a big-endian two's-complement signed integer of arbitrary byte
/// width as decimal.
///
/// The high bit of the first byte carries the sign. For a negative value,
/// the magnitude is recovered by inverting every byte and adding one
/// (two's-complement negation), then rendering that magnitude with a
/// leading `-`.
fn decode_int(bytes: &[u8]) -> String {
    if bytes.is_empty() || bytes[0] & 0x80 == 0 {
        return decode_uint(bytes);
    }

    let mut inverted: Vec<u8> = bytes.iter().map(|b| !b).collect();
    let mut carry = 1u16;
    for byte in inverted.iter_mut().rev() {
        let sum = *byte as u16 + carry;
        *byte = sum as u8;
        carry = sum >> 8;
    }

    format!("-{}", decode_uint(&inverted))
}

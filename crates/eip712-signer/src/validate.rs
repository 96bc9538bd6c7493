//! The value validator (C5).
//!
//! Every value pulled from the host is untrusted until it passes through
//! [`validate`] — byte length and payload checks per spec §4.5. Nothing
//! here repairs malformed input; it only accepts or rejects.

use crate::field_type::FieldType;
use crate::Error;

/// Maximum byte length for any dynamic (unsized) value.
pub const MAX_DYNAMIC_LEN: usize = 1024;

/// Validates a value's raw bytes against its declared field type.
///
/// # Errors
///
/// Returns [`Error::DataError`] naming `field_name` on any violation:
/// wrong fixed length, dynamic length over [`MAX_DYNAMIC_LEN`], an
/// out-of-range `bool`, a malformed `address`, or invalid UTF-8 in a
/// `string`.
pub fn validate(field: &FieldType, field_name: &str, bytes: &[u8]) -> Result<(), Error> {
    match field.fixed_size() {
        Some(k) => {
            if bytes.len() != k as usize {
                return Err(Error::data(
                    field_name,
                    format!("invalid length: expected {}, got {}", k, bytes.len()),
                ));
            }
        }
        None => {
            if bytes.len() > MAX_DYNAMIC_LEN {
                return Err(Error::data(
                    field_name,
                    format!(
                        "invalid length, bigger than {} bytes",
                        MAX_DYNAMIC_LEN
                    ),
                ));
            }
        }
    }

    match field {
        FieldType::Bool => {
            if bytes != [0x00] && bytes != [0x01] {
                return Err(Error::data(field_name, "invalid boolean value"));
            }
        }
        FieldType::Address => {
            if bytes.len() != 20 {
                return Err(Error::data(field_name, "invalid address"));
            }
        }
        FieldType::String => {
            if std::str::from_utf8(bytes).is_err() {
                return Err(Error::data(field_name, "invalid UTF-8"));
            }
        }
        _ => {}
    }

    Ok(())
}

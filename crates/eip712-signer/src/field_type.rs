//! The EIP-712 field-type model (C1).
//!
//! A [`FieldType`] is a tagged representation of an EIP-712 atomic, dynamic,
//! or reference type. The only operation of interest is [`FieldType::type_name`],
//! which produces the canonical EIP-712 type name used both by `encodeType`
//! (C7) and by the value validator (C5).

use crate::Error;

/// An EIP-712 field type, as delivered by the host in a `StructAck`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Big-endian unsigned integer, left-padded. `size_bytes` is 1..=32.
    Uint {
        /// Width of the integer in bytes (not bits).
        size_bytes: u8,
    },
    /// Big-endian two's-complement signed integer, left-padded.
    Int {
        /// Width of the integer in bytes (not bits).
        size_bytes: u8,
    },
    /// A single byte, must be `0x00` or `0x01`.
    Bool,
    /// 20 raw bytes, left-padded to 32 for encoding.
    Address,
    /// Fixed-size (right-padded) if `size_bytes` is `Some`, else dynamic
    /// (hashed).
    Bytes {
        /// Fixed size in bytes, or `None` for dynamic `bytes`.
        size_bytes: Option<u8>,
    },
    /// UTF-8 bytes, dynamic, always hashed.
    String,
    /// A homogeneous sequence. `fixed_len` is `Some(n)` for `T[N]`, `None`
    /// for `T[]`.
    Array {
        /// The element type.
        entry: Box<FieldType>,
        /// Fixed array length, if any.
        fixed_len: Option<usize>,
    },
    /// A reference into the [`crate::TypeTable`] by name.
    Struct {
        /// The referenced struct's name.
        name: String,
    },
}

impl FieldType {
    /// Returns the canonical EIP-712 type name for this field, e.g.
    /// `uint256`, `bytes32`, `bytes`, `string`, `Person[]`, `Person[3]`, or
    /// the struct name itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for `size_bytes` values outside
    /// `1..=32`.
    pub fn type_name(&self) -> Result<String, Error> {
        Ok(match self {
            FieldType::Uint { size_bytes } => {
                format!("uint{}", Self::bits(*size_bytes)?)
            }
            FieldType::Int { size_bytes } => {
                format!("int{}", Self::bits(*size_bytes)?)
            }
            FieldType::Bool => "bool".to_string(),
            FieldType::Address => "address".to_string(),
            FieldType::Bytes { size_bytes: None } => "bytes".to_string(),
            FieldType::Bytes {
                size_bytes: Some(k),
            } => {
                if *k == 0 || *k > 32 {
                    return Err(Error::UnsupportedType(format!("bytes{}", k)));
                }
                format!("bytes{}", k)
            }
            FieldType::String => "string".to_string(),
            FieldType::Array { entry, fixed_len } => {
                let base = entry.type_name()?;
                match fixed_len {
                    Some(n) => format!("{}[{}]", base, n),
                    None => format!("{}[]", base),
                }
            }
            FieldType::Struct { name } => name.clone(),
        })
    }

    fn bits(size_bytes: u8) -> Result<u16, Error> {
        if size_bytes == 0 || size_bytes > 32 {
            return Err(Error::UnsupportedType(format!(
                "integer size of {} bytes",
                size_bytes
            )));
        }
        Ok(size_bytes as u16 * 8)
    }

    /// Returns the byte-length constraint this field imposes, if any: `Some(k)`
    /// for fixed-width atomics, `None` for dynamic types (see §4.5).
    pub fn fixed_size(&self) -> Option<u8> {
        match self {
            FieldType::Uint { size_bytes } | FieldType::Int { size_bytes } => Some(*size_bytes),
            FieldType::Bool => Some(1),
            FieldType::Address => Some(20),
            FieldType::Bytes { size_bytes } => *size_bytes,
            FieldType::String | FieldType::Array { .. } | FieldType::Struct { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint256_name() {
        let f = FieldType::Uint { size_bytes: 32 };
        assert_eq!(f.type_name().unwrap(), "uint256");
    }

    #[test]
    fn test_int16_name() {
        let f = FieldType::Int { size_bytes: 2 };
        assert_eq!(f.type_name().unwrap(), "int16");
    }

    #[test]
    fn test_bool_name() {
        assert_eq!(FieldType::Bool.type_name().unwrap(), "bool");
    }

    #[test]
    fn test_address_name() {
        assert_eq!(FieldType::Address.type_name().unwrap(), "address");
    }

    #[test]
    fn test_dynamic_bytes_name() {
        let f = FieldType::Bytes { size_bytes: None };
        assert_eq!(f.type_name().unwrap(), "bytes");
    }

    #[test]
    fn test_fixed_bytes_name() {
        let f = FieldType::Bytes {
            size_bytes: Some(32),
        };
        assert_eq!(f.type_name().unwrap(), "bytes32");
    }

    #[test]
    fn test_string_name() {
        assert_eq!(FieldType::String.type_name().unwrap(), "string");
    }

    #[test]
    fn test_dynamic_array_name() {
        let f = FieldType::Array {
            entry: Box::new(FieldType::String),
            fixed_len: None,
        };
        assert_eq!(f.type_name().unwrap(), "string[]");
    }

    #[test]
    fn test_fixed_array_name() {
        let f = FieldType::Array {
            entry: Box::new(FieldType::Uint { size_bytes: 32 }),
            fixed_len: Some(3),
        };
        assert_eq!(f.type_name().unwrap(), "uint256[3]");
    }

    #[test]
    fn test_struct_name() {
        let f = FieldType::Struct {
            name: "Person".to_string(),
        };
        assert_eq!(f.type_name().unwrap(), "Person");
    }

    #[test]
    fn test_array_of_struct_name() {
        let f = FieldType::Array {
            entry: Box::new(FieldType::Struct {
                name: "Person".to_string(),
            }),
            fixed_len: None,
        };
        assert_eq!(f.type_name().unwrap(), "Person[]");
    }

    #[test]
    fn test_oversized_bytes_rejected() {
        let f = FieldType::Bytes {
            size_bytes: Some(33),
        };
        assert!(f.type_name().is_err());
    }

    #[test]
    fn test_zero_size_int_rejected() {
        let f = FieldType::Uint { size_bytes: 0 };
        assert!(f.type_name().is_err());
    }

    #[test]
    fn test_fixed_size_atomics() {
        assert_eq!(FieldType::Address.fixed_size(), Some(20));
        assert_eq!(FieldType::Bool.fixed_size(), Some(1));
        assert_eq!(FieldType::Uint { size_bytes: 32 }.fixed_size(), Some(32));
        assert_eq!(FieldType::String.fixed_size(), None);
        let dyn_bytes = FieldType::Bytes { size_bytes: None };
        assert_eq!(dyn_bytes.fixed_size(), None);
    }
}

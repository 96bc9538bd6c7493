//! The incremental Keccak-256 hash writer (C2).
//!
//! Every intermediate hash the encoder produces is built by feeding a fresh
//! [`HashWriter`] and taking its digest, never by materialising a whole
//! concatenation first — the recursion in `encodeField`/`hashStruct` would
//! otherwise defeat the crate's O(depth) memory budget (see spec §5, §9).

use sha3::{Digest, Keccak256};

/// An incremental Keccak-256 (the EIP-712 variant, distinct from NIST
/// SHA3-256) sink.
pub struct HashWriter {
    hasher: Keccak256,
}

impl HashWriter {
    /// Creates a fresh, empty writer.
    pub fn new() -> Self {
        Self {
            hasher: Keccak256::new(),
        }
    }

    /// Feeds `bytes` into the running hash state.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Consumes the writer and returns its 32-byte digest.
    pub fn digest(self) -> [u8; 32] {
        self.hasher.finalize().into()
    }
}

impl Default for HashWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes `keccak256(data)` in one shot, for bounded inputs (e.g. a type
/// string or a dynamic value). This is the only place callers are allowed
/// to materialise a full buffer; recursive struct/array encoding must go
/// through [`HashWriter`] instead.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut w = HashWriter::new();
    w.extend(data);
    w.digest()
}

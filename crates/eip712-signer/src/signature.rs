//! ECDSA signature types for EVM transactions.
//!
//! This module provides the `Signature` struct representing an ECDSA signature
//! with recovery ID, as used in Ethereum-compatible transactions.

use std::fmt;
use zeroize::Zeroize;

/// An ECDSA signature with recovery ID.
///
/// EVM transactions use secp256k1 ECDSA signatures with a recovery ID (`v`)
/// that allows recovering the public key (and thus the sender address) from
/// the signature.
///
/// # Fields
///
/// - `r`: The R component of the signature (32 bytes)
/// - `s`: The S component of the signature (32 bytes)  
/// - `v`: The recovery ID (0 or 1 for EIP-1559 transactions)
///
/// # Note
///
/// For EIP-1559 transactions, `v` is simply the recovery ID (0 or 1),
/// not the legacy `v = 27 + recovery_id` or EIP-155 `v = chain_id * 2 + 35 + recovery_id`.
///
/// # Security
///
/// The signature implements `Zeroize` to clear sensitive data from memory when dropped.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Signature {
    /// The R component of the signature.
    pub r: [u8; 32],
    /// The S component of the signature.
    pub s: [u8; 32],
    /// The recovery ID (0 or 1).
    pub v: u8,
}

impl Signature {
    /// Creates a new signature from components.
    ///
    /// # Arguments
    ///
    /// * `r` - The R component (32 bytes)
    /// * `s` - The S component (32 bytes)
    /// * `v` - The recovery ID (0 or 1)
    pub const fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    /// Creates a signature from raw bytes (65 bytes: r || s || v).
    ///
    /// # Errors
    ///
    /// Returns `None` if the slice is not exactly 65 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != 65 {
            return None;
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        let v = bytes[64];

        Some(Self { r, s, v })
    }

    /// Returns the signature as raw bytes (65 bytes: r || s || v).
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes[0..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.v;
        bytes
    }

    /// Returns the R component as a big-endian U256.
    pub fn r_as_bytes(&self) -> &[u8; 32] {
        &self.r
    }

    /// Returns the S component as a big-endian U256.
    pub fn s_as_bytes(&self) -> &[u8; 32] {
        &self.s
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &hex::encode(self.r))
            .field("s", &hex::encode(self.s))
            .field("v", &self.v)
            .finish()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{}{}{}",
            hex::encode(self.r),
            hex::encode(self.s),
            hex::encode([self.v])
        )
    }
}

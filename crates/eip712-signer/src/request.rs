//! Named wire types for the signing request/response (spec §6, §14).

use crate::{Address, Signature};

/// The three inbound fields that start a signing session.
///
/// There is no persistent configuration beyond this: each session takes its
/// key path, primary type name, and compatibility switch fresh, and nothing
/// is cached across sessions (spec §1, §9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    /// The BIP-32 derivation path selecting which key to sign with.
    pub address_n: Vec<u32>,
    /// The name of the primary type to sign, as it appears in the schema
    /// delivered by the host.
    pub primary_type: String,
    /// Selects the MetaMask v4 array-of-struct encoding deviation for the
    /// single branch of `encodeField` it affects (spec §4.3).
    pub metamask_v4_compat: bool,
}

impl SignRequest {
    /// Creates a new signing request.
    pub fn new(address_n: Vec<u32>, primary_type: impl Into<String>, metamask_v4_compat: bool) -> Self {
        Self {
            address_n,
            primary_type: primary_type.into(),
            metamask_v4_compat,
        }
    }
}

/// The result of a completed signing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignResponse {
    /// The signer's address, as returned by the [`crate::KeySigner`].
    pub address: Address,
    /// The ECDSA signature over the final EIP-712 digest.
    pub signature: Signature,
}

//! The [`KeySigner`] trait — the narrow interface to the keychain and
//! secp256k1 signer.
//!
//! BIP-32/BIP-44 key derivation and the secp256k1 primitives live outside
//! this crate's scope; only the interface the orchestrator calls through is
//! specified here. [`LocalKeySigner`] is a reference implementation over a
//! raw 32-byte private key, used by this crate's own tests and useful as a
//! starting point for a real device integration.
//!
//! # Security
//!
//! [`LocalKeySigner`] holds a private signing key in memory. The key is
//! automatically zeroized when the signer is dropped; the underlying
//! `k256::SigningKey` implements `Zeroize` internally.

use crate::{Address, Error, Result, Signature};
use k256::ecdsa::{RecoveryId, SigningKey, VerifyingKey};

/// Derives a key at `address_n` and signs a 32-byte digest with it.
///
/// Implementors own the keychain and the secp256k1 primitives; this crate
/// never sees key material beyond what a [`KeySigner`] chooses to return.
pub trait KeySigner {
    /// Derives the key at `address_n` and signs `digest`, returning the
    /// signer's address together with the signature.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SigningError`] if derivation or signing fails.
    fn sign_digest(&self, address_n: &[u32], digest: &[u8; 32]) -> Result<(Address, Signature)>;
}

/// A [`KeySigner`] over a single raw private key, ignoring `address_n`.
///
/// Intended for tests and as documentation of the expected wiring; a real
/// device integration derives a fresh key per `address_n` from its
/// keychain instead of holding one fixed key.
pub struct LocalKeySigner {
    signing_key: SigningKey,
    address: Address,
}

impl LocalKeySigner {
    /// Creates a signer directly from a 32-byte private key.
    ///
    /// # Errors
    ///
    /// Returns an error if the private key is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eip712_signer::keysigner::LocalKeySigner;
    ///
    /// let private_key = [1u8; 32]; // Example key (don't use in production!)
    /// let signer = LocalKeySigner::from_private_key(&private_key).unwrap();
    /// ```
    pub fn from_private_key(private_key: &[u8; 32]) -> Result<Self> {
        let signing_key = SigningKey::from_bytes(private_key.into())
            .map_err(|e| Error::SigningError(format!("invalid private key: {}", e)))?;

        let verifying_key = signing_key.verifying_key();
        let address = address_from_verifying_key(verifying_key)?;

        Ok(Self {
            signing_key,
            address,
        })
    }

    /// Returns the EVM address associated with this signer.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Signs a message digest and returns the signature.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn sign_hash(&self, digest: &[u8; 32]) -> Result<Signature> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| Error::SigningError(format!("signing failed: {}", e)))?;

        let r_bytes: [u8; 32] = signature.r().to_bytes().into();
        let s_bytes: [u8; 32] = signature.s().to_bytes().into();
        let v = recovery_id.to_byte();

        Ok(Signature::new(r_bytes, s_bytes, v))
    }
}

impl KeySigner for LocalKeySigner {
    fn sign_digest(&self, _address_n: &[u32], digest: &[u8; 32]) -> Result<(Address, Signature)> {
        let signature = self.sign_hash(digest)?;
        Ok((self.address, signature))
    }
}

fn address_from_verifying_key(verifying_key: &VerifyingKey) -> Result<Address> {
    let pubkey_uncompressed = verifying_key.to_encoded_point(false);
    let pubkey_bytes = pubkey_uncompressed.as_bytes();

    if pubkey_bytes.len() != 65 || pubkey_bytes[0] != 0x04 {
        return Err(Error::SigningError("invalid public key format".to_string()));
    }

    Address::from_public_key_bytes(&pubkey_bytes[1..])
}

/// Recovers the signer's address from a signature and message digest.
///
/// # Errors
///
/// Returns an error if recovery fails (e.g. an invalid `v` value).
pub fn recover_signer(digest: &[u8; 32], signature: &Signature) -> Result<Address> {
    let recovery_id = RecoveryId::from_byte(signature.v)
        .ok_or_else(|| Error::SigningError("invalid recovery id".to_string()))?;

    let r: &k256::FieldBytes = (&signature.r).into();
    let s: &k256::FieldBytes = (&signature.s).into();

    let ecdsa_sig = k256::ecdsa::Signature::from_scalars(*r, *s)
        .map_err(|e| Error::SigningError(format!("invalid signature: {}", e)))?;

    let verifying_key = VerifyingKey::recover_from_prehash(digest, &ecdsa_sig, recovery_id)
        .map_err(|e| Error::SigningError(format!("recovery failed: {}", e)))?;

    address_from_verifying_key(&verifying_key)
}

//! The signing orchestrator (C9): ties every component together into one
//! synchronous call tree (spec §4.9, §5).
//!
//! There is no session state beyond this function's stack: schemas and
//! values are collected fresh, confirmations happen inline, and the
//! final digest is handed to the [`crate::KeySigner`] the moment it is
//! computed. Nothing survives past the `Result` this function returns.

use crate::confirm::Confirmer;
use crate::host::HostLink;
use crate::keysigner::KeySigner;
use crate::request::{SignRequest, SignResponse};
use crate::schema::collect_types;
use crate::struct_hash::hash_struct;
use crate::type_table::TypeTable;
use crate::values::collect_values;
use crate::{Error, Result};

const DOMAIN_STRUCT: &str = "EIP712Domain";
const DOMAIN_PATH: &[u32] = &[0];
const MESSAGE_PATH: &[u32] = &[1];

/// Runs one full signing session: discovers the domain and message
/// schemas, pulls their values, walks the operator through the fixed
/// confirmation sequence (spec §4.9 steps 5, 6, 9), reconstructs the
/// canonical EIP-712 digest, and signs it.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if the operator declines any confirmation,
/// and otherwise propagates every error from the schema/value collectors,
/// the hasher, and the [`KeySigner`].
pub fn sign_typed_data(
    host: &mut dyn HostLink,
    confirmer: &mut dyn Confirmer,
    signer: &dyn KeySigner,
    request: &SignRequest,
) -> Result<SignResponse> {
    let span = tracing::info_span!("eip712_sign", primary_type = %request.primary_type);
    let _guard = span.enter();

    let mut types = TypeTable::new();
    collect_types(host, DOMAIN_STRUCT, &mut types)?;
    collect_types(host, &request.primary_type, &mut types)?;

    let domain_value = collect_values(host, DOMAIN_STRUCT, &types, DOMAIN_PATH)?;
    let message_value = collect_values(host, &request.primary_type, &types, MESSAGE_PATH)?;

    let domain_wants_full = confirmer.confirm_domain_brief(&domain_value)?;
    if domain_wants_full {
        confirmer.confirm_domain_full(&types, &domain_value)?;
    }

    let message_def = types.require(&request.primary_type)?;
    let message_wants_full = confirmer.confirm_message_brief(&request.primary_type, message_def)?;
    if message_wants_full {
        confirmer.confirm_message_full(&types, &request.primary_type, &message_value)?;
    }

    let domain_sep = hash_struct(
        DOMAIN_STRUCT,
        &domain_value,
        &types,
        request.metamask_v4_compat,
    )
    .inspect_err(|err| tracing::warn!(%err, "domain hashing failed"))?;
    let msg_hash = hash_struct(
        &request.primary_type,
        &message_value,
        &types,
        request.metamask_v4_compat,
    )
    .inspect_err(|err| tracing::warn!(%err, "message hashing failed"))?;

    let mut preimage = Vec::with_capacity(2 + 32 + 32);
    preimage.extend_from_slice(&[0x19, 0x01]);
    preimage.extend_from_slice(&domain_sep);
    preimage.extend_from_slice(&msg_hash);
    let digest = crate::hash_writer::keccak256(&preimage);

    if !message_wants_full {
        confirmer.confirm_digest(&request.primary_type, &digest)?;
    }

    tracing::debug!("requesting signature");
    let (address, signature) = signer
        .sign_digest(&request.address_n, &digest)
        .inspect_err(|err| tracing::warn!(%err, "signing failed"))?;

    Ok(SignResponse { address, signature })
}

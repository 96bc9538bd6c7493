//! The [`Confirmer`] trait — the narrow interface to the operator UI.
//!
//! Pagination, rendering, and hold-to-confirm timing are out of scope
//! (spec §1); only the five checkpoints the orchestrator calls through, in
//! the fixed order of spec §4.9 steps 5, 6, 9, are specified here.

use crate::type_table::{StructDef, TypeTable};
use crate::value_tree::ValueTree;
use crate::Result;

/// The operator confirmation dialogue.
///
/// A brief checkpoint returns `Ok(true)` when the operator asked to see the
/// full view instead of accepting the brief one, `Ok(false)` to accept and
/// move on. An `Err` from any method aborts the session with
/// [`crate::Error::Cancelled`] and no partial signature — there is no
/// partial-confirmation state to roll back.
pub trait Confirmer {
    /// Shows a brief summary of the domain separator's fields.
    ///
    /// Returns `true` if the operator asked to see the full domain instead
    /// of accepting the brief view.
    fn confirm_domain_brief(&mut self, domain: &ValueTree) -> Result<bool>;

    /// Shows every field of the domain separator.
    fn confirm_domain_full(&mut self, types: &TypeTable, domain: &ValueTree) -> Result<()>;

    /// Shows a brief summary of the message's top-level fields.
    ///
    /// Returns `true` if the operator asked to see the full message instead
    /// of accepting the brief view.
    fn confirm_message_brief(&mut self, primary_type: &str, def: &StructDef) -> Result<bool>;

    /// Shows every field of the message, recursively.
    fn confirm_message_full(
        &mut self,
        types: &TypeTable,
        primary_type: &str,
        msg: &ValueTree,
    ) -> Result<()>;

    /// Shows the final digest for an explicit confirm-before-sign step.
    ///
    /// Called only when both the domain and the message were accepted via
    /// their brief views (spec §4.9 step 9) — an operator who inspected the
    /// full view of either already saw enough detail.
    fn confirm_digest(&mut self, primary_type: &str, digest: &[u8; 32]) -> Result<()>;
}

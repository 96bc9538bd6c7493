//! The [`HostLink`] trait — the narrow interface to the host transport.
//!
//! Framing, retries, and the physical link are out of scope (spec §1);
//! only the two round-trip shapes of spec §6 are specified here. Both
//! methods are synchronous: suspension happens inside the implementor, and
//! the core treats the call as a single blocking step (spec §5).

use crate::type_table::StructMember;
use crate::Error;

/// A host's answer to a `StructRequest`: the ordered member list of the
/// requested struct, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructAck {
    /// Members in declaration order, as delivered by the host.
    pub members: Vec<StructMember>,
}

/// The host dialogue: `StructRequest`/`StructAck` and
/// `ValueRequest`/`ValueAck` (spec §6).
pub trait HostLink {
    /// Requests the definition of struct `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportError`] if the host link fails.
    fn request_struct(&mut self, name: &str) -> Result<StructAck, Error>;

    /// Requests the raw bytes of the value at `path`. For an array's own
    /// path, the returned bytes are the big-endian unsigned array length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportError`] if the host link fails.
    fn request_value(&mut self, path: &[u32]) -> Result<Vec<u8>, Error>;
}

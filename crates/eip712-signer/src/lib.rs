//! # eip712-signer
//!
//! EIP-712 typed-data schema collection, value validation, and struct
//! hashing for a trust-isolated signing device.
//!
//! The device holds the user's private keys and trusts nothing the host
//! sends it. Given a user-selected key path and the name of a primary type,
//! this crate drives a request/response dialogue over a [`HostLink`] to
//! discover a typed-data message's schema and values one field at a time,
//! walks the operator through a fixed confirmation sequence over a
//! [`Confirmer`], reconstructs the canonical EIP-712 digest, and asks a
//! [`KeySigner`] to sign it. The full message is never materialised in one
//! piece; only the running Keccak-256 state the encoder builds survives
//! between host round trips.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eip712_signer::{sign_typed_data, SignRequest, LocalKeySigner};
//!
//! let mut host = MyHostLink::connect();
//! let mut confirmer = MyUiConfirmer::new();
//! let signer = LocalKeySigner::from_private_key(&private_key)?;
//! let request = SignRequest::new(vec![0x8000_002c, 0x8000_003c], "Mail", true);
//!
//! let response = sign_typed_data(&mut host, &mut confirmer, &signer, &request)?;
//! println!("signed by {}: {}", response.address, response.signature);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod address;
pub mod confirm;
pub mod display;
pub mod encode;
pub mod error;
pub mod field_type;
pub mod hash_writer;
pub mod host;
pub mod keysigner;
pub mod orchestrator;
pub mod request;
pub mod schema;
pub mod signature;
pub mod struct_hash;
pub mod type_table;
pub mod typehash;
pub mod validate;
pub mod value_tree;
pub mod values;

pub use address::Address;
pub use confirm::Confirmer;
pub use display::decode_for_display;
pub use error::Error;
pub use field_type::FieldType;
pub use host::{HostLink, StructAck};
pub use keysigner::{recover_signer, KeySigner, LocalKeySigner};
pub use orchestrator::sign_typed_data;
pub use request::{SignRequest, SignResponse};
pub use signature::Signature;
pub use type_table::{StructDef, StructMember, TypeTable};
pub use value_tree::ValueTree;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

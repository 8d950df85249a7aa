//! OSC 1.0 wire-format decoding and encoding.
//!
//! The codec follows a layered structure:
//! - `layout`: wire constants and padded-width helpers (source of truth)
//! - `reader` / `writer`: bounded byte access, never out of range
//! - `atom`, `message`, `bundle`, `packet`: domain-level codecs (no direct
//!   byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Codecs are pure and contain no I/O; the `source` and `server` modules
//! handle sockets and forwarding.

pub mod atom;
pub mod bundle;
pub mod error;
pub mod layout;
pub mod message;
pub mod packet;
pub mod reader;
pub mod timetag;
pub mod writer;

pub use atom::{Argument, ArgumentKind};
pub use bundle::{Bundle, Element, decode_bundle, encode_bundle, is_bundle};
pub use error::{DecodeError, EncodeError};
pub use message::{Message, decode_message, encode_message, encode_message_into};
pub use packet::{DecodedPacket, Packet, dispatch};
pub use timetag::TimeTag;

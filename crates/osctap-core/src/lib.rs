//! Core library for the osctap OSC listener.
//!
//! This crate implements the OSC 1.0 wire codec and the receive loop that
//! drives it: datagram sources feed the loop, which decodes each datagram
//! into messages and bundles and forwards leaf messages to a sink. Decoding
//! is byte-oriented and side-effect free; all I/O is isolated in `source`
//! modules. Wire conventions are captured in the reader and writer so the
//! codecs stay minimal and consistent with the format.
//!
//! Invariants:
//! - Decoders never read out of bounds and never panic on network input.
//! - A malformed datagram is reported and skipped; the loop keeps running.
//! - Flattening is depth-first in wire order, each message paired with the
//!   innermost enclosing bundle's timetag.
//!
//! # Examples
//! ```
//! use osctap_core::{Argument, dispatch, encode_message};
//!
//! let datagram = encode_message(
//!     "/test",
//!     "si",
//!     &[Argument::String("yo whirl!".to_string()), Argument::Int32(-42)],
//! )?;
//! let packet = dispatch(&datagram)?;
//! assert_eq!(packet.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod protocol;
pub mod server;
pub mod source;

pub use protocol::{
    Argument, ArgumentKind, Bundle, DecodeError, DecodedPacket, Element, EncodeError, Message,
    Packet, TimeTag, decode_bundle, decode_message, dispatch, encode_bundle, encode_message,
    encode_message_into,
};
pub use server::{MessageSink, run};
pub use source::{DatagramSource, SourceError, UdpSource};

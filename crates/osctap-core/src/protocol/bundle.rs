use serde::{Deserialize, Serialize};

use super::error::{DecodeError, EncodeError};
use super::layout;
use super::message::{Message, decode_message};
use super::reader::OscReader;
use super::timetag::TimeTag;

/// A timetagged, ordered container of messages and nested bundles.
///
/// Element order is wire order. A nested bundle may carry a timetag
/// earlier than its parent; that is permitted, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub timetag: TimeTag,
    pub elements: Vec<Element>,
}

/// One bundle element, decoded by trial: the bundle literal wins, anything
/// else is a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Message(Message),
    Bundle(Bundle),
}

/// True when `payload` starts with the `#bundle\0` literal.
pub fn is_bundle(payload: &[u8]) -> bool {
    payload.len() >= layout::BUNDLE_TAG.len() && payload[..layout::BUNDLE_TAG.len()] == *layout::BUNDLE_TAG
}

/// Decode a bundle: literal, timetag, then length-prefixed elements until
/// the buffer is exhausted. Zero elements is a valid (empty) bundle.
pub fn decode_bundle(payload: &[u8]) -> Result<Bundle, DecodeError> {
    if !is_bundle(payload) {
        return Err(DecodeError::Malformed {
            context: "missing #bundle literal",
            offset: 0,
        });
    }

    let mut reader = OscReader::new(payload);
    reader.read_slice(layout::BUNDLE_TAG.len())?;
    let timetag = TimeTag::from_raw(reader.read_u64_be()?);

    let mut elements = Vec::new();
    while !reader.is_empty() {
        let length = reader.read_i32_be()?;
        if length < 0 || length as usize > reader.remaining() {
            return Err(DecodeError::InvalidLength { length });
        }
        let element = reader.read_slice(length as usize)?;
        if is_bundle(element) {
            elements.push(Element::Bundle(decode_bundle(element)?));
        } else {
            elements.push(Element::Message(decode_message(element)?));
        }
    }

    Ok(Bundle { timetag, elements })
}

/// Encode a bundle symmetrically to `decode_bundle`.
pub fn encode_bundle(bundle: &Bundle) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(layout::BUNDLE_TAG.len() + layout::TIMETAG_LEN);
    out.extend_from_slice(layout::BUNDLE_TAG);
    out.extend_from_slice(&bundle.timetag.raw().to_be_bytes());
    for element in &bundle.elements {
        let encoded = match element {
            Element::Message(message) => message.encode()?,
            Element::Bundle(inner) => encode_bundle(inner)?,
        };
        out.extend_from_slice(&(encoded.len() as i32).to_be_bytes());
        out.extend_from_slice(&encoded);
    }
    Ok(out)
}

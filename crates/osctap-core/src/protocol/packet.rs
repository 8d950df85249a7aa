use serde::{Deserialize, Serialize};

use super::bundle::{Bundle, Element, decode_bundle, is_bundle};
use super::error::DecodeError;
use super::message::{Message, decode_message};
use super::timetag::TimeTag;

/// One full datagram, decoded by trial: the bundle literal wins, anything
/// else is a single message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Packet {
    Message(Message),
    Bundle(Bundle),
}

impl Packet {
    pub fn decode(payload: &[u8]) -> Result<Packet, DecodeError> {
        if is_bundle(payload) {
            Ok(Packet::Bundle(decode_bundle(payload)?))
        } else {
            Ok(Packet::Message(decode_message(payload)?))
        }
    }
}

/// Flattened view of one decoded datagram: leaf messages in wire order,
/// each paired with its effective timetag (the innermost enclosing
/// bundle's, or immediate for a bare message).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPacket {
    entries: Vec<(TimeTag, Message)>,
}

impl DecodedPacket {
    pub fn iter(&self) -> std::slice::Iter<'_, (TimeTag, Message)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for DecodedPacket {
    type Item = (TimeTag, Message);
    type IntoIter = std::vec::IntoIter<(TimeTag, Message)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodedPacket {
    type Item = &'a (TimeTag, Message);
    type IntoIter = std::slice::Iter<'a, (TimeTag, Message)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Decode one datagram and flatten it depth-first, left to right.
///
/// Pure function of the buffer: dispatching the same bytes twice yields
/// structurally equal results.
pub fn dispatch(payload: &[u8]) -> Result<DecodedPacket, DecodeError> {
    let entries = match Packet::decode(payload)? {
        Packet::Message(message) => vec![(TimeTag::IMMEDIATE, message)],
        Packet::Bundle(bundle) => {
            let mut entries = Vec::new();
            flatten(bundle, &mut entries);
            entries
        }
    };
    Ok(DecodedPacket { entries })
}

fn flatten(bundle: Bundle, out: &mut Vec<(TimeTag, Message)>) {
    let timetag = bundle.timetag;
    for element in bundle.elements {
        match element {
            Element::Message(message) => out.push((timetag, message)),
            Element::Bundle(inner) => flatten(inner, out),
        }
    }
}

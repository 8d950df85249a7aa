use serde::{Deserialize, Serialize};

use super::atom::{self, Argument, ArgumentKind};
use super::error::{DecodeError, EncodeError};
use super::layout;
use super::reader::OscReader;
use super::writer::OscWriter;

/// A decoded OSC message.
///
/// `type_tags` holds one character per argument, without the leading comma
/// of the wire form, so `type_tags.len() == arguments.len()` always holds
/// for a decoded message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub address: String,
    pub type_tags: String,
    pub arguments: Vec<Argument>,
}

impl Message {
    /// Encode this message into a fresh buffer.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        encode_message(&self.address, &self.type_tags, &self.arguments)
    }
}

/// Decode a single message from `payload`.
///
/// The address must start with `/` and the type-tag string with `,`; each
/// tag character then drives exactly one atom decode. Trailing bytes after
/// the last declared argument are ignored.
pub fn decode_message(payload: &[u8]) -> Result<Message, DecodeError> {
    let mut reader = OscReader::new(payload);

    let address = reader.read_str()?;
    if address.first() != Some(&layout::ADDRESS_LEAD) {
        return Err(DecodeError::InvalidAddress);
    }

    let tags = reader.read_str()?;
    if tags.first() != Some(&layout::TYPE_TAGS_LEAD) {
        return Err(DecodeError::InvalidTypeTags);
    }
    let tags = &tags[1..];

    let mut arguments = Vec::with_capacity(tags.len());
    for &tag in tags {
        let kind = ArgumentKind::from_tag(tag).ok_or(DecodeError::UnknownType {
            tag: tag as char,
        })?;
        arguments.push(atom::decode_atom(&mut reader, kind)?);
    }

    Ok(Message {
        address: String::from_utf8_lossy(address).into_owned(),
        type_tags: String::from_utf8_lossy(tags).into_owned(),
        arguments,
    })
}

/// Encode a message into `buf`, returning the number of bytes written.
///
/// `type_tags` is given without the leading comma. Arity and per-tag kind
/// are validated before any byte is written.
pub fn encode_message_into(
    buf: &mut [u8],
    address: &str,
    type_tags: &str,
    arguments: &[Argument],
) -> Result<usize, EncodeError> {
    check_tags(type_tags, arguments)?;

    let mut writer = OscWriter::new(buf);
    writer.write_str(address.as_bytes())?;
    let mut wire_tags = Vec::with_capacity(type_tags.len() + 1);
    wire_tags.push(layout::TYPE_TAGS_LEAD);
    wire_tags.extend_from_slice(type_tags.as_bytes());
    writer.write_str(&wire_tags)?;
    for argument in arguments {
        atom::encode_atom(&mut writer, argument)?;
    }
    Ok(writer.written())
}

/// Encode a message into a fresh, exactly-sized buffer.
pub fn encode_message(
    address: &str,
    type_tags: &str,
    arguments: &[Argument],
) -> Result<Vec<u8>, EncodeError> {
    check_tags(type_tags, arguments)?;

    let total = layout::padded_str_len(address.len())
        + layout::padded_str_len(type_tags.len() + 1)
        + arguments.iter().map(atom::encoded_atom_len).sum::<usize>();
    let mut buf = vec![0u8; total];
    let written = encode_message_into(&mut buf, address, type_tags, arguments)?;
    debug_assert_eq!(written, total);
    Ok(buf)
}

fn check_tags(type_tags: &str, arguments: &[Argument]) -> Result<(), EncodeError> {
    if type_tags.len() != arguments.len() {
        return Err(EncodeError::ArityMismatch {
            tags: type_tags.len(),
            arguments: arguments.len(),
        });
    }
    for (index, (tag, argument)) in type_tags.bytes().zip(arguments).enumerate() {
        let kind = ArgumentKind::from_tag(tag).ok_or(EncodeError::UnknownType {
            tag: tag as char,
        })?;
        if argument.kind() != kind {
            return Err(EncodeError::TagMismatch {
                index,
                tag: tag as char,
            });
        }
    }
    Ok(())
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{DecodeError, EncodeError};
use super::layout;
use super::reader::OscReader;
use super::timetag::TimeTag;
use super::writer::OscWriter;

/// Closed set of argument kinds, one per type-tag character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    Int32,
    Float32,
    String,
    Blob,
    True,
    False,
    Nil,
    Impulse,
    TimeTag,
}

impl ArgumentKind {
    /// Map a type-tag character to its kind, or `None` for unrecognized tags.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'i' => Some(ArgumentKind::Int32),
            b'f' => Some(ArgumentKind::Float32),
            b's' => Some(ArgumentKind::String),
            b'b' => Some(ArgumentKind::Blob),
            b'T' => Some(ArgumentKind::True),
            b'F' => Some(ArgumentKind::False),
            b'N' => Some(ArgumentKind::Nil),
            b'I' => Some(ArgumentKind::Impulse),
            b't' => Some(ArgumentKind::TimeTag),
            _ => None,
        }
    }

    pub const fn tag(self) -> char {
        match self {
            ArgumentKind::Int32 => 'i',
            ArgumentKind::Float32 => 'f',
            ArgumentKind::String => 's',
            ArgumentKind::Blob => 'b',
            ArgumentKind::True => 'T',
            ArgumentKind::False => 'F',
            ArgumentKind::Nil => 'N',
            ArgumentKind::Impulse => 'I',
            ArgumentKind::TimeTag => 't',
        }
    }
}

/// One typed argument inside a message.
///
/// Immutable once decoded; `True`, `False`, `Nil` and `Impulse` carry no
/// payload bytes, their value lives entirely in the type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Argument {
    Int32(i32),
    Float32(f32),
    String(String),
    Blob(Vec<u8>),
    True,
    False,
    Nil,
    Impulse,
    TimeTag(TimeTag),
}

impl Argument {
    pub const fn kind(&self) -> ArgumentKind {
        match self {
            Argument::Int32(_) => ArgumentKind::Int32,
            Argument::Float32(_) => ArgumentKind::Float32,
            Argument::String(_) => ArgumentKind::String,
            Argument::Blob(_) => ArgumentKind::Blob,
            Argument::True => ArgumentKind::True,
            Argument::False => ArgumentKind::False,
            Argument::Nil => ArgumentKind::Nil,
            Argument::Impulse => ArgumentKind::Impulse,
            Argument::TimeTag(_) => ArgumentKind::TimeTag,
        }
    }

    pub const fn type_tag(&self) -> char {
        self.kind().tag()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Int32(value) => write!(f, "{value}"),
            Argument::Float32(value) => write!(f, "{value}"),
            Argument::String(value) => write!(f, "\"{value}\""),
            Argument::Blob(data) => write!(f, "[{} byte blob]", data.len()),
            Argument::True => write!(f, "true"),
            Argument::False => write!(f, "false"),
            Argument::Nil => write!(f, "nil"),
            Argument::Impulse => write!(f, "impulse"),
            Argument::TimeTag(tag) => write!(f, "{tag}"),
        }
    }
}

/// Decode one argument of the given kind at the reader's cursor.
pub fn decode_atom(reader: &mut OscReader<'_>, kind: ArgumentKind) -> Result<Argument, DecodeError> {
    let argument = match kind {
        ArgumentKind::Int32 => Argument::Int32(reader.read_i32_be()?),
        ArgumentKind::Float32 => Argument::Float32(reader.read_f32_be()?),
        ArgumentKind::String => {
            let bytes = reader.read_str()?;
            Argument::String(String::from_utf8_lossy(bytes).into_owned())
        }
        ArgumentKind::Blob => Argument::Blob(reader.read_blob()?.to_vec()),
        ArgumentKind::True => Argument::True,
        ArgumentKind::False => Argument::False,
        ArgumentKind::Nil => Argument::Nil,
        ArgumentKind::Impulse => Argument::Impulse,
        ArgumentKind::TimeTag => Argument::TimeTag(TimeTag::from_raw(reader.read_u64_be()?)),
    };
    Ok(argument)
}

/// Encode one argument at the writer's cursor, padding included.
pub fn encode_atom(writer: &mut OscWriter<'_>, argument: &Argument) -> Result<(), EncodeError> {
    match argument {
        Argument::Int32(value) => writer.write_i32_be(*value),
        Argument::Float32(value) => writer.write_f32_be(*value),
        Argument::String(value) => writer.write_str(value.as_bytes()),
        Argument::Blob(data) => writer.write_blob(data),
        Argument::True | Argument::False | Argument::Nil | Argument::Impulse => Ok(()),
        Argument::TimeTag(tag) => writer.write_u64_be(tag.raw()),
    }
}

/// Padded wire width of one encoded argument.
pub fn encoded_atom_len(argument: &Argument) -> usize {
    match argument {
        Argument::Int32(_) => layout::INT32_LEN,
        Argument::Float32(_) => layout::FLOAT32_LEN,
        Argument::String(value) => layout::padded_str_len(value.len()),
        Argument::Blob(data) => layout::padded_blob_len(data.len()),
        Argument::True | Argument::False | Argument::Nil | Argument::Impulse => 0,
        Argument::TimeTag(_) => layout::TIMETAG_LEN,
    }
}

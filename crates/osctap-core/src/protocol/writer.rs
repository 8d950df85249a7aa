use super::error::EncodeError;
use super::layout;

/// Bounded cursor over an output buffer.
///
/// The exact inverse of `OscReader`: every write advances by the padded
/// wire width of the field and padding is always emitted as zero bytes.
pub struct OscWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> OscWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.pos
    }

    fn reserve(&mut self, len: usize) -> Result<&mut [u8], EncodeError> {
        let end = self.pos + len;
        if end > self.buf.len() {
            return Err(EncodeError::BufferTooSmall {
                needed: end,
                capacity: self.buf.len(),
            });
        }
        let slice = &mut self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    pub fn write_i32_be(&mut self, value: i32) -> Result<(), EncodeError> {
        self.write_raw(&value.to_be_bytes())
    }

    pub fn write_f32_be(&mut self, value: f32) -> Result<(), EncodeError> {
        self.write_raw(&value.to_be_bytes())
    }

    pub fn write_u64_be(&mut self, value: u64) -> Result<(), EncodeError> {
        self.write_raw(&value.to_be_bytes())
    }

    /// Write a string atom: content, terminator, zero padding.
    pub fn write_str(&mut self, content: &[u8]) -> Result<(), EncodeError> {
        let total = layout::padded_str_len(content.len());
        let slice = self.reserve(total)?;
        slice[..content.len()].copy_from_slice(content);
        slice[content.len()..].fill(0);
        Ok(())
    }

    /// Write a blob atom: length prefix, data, zero padding.
    pub fn write_blob(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        let total = layout::padded_blob_len(data.len());
        let slice = self.reserve(total)?;
        slice[..layout::BLOB_LENGTH_LEN].copy_from_slice(&(data.len() as i32).to_be_bytes());
        slice[layout::BLOB_LENGTH_LEN..layout::BLOB_LENGTH_LEN + data.len()].copy_from_slice(data);
        slice[layout::BLOB_LENGTH_LEN + data.len()..].fill(0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::OscWriter;
    use crate::protocol::error::EncodeError;

    #[test]
    fn write_str_pads_with_zeros() {
        let mut buf = [0xffu8; 8];
        let mut writer = OscWriter::new(&mut buf);
        writer.write_str(b"hello").unwrap();
        assert_eq!(writer.written(), 8);
        assert_eq!(&buf, b"hello\0\0\0");
    }

    #[test]
    fn write_blob_pads_with_zeros() {
        let mut buf = [0xffu8; 8];
        let mut writer = OscWriter::new(&mut buf);
        writer.write_blob(&[9, 8]).unwrap();
        assert_eq!(writer.written(), 8);
        assert_eq!(&buf, &[0, 0, 0, 2, 9, 8, 0, 0]);
    }

    #[test]
    fn overflow_reports_buffer_too_small() {
        let mut buf = [0u8; 4];
        let mut writer = OscWriter::new(&mut buf);
        let err = writer.write_str(b"toolong").unwrap_err();
        assert_eq!(err, EncodeError::BufferTooSmall { needed: 8, capacity: 4 });
        assert_eq!(writer.written(), 0);
    }
}

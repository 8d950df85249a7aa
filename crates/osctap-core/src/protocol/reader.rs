use super::error::DecodeError;
use super::layout;

/// Bounded cursor over a received datagram.
///
/// Every read is range-checked and advances the cursor by the padded wire
/// width of the field, so decoders never index bytes directly. Padding
/// bytes must be present but their content is not validated, matching the
/// lenient reading of the format.
pub struct OscReader<'a> {
    payload: &'a [u8],
    pos: usize,
}

impl<'a> OscReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.payload.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos + len;
        let slice = self
            .payload
            .get(self.pos..end)
            .ok_or(DecodeError::Truncated {
                needed: end,
                actual: self.payload.len(),
            })?;
        self.pos = end;
        Ok(slice)
    }

    pub fn read_i32_be(&mut self) -> Result<i32, DecodeError> {
        let bytes = self.read_slice(layout::INT32_LEN)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_f32_be(&mut self) -> Result<f32, DecodeError> {
        let bytes = self.read_slice(layout::FLOAT32_LEN)?;
        Ok(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64_be(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.read_slice(layout::TIMETAG_LEN)?;
        Ok(u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Read a zero-terminated string and advance past its padding.
    ///
    /// The returned slice excludes the terminator. The cursor lands on the
    /// next 4-byte boundary measured from the start of the string.
    pub fn read_str(&mut self) -> Result<&'a [u8], DecodeError> {
        let start = self.pos;
        let rest = &self.payload[start..];
        let len = rest
            .iter()
            .position(|&byte| byte == 0)
            .ok_or(DecodeError::Malformed {
                context: "unterminated string",
                offset: start,
            })?;
        let end = start + layout::padded_str_len(len);
        if end > self.payload.len() {
            return Err(DecodeError::Truncated {
                needed: end,
                actual: self.payload.len(),
            });
        }
        self.pos = end;
        Ok(&rest[..len])
    }

    /// Read a length-prefixed blob and advance past its padding.
    pub fn read_blob(&mut self) -> Result<&'a [u8], DecodeError> {
        let start = self.pos;
        let declared = self.read_i32_be()?;
        if declared < 0 {
            return Err(DecodeError::Malformed {
                context: "negative blob length",
                offset: start,
            });
        }
        let len = declared as usize;
        let end = start + layout::padded_blob_len(len);
        if end > self.payload.len() {
            return Err(DecodeError::Truncated {
                needed: end,
                actual: self.payload.len(),
            });
        }
        let data = &self.payload[self.pos..self.pos + len];
        self.pos = end;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::OscReader;
    use crate::protocol::error::DecodeError;

    #[test]
    fn read_str_advances_past_padding() {
        let mut reader = OscReader::new(b"abc\0defg\0\0\0\0");
        assert_eq!(reader.read_str().unwrap(), b"abc");
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.read_str().unwrap(), b"defg");
        assert!(reader.is_empty());
    }

    #[test]
    fn read_str_unterminated() {
        let mut reader = OscReader::new(b"abcd");
        let err = reader.read_str().unwrap_err();
        assert_eq!(
            err,
            DecodeError::Malformed {
                context: "unterminated string",
                offset: 0
            }
        );
    }

    #[test]
    fn read_str_missing_padding() {
        let mut reader = OscReader::new(b"abcd\0");
        let err = reader.read_str().unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { needed: 8, actual: 5 }));
    }

    #[test]
    fn read_blob_skips_joint_padding() {
        let mut payload = vec![0, 0, 0, 5];
        payload.extend_from_slice(&[1, 2, 3, 4, 5, 0, 0, 0]);
        let mut reader = OscReader::new(&payload);
        assert_eq!(reader.read_blob().unwrap(), &[1, 2, 3, 4, 5]);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_blob_negative_length() {
        let payload = (-1i32).to_be_bytes();
        let mut reader = OscReader::new(&payload);
        let err = reader.read_blob().unwrap_err();
        assert_eq!(
            err,
            DecodeError::Malformed {
                context: "negative blob length",
                offset: 0
            }
        );
    }

    #[test]
    fn read_blob_truncated_data() {
        let mut payload = vec![0, 0, 0, 9];
        payload.extend_from_slice(&[1, 2, 3]);
        let mut reader = OscReader::new(&payload);
        let err = reader.read_blob().unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { .. }));
    }

    #[test]
    fn numeric_reads_are_big_endian() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&(-42i32).to_be_bytes());
        payload.extend_from_slice(&1.5f32.to_be_bytes());
        payload.extend_from_slice(&0x0102_0304_0506_0708u64.to_be_bytes());
        let mut reader = OscReader::new(&payload);
        assert_eq!(reader.read_i32_be().unwrap(), -42);
        assert_eq!(reader.read_f32_be().unwrap(), 1.5);
        assert_eq!(reader.read_u64_be().unwrap(), 0x0102_0304_0506_0708);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_slice_never_reads_out_of_bounds() {
        let mut reader = OscReader::new(&[1, 2]);
        let err = reader.read_slice(4).unwrap_err();
        assert_eq!(err, DecodeError::Truncated { needed: 4, actual: 2 });
        assert_eq!(reader.position(), 0);
    }
}

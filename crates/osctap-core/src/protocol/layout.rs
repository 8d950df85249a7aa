//! OSC 1.0 wire-format constants (source of truth).

/// Literal prefix identifying a bundle, terminator included.
pub const BUNDLE_TAG: &[u8; 8] = b"#bundle\0";
/// All fields are padded to this boundary.
pub const ALIGNMENT: usize = 4;
/// Reserved timetag value meaning "execute immediately".
pub const IMMEDIATE: u64 = 1;

pub const INT32_LEN: usize = 4;
pub const FLOAT32_LEN: usize = 4;
pub const TIMETAG_LEN: usize = 8;
pub const BLOB_LENGTH_LEN: usize = 4;
pub const ELEMENT_LENGTH_LEN: usize = 4;

pub const ADDRESS_LEAD: u8 = b'/';
pub const TYPE_TAGS_LEAD: u8 = b',';

/// Largest datagram the receive path accepts.
pub const MAX_DATAGRAM_LEN: usize = 2048;

/// Round `len` up to the next 4-byte boundary.
pub const fn align_up(len: usize) -> usize {
    (len + ALIGNMENT - 1) & !(ALIGNMENT - 1)
}

/// Total bytes a string of `len` content bytes occupies on the wire,
/// including the terminator and trailing zero padding.
pub const fn padded_str_len(len: usize) -> usize {
    align_up(len + 1)
}

/// Total bytes a blob of `len` data bytes occupies on the wire,
/// including the length prefix and trailing zero padding.
pub const fn padded_blob_len(len: usize) -> usize {
    BLOB_LENGTH_LEN + align_up(len)
}

#[cfg(test)]
mod tests {
    use super::{align_up, padded_blob_len, padded_str_len};

    #[test]
    fn align_up_boundaries() {
        assert_eq!(align_up(0), 0);
        assert_eq!(align_up(1), 4);
        assert_eq!(align_up(4), 4);
        assert_eq!(align_up(5), 8);
    }

    #[test]
    fn padded_str_len_counts_terminator() {
        assert_eq!(padded_str_len(0), 4);
        assert_eq!(padded_str_len(3), 4);
        assert_eq!(padded_str_len(4), 8);
        assert_eq!(padded_str_len(5), 8);
    }

    #[test]
    fn padded_blob_len_counts_prefix() {
        assert_eq!(padded_blob_len(0), 4);
        assert_eq!(padded_blob_len(1), 8);
        assert_eq!(padded_blob_len(4), 8);
        assert_eq!(padded_blob_len(5), 12);
    }
}

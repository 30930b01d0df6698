#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Destination buffer cannot hold a full 3-byte record.
    #[error("record buffer too short: {len} bytes, need 3")]
    BufferTooShort { len: usize },

    /// Input ended before a complete record could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },
}

/// Configuration options for the rune decoder core.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderOptions {
    /// Whether a code point split across physical reads is an error.
    ///
    /// A source is free to cut its reads anywhere, including in the middle
    /// of a multi-byte UTF-8 sequence. By default the decoder keeps reading
    /// until the sequence completes or the source ends, so arbitrary chunk
    /// boundaries are invisible to the caller.
    ///
    /// When `true`, a `scan` call performs at most one physical read: if the
    /// staged bytes still end inside a multi-byte sequence afterwards, the
    /// call fails with [`DecodeError::TruncatedSequence`] instead of reading
    /// again. This reproduces the fail-fast behavior of single-read
    /// scanners.
    ///
    /// [`DecodeError::TruncatedSequence`]: crate::DecodeError::TruncatedSequence
    ///
    /// # Default
    ///
    /// `false`
    pub fail_on_split_sequence: bool,
}

use core::fmt;

use bstr::BStr;
use thiserror::Error;

/// The failure channel of [`RuneDecoder::scan`](crate::RuneDecoder::scan).
///
/// End of input is not an error: `scan` signals it as `Ok(None)`. `E` is the
/// source's own error type, carried through without wrapping or added
/// context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError<E> {
    /// The underlying source failed; the error is passed through unchanged.
    #[error("source error: {0}")]
    Source(E),
    /// The bytes read do not form a valid UTF-8 code point.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A byte sequence that could not be decoded as UTF-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The bytes are not a prefix of any valid UTF-8 sequence.
    ///
    /// The offending run has been consumed, so the next
    /// [`scan`](crate::RuneDecoder::scan) resumes at the byte after it;
    /// whether to abort or keep scanning is the caller's policy.
    #[error("invalid UTF-8 sequence {0}")]
    InvalidSequence(InvalidBytes),
    /// Input ended (or a read was cut short under
    /// [`fail_on_split_sequence`]) in the middle of a multi-byte sequence.
    ///
    /// [`fail_on_split_sequence`]: crate::DecoderOptions::fail_on_split_sequence
    #[error("input ends inside the UTF-8 sequence {0}")]
    TruncatedSequence(InvalidBytes),
}

/// The offending byte run of a [`DecodeError`], at most four bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InvalidBytes {
    bytes: [u8; 4],
    len: u8,
}

impl InvalidBytes {
    pub(crate) fn new(run: &[u8]) -> Self {
        debug_assert!(!run.is_empty() && run.len() <= 4);
        let mut bytes = [0u8; 4];
        let len = run.len().min(4);
        bytes[..len].copy_from_slice(&run[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// The bytes that failed to decode, in input order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

impl fmt::Display for InvalidBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // BStr renders non-ASCII bytes as \xNN escapes.
        write!(f, "{:?}", BStr::new(self.as_bytes()))
    }
}

impl fmt::Debug for InvalidBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidBytes({:?})", BStr::new(self.as_bytes()))
    }
}

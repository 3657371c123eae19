//! The rune decoding core.
//!
//! [`RuneDecoder`] turns a [`ByteSource`] into a sequence of Unicode scalar
//! values. Each physical read stages up to [`SCRATCH_LEN`] bytes; whatever
//! the decoded code point does not consume stays queued in a pushback ring
//! and is drained before the source is read again.

use crate::{
    error::{DecodeError, InvalidBytes, ScanError},
    options::DecoderOptions,
    pending::PendingBytes,
    source::ByteSource,
    utf8::{self, FirstScalar},
};

/// Bytes staged per physical read. Covers the widest encoded scalar with
/// margin; a source may still return fewer.
const SCRATCH_LEN: usize = 16;

/// Streaming decoder yielding one Unicode scalar value per [`scan`] call.
///
/// The decoder owns its source exclusively and mutates internal state on
/// every call, so it is driven strictly sequentially: one `scan` at a time,
/// stopping at `Ok(None)` or on an error the caller treats as fatal. See the
/// [crate docs](crate) for the usual consumption loop.
///
/// [`scan`]: RuneDecoder::scan
#[derive(Debug)]
pub struct RuneDecoder<S> {
    source: S,
    pending: PendingBytes,
    scratch: [u8; SCRATCH_LEN],
    options: DecoderOptions,
    exhausted: bool,
}

impl<S: ByteSource> RuneDecoder<S> {
    /// Creates a decoder over `source` with default options.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, DecoderOptions::default())
    }

    /// Creates a decoder over `source` with explicit options.
    #[must_use]
    pub fn with_options(source: S, options: DecoderOptions) -> Self {
        Self {
            source,
            pending: PendingBytes::new(),
            scratch: [0; SCRATCH_LEN],
            options,
            exhausted: false,
        }
    }

    /// Decodes the next code point.
    ///
    /// Returns `Ok(Some(c))` for a decoded scalar and `Ok(None)` once the
    /// input is exhausted; end of input is terminal, and every later call
    /// returns `Ok(None)` again.
    ///
    /// # Errors
    ///
    /// - [`ScanError::Source`]: the underlying read failed; the source's
    ///   error is passed through unchanged and the read is not retried.
    /// - [`ScanError::Decode`]: the next bytes do not form a valid code
    ///   point. The offending run is consumed, so the caller may keep
    ///   scanning from the byte after it or abort, as it prefers.
    pub fn scan(&mut self) -> Result<Option<char>, ScanError<S::Error>> {
        let mut did_read = false;
        loop {
            let mut head = [0u8; 4];
            let n = self.pending.peek_head(&mut head);
            match utf8::decode_first(&head[..n]) {
                Some(FirstScalar::Valid(c, width)) => {
                    self.pending.consume(width);
                    return Ok(Some(c));
                }
                Some(FirstScalar::Invalid(width)) => {
                    let run = InvalidBytes::new(&head[..width]);
                    self.pending.consume(width);
                    return Err(DecodeError::InvalidSequence(run).into());
                }
                Some(FirstScalar::Incomplete)
                    if self.exhausted || (self.options.fail_on_split_sequence && did_read) =>
                {
                    let run = InvalidBytes::new(&head[..n]);
                    self.pending.consume(n);
                    return Err(DecodeError::TruncatedSequence(run).into());
                }
                Some(FirstScalar::Incomplete) => {}
                None if self.exhausted => return Ok(None),
                None => {}
            }
            let read = self
                .source
                .read_into(&mut self.scratch)
                .map_err(ScanError::Source)?;
            if read == 0 {
                self.exhausted = true;
            } else {
                self.pending.extend(&self.scratch[..read]);
                did_read = true;
            }
        }
    }

    /// Whether the decoder has reached end of input with nothing left
    /// pending, i.e. every further `scan` returns `Ok(None)`.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted && self.pending.is_empty()
    }
}

impl<S: ByteSource> Iterator for RuneDecoder<S> {
    type Item = Result<char, ScanError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan().transpose()
    }
}

use core::convert::Infallible;

/// Capability to produce a bounded chunk of bytes on demand.
///
/// This is the decoder's only view of its input: an in-memory slice, a file
/// handle, or a socket are all interchangeable behind it. The decoder never
/// inspects which concrete source it was given.
///
/// # Contract
///
/// A call fills a prefix of `buf` and returns the number of bytes written.
/// Returning `Ok(0)` for a non-empty `buf` means the source is exhausted;
/// once exhausted, further calls are not made by [`RuneDecoder`]. Errors are
/// the source's own and are propagated to the caller unchanged.
///
/// [`RuneDecoder`]: crate::RuneDecoder
pub trait ByteSource {
    /// Failure type surfaced by [`read_into`](ByteSource::read_into).
    type Error;

    /// Fills a prefix of `buf`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns the source's own error; the decoder passes it through
    /// verbatim as [`ScanError::Source`](crate::ScanError::Source).
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// In-memory source: reads consume the slice from the front.
impl ByteSource for &[u8] {
    type Error = Infallible;

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let n = self.len().min(buf.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

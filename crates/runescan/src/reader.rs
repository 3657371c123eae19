use std::io;

use crate::source::ByteSource;

/// Adapter exposing any [`std::io::Read`] as a [`ByteSource`].
///
/// Reads map one-to-one: short reads and errors (including
/// [`io::ErrorKind::Interrupted`]) are surfaced as-is, never retried.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

impl<R> ReadSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self { inner: reader }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: io::Read> ByteSource for ReadSource<R> {
    type Error = io::Error;

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        self.inner.read(buf)
    }
}

use alloc::collections::VecDeque;

/// Pushback ring for bytes read past the last decoded code point.
///
/// Reads are speculative (up to a full scratch buffer at a time), so the
/// tail of a read that belongs to later code points is parked here and
/// drained before the source is touched again. Stored bytes are raw input:
/// they carry no validity guarantee until decoded.
#[derive(Debug, Default)]
pub(crate) struct PendingBytes {
    data: VecDeque<u8>,
}

impl PendingBytes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        self.data.extend(bytes.iter().copied());
    }

    /// Copies up to `dst.len()` front bytes into `dst` without consuming
    /// them, returning how many were copied. Handles the ring's two-slice
    /// internal layout transparently.
    pub(crate) fn peek_head(&self, dst: &mut [u8; 4]) -> usize {
        let n = self.data.len().min(dst.len());
        for (slot, &b) in dst.iter_mut().zip(self.data.iter()) {
            *slot = b;
        }
        n
    }

    /// Drops the front `n` bytes.
    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.data.len());
        self.data.drain(..n.min(self.data.len()));
    }
}

#![allow(missing_docs)]

use std::io::{self, Cursor, Read};

use runescan::{ReadSource, RuneDecoder, ScanError};

/// Caps every read at two bytes so multi-byte sequences get split across
/// physical reads on their way through the adapter.
struct ShortReads<R>(R);

impl<R: Read> Read for ShortReads<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(2);
        self.0.read(&mut buf[..n])
    }
}

/// Fails with the given kind after serving nothing.
struct BrokenReader(io::ErrorKind);

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(self.0.into())
    }
}

#[test]
fn decodes_a_cursor() {
    let source = ReadSource::new(Cursor::new("Hi, 世界"));
    let runes: Result<String, _> = RuneDecoder::new(source).collect();
    assert_eq!(runes.unwrap(), "Hi, 世界");
}

#[test]
fn decodes_through_short_reads() {
    let text = "naïve 🦀 text, 世界";
    let source = ReadSource::new(ShortReads(Cursor::new(text)));
    let runes: Result<String, _> = RuneDecoder::new(source).collect();
    assert_eq!(runes.unwrap(), text);
}

#[test]
fn io_error_surfaces_unchanged() {
    let source = ReadSource::new(BrokenReader(io::ErrorKind::ConnectionReset));
    let mut decoder = RuneDecoder::new(source);
    match (&mut decoder).scan() {
        Err(ScanError::Source(err)) => {
            assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        }
        other => panic!("expected source error, got {other:?}"),
    }
}

#[test]
fn into_inner_returns_the_reader() {
    let source = ReadSource::new(Cursor::new(vec![1u8, 2, 3]));
    assert_eq!(source.into_inner().into_inner(), vec![1u8, 2, 3]);
}

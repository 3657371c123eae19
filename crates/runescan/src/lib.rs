//! A streaming, incremental UTF-8 code point decoder.
//!
//! [`RuneDecoder`] wraps any byte-producing source — an in-memory slice, a
//! file, a socket — and yields one Unicode scalar value per
//! [`scan`](RuneDecoder::scan) call.
//! Each physical read stages up to 16 bytes; bytes read past the decoded
//! code point's boundary are pushed back and drained on later calls, so no
//! byte is ever dropped even when a multi-byte sequence is split across two
//! underlying reads.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use runescan::RuneDecoder;
//!
//! let mut decoder = RuneDecoder::new("Hi, 世界".as_bytes());
//! let mut out = String::new();
//! while let Some(c) = (&mut decoder).scan().unwrap() {
//!     out.push(c);
//! }
//! assert_eq!(out, "Hi, 世界");
//! ```
//!
//! Driving the decoder as an iterator over a [`std::io::Read`] source:
//!
//! ```rust
//! use runescan::{ReadSource, RuneDecoder};
//!
//! let source = ReadSource::new(std::io::Cursor::new("héllo"));
//! let runes: Result<Vec<char>, _> = RuneDecoder::new(source).collect();
//! assert_eq!(runes.unwrap(), ['h', 'é', 'l', 'l', 'o']);
//! ```

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod decoder;
mod error;
mod options;
mod pending;
#[cfg(feature = "std")]
mod reader;
mod source;
mod utf8;

#[cfg(test)]
mod tests;

pub use decoder::RuneDecoder;
pub use error::{DecodeError, InvalidBytes, ScanError};
pub use options::DecoderOptions;
#[cfg(feature = "std")]
pub use reader::ReadSource;
pub use source::ByteSource;

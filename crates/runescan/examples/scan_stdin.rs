//! Reads standard input and prints one decoded code point per line.
//!
//! ```console
//! $ printf 'Hi, 世界' | cargo run --example scan_stdin
//! ```

use std::{io, process};

use runescan::{ReadSource, RuneDecoder};

fn main() {
    let stdin = io::stdin();
    let mut decoder = RuneDecoder::new(ReadSource::new(stdin.lock()));
    loop {
        match (&mut decoder).scan() {
            Ok(Some(c)) => println!("{c}"),
            Ok(None) => break,
            Err(err) => {
                eprintln!("scan_stdin: {err}");
                process::exit(1);
            }
        }
    }
}

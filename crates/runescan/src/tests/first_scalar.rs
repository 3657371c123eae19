use rstest::rstest;

use crate::utf8::{FirstScalar, decode_first};

#[test]
fn empty_window_decodes_nothing() {
    assert_eq!(decode_first(&[]), None);
}

#[rstest]
#[case(b"A", 'A', 1)]
#[case("é".as_bytes(), 'é', 2)]
#[case("世".as_bytes(), '世', 3)]
#[case("🦀".as_bytes(), '🦀', 4)]
#[case(b"ab", 'a', 1)] // only the first scalar is decoded
fn valid_first_scalar(#[case] bytes: &[u8], #[case] expected: char, #[case] width: usize) {
    assert_eq!(decode_first(bytes), Some(FirstScalar::Valid(expected, width)));
}

#[rstest]
#[case(&[0xC3])] // leading byte of a 2-byte sequence
#[case(&[0xE4, 0xB8])] // two of three bytes
#[case(&[0xF0, 0x9F, 0xA6])] // three of four bytes
fn valid_prefix_is_incomplete(#[case] bytes: &[u8]) {
    assert_eq!(decode_first(bytes), Some(FirstScalar::Incomplete));
}

#[rstest]
#[case(&[0x80], 1)] // lone continuation byte
#[case(&[0xC0, 0xAF], 1)] // overlong leader
#[case(&[0xF5, 0x80], 1)] // beyond U+10FFFF
#[case(&[0xED, 0xA0, 0x80], 1)] // surrogate second byte
#[case(&[0xE0, 0x9F, 0x80], 1)] // overlong second byte
#[case(&[0xE4, 0xB8, b'x'], 2)] // sequence cut short mid-way
#[case(&[0xF0, 0x9F, 0xA6, b'x'], 3)] // cut on the last byte
fn invalid_run_has_maximal_subpart_length(#[case] bytes: &[u8], #[case] run: usize) {
    assert_eq!(decode_first(bytes), Some(FirstScalar::Invalid(run)));
}

#[test]
fn boundary_scalars_decode() {
    // Highest scalar below the surrogates and the top of the range.
    assert_eq!(
        decode_first("\u{D7FF}".as_bytes()),
        Some(FirstScalar::Valid('\u{D7FF}', 3))
    );
    assert_eq!(
        decode_first("\u{10FFFF}".as_bytes()),
        Some(FirstScalar::Valid('\u{10FFFF}', 4))
    );
}

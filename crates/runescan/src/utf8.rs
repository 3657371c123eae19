//! First-scalar UTF-8 decoding over a short byte window.
//!
//! Only the front of the pending ring is ever inspected, so the window is at
//! most four bytes — the widest encoded scalar. Invalid input is reported as
//! a maximal subpart run (the longest prefix that is a valid start of some
//! sequence), matching the convention used for U+FFFD substitution.

/// Outcome of decoding the first scalar of a byte window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FirstScalar {
    /// A scalar and its encoded width in bytes.
    Valid(char, usize),
    /// The first `n` bytes are not part of any valid sequence.
    Invalid(usize),
    /// The window is a valid prefix of a longer sequence; more bytes are
    /// needed to decide.
    Incomplete,
}

/// Encoded width implied by a leading byte, or `None` for a byte that can
/// never start a sequence (continuation bytes, overlong leaders, > U+10FFFF).
fn sequence_len(b0: u8) -> Option<usize> {
    match b0 {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decodes the first scalar of `bytes`, or `None` if `bytes` is empty.
pub(crate) fn decode_first(bytes: &[u8]) -> Option<FirstScalar> {
    let &b0 = bytes.first()?;
    let Some(len) = sequence_len(b0) else {
        return Some(FirstScalar::Invalid(1));
    };
    if len == 1 {
        return Some(FirstScalar::Valid(char::from(b0), 1));
    }
    for (i, &b) in bytes.iter().enumerate().take(len).skip(1) {
        // The second byte has a constrained range for the leaders that
        // would otherwise admit overlong forms, surrogates, or values
        // beyond U+10FFFF.
        let valid = match (b0, i) {
            (0xE0, 1) => (0xA0..=0xBF).contains(&b),
            (0xED, 1) => (0x80..=0x9F).contains(&b),
            (0xF0, 1) => (0x90..=0xBF).contains(&b),
            (0xF4, 1) => (0x80..=0x8F).contains(&b),
            _ => (0x80..=0xBF).contains(&b),
        };
        if !valid {
            return Some(FirstScalar::Invalid(i));
        }
    }
    if bytes.len() < len {
        return Some(FirstScalar::Incomplete);
    }
    let mut cp = u32::from(match len {
        2 => b0 & 0x1F,
        3 => b0 & 0x0F,
        _ => b0 & 0x07,
    });
    for &b in &bytes[1..len] {
        cp = (cp << 6) | u32::from(b & 0x3F);
    }
    // The range checks above already exclude surrogates and out-of-range
    // values, so this conversion cannot fail.
    debug_assert!(char::from_u32(cp).is_some());
    Some(char::from_u32(cp).map_or(FirstScalar::Invalid(len), |c| FirstScalar::Valid(c, len)))
}

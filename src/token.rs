/*
 * Copyright (C) 2026 taylor.fish <contact@taylor.fish>
 *
 * This file is part of baseconv.
 *
 * baseconv is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * baseconv is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with baseconv. If not, see <https://www.gnu.org/licenses/>.
 */

//! Input normalization and tokenization.

use std::iter::FusedIterator;
use std::slice;
use std::str::SplitWhitespace;

use num_bigint::BigUint;

/// Removes every character except `0`, `1` and whitespace.
pub fn normalize_binary(s: &str) -> String {
    s.chars()
        .filter(|c| matches!(c, '0' | '1') || c.is_whitespace())
        .collect()
}

/// Removes `0x` markers and every non-hex-digit character.
///
/// A marker is dropped wherever it appears, not only at the start, so
/// `"A0xB"` becomes `"AB"`.
///
/// If an odd number of digits remains, a single `0` is prepended so that
/// the digits pair up into bytes. This only repairs one stray nibble at the
/// start; a nibble missing anywhere else shifts every following byte.
pub fn normalize_hex(s: &str) -> String {
    let mut digits = String::with_capacity(s.len() + 1);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '0' && matches!(chars.peek(), Some('x' | 'X')) {
            chars.next();
            continue;
        }
        if c.is_ascii_hexdigit() {
            digits.push(c);
        }
    }
    if digits.len() % 2 != 0 {
        digits.insert(0, '0');
    }
    digits
}

/// Keeps only the digits `0` through `7`.
pub fn normalize_octal(s: &str) -> String {
    s.chars().filter(|c| matches!(c, '0'..='7')).collect()
}

/// Splits `s` into tokens.
///
/// If `s` contains whitespace, it is split on runs of whitespace. Otherwise
/// it is cut left to right into chunks of `width` characters; the last
/// chunk is shorter if the length isn't a multiple of `width`. A `width` of
/// zero is treated as 1.
pub fn tokenize(s: &str, width: usize) -> Tokens<'_> {
    let width = width.max(1);
    Tokens(if s.chars().any(char::is_whitespace) {
        TokensInner::Split(s.split_whitespace())
    } else {
        TokensInner::Chunks {
            rest: s,
            width,
        }
    })
}

/// Iterator returned by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'a>(TokensInner<'a>);

#[derive(Clone, Debug)]
enum TokensInner<'a> {
    Split(SplitWhitespace<'a>),
    Chunks {
        rest: &'a str,
        width: usize,
    },
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            TokensInner::Split(iter) => iter.next(),
            TokensInner::Chunks {
                rest,
                width,
            } => {
                if rest.is_empty() {
                    return None;
                }
                let end = rest
                    .char_indices()
                    .nth(*width)
                    .map_or(rest.len(), |(i, _)| i);
                let (chunk, tail) = rest.split_at(end);
                *rest = tail;
                Some(chunk)
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Parses a token whose every character is a digit in `radix`, at any
/// length.
///
/// Signs and underscores are rejected. Returns [`None`] for empty tokens.
pub(crate) fn parse_digits(token: &str, radix: u32) -> Option<BigUint> {
    if token.is_empty() || !token.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::parse_bytes(token.as_bytes(), radix)
}

/// Like [`parse_digits`], but keeps only the low 32 bits of the value.
///
/// Callers that build code units reduce this further to 16 bits, which
/// matches reducing the full value modulo 2^16.
pub(crate) fn parse_radix(token: &str, radix: u32) -> Option<u32> {
    let value = parse_digits(token, radix)?;
    Some(value.iter_u32_digits().next().unwrap_or(0))
}

/// Iterator over the bytes of a string produced by [`normalize_hex`].
#[derive(Clone, Debug)]
pub(crate) struct HexBytes<'a>(slice::Chunks<'a, u8>);

impl<'a> HexBytes<'a> {
    pub fn new(normalized: &'a str) -> Self {
        Self(normalized.as_bytes().chunks(2))
    }
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

impl Iterator for HexBytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.0.next()?;
        Some(pair.iter().fold(0, |byte, &d| (byte << 4) | nibble(d)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl FusedIterator for HexBytes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_keeps_whitespace() {
        assert_eq!(normalize_binary("01a0 1b\t1"), "010 1\t1");
        assert_eq!(normalize_binary("xyz"), "");
    }

    #[test]
    fn hex_strips_markers() {
        assert_eq!(normalize_hex("0x48 0x69"), "4869");
        assert_eq!(normalize_hex("0X4g8"), "48");
        assert_eq!(normalize_hex("48:69:ff"), "4869ff");
    }

    #[test]
    fn hex_strips_inner_markers() {
        assert_eq!(normalize_hex("A0xB"), "AB");
        assert_eq!(normalize_hex("410X42"), "4142");
        assert_eq!(normalize_hex("x0"), "00");
    }

    #[test]
    fn hex_pads_odd_length() {
        assert_eq!(normalize_hex("abc"), "0abc");
        assert_eq!(normalize_hex("f"), "0f");
        assert_eq!(normalize_hex(""), "");
    }

    #[test]
    fn octal_digits_only() {
        assert_eq!(normalize_octal("0o17 89 6"), "0176");
    }

    #[test]
    fn tokenize_whitespace() {
        let tokens: Vec<_> = tokenize("  0100  1\n11 ", 8).collect();
        assert_eq!(tokens, ["0100", "1", "11"]);
    }

    #[test]
    fn tokenize_chunks() {
        let tokens: Vec<_> = tokenize("0100100001101", 8).collect();
        assert_eq!(tokens, ["01001000", "01101"]);
        let tokens: Vec<_> = tokenize("110151", 3).collect();
        assert_eq!(tokens, ["110", "151"]);
        assert_eq!(tokenize("", 8).next(), None);
    }

    #[test]
    fn tokenize_chunks_multibyte() {
        let tokens: Vec<_> = tokenize("ééé", 2).collect();
        assert_eq!(tokens, ["éé", "é"]);
    }

    #[test]
    fn tokenize_zero_width() {
        let tokens: Vec<_> = tokenize("101", 0).collect();
        assert_eq!(tokens, ["1", "0", "1"]);
        let tokens: Vec<_> = tokenize("1 0", 0).collect();
        assert_eq!(tokens, ["1", "0"]);
    }

    #[test]
    fn parse_radix_strict() {
        assert_eq!(parse_radix("01001000", 2), Some(0x48));
        assert_eq!(parse_radix("0100100z", 2), None);
        assert_eq!(parse_radix("+101", 2), None);
        assert_eq!(parse_radix("", 2), None);
        assert_eq!(parse_radix("777", 8), Some(0o777));
    }

    #[test]
    fn parse_wide_tokens() {
        let wide = format!("1{}", "0".repeat(32));
        assert_eq!(parse_digits(&wide, 2), Some(BigUint::from(1_u64 << 32)));
        assert_eq!(parse_radix(&wide, 2), Some(0));
        assert_eq!(parse_radix(&"1".repeat(33), 2), Some(u32::MAX));
        assert_eq!(parse_radix(&format!("1{}", "0".repeat(70)), 2), Some(0));
        assert_eq!(parse_digits("1_0", 2), None);
    }

    #[test]
    fn hex_bytes() {
        let bytes: Vec<_> = HexBytes::new("48690aFF").collect();
        assert_eq!(bytes, [0x48, 0x69, 0x0a, 0xff]);
    }
}

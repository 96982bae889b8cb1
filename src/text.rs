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

//! Conversions between text and every other representation.
//!
//! Text is read as UTF-16 code units. The binary and hexadecimal paths
//! ([`text_to_binary`], [`text_to_hex`]) split units above `0xFF` into two
//! bytes, high byte first. The decimal, ASCII and octal paths always emit
//! one token per code unit.
//!
//! Decoding is not symmetric: [`binary_to_text`] rejoins a byte above
//! `0x7F` with the following byte, while [`hex_to_text`] never does.

use super::format::{FormatPolicy, Token};
use super::iter::{code_unit, units_to_string, PairUnits, SplitUnits};
use super::numeral::parse_decimal;
use super::token::{normalize_binary, normalize_hex, normalize_octal};
use super::token::{parse_radix, tokenize, HexBytes};
use super::BAD_UNIT;

const BYTE_BITS: usize = 8;
const OCTAL_WIDTH: usize = 3;

fn bytes(text: &str) -> SplitUnits<impl Iterator<Item = u16> + '_> {
    SplitUnits::new(text.encode_utf16())
}

/// Converts text to 8-bit binary groups, splitting code units above `0xFF`
/// into two bytes.
pub fn text_to_binary(text: &str, format: FormatPolicy) -> String {
    format.join(bytes(text).map(|b| Token::Binary(b.into(), BYTE_BITS)))
}

/// Converts text to hexadecimal bytes, splitting code units above `0xFF`
/// into two bytes.
pub fn text_to_hex(text: &str, format: FormatPolicy) -> String {
    format.join(bytes(text).map(|b| Token::Hex(b.into())))
}

/// Converts binary bytes to text.
///
/// Bytes up to `0x7F` are ASCII characters. A larger byte is combined with
/// the byte after it into one code unit (high byte first); a large byte at
/// the end of the input is read as ISO-8859-1.
///
/// This is not a general UTF-16 decoder. It undoes [`text_to_binary`] only
/// for code units that are ASCII or whose high byte is above `0x7F`.
pub fn binary_to_text(bin: &str) -> String {
    let bin = normalize_binary(bin);
    let tokens = tokenize(&bin, BYTE_BITS).map(|t| parse_radix(t, 2));
    units_to_string(PairUnits::new(tokens))
}

/// Converts hexadecimal bytes to text, one ISO-8859-1 character per byte.
///
/// Unlike [`binary_to_text`], bytes are never combined into wider code
/// units.
pub fn hex_to_text(hex: &str) -> String {
    let hex = normalize_hex(hex);
    units_to_string(HexBytes::new(&hex).map(u16::from))
}

fn decimal_units(text: &str) -> impl Iterator<Item = Token> + '_ {
    text.encode_utf16().map(|u| Token::Decimal(u.into()))
}

fn decimal_tokens_to_text(s: &str) -> String {
    units_to_string(s.split_whitespace().map(|token| {
        parse_decimal(token)
            .filter(|n| n.is_finite())
            .map_or(BAD_UNIT, |n| {
                // In range after `rem_euclid`, so the cast is exact.
                n.trunc().rem_euclid(65536.0) as u16
            })
    }))
}

/// Converts text to space-separated decimal character codes.
pub fn text_to_ascii(text: &str) -> String {
    FormatPolicy::new().join(decimal_units(text))
}

/// Converts space-separated decimal character codes to text. Tokens that
/// aren't numbers become `'?'`.
pub fn ascii_to_text(s: &str) -> String {
    decimal_tokens_to_text(s)
}

/// Converts text to decimal character codes.
pub fn text_to_decimal(text: &str, format: FormatPolicy) -> String {
    format.join(decimal_units(text))
}

/// Converts space-separated decimal character codes to text. Tokens that
/// aren't numbers become `'?'`.
pub fn decimal_to_text(s: &str) -> String {
    decimal_tokens_to_text(s)
}

/// Converts text to octal character codes.
///
/// When packed, each code is padded to three digits so that
/// [`octal_to_text`] can split it again.
pub fn text_to_octal(text: &str, format: FormatPolicy) -> String {
    let width = if format.space_separated {
        1
    } else {
        OCTAL_WIDTH
    };
    format.join(text.encode_utf16().map(|u| Token::Octal(u.into(), width)))
}

/// Converts octal character codes to text.
///
/// The input is split on whitespace, or into groups of three digits if it
/// has none. Groups without any octal digit become `'?'`.
pub fn octal_to_text(oct: &str) -> String {
    units_to_string(tokenize(oct, OCTAL_WIDTH).map(|token| {
        parse_radix(&normalize_octal(token), 8).map_or(BAD_UNIT, code_unit)
    }))
}

/// Converts text to binary character codes, one group of at least 8 bits
/// per code unit. Code units are never split.
pub fn ascii_to_binary(text: &str, format: FormatPolicy) -> String {
    format.join(
        text.encode_utf16()
            .map(|u| Token::Binary(u.into(), BYTE_BITS)),
    )
}

/// Converts binary character codes to text, one character per group.
///
/// Groups shorter than 8 bits are still read as numbers. Groups that aren't
/// binary numbers become `'?'`.
pub fn binary_to_ascii(bin: &str) -> String {
    units_to_string(
        tokenize(bin, BYTE_BITS)
            .map(|token| parse_radix(token, 2).map_or(BAD_UNIT, code_unit)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKED: FormatPolicy = FormatPolicy::packed();
    const SPACED: FormatPolicy = FormatPolicy::new();

    #[test]
    fn binary_bytes() {
        assert_eq!(text_to_binary("A", PACKED), "01000001");
        assert_eq!(text_to_binary("Hi", SPACED), "01001000 01101001");
        assert_eq!(text_to_binary("", SPACED), "");
    }

    #[test]
    fn binary_split_wide_units() {
        assert_eq!(text_to_binary("é", SPACED), "11101001");
        assert_eq!(text_to_binary("中", SPACED), "01001110 00101101");
    }

    #[test]
    fn hex_bytes() {
        assert_eq!(text_to_hex("Hi", SPACED), "48 69");
        assert_eq!(text_to_hex("Hi", PACKED), "4869");
        assert_eq!(text_to_hex("中", SPACED), "4E 2D");
        assert_eq!(text_to_hex("😀", PACKED), "D83DDE00");
    }

    #[test]
    fn binary_round_trip() {
        for s in ["Hello, world!", "😀 ok", "\0\u{7f}", "\u{e4b8}"] {
            assert_eq!(binary_to_text(&text_to_binary(s, SPACED)), s);
            assert_eq!(binary_to_text(&text_to_binary(s, PACKED)), s);
        }
    }

    #[test]
    fn binary_to_text_fallbacks() {
        assert_eq!(binary_to_text("01000001 11101001"), "Aé");
        assert_eq!(binary_to_text("0100000"), " ");
        assert_eq!(binary_to_text(""), "");
        assert_eq!(binary_to_text("abc"), "");
    }

    #[test]
    fn hex_has_no_reconstruction() {
        assert_eq!(hex_to_text("4869"), "Hi");
        assert_eq!(hex_to_text("4E2D"), "N-");
        assert_eq!(hex_to_text("e9"), "é");
        assert_eq!(binary_to_text("01001110 00101101"), "N-");
        assert_eq!(binary_to_text("11100100 10111000"), "\u{e4b8}");
        assert_eq!(hex_to_text("E4B8"), "\u{e4}\u{b8}");
    }

    #[test]
    fn ascii_codes() {
        assert_eq!(text_to_ascii("Hi"), "72 105");
        assert_eq!(text_to_ascii("中"), "20013");
        assert_eq!(ascii_to_text("72 105"), "Hi");
        assert_eq!(ascii_to_text(" 72  x 105 "), "H?i");
        assert_eq!(ascii_to_text(""), "");
    }

    #[test]
    fn decimal_codes() {
        assert_eq!(text_to_decimal("Hi", SPACED), "72 105");
        assert_eq!(text_to_decimal("Hi", PACKED), "72105");
        assert_eq!(decimal_to_text("20013 33"), "中!");
        assert_eq!(decimal_to_text("65536"), "\0");
        assert_eq!(decimal_to_text("-1"), "\u{ffff}");
    }

    #[test]
    fn octal_codes() {
        assert_eq!(text_to_octal("Hi", SPACED), "110 151");
        assert_eq!(text_to_octal("\n", SPACED), "12");
        assert_eq!(text_to_octal("\nA", PACKED), "012101");
        assert_eq!(octal_to_text("110 151"), "Hi");
        assert_eq!(octal_to_text("012101"), "\nA");
        assert_eq!(octal_to_text("12 9"), "\n?");
        assert_eq!(octal_to_text(""), "");
    }

    #[test]
    fn octal_round_trip() {
        for s in ["Hello", "\t~ǿ"] {
            assert_eq!(octal_to_text(&text_to_octal(s, SPACED)), s);
            assert_eq!(octal_to_text(&text_to_octal(s, PACKED)), s);
        }
    }

    #[test]
    fn ascii_binary() {
        assert_eq!(ascii_to_binary("A", SPACED), "01000001");
        assert_eq!(ascii_to_binary("中", SPACED), "100111000101101");
        assert_eq!(binary_to_ascii("01000001 01000010"), "AB");
        assert_eq!(binary_to_ascii("100111000101101"), "\u{9c}-");
        assert_eq!(binary_to_ascii("100111000101101 1"), "中\u{1}");
    }

    #[test]
    fn binary_to_ascii_short_and_bad_groups() {
        assert_eq!(binary_to_ascii("0100000101"), "A\u{1}");
        assert_eq!(binary_to_ascii("01000001 01x 01000010"), "A?B");
        assert_eq!(binary_to_ascii(""), "");
    }

    #[test]
    fn wide_codes_wrap_to_sixteen_bits() {
        let a_plus_2_16 = format!("1{:016b} 1", 0x41);
        assert_eq!(binary_to_ascii(&a_plus_2_16), "A\u{1}");
        let a_plus_2_40 = format!("1{:040b} 1", 0x41);
        assert_eq!(binary_to_ascii(&a_plus_2_40), "A\u{1}");
        assert_eq!(octal_to_text("200101 0"), "A\0");
    }
}

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

//! Conversions between binary strings and hexadecimal or octal strings.
//!
//! Hexadecimal is grouped in 8-bit bytes. Octal is grouped in 3-bit digits,
//! after padding the whole binary string on the left.

use super::format::{FormatPolicy, Token};
use super::token::{normalize_binary, normalize_hex, normalize_octal};
use super::token::{parse_digits, tokenize, HexBytes};
use super::BAD_BYTE;

const BYTE_BITS: usize = 8;
const OCTAL_BITS: usize = 3;

/// Converts hexadecimal to 8-bit binary groups, one per byte.
pub fn hex_to_binary(hex: &str, format: FormatPolicy) -> String {
    let hex = normalize_hex(hex);
    format.join(
        HexBytes::new(&hex).map(|b| Token::Binary(b.into(), BYTE_BITS)),
    )
}

/// Converts binary to hexadecimal bytes.
///
/// The input is split on whitespace, or into groups of 8 bits if it has
/// none. Each group is rendered as at least two hex digits, so a group wider
/// than 8 bits keeps its full value. A group that isn't a valid binary
/// number is rendered as `"??"`.
pub fn binary_to_hex(bin: &str, format: FormatPolicy) -> String {
    format.join(tokenize(bin, BYTE_BITS).map(|token| {
        parse_digits(token, 2)
            .map_or_else(|| BAD_BYTE.to_owned(), |n| format!("{:02X}", n))
    }))
}

/// Converts each octal digit to a 3-bit binary group. Groups are always
/// space-separated.
pub fn octal_to_binary(oct: &str) -> String {
    FormatPolicy::new().join(
        normalize_octal(oct)
            .bytes()
            .map(|d| Token::Binary((d - b'0').into(), OCTAL_BITS)),
    )
}

/// Converts binary to octal digits.
///
/// The binary digits are concatenated and padded on the left with zeros to
/// a multiple of 3 bits; each 3-bit group becomes one octal digit.
pub fn binary_to_octal(bin: &str) -> String {
    let bits: String = normalize_binary(bin).split_whitespace().collect();
    let pad = (OCTAL_BITS - bits.len() % OCTAL_BITS) % OCTAL_BITS;
    let mut padded = "0".repeat(pad);
    padded.push_str(&bits);
    padded
        .as_bytes()
        .chunks(OCTAL_BITS)
        .map(|group| {
            let n = group.iter().fold(0, |n, &b| (n << 1) | (b - b'0'));
            char::from(b'0' + n)
        })
        .collect()
}

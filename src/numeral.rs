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

//! Base conversions of a single numeric value.
//!
//! Every function takes one numeral and returns one numeral. Input that
//! doesn't contain a number produces `"NaN"`.

use super::token::{normalize_binary, normalize_hex, normalize_octal};
use super::NAN;

use num_bigint::BigInt;
use num_traits::FromPrimitive;

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Finds the longest prefix of `s` (after leading whitespace) that forms a
/// decimal number, like `parseFloat`. Trailing garbage is ignored.
fn decimal_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(bytes.get(exp..).unwrap_or_default());
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    Some(&s[..end])
}

/// Parses the decimal prefix of `s` as a double.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    decimal_prefix(s)?.parse().ok()
}

/// The integer part of a number found by [`decimal_prefix`]; the fraction
/// is dropped, not rounded.
///
/// Plain digits are converted exactly. Only a number with an exponent goes
/// through `f64`, and yields [`None`] if it overflows to infinity.
fn integer_part(number: &str) -> Option<BigInt> {
    if number.contains(|c: char| matches!(c, 'e' | 'E')) {
        let value: f64 = number.parse().ok()?;
        return BigInt::from_f64(value.trunc());
    }
    let (negative, unsigned) = match number.as_bytes().first() {
        Some(b'-') => (true, &number[1..]),
        Some(b'+') => (false, &number[1..]),
        _ => (false, number),
    };
    let digits = unsigned.split('.').next().unwrap_or_default();
    if digits.is_empty() {
        return Some(BigInt::default());
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if negative {
        -magnitude
    } else {
        magnitude
    })
}

fn render(n: &BigInt, radix: u32) -> String {
    let s = n.to_str_radix(radix);
    if radix == 16 {
        s.to_ascii_uppercase()
    } else {
        s
    }
}

fn from_decimal(dec: &str, radix: u32) -> String {
    decimal_prefix(dec)
        .and_then(integer_part)
        .map_or_else(|| NAN.to_owned(), |n| render(&n, radix))
}

/// `digits` must already be normalized to the radix's alphabet.
fn to_decimal(digits: &str, radix: u32) -> String {
    BigInt::parse_bytes(digits.as_bytes(), radix)
        .map_or_else(|| NAN.to_owned(), |n| n.to_str_radix(10))
}

/// Converts a decimal number to binary. A fractional part is ignored and a
/// negative sign is kept.
pub fn decimal_to_binary(dec: &str) -> String {
    from_decimal(dec, 2)
}

/// Converts a decimal number to upper-case hexadecimal. A fractional part
/// is ignored and a negative sign is kept.
pub fn decimal_to_hex(dec: &str) -> String {
    from_decimal(dec, 16)
}

/// Converts a decimal number to octal. A fractional part is ignored and a
/// negative sign is kept.
pub fn decimal_to_octal(dec: &str) -> String {
    from_decimal(dec, 8)
}

/// Converts a binary number to decimal. Characters other than `0` and `1`
/// are ignored; if no digits remain, the result is `"NaN"`.
pub fn binary_to_decimal(bin: &str) -> String {
    let digits: String = normalize_binary(bin).split_whitespace().collect();
    to_decimal(&digits, 2)
}

/// Converts a hexadecimal number to decimal. `0x` markers and non-hex
/// characters are ignored.
pub fn hex_to_decimal(hex: &str) -> String {
    to_decimal(&normalize_hex(hex), 16)
}

/// Converts an octal number to decimal. Characters other than `0` through
/// `7` are ignored.
pub fn octal_to_decimal(oct: &str) -> String {
    to_decimal(&normalize_octal(oct), 8)
}

/// Converts hexadecimal to octal by way of decimal.
pub fn hex_to_octal(hex: &str) -> String {
    decimal_to_octal(&hex_to_decimal(hex))
}

/// Converts octal to hexadecimal by way of decimal.
pub fn octal_to_hex(oct: &str) -> String {
    decimal_to_hex(&octal_to_decimal(oct))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefix() {
        assert_eq!(parse_decimal("65"), Some(65.0));
        assert_eq!(parse_decimal("  -12.5abc"), Some(-12.5));
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_decimal("2e"), Some(2.0));
        assert_eq!(parse_decimal("3e+"), Some(3.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("7."), Some(7.0));
        assert_eq!(parse_decimal("+4"), Some(4.0));
    }

    #[test]
    fn parse_rejects() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("Infinity"), None);
        assert_eq!(parse_decimal("e5"), None);
    }

    #[test]
    fn decimal_to_bases() {
        assert_eq!(decimal_to_binary("10"), "1010");
        assert_eq!(decimal_to_hex("65"), "41");
        assert_eq!(decimal_to_hex("255"), "FF");
        assert_eq!(decimal_to_octal("10"), "12");
        assert_eq!(decimal_to_binary("0"), "0");
    }

    #[test]
    fn fraction_ignored() {
        assert_eq!(decimal_to_binary("5.9"), "101");
        assert_eq!(decimal_to_hex("255.99"), "FF");
        assert_eq!(decimal_to_binary("-0.5"), "0");
    }

    #[test]
    fn negative() {
        assert_eq!(decimal_to_binary("-10"), "-1010");
        assert_eq!(decimal_to_hex("-255"), "-FF");
        assert_eq!(decimal_to_octal("-8"), "-10");
    }

    #[test]
    fn not_a_number() {
        assert_eq!(decimal_to_binary(""), "NaN");
        assert_eq!(decimal_to_hex("xyz"), "NaN");
        assert_eq!(decimal_to_octal("1e999"), "NaN");
        assert_eq!(binary_to_decimal(""), "NaN");
        assert_eq!(binary_to_decimal("23"), "NaN");
        assert_eq!(hex_to_decimal("zz"), "NaN");
        assert_eq!(octal_to_decimal("89"), "NaN");
    }

    #[test]
    fn large_values_are_exact() {
        let two_64 = "18446744073709551616";
        assert_eq!(decimal_to_hex(two_64), "10000000000000000");
        let bin = format!("1{}", "0".repeat(64));
        assert_eq!(binary_to_decimal(&bin), two_64);
    }

    #[test]
    fn beyond_double_precision() {
        let two_53_plus_1 = "9007199254740993";
        assert_eq!(decimal_to_hex(two_53_plus_1), "20000000000001");
        let bin = format!("1{}1", "0".repeat(52));
        assert_eq!(decimal_to_binary("9007199254740993.9"), bin);
        assert_eq!(binary_to_decimal(&bin), two_53_plus_1);
        assert_eq!(hex_to_octal("20000000000001"), "400000000000000001");
        assert_eq!(octal_to_hex("400000000000000001"), "20000000000001");
    }

    #[test]
    fn integer_part_forms() {
        assert_eq!(decimal_to_binary("-0"), "0");
        assert_eq!(decimal_to_binary("+12abc"), "1100");
        assert_eq!(decimal_to_binary(".9"), "0");
        assert_eq!(decimal_to_binary("-7.5"), "-111");
        assert_eq!(decimal_to_hex("1.5e2"), "96");
        assert_eq!(decimal_to_hex("2e"), "2");
    }

    #[test]
    fn to_decimal() {
        assert_eq!(binary_to_decimal("1010"), "10");
        assert_eq!(binary_to_decimal("1010 1111"), "175");
        assert_eq!(hex_to_decimal("41"), "65");
        assert_eq!(hex_to_decimal("0xff"), "255");
        assert_eq!(octal_to_decimal("12"), "10");
    }

    #[test]
    fn hex_octal_through_decimal() {
        assert_eq!(hex_to_octal("41"), "101");
        assert_eq!(octal_to_hex("101"), "41");
        assert_eq!(hex_to_octal(""), "NaN");
        assert_eq!(octal_to_hex("9"), "NaN");
    }
}

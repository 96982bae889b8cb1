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

//! Conversions between text and its binary, hexadecimal, octal, decimal and
//! ASCII code representations.
//!
//! Every conversion is a pure function from a [`str`] to a [`String`].
//! Malformed input never causes an error: each bad token is replaced inline
//! by a placeholder (`"?"`, `"??"` or `"NaN"`) and the rest of the input is
//! still converted.
//!
//! Text is handled as a sequence of UTF-16 code units. On the binary and
//! hexadecimal paths, a code unit above `0xFF` is split into two bytes (high
//! byte first); the decimal, ASCII and octal-of-text paths never split code
//! units.

pub mod binary;
pub mod direction;
mod format;
mod iter;
pub mod numeral;
pub mod text;
pub mod token;

/// Rendered in place of a numeral that could not be parsed.
const NAN: &str = "NaN";

/// Rendered in place of a byte that could not be parsed.
const BAD_BYTE: &str = "??";

/// Code unit rendered in place of a character that could not be parsed.
const BAD_UNIT: u16 = b'?' as u16;

pub use direction::{convert, Direction, Representation};
pub use direction::{ParseDirectionError, ParseRepresentationError};
pub use format::FormatPolicy;

pub use binary::{binary_to_hex, binary_to_octal};
pub use binary::{hex_to_binary, octal_to_binary};

pub use numeral::{binary_to_decimal, hex_to_decimal, octal_to_decimal};
pub use numeral::{decimal_to_binary, decimal_to_hex, decimal_to_octal};
pub use numeral::{hex_to_octal, octal_to_hex};

pub use text::{ascii_to_binary, binary_to_ascii};
pub use text::{ascii_to_text, text_to_ascii};
pub use text::{binary_to_text, text_to_binary};
pub use text::{decimal_to_text, text_to_decimal};
pub use text::{hex_to_text, text_to_hex};
pub use text::{octal_to_text, text_to_octal};

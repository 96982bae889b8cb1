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

//! Named conversions and the [`convert`] entry point.

use super::format::FormatPolicy;
use super::{binary, numeral, text};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A data representation that conversions go between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Plain text.
    Text,
    /// Base-2 digits.
    Binary,
    /// Base-16 digits.
    Hex,
    /// Base-8 digits.
    Octal,
    /// Base-10 digits.
    Decimal,
    /// Character codes.
    Ascii,
}

impl Representation {
    /// Every representation.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Binary,
        Self::Hex,
        Self::Octal,
        Self::Decimal,
        Self::Ascii,
    ];

    /// The lower-case name of the representation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
            Self::Hex => "hex",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Ascii => "ascii",
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Representation`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown representation: {0:?}")]
pub struct ParseRepresentationError(String);

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "binary" | "bin" => Self::Binary,
            "hex" | "hexadecimal" => Self::Hex,
            "octal" | "oct" => Self::Octal,
            "decimal" | "dec" => Self::Decimal,
            "ascii" => Self::Ascii,
            _ => return Err(ParseRepresentationError(s.to_owned())),
        })
    }
}

macro_rules! directions {
    ($($variant:ident => $from:ident, $to:ident, $name:literal;)*) => {
        /// A named conversion from one [`Representation`] to another.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Direction {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Direction {
            /// Every direction.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The kebab-case name of the direction, e.g.
            /// `text-to-binary`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// The representation this direction converts from.
            pub const fn source(self) -> Representation {
                match self {
                    $(Self::$variant => Representation::$from,)*
                }
            }

            /// The representation this direction converts to.
            pub const fn target(self) -> Representation {
                match self {
                    $(Self::$variant => Representation::$to,)*
                }
            }
        }
    };
}

directions! {
    TextToBinary => Text, Binary, "text-to-binary";
    BinaryToText => Binary, Text, "binary-to-text";
    HexToBinary => Hex, Binary, "hex-to-binary";
    BinaryToHex => Binary, Hex, "binary-to-hex";
    AsciiToBinary => Ascii, Binary, "ascii-to-binary";
    BinaryToAscii => Binary, Ascii, "binary-to-ascii";
    DecimalToBinary => Decimal, Binary, "decimal-to-binary";
    BinaryToDecimal => Binary, Decimal, "binary-to-decimal";
    TextToAscii => Text, Ascii, "text-to-ascii";
    AsciiToText => Ascii, Text, "ascii-to-text";
    HexToDecimal => Hex, Decimal, "hex-to-decimal";
    DecimalToHex => Decimal, Hex, "decimal-to-hex";
    OctalToBinary => Octal, Binary, "octal-to-binary";
    BinaryToOctal => Binary, Octal, "binary-to-octal";
    OctalToDecimal => Octal, Decimal, "octal-to-decimal";
    DecimalToOctal => Decimal, Octal, "decimal-to-octal";
    HexToOctal => Hex, Octal, "hex-to-octal";
    OctalToHex => Octal, Hex, "octal-to-hex";
    TextToOctal => Text, Octal, "text-to-octal";
    OctalToText => Octal, Text, "octal-to-text";
    TextToHex => Text, Hex, "text-to-hex";
    HexToText => Hex, Text, "hex-to-text";
    TextToDecimal => Text, Decimal, "text-to-decimal";
    DecimalToText => Decimal, Text, "decimal-to-text";
}

impl Direction {
    /// Returns the direction from `from` to `to`, if there is one.
    pub fn new(from: Representation, to: Representation) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.source() == from && d.target() == to)
    }

    /// Whether the output layout depends on [`FormatPolicy`]. Other
    /// directions ignore the policy.
    pub const fn uses_format(self) -> bool {
        matches!(
            self,
            Self::TextToBinary
                | Self::TextToHex
                | Self::HexToBinary
                | Self::BinaryToHex
                | Self::AsciiToBinary
                | Self::TextToOctal
                | Self::TextToDecimal
        )
    }

    /// Runs the conversion on `input`.
    pub fn convert(self, input: &str, format: FormatPolicy) -> String {
        match self {
            Self::TextToBinary => text::text_to_binary(input, format),
            Self::BinaryToText => text::binary_to_text(input),
            Self::HexToBinary => binary::hex_to_binary(input, format),
            Self::BinaryToHex => binary::binary_to_hex(input, format),
            Self::AsciiToBinary => text::ascii_to_binary(input, format),
            Self::BinaryToAscii => text::binary_to_ascii(input),
            Self::DecimalToBinary => numeral::decimal_to_binary(input),
            Self::BinaryToDecimal => numeral::binary_to_decimal(input),
            Self::TextToAscii => text::text_to_ascii(input),
            Self::AsciiToText => text::ascii_to_text(input),
            Self::HexToDecimal => numeral::hex_to_decimal(input),
            Self::DecimalToHex => numeral::decimal_to_hex(input),
            Self::OctalToBinary => binary::octal_to_binary(input),
            Self::BinaryToOctal => binary::binary_to_octal(input),
            Self::OctalToDecimal => numeral::octal_to_decimal(input),
            Self::DecimalToOctal => numeral::decimal_to_octal(input),
            Self::HexToOctal => numeral::hex_to_octal(input),
            Self::OctalToHex => numeral::octal_to_hex(input),
            Self::TextToOctal => text::text_to_octal(input, format),
            Self::OctalToText => text::octal_to_text(input),
            Self::TextToHex => text::text_to_hex(input, format),
            Self::HexToText => text::hex_to_text(input),
            Self::TextToDecimal => text::text_to_decimal(input, format),
            Self::DecimalToText => text::decimal_to_text(input),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Direction`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conversion: {0:?}")]
pub struct ParseDirectionError(String);

/// Lower-cases `s` and drops `-` and `_`, so that `text-to-binary`,
/// `text_to_binary` and `textToBinary` compare equal.
fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_name(s);
        Self::ALL
            .iter()
            .copied()
            .find(|d| fold_name(d.name()) == key)
            .ok_or_else(|| ParseDirectionError(s.to_owned()))
    }
}

/// Converts `input` in the given direction.
///
/// This never fails; malformed parts of `input` are rendered as
/// placeholders in the result.
pub fn convert(
    direction: Direction,
    input: &str,
    format: FormatPolicy,
) -> String {
    log::trace!(
        "converting {} bytes ({}, spaced: {})",
        input.len(),
        direction,
        format.space_separated,
    );
    direction.convert(input, format)
}

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

use std::fmt::{self, Display, Formatter, Write};

/// Controls how encoded tokens are laid out in the output.
///
/// Decoders don't take a policy; they accept either layout (see
/// [`tokenize`](crate::token::tokenize)).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatPolicy {
    /// Whether tokens are joined with a single space. If false, tokens are
    /// packed together with no delimiter. [default: true]
    pub space_separated: bool,
}

impl FormatPolicy {
    /// Returns the default (space-separated) policy.
    pub const fn new() -> Self {
        Self {
            space_separated: true,
        }
    }

    /// Returns the packed policy.
    pub const fn packed() -> Self {
        Self {
            space_separated: false,
        }
    }

    /// Returns a policy with the given `space_separated` flag.
    pub const fn with_spaces(space_separated: bool) -> Self {
        Self {
            space_separated,
        }
    }

    fn separator(self) -> &'static str {
        if self.space_separated {
            " "
        } else {
            ""
        }
    }

    /// Renders `tokens` one after another, separated according to the
    /// policy.
    pub(crate) fn join<I>(self, tokens: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let sep = self.separator();
        let mut out = String::new();
        tokens.into_iter().enumerate().for_each(|(i, token)| {
            if i > 0 {
                out.push_str(sep);
            }
            // Writing to a `String` can't fail.
            let _ = write!(out, "{}", token);
        });
        out
    }
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// A single encoded unit, rendered lazily by [`FormatPolicy::join`].
#[derive(Clone, Copy, Debug)]
pub(crate) enum Token {
    /// Base-2, zero-padded to the given number of digits.
    Binary(u32, usize),
    /// Base-8, zero-padded to the given number of digits.
    Octal(u32, usize),
    /// Base-10.
    Decimal(u32),
    /// Upper-case base-16, zero-padded to two digits.
    Hex(u32),
    Placeholder(&'static str),
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Binary(n, width) => {
                write!(f, "{:0width$b}", n, width = width)
            }
            Self::Octal(n, width) => {
                write!(f, "{:0width$o}", n, width = width)
            }
            Self::Decimal(n) => write!(f, "{}", n),
            Self::Hex(n) => write!(f, "{:02X}", n),
            Self::Placeholder(s) => f.write_str(s),
        }
    }
}

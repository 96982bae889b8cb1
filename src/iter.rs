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

use super::BAD_UNIT;

use std::char::{decode_utf16, REPLACEMENT_CHARACTER};
use std::iter::{Fuse, FusedIterator, Peekable};

/// Truncates `n` to a UTF-16 code unit, as `String.fromCharCode` does.
pub fn code_unit(n: u32) -> u16 {
    (n & 0xffff) as u16
}

/// Turns code units into bytes. Units up to `0xFF` become one byte; larger
/// units become two, high byte first.
pub struct SplitUnits<I> {
    iter: Fuse<I>,
    low: Option<u8>,
}

impl<I: Iterator> SplitUnits<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            low: None,
        }
    }
}

impl<I> Iterator for SplitUnits<I>
where
    I: Iterator<Item = u16>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(low) = self.low.take() {
            return Some(low);
        }
        let [high, low] = self.iter.next()?.to_be_bytes();
        if high == 0 {
            return Some(low);
        }
        self.low = Some(low);
        Some(high)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.low.is_some());
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(pending),
            upper
                .and_then(|n| n.checked_mul(2))
                .and_then(|n| n.checked_add(pending)),
        )
    }
}

impl<I: Iterator<Item = u16>> FusedIterator for SplitUnits<I> {}

/// Turns parsed byte tokens back into code units.
///
/// A byte up to `0x7F` becomes one code unit. A larger byte is taken as the
/// high half of a code unit whose low half is the next token; if there is no
/// next token, or it failed to parse, the byte stands alone. Tokens that
/// failed to parse become `'?'`.
///
/// This mirrors [`SplitUnits`] and is only lossless for its output.
pub struct PairUnits<I: Iterator> {
    iter: Peekable<Fuse<I>>,
}

impl<I: Iterator> PairUnits<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse().peekable(),
        }
    }
}

impl<I> Iterator for PairUnits<I>
where
    I: Iterator<Item = Option<u32>>,
{
    type Item = u16;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = match self.iter.next()? {
            Some(byte) => byte,
            None => return Some(BAD_UNIT),
        };
        if byte <= 0x7f {
            return Some(code_unit(byte));
        }
        Some(match self.iter.next_if(Option::is_some) {
            Some(Some(low)) => code_unit((byte << 8).wrapping_add(low)),
            _ => code_unit(byte),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.div_ceil(2), upper)
    }
}

impl<I> FusedIterator for PairUnits<I> where I: Iterator<Item = Option<u32>> {}

/// Collects UTF-16 code units into a string. Unpaired surrogates become
/// U+FFFD.
pub fn units_to_string<I>(units: I) -> String
where
    I: IntoIterator<Item = u16>,
{
    decode_utf16(units)
        .map(|c| c.unwrap_or(REPLACEMENT_CHARACTER))
        .collect()
}

/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// A bit-granular, MSB-first cursor over a byte buffer.
///
/// The cursor implements [`BitRead`] whenever `B` implements `AsRef<[u8]>`,
/// and [`BitWrite`] whenever `B` also implements `AsMut<[u8]>`. Writes OR
/// bits into the buffer, which must thus be **ZERO INITIALIZED**.
///
/// The cursor never fails. Once the end of the buffer is reached it is
/// exhausted for good: [`get_bits`](BitCursor::get_bits) returns only the
/// bits it could read (in the lowest bits of the result) and
/// [`put_bits`](BitCursor::put_bits) discards the bits that do not fit. In
/// both cases the cursor remembers that an operation was
/// [truncated](BitCursor::is_truncated).
///
/// # Example
/// ```
/// use rfx_rlgr::prelude::*;
///
/// let mut buffer = [0_u8; 2];
/// let mut cursor = BitCursor::attach(&mut buffer[..]);
/// cursor.put_bits(0b101, 3);
/// cursor.put_bits(0x1ff, 9);
/// assert_eq!(cursor.bytes_consumed(), 2);
/// assert_eq!(cursor.bits_remaining(), 4);
/// assert_eq!(buffer, [0xbf, 0xf0]);
///
/// let mut cursor = BitCursor::attach(&buffer[..]);
/// assert_eq!(cursor.get_bits(3), 0b101);
/// assert_eq!(cursor.get_bits(9), 0x1ff);
/// // Only four bits are left
/// assert_eq!(cursor.get_bits(8), 0);
/// assert!(cursor.at_end());
/// assert!(cursor.is_truncated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitCursor<B> {
    data: B,
    /// The index of the current byte.
    byte_index: usize,
    /// The number of unused bits in the current byte, in [1 . . 8].
    bits_left: u32,
    /// Whether a read or a write hit the end of the buffer.
    truncated: bool,
}

impl<B: AsRef<[u8]>> BitCursor<B> {
    /// Creates a new cursor positioned at the first (most significant) bit
    /// of `data`.
    #[must_use]
    pub fn attach(data: B) -> Self {
        Self {
            data,
            byte_index: 0,
            bits_left: 8,
            truncated: false,
        }
    }

    /// Returns the length of the underlying buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the whole buffer has been read or written.
    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.byte_index >= self.len()
    }

    /// Returns the number of unused bits between the cursor and the end of
    /// the buffer.
    #[inline]
    pub fn bits_remaining(&self) -> u64 {
        if self.at_end() {
            0
        } else {
            (self.len() - self.byte_index - 1) as u64 * 8 + self.bits_left as u64
        }
    }

    /// Returns the position of the cursor in bits from the start of the
    /// buffer.
    #[inline]
    pub fn bit_pos(&self) -> u64 {
        self.byte_index as u64 * 8 + (8 - self.bits_left) as u64
    }

    /// Returns the number of bytes touched so far, counting a partially
    /// used last byte.
    #[inline]
    pub fn bytes_consumed(&self) -> usize {
        if !self.at_end() && self.bits_left < 8 {
            self.byte_index + 1
        } else {
            self.byte_index
        }
    }

    /// Returns true if some read or write could not be completed because
    /// the end of the buffer was reached.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_ref()
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    /// Read `n` bits, most significant first, and return them in the lowest
    /// bits of the result.
    ///
    /// If the buffer ends before `n` bits have been read, the result
    /// contains only the bits that were available.
    pub fn get_bits(&mut self, mut n: usize) -> u32 {
        debug_assert!(n <= 32);
        let mut value = 0_u32;
        while n > 0 {
            let Some(&byte) = self.data.as_ref().get(self.byte_index) else {
                self.truncated = true;
                break;
            };
            let take = (n as u32).min(self.bits_left);
            let shift = self.bits_left - take;
            let chunk = (byte as u32 >> shift) & ((1 << take) - 1);
            value = (value << take) | chunk;
            self.advance(take);
            n -= take as usize;
        }
        value
    }

    #[inline(always)]
    fn advance(&mut self, bits: u32) {
        self.bits_left -= bits;
        if self.bits_left == 0 {
            self.byte_index += 1;
            self.bits_left = 8;
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BitCursor<B> {
    /// Write the lowest `n` bits of `value`, most significant first.
    ///
    /// Bits that do not fit in the buffer are discarded.
    pub fn put_bits(&mut self, value: u32, mut n: usize) {
        debug_assert!(n <= 32);
        #[cfg(feature = "checks")]
        assert!(
            n >= 32 || value >> n == 0,
            "Value {} does not fit in {} bits",
            value,
            n
        );
        while n > 0 {
            let byte_index = self.byte_index;
            let Some(byte) = self.data.as_mut().get_mut(byte_index) else {
                self.truncated = true;
                break;
            };
            let take = (n as u32).min(self.bits_left);
            let shift = self.bits_left - take;
            let chunk = (value >> (n as u32 - take)) & ((1 << take) - 1);
            *byte |= (chunk << shift) as u8;
            self.advance(take);
            n -= take as usize;
        }
    }
}

impl<B: AsRef<[u8]>> BitRead for BitCursor<B> {
    #[inline(always)]
    fn read_bits(&mut self, n: usize) -> u32 {
        self.get_bits(n)
    }

    #[inline(always)]
    fn bits_remaining(&self) -> u64 {
        BitCursor::bits_remaining(self)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BitWrite for BitCursor<B> {
    #[inline]
    fn write_bits(&mut self, value: u32, n: usize) -> usize {
        let available = BitCursor::bits_remaining(self);
        self.put_bits(value, n);
        (n as u64).min(available) as usize
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.at_end()
    }
}

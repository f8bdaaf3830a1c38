/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Sequential, streaming, MSB-first bit-by-bit reads.
///
/// This trait specify basic operations over which codes can be implemented
/// by traits such as
/// [`GolombRiceRead`](crate::codes::GolombRiceRead).
///
/// Reads never fail: an implementation that runs out of data returns the
/// bits it could read in the lowest bits of the result, zero-extended. Code
/// readers that must not consume a partial value are expected to check
/// [`bits_remaining`](BitRead::bits_remaining) first.
pub trait BitRead {
    /// Read `n` bits and return them in the lowest bits.
    ///
    /// `n` must be at most 32.
    fn read_bits(&mut self, n: usize) -> u32;

    /// Returns the number of bits that can still be read.
    fn bits_remaining(&self) -> u64;

    /// Returns true if no bit can be read anymore.
    #[inline(always)]
    fn at_end(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Read a single bit.
    #[inline(always)]
    fn read_bit(&mut self) -> bool {
        self.read_bits(1) != 0
    }
}

/// Sequential, streaming, MSB-first bit-by-bit writes.
///
/// This trait specify basic operations over which codes can be implemented
/// by traits such as
/// [`GolombRiceWrite`](crate::codes::GolombRiceWrite).
///
/// Writes never fail: bits that do not fit in the underlying storage are
/// silently discarded, and the return value of
/// [`write_bits`](BitWrite::write_bits) tells how many were actually stored.
pub trait BitWrite {
    /// Write the lowest `n` bits of `value` to the stream and return the
    /// number of bits written, that is, `n` unless the stream is full.
    ///
    /// `n` must be at most 32. The other bits of `value` are ignored, but
    /// with the feature `checks` implementors should panic if they are not
    /// zero.
    fn write_bits(&mut self, value: u32, n: usize) -> usize;

    /// Returns true if the stream cannot store any more bits.
    fn is_full(&self) -> bool;

    /// Write a single bit.
    #[inline(always)]
    fn write_bit(&mut self, bit: bool) -> usize {
        self.write_bits(bit as u32, 1)
    }

    /// Write `count` copies of `bit` and return the number of bits written.
    ///
    /// Runs are emitted in chunks of at most 16 bits.
    fn write_repeated(&mut self, bit: bool, mut count: usize) -> usize {
        let pattern = if bit { 0xFFFF } else { 0 };
        let mut written = 0;
        while count > 0 {
            let chunk = count.min(16);
            written += self.write_bits(pattern >> (16 - chunk), chunk);
            count -= chunk;
        }
        written
    }
}

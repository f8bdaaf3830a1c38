/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// Wrapping struct that keep tracks of written bits. Optionally,
/// prints to standard error information about methods called.
///
/// Printing requires the `std` feature.
#[derive(Debug, Clone)]
pub struct CountBitWrite<BW: BitWrite, const PRINT: bool = false> {
    bit_write: BW,
    /// The number of bits written so far on the underlying [`BitWrite`].
    pub bits_written: usize,
}

impl<BW: BitWrite, const PRINT: bool> CountBitWrite<BW, PRINT> {
    pub fn new(bit_write: BW) -> Self {
        Self {
            bit_write,
            bits_written: 0,
        }
    }

    pub fn into_inner(self) -> BW {
        self.bit_write
    }
}

impl<BW: BitWrite, const PRINT: bool> BitWrite for CountBitWrite<BW, PRINT> {
    fn write_bits(&mut self, value: u32, n_bits: usize) -> usize {
        let written = self.bit_write.write_bits(value, n_bits);
        self.bits_written += written;
        #[cfg(feature = "std")]
        if PRINT {
            eprintln!(
                "write_bits({:#010x}, {}) = {} (total = {})",
                value, n_bits, written, self.bits_written
            );
        }
        written
    }

    fn is_full(&self) -> bool {
        self.bit_write.is_full()
    }
}

/// Wrapping struct that keep tracks of read bits. Optionally,
/// prints to standard error information about methods called.
///
/// Printing requires the `std` feature.
#[derive(Debug, Clone)]
pub struct CountBitRead<BR: BitRead, const PRINT: bool = false> {
    bit_read: BR,
    /// The number of bits read so far from the underlying [`BitRead`].
    pub bits_read: usize,
}

impl<BR: BitRead, const PRINT: bool> CountBitRead<BR, PRINT> {
    pub fn new(bit_read: BR) -> Self {
        Self {
            bit_read,
            bits_read: 0,
        }
    }

    pub fn into_inner(self) -> BR {
        self.bit_read
    }
}

impl<BR: BitRead, const PRINT: bool> BitRead for CountBitRead<BR, PRINT> {
    fn read_bits(&mut self, n_bits: usize) -> u32 {
        let before = self.bit_read.bits_remaining();
        let value = self.bit_read.read_bits(n_bits);
        self.bits_read += (before - self.bit_read.bits_remaining()) as usize;
        #[cfg(feature = "std")]
        if PRINT {
            eprintln!(
                "read_bits({}) = {:#010x} (total = {})",
                n_bits, value, self.bits_read
            );
        }
        value
    }

    fn bits_remaining(&self) -> u64 {
        self.bit_read.bits_remaining()
    }
}

/// A [`BitWrite`] that stores nothing and only counts the bits written to
/// it; it is never full.
///
/// It is used to compute the length of an encoding without an output
/// buffer (see [`encoded_bits`](crate::rlgr::encoded_bits)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitCounter {
    /// The number of bits written so far.
    pub bits_written: u64,
}

impl BitWrite for BitCounter {
    #[inline(always)]
    fn write_bits(&mut self, _value: u32, n_bits: usize) -> usize {
        self.bits_written += n_bits as u64;
        n_bits
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        false
    }
}

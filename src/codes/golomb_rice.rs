/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Adaptive Golomb−Rice codes.
//!
//! Rice codes (AKA Golomb−Rice codes) are Golomb codes whose parameter *b*
//! is a power of two. The RLGR flavor writes the quotient *v* >> *kr* as a
//! sequence of ones terminated by a zero, followed by the *kr* lowest bits of
//! *v*. Thus, with *kr* = 1 the first few codewords are:
//!
//! | Arg | Codeword |
//! |-----|---------:|
//! | 0   |       00 |
//! | 1   |       01 |
//! | 2   |      100 |
//! | 3   |      101 |
//! | 4   |     1100 |
//!
//! The parameter is not fixed: *kr* is the effective value of an
//! [`AdaptiveParam`] *krp* that is updated after each codeword depending on
//! the length *vk* of the unary prefix: *krp* decreases by two if *vk* = 0,
//! is unchanged if *vk* = 1, and increases by *vk* otherwise.
//!
//! # References
//!
//! [MS-RDPRFX] “Remote Desktop Protocol: RemoteFX Codec Extension”,
//! section 3.1.8.1.7.3, RLGR1/RLGR3 Pseudocode.

use crate::codes::params::AdaptiveParam;
use crate::traits::*;

/// Returns the length of the Golomb−Rice code for `value` with parameter
/// `kr`.
#[must_use]
#[inline(always)]
pub fn len_golomb_rice(value: u32, kr: u32) -> usize {
    debug_assert!(kr < 32);
    (value >> kr) as usize + 1 + kr as usize
}

#[inline(always)]
fn adapt(krp: &mut AdaptiveParam, vk: u64) {
    match vk {
        0 => {
            krp.update(-2);
        }
        1 => {}
        _ => {
            krp.increase(vk);
        }
    }
}

/// Trait for reading adaptive Golomb−Rice codes.
pub trait GolombRiceRead: BitRead {
    /// Reads a codeword with parameter `krp`, and updates `krp`.
    ///
    /// Returns `None`, leaving `krp` untouched, if the stream ends before
    /// the terminating zero of the unary prefix or before the remainder.
    /// In that case the bits of the prefix read so far are consumed, and the
    /// position of the stream is left undefined.
    #[inline]
    fn read_golomb_rice(&mut self, krp: &mut AdaptiveParam) -> Option<u32> {
        let mut vk = 0_u64;
        loop {
            if self.at_end() {
                return None;
            }
            if !self.read_bit() {
                break;
            }
            vk += 1;
        }

        let kr = krp.get();
        if self.bits_remaining() < kr as u64 {
            return None;
        }
        let value = ((vk as u32) << kr) | self.read_bits(kr as usize);
        adapt(krp, vk);
        Some(value)
    }
}

/// Trait for writing adaptive Golomb−Rice codes.
pub trait GolombRiceWrite: BitWrite {
    /// Writes `value` with parameter `krp`, updates `krp`, and returns the
    /// number of bits written.
    #[inline]
    fn write_golomb_rice(&mut self, value: u32, krp: &mut AdaptiveParam) -> usize {
        let kr = krp.get();
        let vk = value >> kr;
        let mut written_bits = self.write_repeated(true, vk as usize);
        written_bits += self.write_bit(false);
        if kr != 0 {
            written_bits += self.write_bits(value & ((1 << kr) - 1), kr as usize);
        }
        adapt(krp, vk as u64);
        written_bits
    }
}

impl<B: BitRead + ?Sized> GolombRiceRead for B {}
impl<B: BitWrite + ?Sized> GolombRiceWrite for B {}

/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{DecodeStatus, RlgrMode};
use crate::codes::params::*;
use crate::codes::GolombRiceRead;
use crate::impls::BitCursor;
use crate::traits::*;
use crate::utils::ToCoefficient;

/// The output buffer of a decoding call.
///
/// Coefficients beyond the capacity of the buffer are discarded.
struct Output<'a> {
    data: &'a mut [i16],
    len: usize,
}

impl<'a> Output<'a> {
    fn new(data: &'a mut [i16]) -> Self {
        Self { data, len: 0 }
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.data.len() - self.len
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    #[inline(always)]
    fn push(&mut self, value: i16) {
        if let Some(slot) = self.data.get_mut(self.len) {
            *slot = value;
            self.len += 1;
        }
    }

    #[inline]
    fn push_zeros(&mut self, count: u64) {
        let count = count.min(self.remaining() as u64) as usize;
        self.data[self.len..self.len + count].fill(0);
        self.len += count;
    }
}

/// Decodes coefficients from `data` into `output`.
///
/// Decoding stops when `data` is exhausted or `output` is full, whichever
/// comes first; the returned status contains the number of coefficients
/// written. The output buffer is never written beyond its length, whatever
/// the content of `data`.
///
/// See [`decode_tile`] for a version that zero-fills the part of `output`
/// not covered by the bit stream.
pub fn decode(mode: RlgrMode, data: &[u8], output: &mut [i16]) -> DecodeStatus {
    let mut reader = BitCursor::attach(data);
    decode_from(mode, &mut reader, output)
}

/// Decodes coefficients like [`decode`], and then sets to zero the
/// remaining part of `output`.
///
/// This is what a tile decoder needs before the inverse wavelet transform:
/// a plane whose bit stream ends early (for example, because its last
/// coefficients are zero) is completed with zeros. The returned status
/// still reports the number of coefficients actually decoded.
pub fn decode_tile(mode: RlgrMode, data: &[u8], output: &mut [i16]) -> DecodeStatus {
    let status = decode(mode, data, output);
    output[status.samples..].fill(0);
    status
}

/// Decodes coefficients from an arbitrary [`BitRead`] into `output`.
///
/// Decoding starts from the initial RLGR parameters, stops when `reader`
/// [is at end](BitRead::at_end) or `output` is full, and never reads a
/// partial code: if the stream ends in the middle of a code, the code is
/// ignored.
pub fn decode_from<R: BitRead + ?Sized>(
    mode: RlgrMode,
    reader: &mut R,
    output: &mut [i16],
) -> DecodeStatus {
    let start = reader.bits_remaining();
    let mut output = Output::new(output);
    let mut kp = AdaptiveParam::default();
    let mut krp = AdaptiveParam::default();

    'decode: while !reader.at_end() && !output.is_full() {
        if kp.get() != 0 {
            // Run-length mode: each zero stands for a full run of 2ᵏ zeros
            loop {
                if reader.at_end() {
                    break 'decode;
                }
                if reader.read_bit() {
                    break;
                }
                output.push_zeros(1 << kp.get());
                kp.update(UP_GR);
            }

            let k = kp.get();
            if reader.bits_remaining() < k as u64 {
                break;
            }
            let run = reader.read_bits(k as usize);
            output.push_zeros(run as u64);

            if reader.at_end() {
                break;
            }
            let negative = reader.read_bit();
            let Some(code) = reader.read_golomb_rice(&mut krp) else {
                break;
            };
            kp.update(-DN_GR);

            let magnitude = code.wrapping_add(1) as i16;
            output.push(if negative {
                magnitude.wrapping_neg()
            } else {
                magnitude
            });
        } else {
            let Some(code) = reader.read_golomb_rice(&mut krp) else {
                break;
            };
            match mode {
                RlgrMode::Rlgr1 => {
                    kp.update(if code == 0 { UQ_GR } else { -DQ_GR });
                    output.push(code.to_coefficient());
                }
                RlgrMode::Rlgr3 => {
                    // The first value is written in as many bits as the sum
                    let n_idx = u32::BITS - code.leading_zeros();
                    if reader.bits_remaining() < n_idx as u64 {
                        break;
                    }
                    let first = reader.read_bits(n_idx as usize);
                    let second = code.wrapping_sub(first);

                    if first != 0 && second != 0 {
                        kp.update(-2 * DQ_GR);
                    } else if first == 0 && second == 0 {
                        kp.update(2 * UQ_GR);
                    }

                    output.push(first.to_coefficient());
                    output.push(second.to_coefficient());
                }
            }
        }
    }

    DecodeStatus {
        samples: output.len,
        bits_consumed: start - reader.bits_remaining(),
        complete: output.is_full(),
    }
}

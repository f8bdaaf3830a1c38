/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{EncodeStatus, RlgrMode};
use crate::codes::params::*;
use crate::codes::GolombRiceWrite;
use crate::impls::BitCursor;
use crate::traits::*;
use crate::utils::{BitCounter, ToTwoMs};

/// Encodes `input` into `output` and returns the length of the encoding.
///
/// `output` is cleared before encoding. Encoding stops when `input` is
/// exhausted or `output` is full: in the latter case, the returned status
/// is not [complete](EncodeStatus::complete) and the encoding is truncated.
///
/// When decoding, the number of coefficients must be known: the last byte
/// of the encoding is padded with zeros, and a run of zeros at the end of
/// the input is followed by a placeholder term (a positive sign and the
/// Golomb−Rice code of zero) that decodes as a spurious 1 beyond the last
/// coefficient. Existing RemoteFX decoders require the placeholder.
pub fn encode(mode: RlgrMode, input: &[i16], output: &mut [u8]) -> EncodeStatus {
    output.fill(0);
    let mut writer = BitCursor::attach(output);
    let samples = encode_to(mode, input, &mut writer);
    EncodeStatus {
        bytes: writer.bytes_consumed(),
        samples,
        complete: samples == input.len() && !writer.is_truncated(),
    }
}

/// Returns the length in bits of the encoding of `input`.
///
/// # Example
/// ```
/// use rfx_rlgr::prelude::*;
///
/// assert_eq!(encoded_bits(RlgrMode::Rlgr1, &[]), 0);
/// assert_eq!(encoded_bits(RlgrMode::Rlgr1, &[0, 0, 3]), 7);
/// assert_eq!(encoded_bits(RlgrMode::Rlgr1, &[0, 0, 0, 0, 5, -3, 0, 0]), 20);
/// ```
pub fn encoded_bits(mode: RlgrMode, input: &[i16]) -> u64 {
    let mut counter = BitCounter::default();
    encode_to(mode, input, &mut counter);
    counter.bits_written
}

/// Encodes `input` into an arbitrary [`BitWrite`] and returns the number of
/// coefficients processed.
///
/// Encoding starts from the initial RLGR parameters and stops when `input`
/// is exhausted or `writer` [is full](BitWrite::is_full).
pub fn encode_to<W: BitWrite + ?Sized>(mode: RlgrMode, input: &[i16], writer: &mut W) -> usize {
    let mut kp = AdaptiveParam::default();
    let mut krp = AdaptiveParam::default();
    let mut pos = 0;

    while pos < input.len() && !writer.is_full() {
        if kp.get() != 0 {
            // Run-length mode
            let mut run = input[pos..].iter().take_while(|&&x| x == 0).count();
            pos += run;

            // k might change during the run, and with it the length of a
            // full run
            while run >= 1 << kp.get() {
                writer.write_bit(false);
                run -= 1 << kp.get();
                kp.update(UP_GR);
            }
            writer.write_bit(true);
            writer.write_bits(run as u32, kp.get() as usize);

            // A run reaching the end of the input is followed by a
            // placeholder term, which decoders expect and then discard
            let magnitude = match input.get(pos) {
                Some(&value) => {
                    pos += 1;
                    writer.write_bit(value < 0);
                    value.unsigned_abs() as u32 - 1
                }
                None => {
                    writer.write_bit(false);
                    0
                }
            };
            writer.write_golomb_rice(magnitude, &mut krp);
            kp.update(-DN_GR);
        } else {
            match mode {
                RlgrMode::Rlgr1 => {
                    let two_ms = input[pos].to_two_ms();
                    pos += 1;
                    writer.write_golomb_rice(two_ms, &mut krp);
                    kp.update(if two_ms == 0 { UQ_GR } else { -DQ_GR });
                }
                RlgrMode::Rlgr3 => {
                    // An odd last coefficient is paired with a zero
                    let first = input[pos].to_two_ms();
                    let second = input.get(pos + 1).map_or(0, |x| x.to_two_ms());
                    pos = (pos + 2).min(input.len());

                    let sum = first + second;
                    writer.write_golomb_rice(sum, &mut krp);
                    writer.write_bits(first, (u32::BITS - sum.leading_zeros()) as usize);

                    if first != 0 && second != 0 {
                        kp.update(-2 * DQ_GR);
                    } else if first == 0 && second == 0 {
                        kp.update(2 * UQ_GR);
                    }
                }
            }
        }
    }

    pos
}

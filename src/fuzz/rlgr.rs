/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

const SENTINEL: i16 = 0x5555;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    mode: RlgrMode,
    coefficients: Vec<i16>,
    garbage: Vec<u8>,
    capacity: u16,
    buffer_len: u16,
}

pub fn harness(data: FuzzCase) {
    let mode = data.mode;

    // Decoding arbitrary bytes must not write beyond the output
    let capacity = data.capacity as usize % 8193;
    let mut output = vec![SENTINEL; capacity + 16];
    let status = decode(mode, &data.garbage, &mut output[..capacity]);
    assert!(status.samples <= capacity);
    assert_eq!(status.complete, status.samples == capacity);
    assert!(status.bits_consumed <= data.garbage.len() as u64 * 8);
    assert!(output[capacity..].iter().all(|&x| x == SENTINEL));

    // Round trip through a buffer of the exact size
    let coefficients = &data.coefficients;
    let bits = encoded_bits(mode, coefficients);
    let mut buffer = vec![0_u8; bits.div_ceil(8) as usize];
    let status = encode(mode, coefficients, &mut buffer);
    assert!(status.complete);
    assert_eq!(status.bytes, buffer.len());
    assert_eq!(status.samples, coefficients.len());

    let mut decoded = vec![SENTINEL; coefficients.len()];
    let status = decode(mode, &buffer, &mut decoded);
    assert!(status.complete);
    assert_eq!(&decoded, coefficients);

    // A short buffer yields a prefix of the full encoding
    let buffer_len = (data.buffer_len as usize).min(buffer.len());
    let mut short = vec![0xff_u8; buffer_len];
    let status = encode(mode, coefficients, &mut short);
    assert!(status.bytes <= buffer_len);
    assert_eq!(status.complete, buffer_len == buffer.len());
    assert_eq!(&short[..], &buffer[..buffer_len]);
}

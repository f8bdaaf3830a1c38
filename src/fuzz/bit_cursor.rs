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

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    len: u8,
    writes: Vec<(u32, u8)>,
}

pub fn harness(data: FuzzCase) {
    let len = data.len as usize % 64;
    let writes = data
        .writes
        .iter()
        .map(|&(value, n_bits)| {
            let n_bits = 1 + n_bits as usize % 32;
            (value & (u32::MAX >> (32 - n_bits)), n_bits)
        })
        .collect::<Vec<_>>();

    let mut buffer = vec![0_u8; len];
    let mut writer = BitCursor::attach(&mut buffer[..]);
    let mut total_bits = 0_u64;
    for &(value, n_bits) in &writes {
        let available = writer.bits_remaining();
        assert_eq!(
            writer.write_bits(value, n_bits) as u64,
            (n_bits as u64).min(available)
        );
        total_bits += n_bits as u64;
        assert_eq!(writer.bit_pos(), total_bits.min(len as u64 * 8));
    }
    assert_eq!(writer.is_truncated(), total_bits > len as u64 * 8);
    assert_eq!(writer.bytes_consumed() as u64, total_bits.min(len as u64 * 8).div_ceil(8));

    let mut reader = BitCursor::attach(&buffer[..]);
    for &(value, n_bits) in &writes {
        let available = reader.bits_remaining();
        let read = reader.read_bits(n_bits);
        if n_bits as u64 <= available {
            assert_eq!(read, value);
        } else {
            // Only the highest bits made it to the buffer
            let shift = (n_bits - available as usize) as u32;
            assert_eq!(read, value.checked_shr(shift).unwrap_or(0));
        }
    }
    assert_eq!(reader.is_truncated(), total_bits > len as u64 * 8);
}

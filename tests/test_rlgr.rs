/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::error::Error;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rfx_rlgr::prelude::*;

const MODES: [RlgrMode; 2] = [RlgrMode::Rlgr1, RlgrMode::Rlgr3];
const SENTINEL: i16 = 0x5555;

/// Planes of `n` coefficients with different statistics.
fn planes(
    r: &mut SmallRng,
    n: usize,
) -> Result<Vec<Vec<i16>>, Box<dyn Error + Send + Sync + 'static>> {
    let normal = Normal::<f64>::new(0.0, 4.0)?;
    let zeros = vec![0_i16; n];
    // Mostly zeros, as in the high-frequency subbands
    let sparse: Vec<i16> = (0..n)
        .map(|_| {
            if r.random_bool(0.9) {
                0
            } else {
                normal.sample(&mut *r).round() as i16
            }
        })
        .collect();
    // Small values, as in the low-frequency subbands
    let dense: Vec<i16> = (0..n).map(|_| r.random_range(-100..=100)).collect();
    let uniform: Vec<i16> = (0..n).map(|_| r.random::<i16>()).collect();
    let extreme: Vec<i16> = (0..n)
        .map(|_| [i16::MIN, i16::MAX, 0, -1, 1][r.random_range(0..5)])
        .collect();
    Ok(vec![zeros, sparse, dense, uniform, extreme])
}

#[test]
fn test_round_trip() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let mut r = SmallRng::seed_from_u64(0);
    for n in [0, 1, 2, 3, 17, 64, 4096] {
        for plane in planes(&mut r, n)? {
            for mode in MODES {
                let bits = encoded_bits(mode, &plane);
                let mut buffer = vec![0_u8; bits.div_ceil(8) as usize + 8];
                let status = encode(mode, &plane, &mut buffer);
                assert!(status.complete, "{mode} {n}");
                assert_eq!(status.samples, n);
                assert_eq!(status.bytes as u64, bits.div_ceil(8));
                assert!(buffer[status.bytes..].iter().all(|&b| b == 0));

                let mut decoded = vec![SENTINEL; n];
                let status = decode(mode, &buffer[..status.bytes], &mut decoded);
                assert!(status.complete);
                assert_eq!(status.samples, n);
                assert_eq!(decoded, plane, "{mode} {n}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_golden() {
    #[rustfmt::skip]
    let cases: &[(RlgrMode, &[i16], &[u8])] = &[
        (RlgrMode::Rlgr1, &[0, 0, 0, 0, 5, -3, 0, 0], &[0x23, 0x2c, 0x00]),
        (RlgrMode::Rlgr3, &[0, 0, 0, 0, 5, -3, 0, 0], &[0x23, 0x2c, 0x00]),
        (RlgrMode::Rlgr1, &[0, 0, 0, 0, 5, -3, 1, -2, 0, 0, 7], &[0x23, 0x2c, 0x94, 0x3f, 0xff, 0x00]),
        (RlgrMode::Rlgr3, &[0, 0, 0, 0, 5, -3, 1, -2, 0, 0, 7], &[0x23, 0x2c, 0xd4, 0x7f, 0x38]),
        (RlgrMode::Rlgr1, &[1, 2, 3, 4, -1, 0, 0, 0, 0, 0, 0, 0, 0, 9], &[0x87, 0xb9, 0xe1, 0x00, 0xaf, 0x00]),
        (RlgrMode::Rlgr3, &[1, 2, 3, 4, -1, 0, 0, 0, 0, 0, 0, 0, 0, 9], &[0x87, 0xfe, 0x4c, 0xc0, 0x0c, 0xf0]),
        (RlgrMode::Rlgr1, &[0, 0], &[0x40]),
        (RlgrMode::Rlgr3, &[0, 0], &[0x40]),
        (RlgrMode::Rlgr1, &[0, 0, 0, 0], &[0x20]),
        (RlgrMode::Rlgr3, &[0, 0, 0, 0], &[0x20]),
    ];

    for &(mode, coefficients, bytes) in cases {
        let mut buffer = [0xaa_u8; 32];
        let status = encode(mode, coefficients, &mut buffer);
        assert!(status.complete);
        assert_eq!(&buffer[..status.bytes], bytes, "{mode} {coefficients:?}");

        let mut decoded = vec![SENTINEL; coefficients.len()];
        let status = decode(mode, bytes, &mut decoded);
        assert!(status.complete);
        assert_eq!(decoded, coefficients, "{mode} {coefficients:?}");
    }
}

#[test]
fn test_modes_differ() {
    // The two variants agree until Golomb−Rice mode pairs coefficients
    let plane = [0, 0, 0, 0, 5, -3, 1, -2, 0, 0, 7];
    let mut rlgr1 = [0_u8; 16];
    let mut rlgr3 = [0_u8; 16];
    encode(RlgrMode::Rlgr1, &plane, &mut rlgr1);
    encode(RlgrMode::Rlgr3, &plane, &mut rlgr3);
    assert_eq!(rlgr1[..2], rlgr3[..2]);
    assert_ne!(rlgr1, rlgr3);
}

#[test]
fn test_zero_run_adaptation() {
    // With the initial k = 1, two zeros are a full run: kp grows by UP_GR
    // (k is still 1), and the terminator, the empty residual, the sign and
    // the Golomb−Rice code of 2 follow: 0 1 0 0 10 0
    for mode in MODES {
        let mut buffer = [0_u8; 4];
        let status = encode(mode, &[0, 0, 3], &mut buffer);
        assert_eq!(status.bytes, 1);
        assert_eq!(buffer[0], 0x48);
        assert_eq!(encoded_bits(mode, &[0, 0, 3]), 7);

        let mut decoded = [SENTINEL; 3];
        let mut reader = CountBitRead::<_>::new(BitCursor::attach(&buffer[..1]));
        let status = decode_from(mode, &mut reader, &mut decoded);
        assert_eq!(decoded, [0, 0, 3]);
        assert_eq!(status.bits_consumed, 7);
        assert_eq!(reader.bits_read, 7);
    }
}

#[test]
fn test_trailing_run() {
    // A run of zeros reaching the end of the input is followed by a
    // placeholder term, and must be decoded knowing the number of
    // coefficients
    for mode in MODES {
        for n in 1..64 {
            let mut plane = vec![0_i16; n];
            plane[0] = 1;
            let bits = encoded_bits(mode, &plane);
            let mut buffer = vec![0_u8; bits.div_ceil(8) as usize];
            encode(mode, &plane, &mut buffer);
            let mut decoded = vec![SENTINEL; n];
            assert!(decode(mode, &buffer, &mut decoded).complete);
            assert_eq!(decoded, plane);
        }
    }
}

#[test]
fn test_trailing_term() {
    // A decoder reading one coefficient more than the plane holds sees the
    // placeholder term after a trailing run as a 1, and stays within the
    // encoded bytes
    for mode in MODES {
        for n in 1..256 {
            let plane = vec![0_i16; n];
            let bits = encoded_bits(mode, &plane);
            let mut buffer = vec![0_u8; bits.div_ceil(8) as usize];
            assert!(encode(mode, &plane, &mut buffer).complete);

            let mut decoded = vec![SENTINEL; n + 17];
            let status = decode(mode, &buffer, &mut decoded[..n + 1]);
            assert!(status.complete, "{mode} {n}");
            assert_eq!(status.bits_consumed, bits);
            assert!(decoded[..n].iter().all(|&x| x == 0));
            assert_eq!(decoded[n], 1);
            assert!(decoded[n + 1..].iter().all(|&x| x == SENTINEL));
        }
    }

    // Planes ending with a run of zeros after nonzero coefficients
    let mut r = SmallRng::seed_from_u64(5);
    for _ in 0..1000 {
        let mode = MODES[r.random_range(0..2)];
        let mut plane = (0..r.random_range(1..64))
            .map(|_| r.random_range(-50..=50))
            .collect::<Vec<i16>>();
        plane.extend(core::iter::repeat_n(0, r.random_range(1..64)));

        let bits = encoded_bits(mode, &plane);
        let mut buffer = vec![0_u8; bits.div_ceil(8) as usize];
        assert!(encode(mode, &plane, &mut buffer).complete);

        let capacity = plane.len() + r.random_range(0..64);
        let mut decoded = vec![SENTINEL; capacity + 16];
        let status = decode(mode, &buffer, &mut decoded[..capacity]);
        assert!(status.bits_consumed <= buffer.len() as u64 * 8);
        assert!(status.samples >= plane.len());
        assert_eq!(decoded[..plane.len()], plane);
        assert!(decoded[capacity..].iter().all(|&x| x == SENTINEL));
    }
}

#[test]
fn test_empty() {
    for mode in MODES {
        let mut buffer = [0_u8; 8];
        let status = encode(mode, &[], &mut buffer);
        assert_eq!(status.bytes, 0);
        assert!(status.complete);

        let mut decoded = [SENTINEL; 8];
        let status = decode(mode, &buffer[..0], &mut decoded);
        assert_eq!(status.samples, 0);
        assert!(!status.complete);
        assert_eq!(decoded, [SENTINEL; 8]);

        let status = decode_tile(mode, &buffer[..0], &mut decoded);
        assert_eq!(status.samples, 0);
        assert_eq!(decoded, [0; 8]);
    }
}

#[test]
fn test_capacity_safety() {
    let mut r = SmallRng::seed_from_u64(1);
    for _ in 0..1000 {
        let mode = MODES[r.random_range(0..2)];
        let mut data = vec![0_u8; r.random_range(0..256)];
        r.fill(&mut data[..]);
        let capacity = r.random_range(0..1024);

        let mut output = vec![SENTINEL; capacity + 16];
        let status = decode(mode, &data, &mut output[..capacity]);
        assert!(status.samples <= capacity);
        assert_eq!(status.complete, status.samples == capacity);
        assert!(status.bits_consumed <= data.len() as u64 * 8);
        assert!(output[capacity..].iter().all(|&x| x == SENTINEL));

        let status = decode_tile(mode, &data, &mut output[..capacity]);
        assert!(output[status.samples..capacity].iter().all(|&x| x == 0));
        assert!(output[capacity..].iter().all(|&x| x == SENTINEL));
    }
}

#[test]
fn test_truncated_encoding() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let mut r = SmallRng::seed_from_u64(2);
    for plane in planes(&mut r, 256)? {
        for mode in MODES {
            let bytes = encoded_bits(mode, &plane).div_ceil(8) as usize;
            let mut full = vec![0_u8; bytes];
            assert!(encode(mode, &plane, &mut full).complete);

            for _ in 0..10 {
                if bytes == 0 {
                    break;
                }
                let len = r.random_range(0..bytes);
                let mut short = vec![0xff_u8; len];
                let status = encode(mode, &plane, &mut short);
                assert!(!status.complete);
                assert_eq!(status.bytes, len);
                assert_eq!(short, full[..len]);

                // The coefficients decoded from a prefix are a prefix
                let mut decoded = vec![SENTINEL; plane.len()];
                let samples = decode(mode, &short, &mut decoded).samples;
                assert_eq!(decoded[..samples], plane[..samples]);
            }
        }
    }
    Ok(())
}

#[test]
fn test_count_wrappers() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let mut r = SmallRng::seed_from_u64(3);
    for plane in planes(&mut r, 1024)? {
        for mode in MODES {
            let bits = encoded_bits(mode, &plane);
            let mut buffer = vec![0_u8; bits.div_ceil(8) as usize];
            let mut writer = CountBitWrite::<_>::new(BitCursor::attach(&mut buffer[..]));
            assert_eq!(encode_to(mode, &plane, &mut writer), plane.len());
            assert_eq!(writer.bits_written as u64, bits);
            assert!(!writer.into_inner().is_truncated());

            let mut decoded = vec![SENTINEL; plane.len()];
            let mut reader = CountBitRead::<_>::new(BitCursor::attach(&buffer[..]));
            let status = decode_from(mode, &mut reader, &mut decoded);
            assert_eq!(reader.bits_read as u64, status.bits_consumed);
            assert!(status.bits_consumed >= bits);
            assert_eq!(decoded, plane);
        }
    }
    Ok(())
}

#[test]
fn test_stats() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let mut r = SmallRng::seed_from_u64(4);
    let mut stats = RlgrStats::default();
    let mut total = [0, 0];
    for plane in planes(&mut r, 4096)? {
        let best = stats.update(&plane);
        let mut bytes = [0, 0];
        for (i, mode) in MODES.into_iter().enumerate() {
            let mut buffer = vec![0_u8; encoded_bits(mode, &plane).div_ceil(8) as usize];
            bytes[i] = encode(mode, &plane, &mut buffer).bytes as u64;
            total[i] += bytes[i];
        }
        assert_eq!(best, if bytes[1] < bytes[0] { RlgrMode::Rlgr3 } else { RlgrMode::Rlgr1 });
    }
    assert_eq!(stats.planes, 5);
    assert_eq!(stats.samples, 5 * 4096);
    assert_eq!(stats.bytes(RlgrMode::Rlgr1), total[0]);
    assert_eq!(stats.bytes(RlgrMode::Rlgr3), total[1]);
    assert_eq!(stats.best_mode().1, total[0].min(total[1]));
    Ok(())
}

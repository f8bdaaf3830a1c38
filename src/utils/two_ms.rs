/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Maps a coefficient *v* to the natural number 2|*v*| − sign(*v*), where
/// sign(*v*) is one for negative values and zero otherwise.
///
/// Thus, 0, −1, 1, −2, 2, … are mapped to 0, 1, 2, 3, 4, …
pub trait ToTwoMs {
    fn to_two_ms(self) -> u32;
}

impl ToTwoMs for i16 {
    #[inline(always)]
    fn to_two_ms(self) -> u32 {
        if self >= 0 {
            2 * self as u32
        } else {
            2 * self.unsigned_abs() as u32 - 1
        }
    }
}

/// Inverse of [`ToTwoMs`].
///
/// Values that are not the image of a 16-bit coefficient, which can only be
/// read from corrupted streams, wrap around.
pub trait ToCoefficient {
    fn to_coefficient(self) -> i16;
}

impl ToCoefficient for u32 {
    #[inline(always)]
    fn to_coefficient(self) -> i16 {
        let magnitude = ((self as u64 + 1) >> 1) as i16;
        if self & 1 != 0 {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }
}

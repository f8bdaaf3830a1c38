/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::rlgr::{encoded_bits, RlgrMode};

/// Keeps track of the space needed to store a sequence of coefficient planes
/// using the two RLGR variants.
///
/// This structure can be used by an encoder to determine empirically which
/// variant provides the best compression for its content. You have to
/// [update the structure](Self::update) with the planes you encode; at any
/// time, you can examine the statistics or call
/// [`best_mode`](Self::best_mode) to get the best variant.
///
/// Since every plane is encoded independently, the lengths are accumulated
/// in bytes, as they would be in a tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlgrStats {
    /// The number of planes observed.
    pub planes: u64,
    /// The number of coefficients observed.
    pub samples: u64,
    /// The total space in bytes used by the planes if they were encoded
    /// using RLGR1.
    pub rlgr1: u64,
    /// The total space in bytes used by the planes if they were encoded
    /// using RLGR3.
    pub rlgr3: u64,
}

impl RlgrStats {
    /// Update the stats with the encoded lengths of `plane` and return
    /// the best variant for the plane.
    pub fn update(&mut self, plane: &[i16]) -> RlgrMode {
        let rlgr1 = encoded_bits(RlgrMode::Rlgr1, plane).div_ceil(8);
        let rlgr3 = encoded_bits(RlgrMode::Rlgr3, plane).div_ceil(8);
        self.planes += 1;
        self.samples += plane.len() as u64;
        self.rlgr1 += rlgr1;
        self.rlgr3 += rlgr3;
        if rlgr3 < rlgr1 {
            RlgrMode::Rlgr3
        } else {
            RlgrMode::Rlgr1
        }
    }

    /// Combines additively this stats with another one.
    pub fn add(&mut self, rhs: &Self) {
        self.planes += rhs.planes;
        self.samples += rhs.samples;
        self.rlgr1 += rhs.rlgr1;
        self.rlgr3 += rhs.rlgr3;
    }

    /// Returns the space in bytes used by `mode`.
    pub fn bytes(&self, mode: RlgrMode) -> u64 {
        match mode {
            RlgrMode::Rlgr1 => self.rlgr1,
            RlgrMode::Rlgr3 => self.rlgr3,
        }
    }

    /// Return the best variant and its space usage; ties favor RLGR1.
    pub fn best_mode(&self) -> (RlgrMode, u64) {
        if self.rlgr3 < self.rlgr1 {
            (RlgrMode::Rlgr3, self.rlgr3)
        } else {
            (RlgrMode::Rlgr1, self.rlgr1)
        }
    }
}

/// Combines additively this stats with another one.
impl core::ops::AddAssign for RlgrStats {
    fn add_assign(&mut self, rhs: Self) {
        self.add(&rhs);
    }
}

/// Combines additively this stats with another one creating a new one.
impl core::ops::Add for RlgrStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut res = self;
        res += rhs;
        res
    }
}

/// Allow to call .sum() on an iterator of RlgrStats.
impl core::iter::Sum for RlgrStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

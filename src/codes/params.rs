/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Adaptive parameters of the RLGR coder.

RLGR keeps two parameters, each stored as a *raw* value in [0 . . `KPMAX`]
and used through its *effective* value, the raw value shifted right by
[`LSGR`]: the run-length threshold *k* (raw value *kp*) and the Golomb−Rice
parameter *kr* (raw value *krp*). Both are represented by an
[`AdaptiveParam`], whose raw value can only change through
[`update`](AdaptiveParam::update), so the clamping invariant cannot be
violated.

*/

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Maximum raw value of an adaptive parameter.
pub const KPMAX: u32 = 80;
/// Shift converting a raw parameter into its effective value.
pub const LSGR: u32 = 3;
/// Increase of *kp* after a full zero run in run-length mode.
pub const UP_GR: i32 = 4;
/// Decrease of *kp* after a nonzero term in run-length mode.
pub const DN_GR: i32 = 6;
/// Increase of *kp* after a zero value in Golomb−Rice mode.
pub const UQ_GR: i32 = 3;
/// Decrease of *kp* after a nonzero value in Golomb−Rice mode.
pub const DQ_GR: i32 = 3;

/// A raw adaptive parameter, clamped to [0 . . `KPMAX`].
///
/// # Example
/// ```
/// use rfx_rlgr::codes::params::*;
///
/// let mut kp = AdaptiveParam::new(1);
/// assert_eq!(kp.raw(), 8);
/// assert_eq!(kp.update(UP_GR), 1);
/// assert_eq!(kp.update(UP_GR), 2);
/// assert_eq!(kp.update(-100), 0);
/// assert_eq!(kp.raw(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct AdaptiveParam {
    raw: u32,
}

impl AdaptiveParam {
    /// Creates a parameter whose effective value is `effective`.
    ///
    /// `effective` is clamped so that the raw value does not exceed
    /// [`KPMAX`].
    #[must_use]
    pub const fn new(effective: u32) -> Self {
        let raw = effective << LSGR;
        Self {
            raw: if raw > KPMAX { KPMAX } else { raw },
        }
    }

    /// Returns the raw value of the parameter.
    #[inline(always)]
    pub const fn raw(&self) -> u32 {
        self.raw
    }

    /// Returns the effective value of the parameter, that is, the raw value
    /// shifted right by [`LSGR`].
    #[inline(always)]
    pub const fn get(&self) -> u32 {
        self.raw >> LSGR
    }

    /// Adds `delta` to the raw value, clamps the result to [0 . . `KPMAX`],
    /// and returns the new effective value.
    #[inline]
    pub fn update(&mut self, delta: i32) -> u32 {
        let raw = (self.raw as i64 + delta as i64).clamp(0, KPMAX as i64);
        self.raw = raw as u32;
        self.get()
    }

    /// Like [`update`](AdaptiveParam::update), but for a nonnegative delta
    /// that might not fit an `i32`, such as the length of a unary prefix
    /// read from a corrupted stream.
    #[inline]
    pub fn increase(&mut self, delta: u64) -> u32 {
        self.raw = (self.raw as u64).saturating_add(delta).min(KPMAX as u64) as u32;
        self.get()
    }
}

impl Default for AdaptiveParam {
    /// The initial value of both RLGR parameters (effective value 1).
    fn default() -> Self {
        Self::new(1)
    }
}

/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for reading and writing the instantaneous codes used by RLGR.

The only code is the adaptive [Golomb−Rice code](golomb_rice), implemented
as a pair of traits for reading and writing ([`GolombRiceRead`] and
[`GolombRiceWrite`]) with blanket implementations for every
[`BitRead`](crate::traits::BitRead) and
[`BitWrite`](crate::traits::BitWrite), respectively. The adaptive parameters
and the tuning constants shared with the [`rlgr`](crate::rlgr) coder live in
[`params`].

*/

pub mod params;
pub use params::AdaptiveParam;

pub mod golomb_rice;
pub use golomb_rice::{len_golomb_rice, GolombRiceRead, GolombRiceWrite};

/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Helpers, debug wrappers, and statistics.

[`ToTwoMs`] and [`ToCoefficient`] convert between coefficients and the
natural numbers that RLGR codes in Golomb−Rice mode.

[`CountBitRead`] and [`CountBitWrite`] keep track of the number
of bits read or written to a [`BitRead`](crate::traits::BitRead)
and [`BitWrite`](crate::traits::BitWrite), respectively,
optionally printing on standard error the operations performed on the stream.
[`BitCounter`] is a [`BitWrite`](crate::traits::BitWrite) that just counts.

[`RlgrStats`] keeps track of the space needed to store a sequence of
coefficient planes using the two RLGR variants.

*/

mod two_ms;
pub use two_ms::*;

mod count;
pub use count::*;

pub mod stats;
pub use stats::RlgrStats;

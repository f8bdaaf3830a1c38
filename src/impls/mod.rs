/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of bit streams.

RemoteFX tiles are small and always fully in memory, so the only
implementation is [`BitCursor`], which reads or writes bits directly from a
byte slice (or anything implementing `AsRef<[u8]>`/`AsMut<[u8]>`) without an
intermediate bit buffer. The bit order is fixed to most significant bit
first, as mandated by the RemoteFX wire format.

*/

mod bit_cursor;
pub use bit_cursor::BitCursor;

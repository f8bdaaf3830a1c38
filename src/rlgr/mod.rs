/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The RemoteFX RLGR entropy coder.

RLGR (Run-Length Golomb−Rice) codes a plane of quantized wavelet
coefficients, usually the 4096 coefficients of a 64×64 tile, by switching
adaptively between two regimes depending on the current value of the
parameter *k*:

- when *k* ≠ 0 (*run-length mode*) a run of zeros is coded as a sequence of
  zeros, each standing for 2*ᵏ* zeros, a terminating one, the residual run
  length in *k* bits and, if the run was ended by a nonzero coefficient, its
  sign bit followed by the [Golomb−Rice code](crate::codes::golomb_rice) of
  its magnitude minus one;
- when *k* = 0 (*Golomb−Rice mode*) coefficients are mapped to natural
  numbers by [2|*v*| − sign(*v*)](crate::utils::ToTwoMs) and Golomb−Rice
  coded, one at a time in [RLGR1](RlgrMode::Rlgr1) or in pairs in
  [RLGR3](RlgrMode::Rlgr3).

Both *k* and the Golomb−Rice parameter *kr* are [adaptive
parameters](crate::codes::params) that restart from their initial values at
each call: there is no state shared between planes or tiles.

Neither [`decode`] nor [`encode`] can fail. Corrupted or truncated input
yields fewer (or wrong) coefficients, and an output buffer that is too small
yields a truncated encoding; the [`DecodeStatus`] and [`EncodeStatus`]
returned by the calls tell whether the expected amount of output was
produced.

# Example
```
use rfx_rlgr::prelude::*;

let coefficients = [0, 0, 0, 0, 5, -3, 0, 0];
let mut buffer = [0_u8; 64];
let status = encode(RlgrMode::Rlgr1, &coefficients, &mut buffer);
assert!(status.complete);
assert_eq!(&buffer[..status.bytes], &[0x23, 0x2c, 0x00]);

let mut decoded = [0_i16; 8];
let status = decode(RlgrMode::Rlgr1, &buffer[..status.bytes], &mut decoded);
assert!(status.complete);
assert_eq!(decoded, coefficients);
```

# References

[MS-RDPRFX] “Remote Desktop Protocol: RemoteFX Codec Extension”,
section 3.1.8.1.7.3, RLGR1/RLGR3 Pseudocode.

*/

use core::fmt::{Display, Formatter};

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

mod decode;
pub use decode::{decode, decode_from, decode_tile};

mod encode;
pub use encode::{encode, encode_to, encoded_bits};

/// Value of the entropy algorithm field of an RFX tile set selecting
/// [`RlgrMode::Rlgr1`].
pub const CLW_ENTROPY_RLGR1: u8 = 0x01;
/// Value of the entropy algorithm field of an RFX tile set selecting
/// [`RlgrMode::Rlgr3`].
pub const CLW_ENTROPY_RLGR3: u8 = 0x04;

/// The two RLGR variants, which differ only in Golomb−Rice mode.
///
/// The variant is selected once per call by the RFX tile set header (see
/// [`TryFrom<u8>`](RlgrMode::try_from)); the two variants produce
/// incompatible bit streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum RlgrMode {
    /// Golomb−Rice mode codes one coefficient at a time.
    Rlgr1,
    /// Golomb−Rice mode codes two coefficients at a time.
    Rlgr3,
}

impl Display for RlgrMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RlgrMode::Rlgr1 => write!(f, "RLGR1"),
            RlgrMode::Rlgr3 => write!(f, "RLGR3"),
        }
    }
}

/// The error returned when an entropy algorithm field contains neither
/// [`CLW_ENTROPY_RLGR1`] nor [`CLW_ENTROPY_RLGR3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownEntropyAlgorithm(pub u8);

impl Display for UnknownEntropyAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unknown RemoteFX entropy algorithm: {:#04x}", self.0)
    }
}

impl core::error::Error for UnknownEntropyAlgorithm {}

impl TryFrom<u8> for RlgrMode {
    type Error = UnknownEntropyAlgorithm;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            CLW_ENTROPY_RLGR1 => Ok(RlgrMode::Rlgr1),
            CLW_ENTROPY_RLGR3 => Ok(RlgrMode::Rlgr3),
            _ => Err(UnknownEntropyAlgorithm(value)),
        }
    }
}

impl From<RlgrMode> for u8 {
    fn from(mode: RlgrMode) -> Self {
        match mode {
            RlgrMode::Rlgr1 => CLW_ENTROPY_RLGR1,
            RlgrMode::Rlgr3 => CLW_ENTROPY_RLGR3,
        }
    }
}

/// The outcome of a call to [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeStatus {
    /// The number of coefficients stored in the output buffer.
    pub samples: usize,
    /// The number of bits read from the input.
    pub bits_consumed: u64,
    /// Whether the output buffer has been filled.
    pub complete: bool,
}

/// The outcome of a call to [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeStatus {
    /// The number of bytes of the output buffer containing the encoding.
    pub bytes: usize,
    /// The number of input coefficients processed.
    pub samples: usize,
    /// Whether all coefficients have been processed and all their bits
    /// stored in the output buffer.
    pub complete: bool,
}

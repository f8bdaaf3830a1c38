/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use rfx_rlgr::fuzz::rlgr::*;

fuzz_target!(|data: FuzzCase| harness(data));

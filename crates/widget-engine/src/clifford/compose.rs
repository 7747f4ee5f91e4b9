// Copyright 2024 The PECOS Developers
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! The 24x24 composition table for the deferred single-qubit Clifford
//! queue.
//!
//! Rather than transcribe 576 entries by hand, the table is built at
//! startup by actually running each pair of rules (via
//! [`super::rules::apply_single`]) against all four `(x, z)` inputs and
//! matching the result against the known 24 operations. This makes the
//! table correct by construction against whatever `rules` defines,
//! including the two corrected formulas.

use lazy_static::lazy_static;
use widget_core::gate::{SingleQubitOp, NUM_SINGLE_QUBIT_OPS};

use super::rules::apply_single;

lazy_static! {
    static ref COMPOSE_TABLE: [[SingleQubitOp; NUM_SINGLE_QUBIT_OPS]; NUM_SINGLE_QUBIT_OPS] =
        build_compose_table();
}

/// Returns the single operation equivalent to applying `existing` and then
/// `incoming` (the order gates arrive at a qubit in the instruction
/// stream).
#[must_use]
pub fn compose_right(existing: SingleQubitOp, incoming: SingleQubitOp) -> SingleQubitOp {
    COMPOSE_TABLE[existing.index()][incoming.index()]
}

fn apply_scalar(op: SingleQubitOp, x0: bool, z0: bool, r0: bool) -> (bool, bool, bool) {
    let mut x = [u64::from(x0)];
    let mut z = [u64::from(z0)];
    let mut r = [u64::from(r0)];
    apply_single(op, &mut x, &mut z, &mut r);
    (x[0] & 1 != 0, z[0] & 1 != 0, r[0] & 1 != 0)
}

fn composed_matches(first: SingleQubitOp, second: SingleQubitOp, candidate: SingleQubitOp) -> bool {
    for x0 in [false, true] {
        for z0 in [false, true] {
            let (x1, z1, r1) = apply_scalar(first, x0, z0, false);
            let (x2, z2, r2) = apply_scalar(second, x1, z1, r1);
            let (xc, zc, rc) = apply_scalar(candidate, x0, z0, false);
            if (x2, z2, r2) != (xc, zc, rc) {
                return false;
            }
        }
    }
    true
}

fn build_compose_table() -> [[SingleQubitOp; NUM_SINGLE_QUBIT_OPS]; NUM_SINGLE_QUBIT_OPS] {
    let mut table = [[SingleQubitOp::I; NUM_SINGLE_QUBIT_OPS]; NUM_SINGLE_QUBIT_OPS];
    for first in SingleQubitOp::ALL {
        for second in SingleQubitOp::ALL {
            let found = SingleQubitOp::ALL
                .into_iter()
                .find(|&candidate| composed_matches(first, second, candidate))
                .expect("the 24-element single-qubit Clifford group is closed under composition");
            table[first.index()][second.index()] = found;
        }
    }
    table
}

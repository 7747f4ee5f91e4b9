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

//! The stabilizer tableau: one Pauli generator per qubit, stored
//! column-major so that a single-qubit gate on qubit `q` touches exactly
//! one pair of word-slices (`x_cols[q]`, `z_cols[q]`) rather than every row.

use widget_core::bitslice::{alloc_words, first_set_bit, get_bit, set_bit, CTZ_SENTINEL};
use widget_core::gate::{SingleQubitOp, TwoQubitOp};

use crate::clifford::rules;

/// A bit-packed real-signed stabilizer tableau.
///
/// `capacity` columns/rows are allocated up front; `n_qubits` tracks how
/// many are currently live. Growing past `capacity` is a
/// [`widget_core::WidgetError::CapacityExceeded`] at the call site, not here.
pub struct Tableau {
    n_qubits: usize,
    capacity: usize,
    x_cols: Vec<Vec<u64>>,
    z_cols: Vec<Vec<u64>>,
    phases: Vec<u64>,
}

impl Tableau {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Tableau {
            n_qubits: 0,
            capacity,
            x_cols: (0..capacity).map(|_| alloc_words(capacity)).collect(),
            z_cols: (0..capacity).map(|_| alloc_words(capacity)).collect(),
            phases: alloc_words(capacity),
        }
    }

    #[must_use]
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Brings row/column `row` online with the default computational-basis
    /// stabilizer `Z_row`, and bumps `n_qubits` to include it.
    pub fn activate_qubit(&mut self, row: usize) {
        debug_assert!(row < self.capacity);
        set_bit(&mut self.z_cols[row], row, true);
        self.n_qubits = self.n_qubits.max(row + 1);
    }

    #[must_use]
    pub fn get_x(&self, row: usize, col: usize) -> bool {
        get_bit(&self.x_cols[col], row)
    }

    #[must_use]
    pub fn get_z(&self, row: usize, col: usize) -> bool {
        get_bit(&self.z_cols[col], row)
    }

    #[must_use]
    pub fn get_phase(&self, row: usize) -> bool {
        get_bit(&self.phases, row)
    }

    /// Index of the first row with a nonzero X entry in column `col`, within
    /// the live `n_qubits` range, or `None` if the column is entirely zero.
    #[must_use]
    pub fn first_nonzero_x_row(&self, col: usize) -> Option<usize> {
        match first_set_bit(&self.x_cols[col], self.n_qubits) {
            CTZ_SENTINEL => None,
            row => Some(row),
        }
    }

    /// Applies a single-qubit Clifford operation directly to the tableau.
    pub fn apply_single(&mut self, op: SingleQubitOp, targ: usize) {
        log::trace!("tableau: apply {op:?} on qubit {targ}");
        rules::apply_single(op, &mut self.x_cols[targ], &mut self.z_cols[targ], &mut self.phases);
    }

    /// Applies a single-qubit Clifford operation using the parallel rewrite
    /// seam: the column's word range is split into `chunk_width`-word
    /// chunks dispatched across the rayon pool, with the whole-column X/Z
    /// swap (if `op` has one) performed on this thread after the barrier.
    pub fn apply_single_parallel(&mut self, op: SingleQubitOp, targ: usize, chunk_width: usize) {
        log::trace!("tableau: apply {op:?} on qubit {targ} (parallel, chunk_width={chunk_width})");
        crate::parallel::apply_single_parallel(
            op,
            &mut self.x_cols[targ],
            &mut self.z_cols[targ],
            &mut self.phases,
            chunk_width,
        );
    }

    /// Applies a two-qubit Clifford operation (CX or CZ) directly to the
    /// tableau. `ctrl` and `targ` must differ.
    pub fn apply_two(&mut self, op: TwoQubitOp, ctrl: usize, targ: usize) {
        debug_assert_ne!(ctrl, targ);
        log::trace!("tableau: apply {op:?} ctrl={ctrl} targ={targ}");
        let (xc, xt) = two_mut(&mut self.x_cols, ctrl, targ);
        let (zc, zt) = two_mut(&mut self.z_cols, ctrl, targ);
        match op {
            TwoQubitOp::Cx => rules::apply_cx(xc, zc, xt, zt, &mut self.phases),
            TwoQubitOp::Cz => rules::apply_cz(xc, zc, xt, zt, &mut self.phases),
        }
    }

    /// Exchanges two stabilizer generators. Always legal: a stabilizer
    /// group's generating set is unordered, so permuting rows never
    /// changes the state it describes.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let pa = get_bit(&self.phases, a);
        let pb = get_bit(&self.phases, b);
        set_bit(&mut self.phases, a, pb);
        set_bit(&mut self.phases, b, pa);
        for col in 0..self.capacity {
            let xa = get_bit(&self.x_cols[col], a);
            let xb = get_bit(&self.x_cols[col], b);
            set_bit(&mut self.x_cols[col], a, xb);
            set_bit(&mut self.x_cols[col], b, xa);
            let za = get_bit(&self.z_cols[col], a);
            let zb = get_bit(&self.z_cols[col], b);
            set_bit(&mut self.z_cols[col], a, zb);
            set_bit(&mut self.z_cols[col], b, za);
        }
    }

    /// Row operation `h := h * i` (the Aaronson-Gottesman `rowsum`),
    /// combining stabilizer generator `i` into `h` and updating `h`'s phase.
    pub fn rowsum(&mut self, h: usize, i: usize) {
        debug_assert_ne!(h, i);
        let mut phase_sum: i32 = 2 * i32::from(self.get_phase(h)) + 2 * i32::from(self.get_phase(i));
        for col in 0..self.n_qubits {
            let (x1, z1) = (self.get_x(h, col), self.get_z(h, col));
            let (x2, z2) = (self.get_x(i, col), self.get_z(i, col));
            phase_sum += g(x1, z1, x2, z2);
        }
        let residue = phase_sum.rem_euclid(4);
        debug_assert!(residue == 0 || residue == 2, "rowsum phase must be real");
        set_bit(&mut self.phases, h, residue == 2);

        let (xh, xi) = two_mut(&mut self.x_cols, h, i);
        for (wh, wi) in xh.iter_mut().zip(xi.iter()) {
            *wh ^= *wi;
        }
        let (zh, zi) = two_mut(&mut self.z_cols, h, i);
        for (wh, wi) in zh.iter_mut().zip(zi.iter()) {
            *wh ^= *wi;
        }
    }
}

/// Mutable borrows of two distinct entries of a `Vec<Vec<u64>>`.
fn two_mut(cols: &mut [Vec<u64>], a: usize, b: usize) -> (&mut Vec<u64>, &mut Vec<u64>) {
    assert_ne!(a, b);
    if a < b {
        let (left, right) = cols.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = cols.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

/// Aaronson-Gottesman phase-exponent contribution for combining two
/// single-qubit Pauli factors `(x1,z1)` and `(x2,z2)`.
fn g(x1: bool, z1: bool, x2: bool, z2: bool) -> i32 {
    match (x1, z1) {
        (false, false) => 0,
        (true, true) => i32::from(z2) - i32::from(x2),
        (true, false) => {
            if z2 {
                2 * i32::from(x2) - 1
            } else {
                0
            }
        }
        (false, true) => {
            if x2 {
                1 - 2 * i32::from(z2)
            } else {
                0
            }
        }
    }
}

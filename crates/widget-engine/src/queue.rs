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

//! The deferred single-qubit Clifford queue.
//!
//! One queued operation per qubit, not a list: every `push_right` folds the
//! incoming gate into whichever of the 24 single-qubit Cliffords is already
//! pending via [`compose_right`], so a run of single-qubit gates on the same
//! qubit costs one table lookup each, and a `flush` costs one tableau
//! rewrite per live qubit regardless of how many gates were queued.

use widget_core::gate::SingleQubitOp;

use crate::clifford::compose_right;
use crate::tableau::Tableau;

pub struct CliffordQueue {
    table: Vec<SingleQubitOp>,
    /// Angle tag recorded for a row once it has been superseded by an RZ
    /// teleportation; `None` for rows that are still live Clifford frame.
    non_clifford: Vec<Option<u64>>,
}

impl CliffordQueue {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        CliffordQueue {
            table: vec![SingleQubitOp::I; capacity],
            non_clifford: vec![None; capacity],
        }
    }

    /// Folds `op` into the operation already queued for qubit `row`, so
    /// that the queued operation, once flushed, is equivalent to applying
    /// the previously-queued operation and then `op`.
    pub fn push_right(&mut self, row: usize, op: SingleQubitOp) {
        self.table[row] = compose_right(self.table[row], op);
    }

    #[must_use]
    pub fn pending(&self, row: usize) -> SingleQubitOp {
        self.table[row]
    }

    /// Applies and clears the queued operation for a single row (used when
    /// a two-qubit gate needs that row's Clifford frame materialized
    /// before the tableau rewrite).
    pub fn flush_one(&mut self, tab: &mut Tableau, row: usize) {
        let op = self.table[row];
        if !matches!(op, SingleQubitOp::I) {
            tab.apply_single(op, row);
            self.table[row] = SingleQubitOp::I;
        }
    }

    /// Applies and clears every row's queued operation.
    pub fn flush_all(&mut self, tab: &mut Tableau) {
        for row in 0..tab.n_qubits() {
            self.flush_one(tab, row);
        }
    }

    /// Like [`Self::flush_all`], but each row's rewrite runs through the
    /// parallel dispatch seam (`chunk_width`-word chunks over rayon).
    /// Still one row after another: only the per-column sweep is
    /// data-parallel, not the queue drain itself.
    pub fn flush_all_parallel(&mut self, tab: &mut Tableau, chunk_width: usize) {
        for row in 0..tab.n_qubits() {
            let op = self.table[row];
            if !matches!(op, SingleQubitOp::I) {
                tab.apply_single_parallel(op, row, chunk_width);
                self.table[row] = SingleQubitOp::I;
            }
        }
    }

    pub fn tag_non_clifford(&mut self, row: usize, angle_tag: u64) {
        self.non_clifford[row] = Some(angle_tag);
    }

    #[must_use]
    pub fn non_clifford_tag(&self, row: usize) -> Option<u64> {
        self.non_clifford[row]
    }
}

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

//! The normal-form passes that bring a tableau into canonical form once an
//! instruction stream has been fully decoded.
//!
//! Run in this order (see `DESIGN.md` for why this order, not the source
//! order, is the one that actually reaches the stated postconditions):
//!
//! 1. flush any still-queued single-qubit Cliffords,
//! 2. eliminate zero X columns with Hadamards,
//! 3. triangularize the X block,
//! 4. zero the Z diagonal.

use widget_core::gate::SingleQubitOp;

use crate::queue::CliffordQueue;
use crate::tableau::Tableau;

/// Applies `H` to every qubit whose X column is entirely zero across all
/// live rows, turning a pure-Z generator into a pure-X one.
pub fn remove_zero_x_columns(tab: &mut Tableau) {
    for col in 0..tab.n_qubits() {
        if tab.first_nonzero_x_row(col).is_none() {
            tab.apply_single(SingleQubitOp::H, col);
        }
    }
}

/// Brings the X block toward the identity on its diagonal: for each column
/// `i`, ensures `X[i][i] == 1` (pivoting in a later row if row `i` itself
/// has no X support there) and then clears `X[j][i]` for every other row
/// `j` by adding row `i` into row `j`.
///
/// A pure "clear every other row" sweep with no pivot step can get stuck:
/// if row `i`'s own column-`i` entry is zero while some later row carries
/// it, no amount of adding row `i` into other rows ever sets `X[i][i]`.
/// Swapping a later row with X support into position `i` first — always
/// legal, since a stabilizer's generators are an unordered set — avoids
/// that dead end.
pub fn triangularize_x(tab: &mut Tableau) {
    let n = tab.n_qubits();
    for i in 0..n {
        if !tab.get_x(i, i) {
            if let Some(pivot) = (i + 1..n).find(|&k| tab.get_x(k, i)) {
                tab.swap_rows(i, pivot);
            }
        }
        for j in (i + 1)..n {
            if tab.get_x(j, i) {
                tab.rowsum(j, i);
            }
        }
        // Deliberately includes j == 0: stopping at j > 0 (as a literal
        // reading of the reference sweep does) would leave row 0 uncleared
        // whenever X[0][i] == 1 for some i > 0.
        for j in (0..i).rev() {
            if tab.get_x(j, i) {
                tab.rowsum(j, i);
            }
        }
    }
}

/// Schedules `S` on every qubit whose Z diagonal entry is set, so that the
/// Z block ends with a zero diagonal.
///
/// `S` flips `Z[i][i]` only when `X[i][i] == 1`, so this pass must run
/// after [`triangularize_x`] has put a `1` on the X diagonal wherever the
/// generator has any X support at all.
pub fn zero_z_diagonal(tab: &mut Tableau) {
    for i in 0..tab.n_qubits() {
        if tab.get_z(i, i) {
            tab.apply_single(SingleQubitOp::S, i);
        }
    }
}

/// Runs the full normal-form pipeline: flush, then the three structural
/// passes in the order documented above.
pub fn normalize(tab: &mut Tableau, queue: &mut CliffordQueue) {
    log::debug!("normal form: flushing deferred queue ({} qubits)", tab.n_qubits());
    queue.flush_all(tab);
    log::debug!("normal form: removing zero X columns");
    remove_zero_x_columns(tab);
    log::debug!("normal form: triangularizing X block");
    triangularize_x(tab);
    log::debug!("normal form: zeroing Z diagonal");
    zero_z_diagonal(tab);
}

/// Same pipeline as [`normalize`], but the initial queue flush runs
/// through the parallel rewrite seam. The structural passes (zero-column
/// elimination, triangularization, diagonal zeroing) stay sequential: they
/// read and write whole rows across qubits, which is not the word-sliced
/// parallelism the concurrency model describes.
pub fn normalize_parallel(tab: &mut Tableau, queue: &mut CliffordQueue, chunk_width: usize) {
    log::debug!(
        "normal form: flushing deferred queue in parallel ({} qubits, chunk_width={chunk_width})",
        tab.n_qubits()
    );
    queue.flush_all_parallel(tab, chunk_width);
    log::debug!("normal form: removing zero X columns");
    remove_zero_x_columns(tab);
    log::debug!("normal form: triangularizing X block");
    triangularize_x(tab);
    log::debug!("normal form: zeroing Z diagonal");
    zero_z_diagonal(tab);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_x_column_triggers_hadamard() {
        let mut tab = Tableau::new(1);
        tab.activate_qubit(0); // Z-stabilized: X column is zero.
        remove_zero_x_columns(&mut tab);
        assert!(tab.get_x(0, 0));
        assert!(!tab.get_z(0, 0));
    }

    #[test]
    fn zero_z_diagonal_clears_set_diagonal_when_x_is_one() {
        let mut tab = Tableau::new(1);
        tab.activate_qubit(0); // Z-stabilized: (x, z) = (0, 1)
        tab.apply_single(SingleQubitOp::H, 0); // (1, 0)
        tab.apply_single(SingleQubitOp::S, 0); // (1, 1): both diagonals set
        assert!(tab.get_x(0, 0));
        assert!(tab.get_z(0, 0));

        zero_z_diagonal(&mut tab);

        assert!(tab.get_x(0, 0), "X diagonal untouched by S");
        assert!(!tab.get_z(0, 0), "Z diagonal cleared by S since X was set");
    }

    #[test]
    fn normalize_leaves_zero_z_diagonal() {
        // Two qubits, both still default Z-stabilized, entangled directly
        // by CX with no prior single-qubit gate: triggers both zero-column
        // Hadamards and a forward X-triangularization clear.
        let mut tab = Tableau::new(2);
        tab.activate_qubit(0);
        tab.activate_qubit(1);
        let mut queue = CliffordQueue::new(2);
        tab.apply_two(widget_core::gate::TwoQubitOp::Cx, 0, 1);

        normalize(&mut tab, &mut queue);

        for i in 0..2 {
            assert!(tab.get_x(i, i), "X[{i}][{i}] should be set after triangularization");
            assert!(!tab.get_z(i, i), "Z[{i}][{i}] should be zero after normalization");
        }
    }

    #[test]
    fn graph_state_chain_keeps_x_diagonal_and_clean_z_diagonal() {
        // The construction a graph-state compiler actually produces: every
        // qubit H'd to the X basis first, then entangled with CZ, which
        // never touches X at all. The X diagonal is the identity from the
        // moment of the H's onward, so both structural passes are no-ops.
        let mut tab = Tableau::new(3);
        for q in 0..3 {
            tab.activate_qubit(q);
            tab.apply_single(SingleQubitOp::H, q);
        }
        tab.apply_two(widget_core::gate::TwoQubitOp::Cz, 0, 1);
        tab.apply_two(widget_core::gate::TwoQubitOp::Cz, 1, 2);

        let mut queue = CliffordQueue::new(3);
        normalize(&mut tab, &mut queue);

        for i in 0..3 {
            assert!(tab.get_x(i, i), "X[{i}][{i}] should stay set: CZ never touches X");
            assert!(!tab.get_z(i, i), "Z[{i}][{i}] should be zero after normalization");
        }
    }

    #[test]
    fn normalize_parallel_matches_sequential_normalize() {
        let mut tab = Tableau::new(3);
        let mut ptab = Tableau::new(3);
        for q in 0..3 {
            tab.activate_qubit(q);
            ptab.activate_qubit(q);
        }
        let mut queue = CliffordQueue::new(3);
        let mut pqueue = CliffordQueue::new(3);
        queue.push_right(0, SingleQubitOp::H);
        pqueue.push_right(0, SingleQubitOp::H);
        tab.apply_two(widget_core::gate::TwoQubitOp::Cx, 1, 2);
        ptab.apply_two(widget_core::gate::TwoQubitOp::Cx, 1, 2);

        normalize(&mut tab, &mut queue);
        normalize_parallel(&mut ptab, &mut pqueue, 2);

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(tab.get_x(i, j), ptab.get_x(i, j), "X[{i}][{j}]");
                assert_eq!(tab.get_z(i, j), ptab.get_z(i, j), "Z[{i}][{j}]");
            }
            assert_eq!(tab.get_phase(i), ptab.get_phase(i));
        }
    }

    #[test]
    fn normalize_is_idempotent_on_diagonal_state() {
        let mut tab = Tableau::new(2);
        tab.activate_qubit(0);
        tab.activate_qubit(1);
        let mut queue = CliffordQueue::new(2);
        normalize(&mut tab, &mut queue);
        let (x0, z0, p0) = (tab.get_x(0, 0), tab.get_z(0, 0), tab.get_phase(0));
        normalize(&mut tab, &mut queue);
        assert_eq!((tab.get_x(0, 0), tab.get_z(0, 0), tab.get_phase(0)), (x0, z0, p0));
    }
}

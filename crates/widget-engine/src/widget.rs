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

//! The top-level compiler state: a tableau, its deferred Clifford queue, and
//! the map from input-level qubit ids to live stabilizer rows.

use widget_core::error::WidgetError;

use crate::instruction::Instruction;
use crate::normal_form;
use crate::queue::CliffordQueue;
use crate::tableau::Tableau;

/// Ties the tableau and Clifford queue together with the input-to-row
/// remap that RZ teleportation grows over the lifetime of a compilation.
pub struct Widget {
    tableau: Tableau,
    queue: CliffordQueue,
    /// `q_map[arg]` is the live stabilizer row presently standing in for
    /// input-level qubit `arg`.
    q_map: Vec<usize>,
    n_qubits: usize,
    max_qubits: usize,
}

impl Widget {
    /// Creates a widget with `n_qubits` input qubits already allocated as
    /// rows `0..n_qubits`, and room to grow up to `max_qubits` rows total
    /// (RZ teleportation allocates fresh rows as compilation proceeds).
    #[must_use]
    pub fn new(n_qubits: usize, max_qubits: usize) -> Self {
        let mut tableau = Tableau::new(max_qubits);
        for q in 0..n_qubits {
            tableau.activate_qubit(q);
        }
        Widget {
            tableau,
            queue: CliffordQueue::new(max_qubits),
            q_map: (0..n_qubits).collect(),
            n_qubits,
            max_qubits,
        }
    }

    #[must_use]
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    #[must_use]
    pub fn queue(&self) -> &CliffordQueue {
        &self.queue
    }

    #[must_use]
    pub fn q_map(&self) -> &[usize] {
        &self.q_map
    }

    /// Applies one decoded instruction, per its type tag.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::CapacityExceeded`] if an `Rz` would grow the
    /// tableau past `max_qubits`, and [`WidgetError::InvalidQubitIndex`] if
    /// an instruction names a qubit argument with no entry in `q_map`.
    pub fn apply_instruction(&mut self, inst: Instruction) -> Result<(), WidgetError> {
        match inst {
            Instruction::LocalClifford { op, arg } => {
                let row = self.row_of(arg)?;
                log::trace!("widget: queue {op:?} on input qubit {arg} (row {row})");
                self.queue.push_right(row, op);
                Ok(())
            }
            Instruction::NonLocalClifford { op, ctrl, targ } => {
                let c = self.row_of(ctrl)?;
                let t = self.row_of(targ)?;
                log::trace!("widget: apply {op:?} ctrl={ctrl} (row {c}) targ={targ} (row {t})");
                self.queue.flush_one(&mut self.tableau, c);
                self.queue.flush_one(&mut self.tableau, t);
                self.tableau.apply_two(op, c, t);
                Ok(())
            }
            Instruction::Rz { arg, angle_tag } => self.apply_rz(arg, angle_tag),
        }
    }

    /// Applies every instruction in `stream` in order.
    ///
    /// # Errors
    ///
    /// Stops and returns the first error raised by [`Self::apply_instruction`].
    pub fn apply_instructions(&mut self, stream: &[Instruction]) -> Result<(), WidgetError> {
        for &inst in stream {
            self.apply_instruction(inst)?;
        }
        Ok(())
    }

    /// Teleports an RZ on input qubit `arg`: the current row becomes a
    /// byproduct tracker tagged with `angle_tag`, and `arg` is remapped to
    /// a freshly allocated row.
    fn apply_rz(&mut self, arg: u32, angle_tag: u64) -> Result<(), WidgetError> {
        if self.n_qubits + 1 >= self.max_qubits {
            return Err(WidgetError::CapacityExceeded { max_qubits: self.max_qubits });
        }
        let idx = self.row_of(arg)?;
        let new_row = self.n_qubits;
        self.n_qubits += 1;
        self.tableau.activate_qubit(new_row);
        self.queue.tag_non_clifford(idx, angle_tag);
        self.set_row_of(arg, new_row);
        log::debug!(
            "widget: rz teleport on input qubit {arg}: row {idx} tagged {angle_tag:#x}, remapped to row {new_row}"
        );
        Ok(())
    }

    /// Runs the C7 normal-form passes, leaving the tableau in canonical form.
    pub fn normalize(&mut self) {
        normal_form::normalize(&mut self.tableau, &mut self.queue);
    }

    /// Runs the C7 normal-form passes with the deferred-queue flush routed
    /// through the parallel rewrite seam (see [`crate::parallel`]).
    pub fn normalize_parallel(&mut self, chunk_width: usize) {
        normal_form::normalize_parallel(&mut self.tableau, &mut self.queue, chunk_width);
    }

    fn row_of(&self, arg: u32) -> Result<usize, WidgetError> {
        self.q_map
            .get(arg as usize)
            .copied()
            .ok_or(WidgetError::InvalidQubitIndex(arg as usize))
    }

    fn set_row_of(&mut self, arg: u32, row: usize) {
        let idx = arg as usize;
        if idx >= self.q_map.len() {
            self.q_map.resize(idx + 1, 0);
        }
        self.q_map[idx] = row;
    }
}

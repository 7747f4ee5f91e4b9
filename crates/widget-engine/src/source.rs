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

//! The circuit source interface: how a compilation run gets its
//! instruction stream.
//!
//! A production deployment backs [`CircuitSource`] with a connection to a
//! persistent circuit store and fetches instructions layer by layer; that
//! connector is an external collaborator and out of scope here. What
//! lives in this crate is the trait itself and [`BufferedSource`], an
//! in-memory implementation good enough for the CLI and for tests.

use widget_core::error::WidgetError;

use crate::instruction::Instruction;

/// Supplies a compilation run with its input qubit count and instruction
/// stream, one layer at a time.
pub trait CircuitSource {
    /// Total number of input-level qubits the circuit references.
    fn count_qubits(&mut self) -> Result<usize, WidgetError>;

    /// Requests that the source precompute any layer decoration it needs
    /// before `get_layer` calls begin (a no-op for sources that have
    /// nothing to precompute).
    fn decorate(&mut self) -> Result<(), WidgetError>;

    /// Total number of layers available.
    fn layer_count(&self) -> usize;

    /// Returns the decoded instructions for `layer_index`.
    fn get_layer(&mut self, layer_index: usize) -> Result<&[Instruction], WidgetError>;
}

/// An in-memory [`CircuitSource`] over pre-decoded instruction layers.
pub struct BufferedSource {
    n_qubits: usize,
    layers: Vec<Vec<Instruction>>,
    decorated: bool,
}

impl BufferedSource {
    #[must_use]
    pub fn new(n_qubits: usize, layers: Vec<Vec<Instruction>>) -> Self {
        BufferedSource { n_qubits, layers, decorated: false }
    }

    /// Builds a single-layer source from a packed instruction byte stream,
    /// decoding it up front via [`crate::instruction::decode_all`].
    ///
    /// # Errors
    ///
    /// Propagates any [`decode_all`](crate::instruction::decode_all) error.
    pub fn from_bytes(n_qubits: usize, bytes: &[u8]) -> Result<Self, WidgetError> {
        let layer = crate::instruction::decode_all(bytes)?;
        Ok(BufferedSource::new(n_qubits, vec![layer]))
    }
}

impl CircuitSource for BufferedSource {
    fn count_qubits(&mut self) -> Result<usize, WidgetError> {
        Ok(self.n_qubits)
    }

    fn decorate(&mut self) -> Result<(), WidgetError> {
        self.decorated = true;
        Ok(())
    }

    fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn get_layer(&mut self, layer_index: usize) -> Result<&[Instruction], WidgetError> {
        self.layers
            .get(layer_index)
            .map(Vec::as_slice)
            .ok_or_else(|| WidgetError::Parse(format!("no such layer: {layer_index}")))
    }
}

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

/// Compilation configuration. No environment variables are consulted; a
/// caller (the CLI, or an embedding application) builds one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WidgetConfig {
    /// Hard cap on stabilizer rows; exceeding it during RZ teleportation is
    /// a `CapacityExceeded` compile failure.
    pub max_qubits: usize,
    /// Worker count for the parallel rewrite seam. `1` forces the
    /// sequential path regardless of `chunk_width`.
    pub num_workers: usize,
    /// Word-chunk width handed to the parallel rewrite seam.
    pub chunk_width: usize,
}

impl WidgetConfig {
    #[must_use]
    pub fn new(max_qubits: usize) -> Self {
        WidgetConfig { max_qubits, num_workers: 1, chunk_width: 8 }
    }

    #[must_use]
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    #[must_use]
    pub fn with_chunk_width(mut self, chunk_width: usize) -> Self {
        self.chunk_width = chunk_width;
        self
    }

    /// Whether this configuration asks for the parallel rewrite seam.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.num_workers > 1
    }
}

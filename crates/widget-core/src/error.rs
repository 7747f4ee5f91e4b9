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

use std::fmt;
use std::io;

/// Errors raised while decoding instructions or rewriting a tableau.
#[derive(Debug)]
pub enum WidgetError {
    /// Allocating a new qubit row (e.g. for RZ teleportation) would exceed
    /// the widget's configured capacity.
    CapacityExceeded { max_qubits: usize },
    /// An instruction carried an opcode outside the range its type tag
    /// allows.
    InvalidOpcode(u8),
    /// An instruction referenced a qubit index that is not live in the
    /// current `q_map`.
    InvalidQubitIndex(usize),
    /// Reading or parsing a packed instruction stream failed.
    Parse(String),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WidgetError::CapacityExceeded { max_qubits } => {
                write!(f, "widget capacity exceeded (max_qubits = {max_qubits})")
            }
            WidgetError::InvalidOpcode(code) => write!(f, "invalid opcode: {code}"),
            WidgetError::InvalidQubitIndex(idx) => write!(f, "invalid qubit index: {idx}"),
            WidgetError::Parse(msg) => write!(f, "instruction stream parse error: {msg}"),
        }
    }
}

impl std::error::Error for WidgetError {}

impl From<io::Error> for WidgetError {
    fn from(err: io::Error) -> Self {
        WidgetError::Parse(err.to_string())
    }
}

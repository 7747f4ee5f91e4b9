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

//! The stabilizer-tableau rewriting engine: parses a packed instruction
//! stream, applies it to a [`tableau::Tableau`] through a deferred
//! single-qubit Clifford queue, and canonicalizes the result into the
//! normal form a downstream fault-tolerant emitter expects.

pub mod clifford;
pub mod instruction;
pub mod normal_form;
pub mod parallel;
pub mod queue;
pub mod source;
pub mod tableau;
pub mod widget;

pub use instruction::{decode_all, decode_record, encode_record, Instruction};
pub use queue::CliffordQueue;
pub use source::{BufferedSource, CircuitSource};
pub use tableau::Tableau;
pub use widget::Widget;

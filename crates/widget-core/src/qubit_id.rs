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

/// An index into a widget's qubit register.
///
/// Distinct from the index a caller originally referred to: once a qubit is
/// teleported (see `RZ` decoding) its logical references are redirected to a
/// freshly allocated row via the widget's `q_map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct QubitId(pub usize);

impl QubitId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for QubitId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

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

use crate::error::WidgetError;

/// The 24 single-qubit Clifford operations, mod global phase, as tracked by
/// the tableau rewrite engine.
///
/// Names are read right-to-left: `HS` means "apply `S`, then apply `H`",
/// matching the composition order used by the deferred Clifford queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SingleQubitOp {
    I = 0,
    H = 1,
    S = 2,
    Z = 3,
    R = 4,
    X = 5,
    Y = 6,
    HX = 7,
    SX = 8,
    RX = 9,
    HZ = 10,
    HY = 11,
    SH = 12,
    RH = 13,
    HS = 14,
    HR = 15,
    HSX = 16,
    HRX = 17,
    SHY = 18,
    RHY = 19,
    HSH = 20,
    HRH = 21,
    RHS = 22,
    SHR = 23,
}

/// Number of distinct single-qubit Clifford operations (mod global phase).
pub const NUM_SINGLE_QUBIT_OPS: usize = 24;

impl SingleQubitOp {
    pub const ALL: [SingleQubitOp; NUM_SINGLE_QUBIT_OPS] = [
        SingleQubitOp::I,
        SingleQubitOp::H,
        SingleQubitOp::S,
        SingleQubitOp::Z,
        SingleQubitOp::R,
        SingleQubitOp::X,
        SingleQubitOp::Y,
        SingleQubitOp::HX,
        SingleQubitOp::SX,
        SingleQubitOp::RX,
        SingleQubitOp::HZ,
        SingleQubitOp::HY,
        SingleQubitOp::SH,
        SingleQubitOp::RH,
        SingleQubitOp::HS,
        SingleQubitOp::HR,
        SingleQubitOp::HSX,
        SingleQubitOp::HRX,
        SingleQubitOp::SHY,
        SingleQubitOp::RHY,
        SingleQubitOp::HSH,
        SingleQubitOp::HRH,
        SingleQubitOp::RHS,
        SingleQubitOp::SHR,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for SingleQubitOp {
    type Error = WidgetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SingleQubitOp::ALL.get(value as usize).copied().ok_or_else(|| {
            log::warn!("invalid single-qubit opcode: {value}");
            WidgetError::InvalidOpcode(value)
        })
    }
}

/// The two-qubit Clifford operations the engine applies directly to the
/// tableau (never deferred).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TwoQubitOp {
    Cx = 0,
    Cz = 1,
}

impl TryFrom<u8> for TwoQubitOp {
    type Error = WidgetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TwoQubitOp::Cx),
            1 => Ok(TwoQubitOp::Cz),
            other => {
                log::warn!("invalid two-qubit opcode: {other}");
                Err(WidgetError::InvalidOpcode(other))
            }
        }
    }
}

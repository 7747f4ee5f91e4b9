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

//! The packed instruction record format and its decoder.
//!
//! Every record starts with a header byte: the top three bits are a type
//! tag, the low five bits an opcode subfield (unused for `Rz`, which has no
//! operator choice). What follows the header depends on the tag:
//!
//! - `LocalClifford`: one `u32` qubit argument.
//! - `NonLocalClifford`: two `u32` qubit arguments, control then target.
//! - `Rz`: one `u32` qubit argument, then an opaque `u64` angle tag.
//!
//! All multi-byte fields are little-endian.

use widget_core::error::WidgetError;
use widget_core::gate::{SingleQubitOp, TwoQubitOp};

const TYPE_MASK: u8 = 0b1110_0000;
const OPCODE_MASK: u8 = 0b0001_1111;

const LOCAL_CLIFFORD_TAG: u8 = 0b001_00000;
const NON_LOCAL_CLIFFORD_TAG: u8 = 0b010_00000;
const RZ_TAG: u8 = 0b100_00000;

/// A single decoded record from the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    LocalClifford { op: SingleQubitOp, arg: u32 },
    NonLocalClifford { op: TwoQubitOp, ctrl: u32, targ: u32 },
    Rz { arg: u32, angle_tag: u64 },
}

/// Decodes one record from the front of `bytes`, returning the instruction
/// and the number of bytes it consumed.
///
/// # Errors
///
/// Returns [`WidgetError::Parse`] if `bytes` is shorter than the record its
/// header implies, and [`WidgetError::InvalidOpcode`] for an unrecognized
/// type tag or operator subfield.
pub fn decode_record(bytes: &[u8]) -> Result<(Instruction, usize), WidgetError> {
    let header = *bytes
        .first()
        .ok_or_else(|| WidgetError::Parse("empty instruction record".to_string()))?;
    let opcode = header & OPCODE_MASK;

    match header & TYPE_MASK {
        LOCAL_CLIFFORD_TAG => {
            let arg = read_u32(bytes, 1)?;
            let op = SingleQubitOp::try_from(opcode)?;
            Ok((Instruction::LocalClifford { op, arg }, 5))
        }
        NON_LOCAL_CLIFFORD_TAG => {
            let ctrl = read_u32(bytes, 1)?;
            let targ = read_u32(bytes, 5)?;
            let op = TwoQubitOp::try_from(opcode)?;
            Ok((Instruction::NonLocalClifford { op, ctrl, targ }, 9))
        }
        RZ_TAG => {
            let arg = read_u32(bytes, 1)?;
            let angle_tag = read_u64(bytes, 5)?;
            Ok((Instruction::Rz { arg, angle_tag }, 13))
        }
        other => Err(WidgetError::InvalidOpcode(other)),
    }
}

/// Encodes a single record, the inverse of [`decode_record`].
#[must_use]
pub fn encode_record(inst: Instruction) -> Vec<u8> {
    match inst {
        Instruction::LocalClifford { op, arg } => {
            let mut out = vec![LOCAL_CLIFFORD_TAG | (op.index() as u8 & OPCODE_MASK)];
            out.extend_from_slice(&arg.to_le_bytes());
            out
        }
        Instruction::NonLocalClifford { op, ctrl, targ } => {
            let mut out = vec![NON_LOCAL_CLIFFORD_TAG | (op as u8 & OPCODE_MASK)];
            out.extend_from_slice(&ctrl.to_le_bytes());
            out.extend_from_slice(&targ.to_le_bytes());
            out
        }
        Instruction::Rz { arg, angle_tag } => {
            let mut out = vec![RZ_TAG];
            out.extend_from_slice(&arg.to_le_bytes());
            out.extend_from_slice(&angle_tag.to_le_bytes());
            out
        }
    }
}

/// Decodes every record in `bytes` in order.
///
/// # Errors
///
/// Propagates the first [`decode_record`] failure encountered.
pub fn decode_all(mut bytes: &[u8]) -> Result<Vec<Instruction>, WidgetError> {
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let (inst, consumed) = decode_record(bytes)?;
        out.push(inst);
        bytes = &bytes[consumed..];
    }
    Ok(out)
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32, WidgetError> {
    let slice = bytes
        .get(offset..offset + 4)
        .ok_or_else(|| WidgetError::Parse("truncated u32 field in instruction record".to_string()))?;
    Ok(u32::from_le_bytes(slice.try_into().expect("slice is exactly 4 bytes")))
}

fn read_u64(bytes: &[u8], offset: usize) -> Result<u64, WidgetError> {
    let slice = bytes
        .get(offset..offset + 8)
        .ok_or_else(|| WidgetError::Parse("truncated u64 field in instruction record".to_string()))?;
    Ok(u64::from_le_bytes(slice.try_into().expect("slice is exactly 8 bytes")))
}

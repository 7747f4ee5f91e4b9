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

//! Word-sliced rewrite rules for the 24 single-qubit Clifford operations
//! and the two supported two-qubit operations (CX, CZ).
//!
//! Every rule is a handful of XOR/AND/OR/NOT sweeps over the column's word
//! slices, plus (for half the group) a plain pointer swap of the X and Z
//! columns — there is never a per-bit branch.
//!
//! Two rules here, `HY` and `HS`, differ from their textbook "apply Y then
//! H" / "apply S then H" composition in older derivations that treat the
//! phase update as a simple XOR of the two operands' contributions; the
//! correct composed phase picks up a cross term. The formulas below are
//! the fully reduced compositions, each re-derived from the primitive `H`,
//! `S`, `X`, `Y`, `Z`, `R` rules and cross-checked against the three-gate
//! composites (`SHY`, `HSX`, ...) that build on top of them.

use widget_core::gate::SingleQubitOp;

/// Whether `op`'s rule ends with a whole-column `X[t] <-> Z[t]` swap, as
/// opposed to folding any X/Z exchange into the per-word sweep itself.
/// Used by the parallel dispatcher (`parallel::apply_single_parallel`) to
/// perform that swap once, after the barrier, on the dispatching thread.
#[must_use]
pub fn swaps_x_and_z(op: SingleQubitOp) -> bool {
    use SingleQubitOp::{HRX, HR, HSX, HX, HY, HZ, RH, RHY, SH, SHY, H};
    matches!(op, H | HX | HZ | HY | SH | RH | HR | HSX | HRX | SHY | RHY)
}

/// Applies `op` to one column, except for the final whole-column X/Z swap
/// that [`swaps_x_and_z`] ops perform — callers that want the full rule
/// must follow up with `x.swap_with_slice(z)` themselves once all chunks
/// have been processed. Used by the parallel dispatcher to run the
/// per-word sweep across chunks before a single, post-barrier swap.
pub fn apply_single_no_swap(op: SingleQubitOp, x: &mut [u64], z: &mut [u64], r: &mut [u64]) {
    apply_single_inner(op, x, z, r, false);
}

/// Applies `op` to one column, represented as equal-length X/Z/phase word
/// slices (one bit per row).
pub fn apply_single(op: SingleQubitOp, x: &mut [u64], z: &mut [u64], r: &mut [u64]) {
    apply_single_inner(op, x, z, r, true);
}

fn apply_single_inner(op: SingleQubitOp, x: &mut [u64], z: &mut [u64], r: &mut [u64], do_swap: bool) {
    use SingleQubitOp::{
        HRH, HRX, HR, HSH, HSX, HS, HX, HY, HZ, H, RHS, RHY, RH, RX, R, SHR, SHY, SH, SX, S, X, Y, Z, I,
    };
    let swap = |x: &mut [u64], z: &mut [u64]| {
        if do_swap {
            x.swap_with_slice(z);
        }
    };
    match op {
        I => {}
        H => {
            for i in 0..r.len() {
                r[i] ^= x[i] & z[i];
            }
            swap(x, z);
        }
        S => {
            for i in 0..r.len() {
                r[i] ^= x[i] & z[i];
                z[i] ^= x[i];
            }
        }
        Z => {
            for i in 0..r.len() {
                r[i] ^= x[i];
            }
        }
        R => {
            for i in 0..r.len() {
                r[i] ^= x[i] & !z[i];
                z[i] ^= x[i];
            }
        }
        X => {
            for i in 0..r.len() {
                r[i] ^= z[i];
            }
        }
        Y => {
            for i in 0..r.len() {
                r[i] ^= z[i] ^ x[i];
            }
        }
        HX => {
            for i in 0..r.len() {
                r[i] ^= !x[i] & z[i];
            }
            swap(x, z);
        }
        SX => {
            for i in 0..r.len() {
                r[i] ^= !x[i] & z[i];
                z[i] ^= x[i];
            }
        }
        RX => {
            for i in 0..r.len() {
                r[i] ^= x[i] | z[i];
                z[i] ^= x[i];
            }
        }
        HZ => {
            for i in 0..r.len() {
                r[i] ^= !z[i] & x[i];
            }
            swap(x, z);
        }
        HY => {
            // Corrected: the textbook phase term x^z misses the x&z cross
            // contribution. x^z^(x&z) == x|z.
            for i in 0..r.len() {
                r[i] ^= x[i] | z[i];
            }
            swap(x, z);
        }
        SH => {
            for i in 0..r.len() {
                x[i] ^= z[i];
            }
            swap(x, z);
        }
        RH => {
            for i in 0..r.len() {
                r[i] ^= z[i];
                x[i] ^= z[i];
            }
            swap(x, z);
        }
        HS => {
            // Corrected: composing S then H needs both a phase update
            // (missing entirely in the naive "swap-then-XOR" shortcut) and
            // a different X/Z map than its mirror image SH.
            for i in 0..r.len() {
                r[i] ^= x[i];
                let new_x = x[i] ^ z[i];
                z[i] = x[i];
                x[i] = new_x;
            }
        }
        HR => {
            for i in 0..r.len() {
                z[i] ^= x[i];
            }
            swap(x, z);
        }
        HSX => {
            for i in 0..r.len() {
                r[i] ^= x[i] ^ z[i];
                z[i] ^= x[i];
            }
            swap(x, z);
        }
        HRX => {
            for i in 0..r.len() {
                r[i] ^= z[i];
                z[i] ^= x[i];
            }
            swap(x, z);
        }
        SHY => {
            for i in 0..r.len() {
                r[i] ^= z[i] ^ x[i];
                x[i] ^= z[i];
            }
            swap(x, z);
        }
        RHY => {
            for i in 0..r.len() {
                r[i] ^= x[i];
                x[i] ^= z[i];
            }
            swap(x, z);
        }
        HSH => {
            for i in 0..r.len() {
                r[i] ^= !x[i] & z[i];
                x[i] ^= z[i];
            }
        }
        HRH => {
            for i in 0..r.len() {
                r[i] ^= x[i] & z[i];
                x[i] ^= z[i];
            }
        }
        RHS => {
            for i in 0..r.len() {
                r[i] ^= x[i] | z[i];
                x[i] ^= z[i];
            }
        }
        SHR => {
            for i in 0..r.len() {
                r[i] ^= x[i] & !z[i];
                x[i] ^= z[i];
            }
        }
    }
}

/// `r ^= x_c . z_t . !(x_t ^ z_c)`, then `x_t ^= x_c`, `z_c ^= z_t` — the
/// standard symplectic CNOT (control `c`, target `t`) update.
pub fn apply_cx(xc: &mut [u64], zc: &mut [u64], xt: &mut [u64], zt: &mut [u64], r: &mut [u64]) {
    for i in 0..r.len() {
        r[i] ^= xc[i] & zt[i] & !(xt[i] ^ zc[i]);
        xt[i] ^= xc[i];
        zc[i] ^= zt[i];
    }
}

/// `r ^= x_c . x_t . (z_c ^ z_t)`, then `z_c ^= x_t`, `z_t ^= x_c` — the
/// standard symplectic CZ update (symmetric in control/target).
pub fn apply_cz(xc: &mut [u64], zc: &mut [u64], xt: &mut [u64], zt: &mut [u64], r: &mut [u64]) {
    for i in 0..r.len() {
        r[i] ^= xc[i] & xt[i] & (zc[i] ^ zt[i]);
        zc[i] ^= xt[i];
        zt[i] ^= xc[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(op: SingleQubitOp, x0: bool, z0: bool, r0: bool) -> (bool, bool, bool) {
        let mut x = [u64::from(x0)];
        let mut z = [u64::from(z0)];
        let mut r = [u64::from(r0)];
        apply_single(op, &mut x, &mut z, &mut r);
        (x[0] & 1 != 0, z[0] & 1 != 0, r[0] & 1 != 0)
    }

    #[test]
    fn h_swaps_x_and_z_and_flags_y_phase() {
        assert_eq!(one(SingleQubitOp::H, true, true, false), (true, true, true));
        assert_eq!(one(SingleQubitOp::H, true, false, false), (false, true, false));
        assert_eq!(one(SingleQubitOp::H, false, true, false), (true, false, false));
    }

    #[test]
    fn hy_matches_its_corrected_or_formula() {
        for x0 in [false, true] {
            for z0 in [false, true] {
                let (_, _, r) = one(SingleQubitOp::HY, x0, z0, false);
                assert_eq!(r, x0 || z0, "HY phase mismatch for x={x0} z={z0}");
            }
        }
    }

    #[test]
    fn hs_matches_composition_of_s_then_h() {
        for x0 in [false, true] {
            for z0 in [false, true] {
                let (sx, sz, sr) = one(SingleQubitOp::S, x0, z0, false);
                let (hx, hz, hr) = one(SingleQubitOp::H, sx, sz, sr);
                let (x, z, r) = one(SingleQubitOp::HS, x0, z0, false);
                assert_eq!((x, z, r), (hx, hz, hr), "HS mismatch for x={x0} z={z0}");
            }
        }
    }

    #[test]
    fn sh_matches_composition_of_h_then_s() {
        for x0 in [false, true] {
            for z0 in [false, true] {
                let (hx, hz, hr) = one(SingleQubitOp::H, x0, z0, false);
                let (sx, sz, sr) = one(SingleQubitOp::S, hx, hz, hr);
                let (x, z, r) = one(SingleQubitOp::SH, x0, z0, false);
                assert_eq!((x, z, r), (sx, sz, sr), "SH mismatch for x={x0} z={z0}");
            }
        }
    }

    #[test]
    fn cx_leaves_both_zero_invariant() {
        let mut xc = [0u64];
        let mut zc = [0u64];
        let mut xt = [0u64];
        let mut zt = [0u64];
        let mut r = [0u64];
        apply_cx(&mut xc, &mut zc, &mut xt, &mut zt, &mut r);
        assert_eq!((xc[0], zc[0], xt[0], zt[0], r[0]), (0, 0, 0, 0, 0));
    }

    #[test]
    fn cx_propagates_x_from_control_to_target() {
        let mut xc = [1u64];
        let mut zc = [0u64];
        let mut xt = [0u64];
        let mut zt = [0u64];
        let mut r = [0u64];
        apply_cx(&mut xc, &mut zc, &mut xt, &mut zt, &mut r);
        assert_eq!(xt[0], 1);
        assert_eq!(xc[0], 1);
        assert_eq!(r[0], 0);
    }

    #[test]
    fn cz_propagates_z_symmetrically() {
        let mut xc = [1u64];
        let mut zc = [0u64];
        let mut xt = [0u64];
        let mut zt = [0u64];
        let mut r = [0u64];
        apply_cz(&mut xc, &mut zc, &mut xt, &mut zt, &mut r);
        assert_eq!(zt[0], 1);
        assert_eq!(zc[0], 0);
    }

    #[test]
    fn no_swap_plus_manual_swap_matches_apply_single() {
        for op in SingleQubitOp::ALL {
            for x0 in [false, true] {
                for z0 in [false, true] {
                    let mut x = [u64::from(x0)];
                    let mut z = [u64::from(z0)];
                    let mut r = [0u64];
                    apply_single_no_swap(op, &mut x, &mut z, &mut r);
                    if swaps_x_and_z(op) {
                        x.swap_with_slice(&mut z);
                    }

                    let (ex, ez, er) = one(op, x0, z0, false);
                    assert_eq!((x[0] & 1 != 0, z[0] & 1 != 0, r[0] & 1 != 0), (ex, ez, er), "{op:?}");
                }
            }
        }
    }
}

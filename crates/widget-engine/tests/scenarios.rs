//! The six end-to-end scenarios from the compiler's testable-properties
//! section, run against a fresh widget with `n_max = 4`, `n_qubits = 2`.

use widget_core::gate::{SingleQubitOp, TwoQubitOp};
use widget_engine::{Instruction, Widget};

fn fresh_widget() -> Widget {
    Widget::new(2, 4)
}

#[test]
fn scenario_1_hadamard_on_qubit_zero_swaps_its_columns() {
    let mut wid = fresh_widget();
    wid.apply_instruction(Instruction::LocalClifford { op: SingleQubitOp::H, arg: 0 }).unwrap();
    // The queued H hasn't touched the tableau yet.
    assert!(!wid.tableau().get_x(0, 0));
    assert!(wid.tableau().get_z(0, 0));

    // A flush (driven here by a two-qubit op that targets row 0) applies it:
    // row 0 goes from Z-stabilized to X-stabilized, with no other row
    // touched.
    wid.apply_instruction(Instruction::NonLocalClifford { op: TwoQubitOp::Cz, ctrl: 0, targ: 1 })
        .unwrap();
    assert!(wid.tableau().get_x(0, 0));
    assert!(!wid.tableau().get_z(0, 0));
    assert!(!wid.tableau().get_x(1, 1));
    assert!(wid.tableau().get_z(1, 1));
}

#[test]
fn scenario_2_cx_0_to_1_propagates_x_and_z() {
    let mut wid = fresh_widget();
    wid.apply_instruction(Instruction::LocalClifford { op: SingleQubitOp::H, arg: 0 }).unwrap();
    wid.apply_instruction(Instruction::NonLocalClifford {
        op: TwoQubitOp::Cx,
        ctrl: 0,
        targ: 1,
    })
    .unwrap();

    // Row 0 (X on qubit 0 after H) propagates through CX(0->1): X0 X1.
    assert!(wid.tableau().get_x(0, 0));
    assert!(wid.tableau().get_x(0, 1));
    assert!(!wid.tableau().get_z(0, 0));
    assert!(!wid.tableau().get_z(0, 1));
    assert!(!wid.tableau().get_phase(0));

    // Row 1 (Z on qubit 1, untouched by H) gains Z on qubit 0 via CX's
    // backward Z propagation: Z1 -> Z0 Z1.
    assert!(wid.tableau().get_z(1, 0));
    assert!(wid.tableau().get_z(1, 1));
}

#[test]
fn scenario_3_four_s_gates_on_qubit_one_is_the_identity() {
    let mut wid = fresh_widget();
    for _ in 0..4 {
        wid.apply_instruction(Instruction::LocalClifford { op: SingleQubitOp::S, arg: 1 }).unwrap();
    }
    // Flushing happens via normalize's internal queue drain; exercise it
    // directly here via repeated non-local flush semantics by forcing a
    // flush through a same-qubit two-qubit op round trip is unnecessary —
    // querying the pending queue entry is enough to confirm S^4 collapsed
    // to the identity without ever touching the tableau.
    assert_eq!(wid.queue().pending(1), SingleQubitOp::I);
    assert!(!wid.tableau().get_x(1, 1));
    assert!(wid.tableau().get_z(1, 1));
    assert!(!wid.tableau().get_phase(1));
}

#[test]
fn scenario_4_rz_on_qubit_zero_grows_and_tags() {
    let mut wid = fresh_widget();
    wid.apply_instruction(Instruction::Rz { arg: 0, angle_tag: 0xDEAD_BEEF }).unwrap();

    assert_eq!(wid.n_qubits(), 3);
    assert_eq!(wid.q_map()[0], 2);
    assert_eq!(wid.queue().non_clifford_tag(0), Some(0xDEAD_BEEF));
}

#[test]
fn scenario_5_h_then_s_then_h_matches_the_fused_rule_bit_for_bit() {
    use widget_engine::{CliffordQueue, Tableau};

    // Queued: three separate LocalClifford pushes, folded via the
    // composition table, then flushed as a single tableau rewrite.
    let mut queued_tab = Tableau::new(1);
    queued_tab.activate_qubit(0);
    let mut queue = CliffordQueue::new(1);
    queue.push_right(0, SingleQubitOp::H);
    queue.push_right(0, SingleQubitOp::S);
    queue.push_right(0, SingleQubitOp::H);
    queue.flush_one(&mut queued_tab, 0);

    // Sequential: H, S, H applied directly to the tableau, one rewrite
    // sweep per gate, with no queue involved at all.
    let mut sequential_tab = Tableau::new(1);
    sequential_tab.activate_qubit(0);
    sequential_tab.apply_single(SingleQubitOp::H, 0);
    sequential_tab.apply_single(SingleQubitOp::S, 0);
    sequential_tab.apply_single(SingleQubitOp::H, 0);

    assert_eq!(queued_tab.get_x(0, 0), sequential_tab.get_x(0, 0));
    assert_eq!(queued_tab.get_z(0, 0), sequential_tab.get_z(0, 0));
    assert_eq!(queued_tab.get_phase(0), sequential_tab.get_phase(0));
}

#[test]
fn scenario_6_zero_x_column_triggers_a_bookkeeping_hadamard() {
    let mut wid = fresh_widget();
    // Both qubits start Z-stabilized (X column all-zero); running the
    // normal-form pass alone (no gates at all) must Hadamard each column.
    wid.normalize();

    assert!(wid.tableau().get_x(0, 0));
    assert!(!wid.tableau().get_z(0, 0));
    assert!(wid.tableau().get_x(1, 1));
    assert!(!wid.tableau().get_z(1, 1));
}

//! Tests for statevector evaluation and sampling.

use grover_ir::{Circuit, QubitId};
use grover_sim::{Counts, Statevector};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ---------------------------------------------------------------------------
// Fixed circuits
// ---------------------------------------------------------------------------

#[test]
fn uniform_superposition_after_hadamard_layer() {
    let mut circuit = Circuit::with_size("uniform", 4);
    let all: Vec<_> = circuit.qubits().collect();
    circuit.h_all(all).unwrap();

    let state = Statevector::from_circuit(&circuit).unwrap();
    for p in state.probabilities() {
        assert!((p - 1.0 / 16.0).abs() < 1e-12);
    }
}

#[test]
fn toffoli_truth_table() {
    for input in 0_u32..8 {
        let mut circuit = Circuit::with_size("toffoli", 3);
        for q in 0..3 {
            if input >> q & 1 == 1 {
                circuit.x(QubitId(q)).unwrap();
            }
        }
        circuit.mcx(&[QubitId(0), QubitId(1)], QubitId(2)).unwrap();

        let expected = if input & 0b011 == 0b011 {
            input ^ 0b100
        } else {
            input
        };
        let (index, p) = Statevector::from_circuit(&circuit).unwrap().most_likely();
        assert_eq!(index, expected as usize, "input {input:03b}");
        assert_eq!(p, 1.0);
    }
}

#[test]
fn seeded_sampling_is_reproducible() {
    let mut circuit = Circuit::with_size("coin", 2);
    circuit.h(QubitId(0)).unwrap();
    let state = Statevector::from_circuit(&circuit).unwrap();

    let a = state
        .sample_counts(500, &mut StdRng::seed_from_u64(42))
        .unwrap();
    let b = state
        .sample_counts(500, &mut StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total_shots(), 500);

    // Only qubit 0 is in superposition
    assert_eq!(a.get("00") + a.get("10"), 500);
    assert!(a.get("10") > 150 && a.get("00") > 150);
}

#[test]
fn counts_serialize_as_json() {
    let mut counts = Counts::new();
    counts.insert("11", 3);
    let json = serde_json::to_string(&counts).unwrap();
    let back: Counts = serde_json::from_str(&json).unwrap();
    assert_eq!(back.get("11"), 3);
}

#[test]
fn exported_circuit_evaluates_after_reload() {
    let mut circuit = Circuit::with_size("bell_phase", 2);
    circuit.h_all([QubitId(0), QubitId(1)]).unwrap().cz(QubitId(0), QubitId(1)).unwrap();

    let json = serde_json::to_string(&circuit).unwrap();
    let reloaded: Circuit = serde_json::from_str(&json).unwrap();
    assert_eq!(
        Statevector::from_circuit(&reloaded).unwrap(),
        Statevector::from_circuit(&circuit).unwrap()
    );
}

#[test]
fn imported_circuit_with_foreign_qubit_is_rejected() {
    let json = r#"{"name":"x","num_qubits":2,"instructions":[{"gate":"X","qubits":[9]}]}"#;
    assert!(serde_json::from_str::<Circuit>(json).is_err());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    CZ(u32, u32),
    Mcx(u32),
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    prop_oneof![
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::X),
        (0..num_qubits, 1..num_qubits).prop_map(move |(c, d)| GateOp::CZ(c, (c + d) % num_qubits)),
        (0..num_qubits).prop_map(GateOp::Mcx),
    ]
}

/// Build a circuit from ops; MCX uses every other qubit as a control.
fn build(num_qubits: u32, ops: &[GateOp]) -> Circuit {
    let mut circuit = Circuit::with_size("prop", num_qubits);
    for op in ops {
        match op {
            GateOp::H(q) => {
                circuit.h(QubitId(*q)).unwrap();
            }
            GateOp::X(q) => {
                circuit.x(QubitId(*q)).unwrap();
            }
            GateOp::CZ(c, t) => {
                circuit.cz(QubitId(*c), QubitId(*t)).unwrap();
            }
            GateOp::Mcx(t) => {
                let controls: Vec<_> = (0..num_qubits).filter(|q| q != t).map(QubitId).collect();
                circuit.mcx(&controls, QubitId(*t)).unwrap();
            }
        }
    }
    circuit
}

fn arb_circuit_ops() -> impl Strategy<Value = (u32, Vec<GateOp>)> {
    (2_u32..=5).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_gate_op(n), 0..40)))
}

proptest! {
    #[test]
    fn norm_is_preserved((num_qubits, ops) in arb_circuit_ops()) {
        let state = Statevector::from_circuit(&build(num_qubits, &ops)).unwrap();
        prop_assert!((state.norm_sqr() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mirrored_circuit_returns_to_zero((num_qubits, ops) in arb_circuit_ops()) {
        // Every gate in the set is self-inverse
        let mut mirrored = ops.clone();
        mirrored.extend(ops.iter().rev().cloned());
        let state = Statevector::from_circuit(&build(num_qubits, &mirrored)).unwrap();
        prop_assert!((state.probability(0) - 1.0).abs() < 1e-9);
    }
}

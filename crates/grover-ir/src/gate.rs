//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// The closed set of gates a Grover circuit is built from.
///
/// Search circuits only ever need Hadamard layers, bit flips and a
/// multi-controlled bit flip. `CZ` is kept for the two-qubit worked example,
/// where the phase flip is native rather than synthesised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X (bit flip) gate.
    X,
    /// Controlled-Z gate.
    CZ,
    /// Multi-controlled X (generalised Toffoli).
    ///
    /// Operands are the controls followed by the target.
    Mcx {
        /// Number of control qubits, at least one.
        num_controls: u32,
    },
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::CZ => "cz",
            StandardGate::Mcx { .. } => "mcx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::X => 1,
            StandardGate::CZ => 2,
            StandardGate::Mcx { num_controls } => num_controls + 1,
        }
    }
}

//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while evaluating a circuit.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// The register is too wide to hold its statevector in memory.
    #[error("Circuit has {requested} qubits but the statevector limit is {max}")]
    TooManyQubits {
        /// Qubits requested by the circuit.
        requested: usize,
        /// Largest supported register.
        max: usize,
    },

    /// An instruction does not fit the statevector it is applied to.
    #[error("Gate '{gate_name}' cannot act on qubits {qubits:?} of a {num_qubits}-qubit state")]
    InvalidOperands {
        /// Name of the gate.
        gate_name: String,
        /// Operands of the rejected instruction.
        qubits: Vec<usize>,
        /// Width of the statevector.
        num_qubits: usize,
    },

    /// Sampling was asked for zero shots.
    #[error("Number of shots must be at least 1")]
    ZeroShots,
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

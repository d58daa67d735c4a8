//! Error types for circuit construction.

use thiserror::Error;

/// Errors produced while configuring or building a search circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroverError {
    /// The solution string is not a bit pattern of the register's width.
    #[error("Invalid solution '{input}': {reason}")]
    InvalidSolutionFormat {
        /// The rejected input.
        input: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The register width is outside the supported range.
    #[error("Register must have between {min} and {max} qubits, got {num_qubits}")]
    InvalidQubitCount {
        /// Requested width.
        num_qubits: u32,
        /// Smallest supported width.
        min: u32,
        /// Largest supported width.
        max: u32,
    },

    /// A fixed iteration count is zero or above [`MAX_ITERATIONS`](crate::config::MAX_ITERATIONS).
    #[error("Iteration count must be between 1 and {max}, got {0}", max = crate::config::MAX_ITERATIONS)]
    InvalidIterations(usize),

    /// Configuration text could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] grover_ir::IrError),
}

/// Result type for circuit construction.
pub type GroverResult<T> = Result<T, GroverError>;

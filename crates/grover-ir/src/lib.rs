//! Grover Circuit Intermediate Representation
//!
//! This crate provides the data structures that Grover search circuits are
//! described with: qubit addresses, a closed gate set, instructions and an
//! append-only [`Circuit`] builder.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing a fixed-size register
//! - **Gates**: [`StandardGate`], the closed set `H`, `X`, `CZ`, `MCX`
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **Circuit**: [`Circuit`] high-level builder API with operand validation
//!
//! # Example: Phase flip on |11⟩
//!
//! ```rust
//! use grover_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("phase_flip", 2);
//!
//! // H · CX · H on the target is a controlled-Z
//! circuit.h(QubitId(1)).unwrap();
//! circuit.mcx(&[QubitId(0)], QubitId(1)).unwrap();
//! circuit.h(QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.len(), 3);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X` | 1 | Pauli-X (bit flip) |
//! | `CZ` | 2 | Controlled-Z |
//! | `MCX` | k + 1 | X on the target iff all k controls are 1 |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use qubit::QubitId;

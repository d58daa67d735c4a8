//! Grover's Search Circuit Construction
//!
//! Builds the gate sequence for Grover's amplitude amplification. Each round
//! is an oracle, which marks the solution with a −1 phase, followed by the
//! diffusion operator, which reflects every amplitude about the mean. Only
//! three gate kinds are used: Hadamard, X and multi-controlled X.
//!
//! # Example
//!
//! ```rust
//! use grover_search::four_qubit_grover;
//!
//! let circuit = four_qubit_grover("0010").unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//! assert!(circuit.gate_names().all(|g| matches!(g, "h" | "x" | "mcx")));
//! ```
//!
//! Wider registers go through [`GroverBuilder`], which derives the round count
//! from [`optimal_iterations`] unless the [`GroverConfig`] fixes it:
//!
//! ```rust
//! use grover_search::{GroverBuilder, GroverConfig, Solution};
//!
//! let builder = GroverBuilder::new(GroverConfig::new(5)).unwrap();
//! assert_eq!(builder.iterations(), 4);
//! let circuit = builder.build(&"10110".parse::<Solution>().unwrap()).unwrap();
//! assert_eq!(circuit.num_qubits(), 5);
//! ```

pub mod amplification;
pub mod builder;
pub mod config;
pub mod diffusion;
pub mod error;
pub mod oracle;
pub mod solution;

pub use amplification::{optimal_iterations, success_probability};
pub use builder::{GroverBuilder, four_qubit_grover, two_qubit_grover_11};
pub use config::{FOUR_QUBIT_ITERATIONS, GroverConfig, MAX_ITERATIONS};
pub use diffusion::apply_diffusion;
pub use error::{GroverError, GroverResult};
pub use oracle::{apply_controlled_phase_flip, apply_oracle};
pub use solution::Solution;

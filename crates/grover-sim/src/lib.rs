//! Grover Statevector Evaluation
//!
//! Exact (ideal, noiseless) evaluation of [`grover_ir::Circuit`]s. The search
//! builder never simulates; this crate exists so callers can check what a
//! circuit does: final amplitudes, measurement probabilities and sampled
//! shot histograms.
//!
//! # Example
//!
//! ```rust
//! use grover_ir::{Circuit, QubitId};
//! use grover_sim::Statevector;
//!
//! let mut circuit = Circuit::with_size("flip", 2);
//! circuit.x(QubitId(1)).unwrap();
//!
//! let state = Statevector::from_circuit(&circuit).unwrap();
//! assert_eq!(state.most_likely(), (0b10, 1.0));
//! assert_eq!(state.outcome_to_bitstring(0b10), "01");
//! ```

mod counts;
mod error;
mod statevector;

pub use counts::Counts;
pub use error::{SimError, SimResult};
pub use statevector::{MAX_QUBITS, Statevector};

//! Grover search circuit builders.

use grover_ir::{Circuit, QubitId};
use tracing::{debug, instrument};

use crate::config::GroverConfig;
use crate::diffusion::apply_diffusion;
use crate::error::{GroverError, GroverResult};
use crate::oracle::apply_oracle;
use crate::solution::Solution;

/// Builds oracle + diffusion circuits for a validated configuration.
#[derive(Debug, Clone)]
pub struct GroverBuilder {
    config: GroverConfig,
}

impl GroverBuilder {
    /// Create a builder, validating the configuration first.
    pub fn new(config: GroverConfig) -> GroverResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &GroverConfig {
        &self.config
    }

    /// Number of oracle + diffusion rounds each circuit gets.
    pub fn iterations(&self) -> usize {
        self.config.resolved_iterations()
    }

    /// Build the search circuit that amplifies `solution`.
    ///
    /// The circuit is returned unmeasured. The solution width must match the
    /// configured register; nothing is built otherwise.
    #[instrument(skip(self, solution), fields(solution = %solution, qubits = self.config.num_qubits))]
    pub fn build(&self, solution: &Solution) -> GroverResult<Circuit> {
        let num_qubits = self.config.num_qubits;
        if solution.width() != num_qubits as usize {
            return Err(GroverError::InvalidSolutionFormat {
                input: solution.to_string(),
                reason: format!(
                    "expected {num_qubits} characters, got {}",
                    solution.width()
                ),
            });
        }

        let mut circuit = Circuit::with_size(self.config.name.clone(), num_qubits);

        // Uniform superposition
        let all: Vec<_> = circuit.qubits().collect();
        circuit.h_all(all)?;

        let iterations = self.iterations();
        for round in 0..iterations {
            apply_oracle(&mut circuit, solution)?;
            apply_diffusion(&mut circuit)?;
            debug!(round, gates = circuit.len(), "Applied oracle and diffusion");
        }

        debug!(
            iterations,
            gates = circuit.len(),
            depth = circuit.depth(),
            "Search circuit built"
        );
        Ok(circuit)
    }
}

/// Build Grover's search over 4 qubits for `solution`, e.g. `"0010"`.
///
/// Three oracle + diffusion rounds follow the initial Hadamard layer, using
/// only H, X and multi-controlled X. Character `i` of `solution` is the value
/// of qubit `i` in the amplified state. Malformed input (wrong length or a
/// character other than `0`/`1`) is rejected with
/// [`GroverError::InvalidSolutionFormat`] before any gate is built.
pub fn four_qubit_grover(solution: &str) -> GroverResult<Circuit> {
    let solution = Solution::parse_with_width(solution, 4)?;
    GroverBuilder::new(GroverConfig::four_qubit())?.build(&solution)
}

/// Two-qubit Grover's search for the solution `11`.
///
/// One round amplifies `11` exactly. The phase flips use a native CZ.
pub fn two_qubit_grover_11() -> GroverResult<Circuit> {
    let mut circuit = Circuit::with_size("two_qubit_grover_11", 2);
    let (q0, q1) = (QubitId(0), QubitId(1));

    // Initialise
    circuit.h_all([q0, q1])?;

    // Tag solution
    circuit.cz(q0, q1)?;

    // Diffusion
    circuit.h_all([q0, q1])?.x_all([q0, q1])?;
    circuit.cz(q0, q1)?;
    circuit.x_all([q0, q1])?.h_all([q0, q1])?;

    Ok(circuit)
}

//! Inversion about the mean.

use grover_ir::Circuit;

use crate::error::GroverResult;
use crate::oracle::apply_register_phase_flip;

/// Apply the diffusion operator (2|s⟩⟨s| - I), up to global phase.
///
/// 1. H on all qubits
/// 2. X on all qubits
/// 3. Phase flip on |1...1⟩
/// 4. X on all qubits
/// 5. H on all qubits
pub fn apply_diffusion(circuit: &mut Circuit) -> GroverResult<()> {
    let all: Vec<_> = circuit.qubits().collect();

    circuit.h_all(all.iter().copied())?;
    circuit.x_all(all.iter().copied())?;
    apply_register_phase_flip(circuit)?;
    circuit.x_all(all.iter().copied())?;
    circuit.h_all(all)?;
    Ok(())
}

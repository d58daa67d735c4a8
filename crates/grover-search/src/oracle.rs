//! Phase-flip oracle.

use grover_ir::{Circuit, QubitId};

use crate::error::{GroverError, GroverResult};
use crate::solution::Solution;

/// Flip the sign of the basis state where every qubit in `controls` and
/// `target` is 1.
///
/// Appends `H(target) · MCX(controls → target) · H(target)`; conjugating the
/// bit flip with Hadamards turns it into a phase flip.
pub fn apply_controlled_phase_flip(
    circuit: &mut Circuit,
    controls: &[QubitId],
    target: QubitId,
) -> GroverResult<()> {
    circuit.h(target)?.mcx(controls, target)?.h(target)?;
    Ok(())
}

/// Phase flip over the whole register: controls `0..n-1`, target `n-1`.
pub(crate) fn apply_register_phase_flip(circuit: &mut Circuit) -> GroverResult<()> {
    let mut qubits: Vec<_> = circuit.qubits().collect();
    let target = qubits.pop().ok_or(grover_ir::IrError::MissingControls)?;
    apply_controlled_phase_flip(circuit, &qubits, target)
}

/// Mark `solution` with a −1 phase.
///
/// Qubits whose marked value is 0 are flipped around the phase flip so the
/// all-ones pattern lines up with the solution.
pub fn apply_oracle(circuit: &mut Circuit, solution: &Solution) -> GroverResult<()> {
    if solution.width() != circuit.num_qubits() {
        return Err(GroverError::InvalidSolutionFormat {
            input: solution.to_string(),
            reason: format!(
                "expected {} characters, got {}",
                circuit.num_qubits(),
                solution.width()
            ),
        });
    }

    circuit.x_all(solution.zero_positions())?;
    apply_register_phase_flip(circuit)?;
    circuit.x_all(solution.zero_positions())?;
    Ok(())
}

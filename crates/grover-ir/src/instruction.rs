//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::qubit::QubitId;

/// A gate together with the qubits it acts on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate being applied.
    pub gate: StandardGate,
    /// Qubits this instruction operates on. For MCX: controls, then target.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a multi-controlled X instruction.
    ///
    /// Returns [`IrError::MissingControls`] if `controls` is empty.
    pub fn mcx(controls: &[QubitId], target: QubitId) -> IrResult<Self> {
        if controls.is_empty() {
            return Err(IrError::MissingControls);
        }
        let num_controls = controls.len() as u32;
        let qubits = controls.iter().copied().chain(std::iter::once(target));
        Ok(Self::gate(StandardGate::Mcx { num_controls }, qubits))
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// Control qubits, empty for uncontrolled gates.
    pub fn controls(&self) -> &[QubitId] {
        match self.gate {
            StandardGate::Mcx { .. } => &self.qubits[..self.qubits.len().saturating_sub(1)],
            StandardGate::CZ => &self.qubits[..1],
            StandardGate::H | StandardGate::X => &[],
        }
    }

    /// The qubit the gate acts on (last operand).
    pub fn target(&self) -> Option<QubitId> {
        self.qubits.last().copied()
    }
}

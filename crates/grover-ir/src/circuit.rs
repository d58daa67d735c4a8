//! High-level circuit builder API.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// A quantum circuit over a fixed-size register.
///
/// Gates are kept in application order. The circuit is never measured; it
/// is a symbolic description that a simulator or exporter can consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCircuit")]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Register width.
    num_qubits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

/// Wire form of a [`Circuit`] before its instructions are checked.
#[derive(Deserialize)]
struct RawCircuit {
    name: String,
    num_qubits: u32,
    instructions: Vec<Instruction>,
}

impl TryFrom<RawCircuit> for Circuit {
    type Error = IrError;

    /// Replay every instruction through [`Circuit::apply`].
    fn try_from(raw: RawCircuit) -> IrResult<Self> {
        let mut circuit = Circuit::with_size(raw.name, raw.num_qubits);
        for instruction in raw.instructions {
            circuit.apply(instruction)?;
        }
        Ok(circuit)
    }
}

impl Circuit {
    /// Create a circuit with a given number of qubits, all starting in |0⟩.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Qubit ids of the whole register, in order.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + use<> {
        (0..self.num_qubits).map(QubitId)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))?;
        Ok(self)
    }

    /// Apply Hadamard to each of `qubits`, in order.
    pub fn h_all(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        for qubit in qubits {
            self.h(qubit)?;
        }
        Ok(self)
    }

    /// Apply Pauli-X to each of `qubits`, in order.
    pub fn x_all(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        for qubit in qubits {
            self.x(qubit)?;
        }
        Ok(self)
    }

    // =========================================================================
    // Controlled gates
    // =========================================================================

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            StandardGate::CZ,
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply a multi-controlled X gate.
    pub fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::mcx(controls, target)?)?;
        Ok(self)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Append an instruction after checking its operands against the register.
    ///
    /// Nothing is appended when validation fails.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<()> {
        let gate_name = instruction.name();
        if let StandardGate::Mcx { num_controls: 0 } = instruction.gate {
            return Err(IrError::MissingControls);
        }
        let expected = instruction.gate.num_qubits();
        let got = instruction.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate_name.into(),
                expected,
                got,
            });
        }

        for (i, &qubit) in instruction.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: Some(gate_name.into()),
                });
            }
            if instruction.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(gate_name.into()),
                });
            }
        }

        self.instructions.push(instruction);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of gate operations.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether no gate has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Gate names in application order.
    pub fn gate_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.instructions.iter().map(Instruction::name)
    }

    /// Number of operations per gate name.
    pub fn count_ops(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for name in self.gate_names() {
            *counts.entry(name).or_insert(0) += 1;
        }
        counts
    }

    /// Get the circuit depth.
    ///
    /// Each gate occupies all of its operand wires for one layer.
    pub fn depth(&self) -> usize {
        let mut wire_depth = vec![0usize; self.num_qubits()];
        for inst in &self.instructions {
            let layer = inst
                .qubits
                .iter()
                .map(|q| wire_depth[q.index()])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                wire_depth[q.index()] = layer;
            }
        }
        wire_depth.into_iter().max().unwrap_or(0)
    }
}

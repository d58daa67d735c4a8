//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use tracing::{debug, instrument, trace};

use grover_ir::{Circuit, Instruction, StandardGate};

use crate::counts::Counts;
use crate::error::{SimError, SimResult};

/// Widest register the engine will allocate (2^24 amplitudes, 256 MiB).
pub const MAX_QUBITS: usize = 24;

/// A statevector representing a quantum state.
///
/// Basis index bit `i` holds the value of qubit `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Evolve |0...0⟩ through every instruction of `circuit`.
    #[instrument(skip_all, fields(circuit = circuit.name(), qubits = circuit.num_qubits()))]
    pub fn from_circuit(circuit: &Circuit) -> SimResult<Self> {
        let mut state = Self::new(circuit.num_qubits())?;
        debug!("Evolving statevector through {} gates", circuit.len());
        for instruction in circuit.instructions() {
            state.apply(instruction)?;
        }
        Ok(state)
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Measurement probability of a single basis state.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes.get(index).map_or(0.0, Complex64::norm_sqr)
    }

    /// Squared norm of the state, 1 for any state reached by unitary gates.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// The basis state with the largest probability, and that probability.
    ///
    /// Ties resolve to the lowest index.
    pub fn most_likely(&self) -> (usize, f64) {
        let mut best = (0, 0.0);
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > best.1 {
                best = (i, p);
            }
        }
        best
    }

    /// Apply an instruction to the statevector.
    ///
    /// The operands must match the gate's arity and lie inside the register.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
        trace!(gate = instruction.name(), ?qubits, "apply");

        if qubits.iter().any(|&q| q >= self.num_qubits) {
            return Err(self.invalid_operands(instruction, &qubits));
        }

        match (instruction.gate, qubits.as_slice()) {
            (StandardGate::H, &[q]) => self.apply_h(q),
            (StandardGate::X, &[q]) => self.apply_x(q),
            (StandardGate::CZ, &[c, t]) => self.apply_cz(c, t),
            (StandardGate::Mcx { num_controls }, [controls @ .., target])
                if !controls.is_empty() && controls.len() == num_controls as usize =>
            {
                self.apply_mcx(controls, *target);
            }
            _ => return Err(self.invalid_operands(instruction, &qubits)),
        }
        Ok(())
    }

    fn invalid_operands(&self, instruction: &Instruction, qubits: &[usize]) -> SimError {
        SimError::InvalidOperands {
            gate_name: instruction.name().to_string(),
            qubits: qubits.to_vec(),
            num_qubits: self.num_qubits,
        }
    }

    // =========================================================================
    // Gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let mask = (1 << control) | (1 << target);
        for i in 0..self.amplitudes.len() {
            if i & mask == mask {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_mcx(&mut self, controls: &[usize], target: usize) {
        let ctrl_mask = controls.iter().fold(0, |m, c| m | (1 << c));
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Sampling
    // =========================================================================

    /// Sample a measurement outcome.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Rounding can leave the cumulative sum a hair below 1
        self.amplitudes.len() - 1
    }

    /// Measure every qubit `shots` times without collapsing the state.
    pub fn sample_counts<R: Rng>(&self, shots: u32, rng: &mut R) -> SimResult<Counts> {
        if shots == 0 {
            return Err(SimError::ZeroShots);
        }
        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = self.sample(rng);
            counts.insert(self.outcome_to_bitstring(outcome), 1);
        }
        debug!(shots, outcomes = counts.len(), "Sampling complete");
        Ok(counts)
    }

    /// Convert measurement outcome to bitstring, qubit 0 first.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
            .chars()
            .rev()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grover_ir::QubitId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2).unwrap();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_too_many_qubits() {
        assert_eq!(
            Statevector::new(MAX_QUBITS + 1),
            Err(SimError::TooManyQubits {
                requested: MAX_QUBITS + 1,
                max: MAX_QUBITS,
            })
        );
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1).unwrap();
        sv.apply_h(0);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1).unwrap();
        sv.apply_x(0);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_mcx_flips_only_when_all_controls_set() {
        let mut sv = Statevector::new(3).unwrap();
        sv.apply_x(0);
        sv.apply_mcx(&[0, 1], 2);
        assert_eq!(sv.most_likely(), (0b001, 1.0));

        sv.apply_x(1);
        sv.apply_mcx(&[0, 1], 2);
        assert_eq!(sv.most_likely(), (0b111, 1.0));
    }

    #[test]
    fn test_cz_phase() {
        let mut sv = Statevector::new(2).unwrap();
        sv.apply_x(0);
        sv.apply_x(1);
        sv.apply_cz(0, 1);
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(-1.0, 0.0)));
    }

    #[test]
    fn test_h_mcx_h_is_controlled_z() {
        let mut sandwich = Circuit::with_size("sandwich", 2);
        sandwich
            .h_all([QubitId(0), QubitId(1)])
            .unwrap()
            .h(QubitId(1))
            .unwrap()
            .mcx(&[QubitId(0)], QubitId(1))
            .unwrap()
            .h(QubitId(1))
            .unwrap();

        let mut native = Circuit::with_size("native", 2);
        native
            .h_all([QubitId(0), QubitId(1)])
            .unwrap()
            .cz(QubitId(0), QubitId(1))
            .unwrap();

        let a = Statevector::from_circuit(&sandwich).unwrap();
        let b = Statevector::from_circuit(&native).unwrap();
        for (x, y) in a.amplitudes().iter().zip(b.amplitudes()) {
            assert!(approx_eq(*x, *y));
        }
    }

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1
        let mut sv = Statevector::new(1).unwrap();
        sv.apply_x(0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sv.sample(&mut rng), 1);
        }
    }

    #[test]
    fn test_bitstring_is_qubit_ordered() {
        let sv = Statevector::new(4).unwrap();
        // index 0b0110: qubits 1 and 2 set
        assert_eq!(sv.outcome_to_bitstring(0b0110), "0110");
        // index 0b0001: qubit 0 set
        assert_eq!(sv.outcome_to_bitstring(0b0001), "1000");
    }

    #[test]
    fn test_out_of_range_operand_rejected() {
        let mut sv = Statevector::new(2).unwrap();
        let inst = Instruction::single_qubit_gate(StandardGate::X, QubitId(9));
        assert_eq!(
            sv.apply(&inst),
            Err(SimError::InvalidOperands {
                gate_name: "x".into(),
                qubits: vec![9],
                num_qubits: 2,
            })
        );
        assert_eq!(sv.most_likely(), (0, 1.0));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let mut sv = Statevector::new(2).unwrap();
        let empty = Instruction::gate(StandardGate::H, Vec::<QubitId>::new());
        assert!(matches!(
            sv.apply(&empty),
            Err(SimError::InvalidOperands { .. })
        ));
        let no_controls = Instruction::gate(StandardGate::Mcx { num_controls: 0 }, [QubitId(0)]);
        assert!(matches!(
            sv.apply(&no_controls),
            Err(SimError::InvalidOperands { .. })
        ));
    }

    #[test]
    fn test_zero_shots_rejected() {
        let sv = Statevector::new(1).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sv.sample_counts(0, &mut rng), Err(SimError::ZeroShots));
    }
}

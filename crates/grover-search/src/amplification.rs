//! Iteration-count arithmetic for amplitude amplification.

use std::f64::consts::PI;

/// Calculate the number of Grover iterations for a register.
///
/// For `m` marked states among `N = 2^n`, the success probability peaks near
/// `π/4 · sqrt(N/m)` rounds. The count is floored so the rotation never
/// overshoots, and is at least one.
pub fn optimal_iterations(num_qubits: u32, num_marked: usize) -> usize {
    let space = search_space(num_qubits);
    let marked = num_marked.max(1) as f64;
    let optimal = (PI / 4.0 * (space / marked).sqrt()).floor() as usize;
    optimal.max(1)
}

/// Ideal probability of measuring the single marked state after `iterations`
/// rounds on an `n`-qubit register: `sin²((2k + 1)·θ)` with `sin θ = 1/sqrt(2^n)`.
pub fn success_probability(num_qubits: u32, iterations: usize) -> f64 {
    let space = search_space(num_qubits);
    let theta = (1.0 / space.sqrt()).asin();
    ((2 * iterations + 1) as f64 * theta).sin().powi(2)
}

/// `2^n` as a float; saturates to infinity for registers too wide to count.
fn search_space(num_qubits: u32) -> f64 {
    i32::try_from(num_qubits).map_or(f64::INFINITY, |n| 2_f64.powi(n))
}

//! Grover Demo Suite
//!
//! Builds search circuits with `grover-search`, evaluates them with the
//! ideal statevector from `grover-sim`, and reports the outcome:
//!
//! - **Single search**: one solution, with sampled shot counts
//! - **Sweep**: every solution of a register width, checking each is found
//! - **Worked example**: the exact two-qubit search for `11`

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use grover_ir::Circuit;
use grover_search::{GroverBuilder, Solution, success_probability};
use grover_sim::{Counts, Statevector};

/// Outcome of building and evaluating one search circuit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// The marked bit pattern.
    pub solution: String,
    /// Basis index the solution should be found at.
    pub expected_index: usize,
    /// Oracle + diffusion rounds in the circuit.
    pub iterations: usize,
    /// Number of gate operations.
    pub gates: usize,
    /// Circuit depth.
    pub depth: usize,
    /// Most probable basis index after evaluation.
    pub found_index: usize,
    /// Probability of the most probable basis index.
    pub found_probability: f64,
    /// Analytic success probability for this width and round count.
    pub predicted_probability: f64,
    /// Sampled measurement histogram, when shots were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Counts>,
}

impl SearchReport {
    /// Whether the amplified state is the marked one.
    pub fn found(&self) -> bool {
        self.found_index == self.expected_index
    }
}

/// Evaluate a built circuit against the solution it was built for.
pub fn evaluate<R: Rng>(
    circuit: &Circuit,
    solution: &Solution,
    iterations: usize,
    shots: Option<u32>,
    rng: &mut R,
) -> Result<SearchReport> {
    let state = Statevector::from_circuit(circuit)?;
    let (found_index, found_probability) = state.most_likely();
    let counts = shots
        .map(|shots| state.sample_counts(shots, rng))
        .transpose()?;

    debug!(
        solution = %solution,
        found_index,
        found_probability,
        "Circuit evaluated"
    );

    Ok(SearchReport {
        solution: solution.to_string(),
        expected_index: solution.index(),
        iterations,
        gates: circuit.len(),
        depth: circuit.depth(),
        found_index,
        found_probability,
        predicted_probability: success_probability(circuit.num_qubits() as u32, iterations),
        counts,
    })
}

/// Build and evaluate the circuit for every solution of the builder's width.
pub fn sweep<R: Rng>(builder: &GroverBuilder, rng: &mut R) -> Result<Vec<SearchReport>> {
    let width = builder.config().num_qubits as usize;
    let space = 1_usize << width;
    let pb = create_progress_bar(space as u64, "Evaluating solutions");

    let mut reports = Vec::with_capacity(space);
    for index in 0..space {
        let solution = Solution::from_index(index, width);
        let circuit = builder.build(&solution)?;
        reports.push(evaluate(&circuit, &solution, builder.iterations(), None, rng)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(reports)
}

/// Create a progress bar for demo operations.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(progress_style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    ) {
        pb.set_style(progress_style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a failure message.
pub fn print_failure(message: &str) {
    println!("{} {}", style("✗").red().bold(), message);
}

/// Print sampled counts as a bar chart, most frequent first.
pub fn print_counts(counts: &Counts, limit: usize) {
    let total = counts.total_shots() as f64;

    for (bitstring, count) in counts.sorted().into_iter().take(limit) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }
}

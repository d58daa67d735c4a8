//! Grover's Search Algorithm Demo
//!
//! Builds the oracle + diffusion circuit for a marked bit pattern, evaluates
//! it on an ideal statevector and samples measurement shots.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grover_demos::{
    SearchReport, evaluate, print_counts, print_failure, print_header, print_result,
    print_section, print_success, sweep,
};
use grover_search::{GroverBuilder, GroverConfig, Solution, two_qubit_grover_11};

#[derive(Parser, Debug)]
#[command(name = "demo-grover")]
#[command(author, version, about = "Demonstrate Grover's search algorithm")]
struct Args {
    /// Marked bit pattern; character i is the value of qubit i
    #[arg(short, long, default_value = "0110")]
    solution: String,

    /// Search configuration file (YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of Grover iterations (default: derived from register width)
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Number of measurement shots to sample
    #[arg(long, default_value = "1024")]
    shots: u32,

    /// Seed for shot sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate every solution of the register width
    #[arg(long)]
    sweep: bool,

    /// Run the exact two-qubit search for 11 instead
    #[arg(long)]
    worked_example: bool,

    /// Print the report and circuit as JSON
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.worked_example {
        return run_worked_example(args, &mut rng);
    }

    let mut config = match &args.config {
        Some(path) => GroverConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if args.sweep => GroverConfig::default(),
        None => GroverConfig::new(args.solution.chars().count() as u32),
    };
    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }
    let builder = GroverBuilder::new(config)?;
    info!(
        qubits = builder.config().num_qubits,
        iterations = builder.iterations(),
        "Search configured"
    );

    if args.sweep {
        return run_sweep(args, &builder, &mut rng);
    }

    let solution = Solution::parse_with_width(&args.solution, builder.config().num_qubits as usize)?;
    let circuit = builder.build(&solution)?;
    let report = evaluate(
        &circuit,
        &solution,
        builder.iterations(),
        Some(args.shots),
        &mut rng,
    )?;

    if args.json {
        let out = serde_json::json!({ "report": report, "circuit": circuit });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_header("Grover's Search Algorithm Demo");

    print_section("Problem Setup");
    let width = builder.config().num_qubits;
    print_result("Qubits", width);
    print_result("Search space size", 1_u64 << width);
    print_result(
        "Marked state",
        format!("|{solution}⟩ (basis index {})", solution.index()),
    );
    print_result("Grover iterations", report.iterations);

    print_section("Circuit");
    print_result("Gates", report.gates);
    print_result("Depth", report.depth);
    let mut ops: Vec<_> = circuit.count_ops().into_iter().collect();
    ops.sort_unstable();
    for (name, count) in ops {
        print_result(&format!("  {name}"), count);
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &SearchReport) {
    print_section("Ideal Evaluation");
    print_result("Most likely index", report.found_index);
    print_result(
        "Probability",
        format!("{:.2}%", report.found_probability * 100.0),
    );
    print_result(
        "Predicted",
        format!("{:.2}%", report.predicted_probability * 100.0),
    );

    if let Some(counts) = &report.counts {
        print_section(&format!("Sampled Counts ({} shots)", counts.total_shots()));
        print_counts(counts, 8);
    }

    println!();
    if report.found() {
        print_success(&format!("Found |{}⟩", report.solution));
    } else {
        print_failure(&format!(
            "Amplified index {} instead of {}",
            report.found_index, report.expected_index
        ));
    }
}

fn run_sweep(args: &Args, builder: &GroverBuilder, rng: &mut StdRng) -> Result<()> {
    let reports = sweep(builder, rng)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    print_header("Grover Sweep");
    print_result("Qubits", builder.config().num_qubits);
    print_result("Grover iterations", builder.iterations());

    print_section("Solutions");
    for report in &reports {
        let mark = if report.found() {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!(
            "  {} {}  index {:>3}  p = {:.4}",
            mark,
            style(&report.solution).cyan(),
            report.found_index,
            report.found_probability
        );
    }

    let found = reports.iter().filter(|r| r.found()).count();
    println!();
    if found == reports.len() {
        print_success(&format!("All {found} solutions amplified"));
    } else {
        print_failure(&format!("{found} of {} solutions amplified", reports.len()));
    }
    Ok(())
}

fn run_worked_example(args: &Args, rng: &mut StdRng) -> Result<()> {
    let circuit = two_qubit_grover_11()?;
    let solution = Solution::parse("11")?;
    let report = evaluate(&circuit, &solution, 1, Some(args.shots), rng)?;

    if args.json {
        let out = serde_json::json!({ "report": report, "circuit": circuit });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_header("Two-Qubit Worked Example");
    print_result("Gates", report.gates);
    print_result("Depth", report.depth);
    print_report(&report);
    Ok(())
}

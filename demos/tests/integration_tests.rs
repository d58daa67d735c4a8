//! Integration tests for the demo suite.
//!
//! These run the same build → evaluate pipeline as the binary, with seeded
//! sampling for reproducible counts.

use rand::SeedableRng;
use rand::rngs::StdRng;

use grover_demos::{evaluate, sweep};
use grover_search::{
    GroverBuilder, GroverConfig, Solution, four_qubit_grover, two_qubit_grover_11,
};

#[test]
fn test_single_search_report() {
    let circuit = four_qubit_grover("0110").unwrap();
    let solution = Solution::parse("0110").unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let report = evaluate(&circuit, &solution, 3, Some(2000), &mut rng).unwrap();
    assert!(report.found());
    assert_eq!(report.expected_index, 6);
    assert_eq!(report.gates, 70 + 6 * 2);
    assert!((report.found_probability - report.predicted_probability).abs() < 1e-9);

    let counts = report.counts.as_ref().unwrap();
    assert_eq!(counts.total_shots(), 2000);
    let (top, _) = counts.most_frequent().unwrap();
    assert_eq!(top, "0110");
    assert!(counts.frequency("0110") > 0.9);
}

#[test]
fn test_sweep_finds_every_solution() {
    let builder = GroverBuilder::new(GroverConfig::four_qubit()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let reports = sweep(&builder, &mut rng).unwrap();
    assert_eq!(reports.len(), 16);
    for report in &reports {
        assert!(report.found(), "missed {}", report.solution);
        assert!(report.found_probability >= 0.93);
        assert!(report.counts.is_none());
    }
}

#[test]
fn test_worked_example_report() {
    let circuit = two_qubit_grover_11().unwrap();
    let solution = Solution::parse("11").unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let report = evaluate(&circuit, &solution, 1, Some(100), &mut rng).unwrap();
    assert!(report.found());
    assert!((report.found_probability - 1.0).abs() < 1e-10);
    assert_eq!(report.counts.unwrap().get("11"), 100);
}

#[test]
fn test_report_serializes() {
    let circuit = four_qubit_grover("1111").unwrap();
    let solution = Solution::parse("1111").unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let report = evaluate(&circuit, &solution, 3, None, &mut rng).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["solution"], "1111");
    assert_eq!(json["found_index"], 15);
    assert!(json.get("counts").is_none());
}

use std::process::{Command, Output};

fn run_simulation(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parking_garage"))
        .args(args)
        .env("RUST_LOG", "warn,parking_garage=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = run_simulation(&["--steps", "200", "--seed", "7"]);

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that simulation statistics are logged
#[test]
fn test_simulation_statistics_logged() {
    let output = run_simulation(&["--steps", "50", "--seed", "1"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    for needle in ["Admitted:", "Rejected:", "Released:", "Still parked:"] {
        assert!(stderr.contains(needle), "Missing '{}' statistic", needle);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Parking Garage Summary ==="));
    assert!(stdout.contains("=== Final State ==="));
}

/// Test that a seeded run is reproducible
#[test]
fn test_seeded_runs_match() {
    let first = run_simulation(&["--steps", "300", "--seed", "42", "--strict-release"]);
    let second = run_simulation(&["--steps", "300", "--seed", "42", "--strict-release"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

/// Test that an exhausted structure turns every arrival away
#[test]
fn test_exhausted_structure_rejects_arrivals() {
    let output = run_simulation(&[
        "--steps",
        "20",
        "--seed",
        "3",
        "--total-units",
        "0",
        "--total-rows",
        "0",
        "--total-levels",
        "0",
    ]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Admitted: 0"), "stderr: {}", stderr);
    assert!(stderr.contains("Rejected: 20"), "stderr: {}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Full: true"));
}

/// Test that a bad configuration is refused
#[test]
fn test_invalid_configuration_fails() {
    let output = run_simulation(&["--total-units=-5"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid facility configuration"), "stderr: {}", stderr);

    let output = run_simulation(&["--departure-chance", "1.5"]);
    assert!(!output.status.success());
}

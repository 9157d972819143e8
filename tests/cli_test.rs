use std::io::Write;
use std::process::{Command, Stdio};

fn sim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_auto_driving_sim"))
}

/// Test that a headless run prints the final state of every car
#[test]
fn test_headless_no_collision() {
    let output = sim()
        .args([
            "--width",
            "10",
            "--height",
            "10",
            "--car",
            "A 1 2 N FFRFFFFRRL",
            "--car",
            "B 7 8 W FFLFFFRFFF",
        ])
        .output()
        .expect("Failed to execute simulation");

    assert!(
        output.status.success(),
        "Headless run failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("After simulation, the result is:"));
    assert!(stdout.contains("- A, (5,4) S"), "stdout: {}", stdout);
    assert!(stdout.contains("- B, (2,5) W"), "stdout: {}", stdout);
}

/// Test that a headless collision is reported and logged
#[test]
fn test_headless_collision() {
    let output = sim()
        .args([
            "--width",
            "10",
            "--height",
            "10",
            "--car",
            "A 1 2 N FFRFFFFRRL",
            "--car",
            "B 7 8 W FFLFFFFFFF",
        ])
        .env("RUST_LOG", "warn,auto_driving_sim=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- A, collides with B at (5,4) at step 7"));
    assert!(stdout.contains("- B, collides with A at (5,4) at step 7"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Collision at step 7"),
        "Collision was not logged. stderr: {}",
        stderr
    );
}

/// Test that bad headless input fails with a non-zero exit
#[test]
fn test_headless_rejects_invalid_cars() {
    let cases: [&[&str]; 4] = [
        &["--width", "5", "--height", "5"],
        &["--width", "5", "--height", "5", "--car", "A 9 9 N F"],
        &["--width", "5", "--height", "5", "--car", "A 1 1 N F", "--car", "A 2 2 N F"],
        &["--width", "5", "--car", "A 1 1 N F"],
    ];

    for args in cases {
        let output = sim()
            .args(args)
            .output()
            .expect("Failed to execute simulation");
        assert!(
            !output.status.success(),
            "Expected failure for args {:?}",
            args
        );
    }
}

/// Test that the interactive menu runs over piped stdin
#[test]
fn test_interactive_session_over_stdin() {
    let mut child = sim()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start simulation");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"5 5\n1\nA\n0 0 S\nFLFR\n2\n2\n")
        .expect("Failed to write input");

    let output = child.wait_with_output().expect("Failed to wait on simulation");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("You have created a field of 5 x 5."));
    assert!(stdout.contains("- A, (1,0) S"));
    assert!(stdout.contains("Thank you for running the simulation. Goodbye!"));
}

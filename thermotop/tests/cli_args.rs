//! CLI arg parsing tests for thermotop
use std::process::Command;

// The binary exits before entering the TUI whenever parsing returns an error
// (including --help), so these invocations never touch the terminal.

fn run_thermotop(args: &[&str]) -> (bool, String) {
    let exe = env!("CARGO_BIN_EXE_thermotop");
    let output = Command::new(exe)
        .args(args)
        .output()
        .expect("run thermotop");
    let ok = output.status.success();
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    (ok, text)
}

#[test]
fn test_help_mentions_short_and_long_flags() {
    let (ok, text) = run_thermotop(&["--help"]);
    assert!(ok, "thermotop --help did not succeed");
    assert!(
        text.contains("--tick-ms")
            && text.contains("-i")
            && text.contains("--retention")
            && text.contains("-r")
            && text.contains("--span")
            && text.contains("-s")
            && text.contains("--zone-b-off")
            && text.contains("--help")
            && text.contains("-h"),
        "help text missing expected flags (--tick-ms/-i, --retention/-r, --span/-s, --zone-b-off, --help/-h)\n{text}"
    );
}

#[test]
fn test_zone_b_off_flag_accepted() {
    let (ok, text) = run_thermotop(&["--zone-b-off", "--help"]);
    assert!(ok, "thermotop --zone-b-off --help did not succeed");
    assert!(
        !text.contains("Unexpected argument"),
        "--zone-b-off rejected by the parser: {text}"
    );
    assert!(text.contains("Usage:"));

    // combines with the other flags
    let (_ok, text) = run_thermotop(&["--zone-b-off", "--retention", "50", "--help"]);
    assert!(
        !text.contains("Unexpected argument") && text.contains("Usage:"),
        "flag combination rejected: {text}"
    );
}

#[test]
fn test_invalid_tick_interval_reported() {
    let (ok, text) = run_thermotop(&["--tick-ms", "0"]);
    assert!(ok);
    assert!(
        text.contains("invalid tick interval"),
        "expected tick interval error, got: {text}"
    );

    let (_ok, text) = run_thermotop(&["-i", "abc"]);
    assert!(text.contains("invalid tick interval"));
}

#[test]
fn test_invalid_retention_and_span_reported() {
    let (_ok, text) = run_thermotop(&["--retention", "0"]);
    assert!(
        text.contains("invalid retention"),
        "expected retention error, got: {text}"
    );

    let (_ok, text) = run_thermotop(&["--span", "-3"]);
    assert!(text.contains("invalid span"), "expected span error, got: {text}");

    let (_ok, text) = run_thermotop(&["--span=nan"]);
    assert!(text.contains("invalid span"), "expected span error, got: {text}");
}

#[test]
fn test_unexpected_argument_reported() {
    let (ok, text) = run_thermotop(&["--bogus"]);
    assert!(ok);
    assert!(
        text.contains("Unexpected argument") && text.contains("Usage:"),
        "expected usage message, got: {text}"
    );
}

// Command-line tests for cosmicscan-plan
//
// These run the built binary against a temporary output directory.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cosmicscan-plan"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("binary should start")
}

#[test]
fn test_tables_prints_report_banner_once() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_str().unwrap();
    let output = run(&["tables", "product-analysis", "-o", out]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let banner = "CosmicScan 서비스 핵심 목표 재정의";
    assert_eq!(
        stdout.matches(banner).count() + stderr.matches(banner).count(),
        1,
        "stdout:\n{stdout}\nstderr:\n{stderr}"
    );
    assert_eq!(stdout.lines().filter(|l| l.starts_with("✅")).count(), 4);
}

#[test]
fn test_show_prints_table_csv() {
    let output = run(&["show", "minimal_info_accuracy_utf8.csv"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("핵심정보,정확도_기여,추출_안정성,데이터_크기,처리_우선순위,백업_방법")
    );
    assert_eq!(lines.count(), 7);
}

#[test]
fn test_show_unknown_table_fails() {
    let output = run(&["show", "missing.csv"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.csv"));
}

#[test]
fn test_charts_write_both_default_formats() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_str().unwrap();
    let output = run(&["charts", "user-journey", "-o", out]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert!(dir.path().join("cosmicscan_flow.png").is_file());
    assert!(dir.path().join("cosmicscan_flow.svg").is_file());
}

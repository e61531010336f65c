use std::path::PathBuf;
use std::process::Command;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn mgpareto() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mgpareto"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_prints_front() {
    let output = mgpareto()
        .arg(data("acgt.fa"))
        .arg(data("tacg.fa.gz"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0 0\n3 2\n");
}

#[test]
fn test_run_gap_model_json() {
    let output = mgpareto()
        .args(["-g", "run", "-O", "json"])
        .arg(data("empty_sequence.fa"))
        .arg(data("acgt.fa"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"pairs\":[{\"matches\":0,\"gaps\":1}]}\n"
    );
}

#[test]
fn test_usage_error() {
    let output = mgpareto().arg(data("acgt.fa")).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_input_errors() {
    let missing = mgpareto()
        .arg(data("does_not_exist.fa"))
        .arg(data("acgt.fa"))
        .output()
        .unwrap();
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("does_not_exist.fa"));

    let malformed = mgpareto()
        .arg(data("acgt.fa"))
        .arg(data("no_header.fa"))
        .output()
        .unwrap();
    assert_eq!(malformed.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&malformed.stderr).contains("missing '>' header"));
}

#[test]
fn test_capacity_error() {
    let output = mgpareto()
        .args(["-s", "1"])
        .arg(data("acgt.fa"))
        .arg(data("tacg.fa.gz"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("maximum of 1 states"));
}

#[test]
fn test_zero_max_states_rejected() {
    let output = mgpareto()
        .args(["-s", "0"])
        .arg(data("acgt.fa"))
        .arg(data("tacg.fa.gz"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

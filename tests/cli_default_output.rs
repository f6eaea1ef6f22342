use assert_cmd::cargo::cargo_bin;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// One positional: the output path defaults to the artifacts path and the
/// run completes in place without touching the artifacts.
#[test]
fn single_arg_processes_in_place() {
    let td = tempdir().unwrap();
    let artifacts = td.path().join("in");
    fs::create_dir_all(&artifacts).unwrap();
    fs::write(artifacts.join("a.bin"), b"alpha").unwrap();

    let me = cargo_bin("artibatch");
    let out = Command::new(me)
        .env_remove("RUST_LOG")
        .arg(&artifacts)
        .output()
        .expect("spawn binary");

    eprintln!("=== STDOUT ===\n{}", String::from_utf8_lossy(&out.stdout));
    eprintln!("=== STDERR ===\n{}", String::from_utf8_lossy(&out.stderr));

    assert!(out.status.success(), "binary exited with failure");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains(&format!("Processing artifacts in {}...", artifacts.display())),
        "progress line missing the artifacts path: {stdout}"
    );
    assert!(stdout.contains("Complete!"), "completion line missing: {stdout}");
    assert!(
        out.stderr.is_empty(),
        "a successful run must produce no error output: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    // In-place default: the artifact is still there, unchanged.
    assert_eq!(fs::read(artifacts.join("a.bin")).unwrap(), b"alpha");
}

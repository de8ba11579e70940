use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn minvc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_minvc"))
}

/// Writes a triangle instance and returns (instance path, output dir).
fn triangle_fixture(tag: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("minvc_cli_{tag}"));
    fs::create_dir_all(&dir).unwrap();
    let inst = dir.join("triangle.graph");
    fs::write(&inst, "3 3 0\n2 3\n1 3\n1 2\n").unwrap();
    (inst, dir.join("out"))
}

#[test]
fn test_help() {
    let output = minvc().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("minimum vertex cover"));
}

#[test]
fn test_missing_instance_fails() {
    let output = minvc()
        .args(["--inst", "/nonexistent/foo.graph"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_branch_and_bound_writes_trace_and_solution() {
    let (inst, out) = triangle_fixture("bnb");
    let output = minvc()
        .args(["--inst", inst.to_str().unwrap()])
        .args(["--alg", "BnB", "--time", "5"])
        .args(["--output-dir", out.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let sol = fs::read_to_string(out.join("triangle_BnB_5.sol")).unwrap();
    let mut lines = sol.lines();
    assert_eq!(lines.next(), Some("2"));
    let ids: Vec<usize> = lines
        .next()
        .unwrap()
        .split(',')
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.iter().all(|&v| (1..=3).contains(&v)));

    let trace = fs::read_to_string(out.join("triangle_BnB_5.trace")).unwrap();
    let sizes: Vec<usize> = trace
        .lines()
        .map(|l| l.split_once(',').unwrap().1.parse().unwrap())
        .collect();
    assert_eq!(sizes.first(), Some(&3));
    assert_eq!(sizes.last(), Some(&2));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("cover size: 2"));
    assert!(stdout.contains("covered: 3"));
}

#[test]
fn test_approx_names_files_without_cutoff() {
    let (inst, out) = triangle_fixture("approx");
    let output = minvc()
        .args(["--inst", inst.to_str().unwrap()])
        .args(["--alg", "Approx"])
        .args(["--output-dir", out.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(out.join("triangle_Approx.sol").exists());
    assert!(out.join("triangle_Approx.trace").exists());
}

#[test]
fn test_local_search_runs_with_seed() {
    let (inst, out) = triangle_fixture("ls1");
    let output = minvc()
        .args(["--inst", inst.to_str().unwrap()])
        .args(["--alg", "LS1", "--time", "1", "--seed", "7"])
        .args(["--output-dir", out.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let sol = fs::read_to_string(out.join("triangle_LS1_1_7.sol")).unwrap();
    assert_eq!(sol.lines().next(), Some("2"));
}

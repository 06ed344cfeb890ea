use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn rxplot() -> Command {
    Command::cargo_bin("rxplot").unwrap()
}

fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.dat"), "0 1\n1 2\n2 5\n3 9\n4 10\n").unwrap();
    fs::write(dir.path().join("b.dat"), "0 3\n1 4\n").unwrap();
    fs::write(dir.path().join("bad.dat"), "0 1\n1\n2 3\n").unwrap();
    dir
}

#[test]
fn help_lists_options() {
    rxplot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--print-histogram"))
        .stdout(predicate::str::contains("--bins"));
}

#[test]
fn missing_data_dir_fails() {
    rxplot()
        .args(["/nonexistent/rxplot/data", "--print-histogram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn prints_histogram_from_spec_tokens() {
    let dir = data_dir();
    rxplot()
        .arg(dir.path())
        .args(["plot", "title=Run A", "f=a.dat", "--bins", "3", "--print-histogram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bin\tRun A"))
        .stdout(predicate::str::contains("1 - 4\t2"))
        .stdout(predicate::str::contains("5 - 8\t1"))
        .stdout(predicate::str::contains("9 - 10\t2"));
}

#[test]
fn histogram_groups_every_series() {
    let dir = data_dir();
    rxplot()
        .arg(dir.path())
        .args(["plot", "f=a.dat", "plot", "f=b.dat", "--bins", "3", "--print-histogram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bin\ta.dat\tb.dat"))
        .stdout(predicate::str::contains("1 - 4\t2\t2"));
}

#[test]
fn json_spec_is_loaded() {
    let dir = data_dir();
    let spec = dir.path().join("spec.json");
    fs::write(
        &spec,
        r#"{"xlabel":"Time","ylabel":"Rate","plotList":[{"fname":"b.dat","title":"B"}]}"#,
    )
    .unwrap();

    rxplot()
        .arg(dir.path())
        .arg("--spec")
        .arg(&spec)
        .args(["--bins", "2", "--print-histogram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bin\tB"))
        .stdout(predicate::str::contains("3 - 3\t1"))
        .stdout(predicate::str::contains("4 - 4\t1"));
}

#[test]
fn malformed_file_has_no_data() {
    let dir = data_dir();
    rxplot()
        .arg(dir.path())
        .args(["plot", "f=bad.dat", "--print-histogram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data to bin"));
}

#[test]
fn missing_series_file_warns_and_continues() {
    let dir = data_dir();
    rxplot()
        .arg(dir.path())
        .args(["plot", "f=gone.dat", "plot", "f=a.dat", "--print-histogram"])
        .assert()
        .success()
        .stderr(predicate::str::contains("gone.dat not found"));
}

#[test]
fn zero_bins_rejected() {
    let dir = data_dir();
    rxplot()
        .arg(dir.path())
        .args(["--bins", "0", "--print-histogram"])
        .assert()
        .failure();
}

#[test]
fn oversized_bins_rejected() {
    let dir = data_dir();
    rxplot()
        .arg(dir.path())
        .args(["plot", "f=a.dat", "--bins", "100000000000000", "--print-histogram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bins"));
}

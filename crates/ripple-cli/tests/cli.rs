use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ripple_cmd() -> Command {
    Command::cargo_bin("ripple").unwrap()
}

fn write_project(root: &std::path::Path, name: &str, deps: &str) {
    let dir = root.join("src").join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("Ripple.toml"),
        format!("[project]\nname = \"{name}\"\n\n{deps}"),
    )
    .unwrap();
}

#[test]
fn test_init_creates_solution_file() {
    let tmp = TempDir::new().unwrap();

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ripple solution"));

    assert!(tmp.path().join("Ripple.toml").is_file());
}

#[test]
fn test_init_twice_fails() {
    let tmp = TempDir::new().unwrap();

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success();

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .failure();
}

#[test]
fn test_list_shows_merged_dependencies() {
    let tmp = TempDir::new().unwrap();
    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success();
    write_project(
        tmp.path(),
        "FubuMVC.Core",
        "[[dependencies]]\nname = \"FubuCore\"\nversion = \"1.2.3.4\"\n",
    );

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FubuCore 1.2.3.4"));
}

#[test]
fn test_validate_fails_on_divergent_versions() {
    let tmp = TempDir::new().unwrap();
    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success();
    write_project(
        tmp.path(),
        "A",
        "[[dependencies]]\nname = \"Bottles\"\nversion = \"1.0.0.0\"\n",
    );
    write_project(
        tmp.path(),
        "B",
        "[[dependencies]]\nname = \"Bottles\"\nversion = \"0.9.0.0\"\n",
    );

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bottles"));
}

#[test]
fn test_validate_succeeds_on_agreement() {
    let tmp = TempDir::new().unwrap();
    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success();
    write_project(
        tmp.path(),
        "A",
        "[[dependencies]]\nname = \"Bottles\"\nversion = \"1.0.0.0\"\n",
    );
    write_project(
        tmp.path(),
        "B",
        "[[dependencies]]\nname = \"Bottles\"\nversion = \"1.0.0.0\"\n",
    );

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("consistent"));
}

#[test]
fn test_update_pins_through_every_project() {
    let tmp = TempDir::new().unwrap();
    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success();
    write_project(
        tmp.path(),
        "A",
        "[[dependencies]]\nname = \"Bottles\"\nversion = \"1.0.0.0\"\n",
    );

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["update", "Bottles@1.0.1.1"])
        .assert()
        .success();

    let raw = fs::read_to_string(tmp.path().join("src/A/Ripple.toml")).unwrap();
    assert!(raw.contains("1.0.1.1"), "got: {raw}");
}

#[test]
fn test_update_rejects_partial_package_arguments() {
    let tmp = TempDir::new().unwrap();

    for arg in ["Bottles@", "@1.0.0.0", "Bottles"] {
        ripple_cmd()
            .current_dir(tmp.path())
            .args(["update", arg])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected Name@Version"));
    }
}

#[test]
fn test_update_of_unknown_package_fails() {
    let tmp = TempDir::new().unwrap();
    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success();

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["update", "Bottles@1.0.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bottles"));
}

#[test]
fn test_convert_switches_on_disk_format() {
    let tmp = TempDir::new().unwrap();
    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success();
    write_project(
        tmp.path(),
        "A",
        "[[dependencies]]\nname = \"Bottles\"\nversion = \"1.0.0.0\"\n",
    );

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["convert", "classic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("classic"));

    assert!(!tmp.path().join("Ripple.toml").exists());
    assert!(tmp.path().join("packages.toml").is_file());
    assert!(tmp.path().join("src/A/packages.toml").is_file());
}

#[test]
fn test_missing_lists_absent_packages() {
    let tmp = TempDir::new().unwrap();
    ripple_cmd()
        .current_dir(tmp.path())
        .args(["init", "fubumvc"])
        .assert()
        .success();
    write_project(
        tmp.path(),
        "A",
        "[[dependencies]]\nname = \"Bottles\"\nversion = \"1.0.0.0\"\n",
    );

    ripple_cmd()
        .current_dir(tmp.path())
        .args(["missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bottles"));
}

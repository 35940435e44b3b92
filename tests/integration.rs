// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use predicates::prelude::*;
use std::fs;

#[test]
fn creates_project_framework() {
    let workdir = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("scaffold").unwrap();

    cmd.current_dir(workdir.path());

    let base = workdir.path().join("project_framework");
    let button = base.join("scripts/src/components/Button/Button.tsx");
    let images = base.join("scripts/public/assets/images");

    let output = cmd.assert().success();

    let absolute = fs::canonicalize(&base).unwrap();
    output.stdout(predicate::str::contains(absolute.display().to_string()));

    assert!(button.is_file());
    assert_eq!(fs::metadata(&button).unwrap().len(), 0);
    assert!(images.is_dir());
    assert_eq!(fs::read_dir(&images).unwrap().count(), 0);
}

#[test]
fn prints_a_single_line() {
    let workdir = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("scaffold").unwrap();

    cmd.current_dir(workdir.path()).arg("--verbose");

    let output = cmd.output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
}

#[test]
fn second_run_succeeds_and_overwrites_files() {
    let workdir = tempfile::tempdir().unwrap();
    let app = workdir.path().join("project_framework/scripts/src/App.tsx");

    assert_cmd::Command::cargo_bin("scaffold")
        .unwrap()
        .current_dir(workdir.path())
        .assert()
        .success();

    fs::write(&app, "export default function App() {}").unwrap();

    assert_cmd::Command::cargo_bin("scaffold")
        .unwrap()
        .current_dir(workdir.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&app).unwrap(), "");
}

#[test]
fn fails_when_scripts_is_a_file() {
    let workdir = tempfile::tempdir().unwrap();
    let base = workdir.path().join("project_framework");
    fs::create_dir(&base).unwrap();
    fs::write(base.join("scripts"), "").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("scaffold").unwrap();

    cmd.current_dir(workdir.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Project structure created").not());

    assert!(base.join("scripts").is_file());
    assert_eq!(fs::read_dir(&base).unwrap().count(), 1);
}

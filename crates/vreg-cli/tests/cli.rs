//! End-to-end tests for the vreg binary.

use assert_cmd::Command;
use predicates::prelude::*;

const SCAN: &str = "\
DVLA Registration Certificate
Registration Number
GD65 EGF
D.1: Make VOLKSWAGEN
D.3: Model GOLF
B: Date of first registration 01 09 2015
E: VIN/Chassis/Frame No WVWZZZAUZFW123456
Mileage (optional): 23,500
";

fn vreg() -> Command {
    Command::cargo_bin("vreg").unwrap()
}

#[test]
fn extracts_record_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.txt");
    std::fs::write(&input, SCAN).unwrap();

    vreg()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"make\": \"VOLKSWAGEN\""))
        .stdout(predicate::str::contains("\"chassis\": \"WVWZZZAUZFW123456\""))
        .stdout(predicate::str::contains("\"mileage\": \"23500\""))
        .stdout(predicate::str::contains("\"registrationNumber\": \"GD65EGF\""));
}

#[test]
fn vocabulary_mode_omits_mileage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.txt");
    std::fs::write(&input, SCAN).unwrap();

    vreg()
        .arg("extract")
        .arg(&input)
        .args(["--mode", "vocabulary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"make\": \"VOLKSWAGEN\""))
        .stdout(predicate::str::contains("mileage").not());
}

#[test]
fn unresolved_fields_render_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.txt");
    std::fs::write(&input, "nothing a scanner would recognize\n").unwrap();

    vreg()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"make\": \"N/A\""))
        .stdout(predicate::str::contains("\"registrationNumber\": \"N/A\""));
}

#[test]
fn extract_reads_stdin() {
    vreg()
        .args(["extract", "-", "--format", "text"])
        .write_stdin(SCAN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Registration number: GD65EGF"));
}

#[test]
fn missing_input_fails() {
    vreg()
        .args(["extract", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn fills_template_from_extracted_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.txt");
    let record = dir.path().join("record.json");
    let template = dir.path().join("receipt.txt");
    std::fs::write(&input, SCAN).unwrap();
    std::fs::write(
        &template,
        "Sold: {{make}} {{model}}, first registered {{year}}\n\
         | Reg | {{reg_number}} |\n\
         | VIN | {{chasis}} |\n\
         Mileage: {{mileage}}\n",
    )
    .unwrap();

    vreg()
        .arg("extract")
        .arg(&input)
        .arg("--output")
        .arg(&record)
        .assert()
        .success();

    vreg()
        .arg("fill")
        .arg(&template)
        .arg("--record")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sold: VOLKSWAGEN GOLF, first registered 2015"))
        .stdout(predicate::str::contains("| Reg | GD65EGF |"))
        .stdout(predicate::str::contains("| VIN | WVWZZZAUZFW123456 |"))
        .stdout(predicate::str::contains("Mileage: 23500"));
}

#[test]
fn fill_reports_unresolved_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let record = dir.path().join("record.json");
    let template = dir.path().join("receipt.txt");
    std::fs::write(
        &record,
        r#"{
            "make": "VOLKSWAGEN",
            "model": "GOLF",
            "year": "2015",
            "chassis": "WVWZZZAUZFW123456",
            "registrationNumber": "GD65EGF"
        }"#,
    )
    .unwrap();
    std::fs::write(&template, "{{make}} {{colour}}\n").unwrap();

    vreg()
        .arg("fill")
        .arg(&template)
        .arg("--record")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("VOLKSWAGEN {{colour}}"))
        .stderr(predicate::str::contains("Unresolved placeholders"));
}

#[test]
fn config_path_is_reported() {
    vreg()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"));
}

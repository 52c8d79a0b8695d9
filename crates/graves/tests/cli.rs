use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;

const GRID_CSV: &str = "\
section,grave_id,row,column,inscription
C,12,0,0,\"John Smith
died 1850\"
C,13,0,1,Mary Brown
C,14,,,Unplaced
";

fn graves() -> Command {
    let mut cmd = Command::cargo_bin("graves").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    let out = stdout_of(graves().arg("--help"));
    for name in ["format-csv", "grid-kml", "sequential-kml", "rotation-test"] {
        assert!(out.contains(name), "missing {name} in help");
    }
}

#[test]
fn test_unknown_flag_is_usage_error() {
    graves()
        .args(["format-csv", "--bogus"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_input_file_fails() {
    let temp = TempDir::new().unwrap();
    let output = graves()
        .args(["format-csv", "-f"])
        .arg(temp.path().join("absent.txt"))
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&output).contains("absent.txt"));
}

#[test]
fn test_format_csv_heuristic() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("section_c.txt");
    input
        .write_str("12\nJohn Smith\n  died 1850\n13a\nMary Brown\n")
        .unwrap();

    let out = stdout_of(
        graves()
            .args(["format-csv", "--rule", "heuristic", "-f"])
            .arg(input.path()),
    );
    insta::assert_snapshot!(out.trim_end(), @r#"
section,grave_id,inscription
"C",12,"John Smithdied 1850"
"C",13a,"Mary Brown"
"#);
}

#[test]
fn test_format_csv_fixed3_keeps_line_breaks() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("section_a.txt");
    input
        .write_str("A01 John Smith\nDied 1850\n\nA02 Mary \"Polly\" Brown\n")
        .unwrap();

    let out = stdout_of(graves().args(["format-csv", "-f"]).arg(input.path()));
    assert_eq!(
        out,
        "section,grave_id,inscription\n\
         \"A\",A01,\"John Smith\nDied 1850\"\n\
         \"A\",A02,\"Mary \"\"Polly\"\" Brown\"\n"
    );
}

#[test]
fn test_format_csv_fixed4_requires_section() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("section_b.txt");
    input.write_str("B001 Ann\n").unwrap();

    graves()
        .args(["format-csv", "--rule", "fixed4", "-f"])
        .arg(input.path())
        .assert()
        .code(2);

    let out = stdout_of(
        graves()
            .args(["format-csv", "--rule", "fixed4", "-s", "B", "-f"])
            .arg(input.path()),
    );
    assert!(out.ends_with("\"B\",B001,\"Ann\"\n"));
}

#[test]
fn test_grid_kml_places_graves_from_origin() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("grid.csv");
    input.write_str(GRID_CSV).unwrap();

    let out = stdout_of(
        graves()
            .args(["grid-kml", "-o", "-1.9566", "-a", "53.83063", "-f"])
            .arg(input.path()),
    );
    assert!(out.starts_with("<?xml"));
    assert!(out.contains("<name>Section C</name>"));
    assert!(out.contains("<name>c-12</name>"));
    assert!(out.contains("<name>c-13</name>"));
    assert!(!out.contains("c-14"));
    assert!(out.contains("John Smith&lt;br"));
    assert!(out.contains("-1.9566000000,53.8306300000,0"));
}

#[test]
fn test_grid_kml_rejects_row_without_column() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("grid.csv");
    input
        .write_str("section,grave_id,row,column,inscription\nC,12,,3,Ann\n")
        .unwrap();

    graves()
        .args(["grid-kml", "-o", "0", "-a", "0", "-f"])
        .arg(input.path())
        .assert()
        .failure();
}

#[test]
fn test_grid_kml_rejects_csv_without_slots() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("section_b.csv");
    input
        .write_str("section,grave_id,inscription\nB,1,Ann\nB,2,Bob\n")
        .unwrap();

    let assert = graves()
        .args(["grid-kml", "-o", "0", "-a", "0", "-f"])
        .arg(input.path())
        .assert()
        .failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("`row` column"));
}

#[test]
fn test_sequential_kml_wraps_columns() {
    let temp = TempDir::new().unwrap();
    let input = temp.child("section_b.csv");
    let mut csv = String::from("section,grave_id,inscription\n");
    for id in 1..=11 {
        csv.push_str(&format!("B,{id},Grave {id}\n"));
    }
    input.write_str(&csv).unwrap();

    let out = stdout_of(
        graves()
            .args(["sequential-kml", "-n", "Section B", "-o", "-1.9566", "-a", "53.83063"])
            .arg("-f")
            .arg(input.path()),
    );
    assert_eq!(out.matches("<Placemark>").count(), 11);
    assert!(out.contains("<name>B-11</name>"));
    assert!(out.contains("<name>Section B</name>"));
}

#[test]
fn test_rotation_test_emits_full_circle() {
    let out = stdout_of(graves().args(["rotation-test", "-o", "-1.9566", "-a", "53.83063"]));
    assert_eq!(out.matches("<Placemark>").count(), 90);
    assert!(out.contains("<name>Degrees: 0.0</name>"));
    assert!(out.contains("<name>Degrees: 356.0</name>"));
    assert!(!out.contains("Degrees: 360.0"));
}

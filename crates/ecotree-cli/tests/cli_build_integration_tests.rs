//! CLI integration tests
//!
//! These tests run the `ecotree` binary against small tables in a temporary
//! directory and check the files and summary it produces.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const VOLUME_A: &str = "eco\tname\tpgn\n\
A00\tPolish Opening\t1. b4\n\
A00\tPolish Opening: Outflank Variation\t1. b4 c6\n\
A40\tEnglish Defense\t1. d4 e6 2. c4 b6\n";

const VOLUME_B: &str = "eco\tname\tpgn\n\
B90\tSicilian Defense: Najdorf Variation\t1. e4 c5 2. Nf3 d6 3. d4 cxd4 4. Nxd4 Nf6 5. Nc3 a6\n\
B90\tSicilian Defense: Najdorf Variation\t1. e4 c5 2. Nf3 d6 3. d4 cxd4\n";

fn setup_tables(dir: &Path) {
    fs::write(dir.join("a.tsv"), VOLUME_A).unwrap();
    fs::write(dir.join("b.tsv"), VOLUME_B).unwrap();
}

fn ecotree(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ecotree"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_build_with_explicit_inputs_and_outputs() {
    let temp_dir = TempDir::new().unwrap();
    setup_tables(temp_dir.path());

    let output = ecotree(
        temp_dir.path(),
        &[
            "build", "--input", "a.tsv", "--input", "b.tsv", "--json", "tree.json", "--csv",
            "flat.csv",
        ],
    );

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote tree.json and flat.csv"));
    assert!(stdout.contains("records:  5"));
    assert!(stdout.contains("families: 3"));
    assert!(stdout.contains("nodes:    5"));

    let csv = fs::read_to_string(temp_dir.path().join("flat.csv")).unwrap();
    assert!(csv.contains(
        "Sicilian Defense: Najdorf Variation,1,Sicilian Defense,Najdorf Variation,B90,1. e4 c5 2. Nf3 d6 3. d4 cxd4"
    ));
}

#[test]
fn test_build_reads_config_file_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    setup_tables(temp_dir.path());
    fs::write(
        temp_dir.path().join("ecotree.toml"),
        "inputs = [\"b.tsv\", \"a.tsv\"]\n\n[output]\njson = \"out/h.json\"\ncsv = \"out/f.csv\"\n",
    )
    .unwrap();

    let output = ecotree(temp_dir.path(), &["build"]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(temp_dir.path().join("out/h.json").exists());
    assert!(temp_dir.path().join("out/f.csv").exists());
}

#[test]
fn test_build_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    setup_tables(temp_dir.path());

    let digests: Vec<String> = ["one", "two"]
        .iter()
        .map(|run| {
            let json = format!("{run}.json");
            let csv = format!("{run}.csv");
            let output = ecotree(
                temp_dir.path(),
                &["build", "-i", "a.tsv", "-i", "b.tsv", "--json", &json, "--csv", &csv],
            );
            assert!(output.status.success());
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .filter(|l| l.contains("sha256"))
                .map(|l| l.split_whitespace().last().unwrap().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    assert_eq!(digests[0], digests[1]);
    assert_eq!(
        fs::read(temp_dir.path().join("one.csv")).unwrap(),
        fs::read(temp_dir.path().join("two.csv")).unwrap()
    );
}

#[test]
fn test_missing_input_fails_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    setup_tables(temp_dir.path());

    let output = ecotree(
        temp_dir.path(),
        &["build", "-i", "a.tsv", "-i", "c.tsv", "--json", "t.json", "--csv", "f.csv"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("t.json").exists());
}

#[test]
fn test_show_prints_node() {
    let temp_dir = TempDir::new().unwrap();
    setup_tables(temp_dir.path());

    let output = ecotree(
        temp_dir.path(),
        &["show", "Polish Opening", "-i", "a.tsv", "-i", "b.tsv"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("eco codes: A00"));
    assert!(stdout.contains("canonical: 1. b4"));
    assert!(stdout.contains("- Outflank Variation"));
}

#[test]
fn test_show_unknown_name_fails() {
    let temp_dir = TempDir::new().unwrap();
    setup_tables(temp_dir.path());

    let output = ecotree(temp_dir.path(), &["show", "Grob Opening", "-i", "a.tsv"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No opening named"));
}

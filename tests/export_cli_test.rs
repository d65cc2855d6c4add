use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_export_text_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(&[
        "export",
        "--format",
        "text",
        "--out-dir",
        temp_dir.path().to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let artifact = temp_dir.path().join("Legalizacao_Infraestrutura.txt");
    assert!(artifact.exists(), "Expected transcript at {:?}", artifact);

    let transcript = fs::read_to_string(&artifact).expect("Failed to read transcript");
    assert!(transcript.starts_with("LEGALIZAÇÃO E INFRAESTRUTURA"));
    assert!(transcript.contains(
        "SP Indianópolis - Tipo II - Aprovação LTA: Sim - Alvará: Sim - Validade: 03/05/2026"
    ));
}

#[test]
fn test_export_html_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(&[
        "export",
        "--format",
        "html",
        "--out-dir",
        temp_dir.path().to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let artifact = temp_dir.path().join("Legalizacao_Infraestrutura.html");
    let html = fs::read_to_string(&artifact).expect("Failed to read HTML export");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h3>Maiores Dificuldades</h3>"));
    assert!(html.contains("<td>Protocolo</td>"));
}

#[test]
fn test_export_rejects_unknown_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(&[
        "export",
        "--format",
        "docx",
        "--out-dir",
        temp_dir.path().to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown export format"), "stderr: {}", stderr);
}

//! CLI behavior tests, run against the built binary.

use std::fs;
use std::process::Command;
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_pepview");

const MINIMAL_XSL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:output method="xml" omit-xml-declaration="yes"/>
  <xsl:template match="/">
    <html><head><style>b &gt; i {}</style></head><body>ok</body></html>
  </xsl:template>
</xsl:stylesheet>"#;

fn xsltproc_available() -> bool {
    if pepview::XsltprocEngine::discover().is_ok() {
        return true;
    }
    eprintln!("xsltproc not installed, skipping");
    false
}

#[test]
fn no_argument_prints_usage_and_exits_zero() {
    let output = Command::new(BIN).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: pepview <path-to-xml-file>"));
}

#[test]
fn nonexistent_input_prints_usage_writes_nothing_and_exits_zero() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no-such-invoice.xml");

    let output = Command::new(BIN).arg(&missing).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Input file not found"));
    assert!(stdout.contains("Usage: pepview <path-to-xml-file>"));
    assert!(!missing.with_extension("html").exists());
}

#[test]
fn missing_stylesheet_fails_with_a_nonzero_exit_and_cause_chain() {
    if !xsltproc_available() {
        return;
    }
    let dir = tempdir().unwrap();
    let input = dir.path().join("invoice.xml");
    fs::write(&input, "<Invoice/>").unwrap();
    let missing_xsl = dir.path().join("no-such.xsl");

    let output = Command::new(BIN)
        .arg(&input)
        .arg("--stylesheet")
        .arg(&missing_xsl)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error converting file"));
    assert!(!input.with_extension("html").exists());
}

#[test]
fn converts_a_file_beside_the_input() {
    if !xsltproc_available() {
        return;
    }
    let dir = tempdir().unwrap();
    let xsl = dir.path().join("render-billing-3.xsl");
    fs::write(&xsl, MINIMAL_XSL).unwrap();
    let input = dir.path().join("invoice.xml");
    fs::write(&input, "<Invoice/>").unwrap();

    let output = Command::new(BIN)
        .arg(&input)
        .arg("--stylesheet")
        .arg(&xsl)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successfully converted"));
    assert!(stdout.contains("Output saved to"));

    let html_path = input.with_extension("html");
    assert!(html_path.is_file());
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains(pepview::SMALL_SCREEN_OVERRIDE));
    assert!(html.contains("b  >  i {}"));
}

#[test]
fn stylesheet_env_var_is_honored() {
    if !xsltproc_available() {
        return;
    }
    let dir = tempdir().unwrap();
    let xsl = dir.path().join("render-billing-3.xsl");
    fs::write(&xsl, MINIMAL_XSL).unwrap();
    let input = dir.path().join("invoice.xml");
    fs::write(&input, "<Invoice/>").unwrap();

    let output = Command::new(BIN)
        .arg(&input)
        .env("PEPVIEW_STYLESHEET", &xsl)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(input.with_extension("html").is_file());
}

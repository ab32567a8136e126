use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

fn stdout_json(output: &std::process::Output) -> Result<Value> {
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_end_to_end_match() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_storage_account", "azurerm_virtual_network"]"#)?;
    test.write_file(
        "policies/p1.txt",
        r#"resource "x" { rc.type is "azurerm_storage_account" }"#,
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_json(&output)?,
        json!([{
            "filename": "p1.txt",
            "resource_type": "azurerm_storage_account",
            "match": "Match"
        }])
    );
    assert!(test.report_path().exists());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("all recognized"), "{stderr}");
    assert!(stderr.contains("terraform_policy_rc_type_comparison.xlsx"));
    Ok(())
}

#[test]
fn test_json_is_indented_and_sorted() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a"]"#)?;
    test.write_file("policies/b.sentinel", r#"rc.type is "azurerm_a""#)?;
    test.write_file(
        "policies/nested/a.sentinel",
        "rc.type is \"azurerm_z\"\nrc.type\tis  \"azurerm_a\"",
    )?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(
        stdout,
        r#"[
  {
    "filename": "a.sentinel",
    "resource_type": "azurerm_a",
    "match": "Match"
  },
  {
    "filename": "a.sentinel",
    "resource_type": "azurerm_z",
    "match": "Mismatch"
  },
  {
    "filename": "b.sentinel",
    "resource_type": "azurerm_a",
    "match": "Match"
  }
]
"#
    );
    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a", "azurerm_b"]"#)?;
    test.write_file("policies/one.txt", r#"rc.type is "azurerm_b" rc.type is "azurerm_x""#)?;
    test.write_file("policies/two.txt", r#"rc.type is "azurerm_a""#)?;

    let first = test.check_command().output()?;
    let second = test.check_command().output()?;

    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn test_titled_registry_adds_title_field() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "registry.json",
        r#"{ "resources": [{ "name": "azurerm_foo", "title": "Foo" }] }"#,
    )?;
    test.write_file(
        "policies/p.txt",
        r#"rc.type is "azurerm_foo" rc.type is "azurerm_bar""#,
    )?;

    let output = test
        .check_command()
        .args(["--registry", "registry.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_json(&output)?,
        json!([
            {
                "filename": "p.txt",
                "resource_type": "azurerm_bar",
                "registry_title": "(not in registry)",
                "match": "Mismatch"
            },
            {
                "filename": "p.txt",
                "resource_type": "azurerm_foo",
                "registry_title": "Foo",
                "match": "Match"
            }
        ])
    );
    Ok(())
}

#[test]
fn test_mismatch_exits_zero_without_strict() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a"]"#)?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_unknown""#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("1 unknown resource type"), "{stderr}");
    Ok(())
}

#[test]
fn test_strict_mismatch_exits_one() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a"]"#)?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_unknown""#)?;

    let output = test.check_command().arg("--strict").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(test.report_path().exists());
    Ok(())
}

#[test]
fn test_missing_policies_dir_fails_without_output() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a"]"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!test.report_path().exists());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Policy directory not found"), "{stderr}");
    Ok(())
}

#[test]
fn test_non_array_registry_fails() -> Result<()> {
    let test = CliTest::with_registry(r#"{ "azurerm_a": true }"#)?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_a""#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("\"resources\""), "{stderr}");
    Ok(())
}

#[test]
fn test_missing_registry_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_a""#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("azurerm-4.53.0-resource-types.json"), "{stderr}");
    Ok(())
}

#[test]
fn test_config_file_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".rcscanrc.json",
        r#"{
            "policiesDir": "sentinel",
            "registry": "data/registry.json",
            "reportFileName": "audit.xlsx",
            "ignores": ["**/*.md"]
        }"#,
    )?;
    test.write_file("data/registry.json", r#"["azurerm_a"]"#)?;
    test.write_file("sentinel/p.sentinel", r#"rc.type is "azurerm_a""#)?;
    test.write_file("sentinel/README.md", r#"rc.type is "azurerm_doc_example""#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let results = stdout_json(&output)?;
    assert_eq!(results.as_array().map(Vec::len), Some(1));
    assert!(test.root().join("out").join("audit.xlsx").exists());
    Ok(())
}

#[test]
fn test_failed_viewer_launch_is_not_fatal() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a"]"#)?;
    test.write_file(
        ".rcscanrc.json",
        r#"{ "openCommand": "rcscan-no-such-viewer-program" }"#,
    )?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_a""#)?;

    let mut cmd = test.command();
    cmd.args(["check", "--output-dir", "out"]);
    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.report_path().exists());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("could not auto-open"), "{stderr}");
    Ok(())
}

#[test]
fn test_verbose_lists_each_result() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a"]"#)?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_a" rc.type is "azurerm_b""#)?;

    let output = test.check_command().arg("-v").output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("p.txt  azurerm_a"), "{stderr}");
    assert!(stderr.contains("p.txt  azurerm_b"), "{stderr}");
    Ok(())
}

#[test]
fn test_empty_registry_warns() -> Result<()> {
    let test = CliTest::with_registry("[]")?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_a""#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("has no resource types"), "{stderr}");
    Ok(())
}

#[test]
fn test_non_empty_registry_does_not_warn() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a"]"#)?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_a""#)?;

    let output = test.check_command().output()?;

    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.contains("has no resource types"), "{stderr}");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("check"));
    assert!(stdout.contains("init"));
    Ok(())
}

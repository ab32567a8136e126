use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Created .rcscanrc.json"));

    let content = test.read_file(".rcscanrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["policiesDir"], "policies");
    assert_eq!(parsed["registry"], "azurerm-4.53.0-resource-types.json");
    assert_eq!(
        parsed["reportFileName"],
        "terraform_policy_rc_type_comparison.xlsx"
    );
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".rcscanrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("already exists"));
    assert_eq!(test.read_file(".rcscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_registry(r#"["azurerm_a"]"#)?;

    test.command().arg("init").output()?;
    test.write_file("policies/p.txt", r#"rc.type is "azurerm_a""#)?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

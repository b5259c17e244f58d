//! Integration tests for the create-mcp-tool binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("create-mcp-tool").unwrap();
    cmd.env_remove("TOGETHER_API_KEY")
        .env_remove("CREATE_MCP_TOOL_MODEL")
        .env_remove("CREATE_MCP_TOOL_ENDPOINT");
    cmd
}

#[test]
fn test_generate_offline() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("alerts-server");

    cli()
        .arg("generate")
        .arg("--offline")
        .arg("--yes")
        .arg("-d")
        .arg("Send Slack alerts when a build fails")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tool Categories: notification"))
        .stdout(predicate::str::contains("Suggested Integrations: slack"))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("2. npm install"));

    assert!(out.join("package.json").exists());
    assert!(out.join("src/tools/notification-tools.ts").exists());
    assert!(out.join("src/integrations/slack.ts").exists());
    assert_eq!(
        std::fs::read_to_string(out.join(".env.example")).unwrap(),
        "SLACK_BOT_TOKEN=your_slack_bot_token_here\n"
    );
}

#[test]
fn test_generate_requires_api_key() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("server");

    cli()
        .arg("generate")
        .arg("--yes")
        .arg("-d")
        .arg("call an api")
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOGETHER_API_KEY"));

    assert!(!out.exists());
}

#[test]
fn test_generate_declined_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("server");

    cli()
        .arg("generate")
        .arg("--offline")
        .arg("-d")
        .arg("read files")
        .arg("-n")
        .arg("file-server")
        .arg("-o")
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert!(!out.exists());
}

#[test]
fn test_generate_rejects_invalid_name() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .arg("generate")
        .arg("--offline")
        .arg("--yes")
        .arg("-d")
        .arg("read files")
        .arg("-n")
        .arg("bad name")
        .arg("-o")
        .arg(temp_dir.path().join("server"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_catalog_command() {
    cli()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tool patterns:"))
        .stdout(predicate::str::contains("notification"))
        .stdout(predicate::str::contains("Integrations:"))
        .stdout(predicate::str::contains("SLACK_BOT_TOKEN"));
}

#[test]
fn test_templates_export_then_generate_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");

    cli()
        .arg("templates")
        .arg("export")
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));
    assert!(templates.join("base/package.json.tera").exists());
    assert!(templates.join("integrations/github.ts.tera").exists());

    std::fs::remove_file(templates.join("integrations/github.ts.tera")).unwrap();
    let out = temp_dir.path().join("repo-watch");

    cli()
        .arg("generate")
        .arg("--offline")
        .arg("--yes")
        .arg("--template-dir")
        .arg(&templates)
        .arg("-d")
        .arg("watch my github repository")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("no template for integration 'github'"));

    assert!(out.join("src/tools/api-tools.ts").exists());
    assert!(!out.join("src/integrations/github.ts").exists());
}

#[test]
fn test_templates_list_command() {
    cli()
        .arg("templates")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base/src/index.ts.tera"));
}

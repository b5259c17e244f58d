//! End-to-end generation through the application use case

use std::path::Path;
use std::sync::Arc;

use create_mcp_tool::{
    application::{GenerateProjectRequest, GenerateProjectUseCase},
    catalog::Catalog,
    classification::Classifier,
    infrastructure::templates::EmbeddedTemplateSource,
};
use tempfile::TempDir;

fn offline_use_case(catalog: Catalog) -> GenerateProjectUseCase {
    GenerateProjectUseCase::assemble(
        Classifier::offline(),
        catalog,
        Arc::new(EmbeddedTemplateSource::new()),
    )
}

fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
}

#[tokio::test]
async fn test_build_alert_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("build-alerts");
    let request = GenerateProjectRequest::new(
        "I need to call GitHub's REST API and send Slack alerts when a build fails",
        &out,
    );

    let response = offline_use_case(Catalog::builtin())
        .execute(request)
        .await
        .unwrap();

    assert_eq!(response.project_name, "build-alerts");
    assert!(response.skipped.is_empty());

    let package: serde_json::Value = serde_json::from_str(&read(&out, "package.json")).unwrap();
    assert_eq!(package["name"], "build-alerts");
    let dependencies = package["dependencies"].as_object().unwrap();
    let names: Vec<&str> = dependencies.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "@modelcontextprotocol/sdk",
            "@octokit/rest",
            "@slack/web-api",
            "axios",
            "nodemailer",
            "zod",
        ]
    );
    assert_eq!(dependencies["@modelcontextprotocol/sdk"], "^0.4.0");
    assert_eq!(dependencies["axios"], "latest");

    assert_eq!(
        read(&out, ".env.example"),
        "GITHUB_TOKEN=your_github_token_here\nSLACK_BOT_TOKEN=your_slack_bot_token_here\n"
    );

    assert!(out.join("src/tools/api-tools.ts").exists());
    assert!(out.join("src/tools/notification-tools.ts").exists());
    assert!(!out.join("src/tools/file-tools.ts").exists());
    assert!(out.join("src/integrations/github.ts").exists());
    assert!(out.join("src/integrations/slack.ts").exists());

    let index = read(&out, "src/index.ts");
    assert!(index.contains("class BuildAlertsServer"));
    assert!(index.contains("import { ApiTools } from './tools/api-tools.js';"));
    assert!(index.contains("NotificationTools.canHandleTool(name)"));

    let readme = read(&out, "README.md");
    assert!(readme.contains("# build-alerts"));
    assert!(readme.contains("`SLACK_BOT_TOKEN`"));
}

#[tokio::test]
async fn test_unmatched_description_yields_api_only() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("hello-server");

    let response = offline_use_case(Catalog::builtin())
        .execute(GenerateProjectRequest::new("hello", &out))
        .await
        .unwrap();

    let tools: Vec<String> = std::fs::read_dir(out.join("src/tools"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(tools, vec!["api-tools.ts"]);
    assert_eq!(std::fs::read_dir(out.join("src/integrations")).unwrap().count(), 0);
    assert_eq!(read(&out, ".env.example"), "");
    assert_eq!(response.files_written.len(), 6);
}

#[tokio::test]
async fn test_explicit_project_name_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    let request = GenerateProjectRequest::new("read files from disk", &out)
        .with_project_name("disk-reader");

    let response = offline_use_case(Catalog::builtin())
        .execute(request)
        .await
        .unwrap();

    assert_eq!(response.project_name, "disk-reader");
    assert!(read(&out, "package.json").contains("\"name\": \"disk-reader\""));
    assert!(read(&out, "src/index.ts").contains("class DiskReaderServer"));
}

#[tokio::test]
async fn test_catalog_without_template_skips_pattern() {
    let catalog = Catalog::from_yaml_str(
        r#"
patterns:
  - id: api
    name: API Tools
    category: api
    description: HTTP requests
    dependencies: [axios]
    template_ref: api-tools.ts.tera
  - id: file
    name: File Tools
    category: file
    description: File access
    dependencies: [fs-extra]
integrations: []
"#,
    )
    .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("partial");
    let response = offline_use_case(catalog)
        .execute(GenerateProjectRequest::new("call an api and read a file", &out))
        .await
        .unwrap();

    assert_eq!(response.skipped.len(), 1);
    assert_eq!(response.skipped[0].id, "file");
    assert!(response.dependencies.contains("fs-extra"));
    assert!(out.join("src/tools/api-tools.ts").exists());
    assert!(!out.join("src/tools/file-tools.ts").exists());
}

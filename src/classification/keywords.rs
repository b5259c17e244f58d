//! Deterministic keyword classifier used when the remote service is unavailable

use crate::classification::{CustomTool, RequirementSpec};

/// Category trigger words, in selection order
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "api",
        &["github", "api", "http", "rest", "request", "endpoint", "webhook"],
    ),
    (
        "file",
        &["file", "read", "write", "upload", "download", "storage", "document"],
    ),
    (
        "notification",
        &["slack", "notification", "message", "email", "alert", "notify", "send"],
    ),
    (
        "database",
        &["database", "db", "sql", "mongo", "postgres", "mysql", "query"],
    ),
    (
        "auth",
        &["auth", "login", "token", "oauth", "authenticate", "permission"],
    ),
];

/// Integration trigger words, in selection order
const INTEGRATION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "github",
        &["github", "git", "repository", "repo", "issue", "pull request", "pr"],
    ),
    ("slack", &["slack", "channel", "workspace", "bot"]),
    ("email", &["email", "mail", "smtp", "sendgrid", "mailgun"]),
    ("aws-s3", &["s3", "aws", "bucket", "storage", "cloud storage"]),
];

/// Substring-matching classifier over two fixed keyword tables
///
/// Always yields at least one category: when nothing matches, `api` is
/// selected together with a single generic tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, description: &str) -> RequirementSpec {
        let lower = description.to_lowercase();

        let tool_categories = matching(CATEGORY_KEYWORDS, &lower);
        let suggested_integrations = matching(INTEGRATION_KEYWORDS, &lower);
        let mut custom_tools = Vec::new();

        let has_category = |id: &str| tool_categories.iter().any(|c| c == id);
        let has_integration = |id: &str| suggested_integrations.iter().any(|i| i == id);

        if has_category("api") {
            custom_tools.push(CustomTool::new(
                "apiRequestTool",
                "Make HTTP API requests",
                "api",
            ));
        }
        if has_integration("github") {
            custom_tools.push(CustomTool::new(
                "githubTool",
                "GitHub API operations",
                "api",
            ));
        }
        if has_integration("slack") {
            custom_tools.push(CustomTool::new(
                "slackTool",
                "Send Slack notifications",
                "notification",
            ));
        }
        if has_category("file") {
            custom_tools.push(CustomTool::new(
                "fileOperationTool",
                "File read/write operations",
                "file",
            ));
        }

        RequirementSpec {
            tool_categories,
            suggested_integrations,
            custom_tools,
        }
        .with_default_category()
        .deduplicated()
    }
}

fn matching(table: &[(&str, &[&str])], haystack: &str) -> Vec<String> {
    table
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(id, _)| id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_names(spec: &RequirementSpec) -> Vec<&str> {
        spec.custom_tools.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_github_implies_api_and_github_integration() {
        let classifier = KeywordClassifier::new();

        for description in [
            "github",
            "Sync my GitHub stars",
            "open a ticket on GITHUB for every crash",
        ] {
            let spec = classifier.classify(description);
            assert!(spec.tool_categories.contains(&"api".to_string()));
            assert!(spec.suggested_integrations.contains(&"github".to_string()));
        }
    }

    #[test]
    fn test_no_match_forces_api_with_generic_tool() {
        let spec = KeywordClassifier::new().classify("hello");

        assert_eq!(spec.tool_categories, vec!["api"]);
        assert!(spec.suggested_integrations.is_empty());
        assert_eq!(tool_names(&spec), vec!["genericApiTool"]);
    }

    #[test]
    fn test_build_alert_scenario() {
        let spec = KeywordClassifier::new()
            .classify("I need to call GitHub's REST API and send Slack alerts when a build fails");

        assert_eq!(spec.tool_categories, vec!["api", "notification"]);
        assert_eq!(spec.suggested_integrations, vec!["github", "slack"]);
        assert_eq!(
            tool_names(&spec),
            vec!["apiRequestTool", "githubTool", "slackTool"]
        );
    }

    #[test]
    fn test_file_category_adds_file_tool() {
        let spec = KeywordClassifier::new().classify("Upload documents");

        assert_eq!(spec.tool_categories, vec!["file"]);
        assert_eq!(tool_names(&spec), vec!["fileOperationTool"]);
    }

    #[test]
    fn test_category_table_order_is_preserved() {
        // "login" (auth) appears before "sql" (database) in the text, but the
        // table order decides.
        let spec = KeywordClassifier::new().classify("login then run sql");
        assert_eq!(spec.tool_categories, vec!["database", "auth"]);
    }

    #[test]
    fn test_shared_keyword_selects_multiple_entries() {
        let spec = KeywordClassifier::new().classify("cloud storage");

        assert_eq!(spec.tool_categories, vec!["file"]);
        assert_eq!(spec.suggested_integrations, vec!["aws-s3"]);
    }
}

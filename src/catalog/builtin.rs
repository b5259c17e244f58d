//! Built-in pattern and integration tables

use super::{Integration, ToolPattern};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn patterns() -> Vec<ToolPattern> {
    vec![
        ToolPattern {
            id: "api".to_string(),
            name: "API Request Tools".to_string(),
            category: "api".to_string(),
            description: "Tools for making HTTP requests to external APIs".to_string(),
            actions: strings(&["get", "post", "put", "delete"]),
            dependencies: strings(&["axios", "zod"]),
            template_ref: Some("api-tools.ts.tera".to_string()),
        },
        ToolPattern {
            id: "file".to_string(),
            name: "File Operation Tools".to_string(),
            category: "file".to_string(),
            description: "Tools for reading, writing, and managing files".to_string(),
            actions: strings(&["read", "write", "list", "delete"]),
            dependencies: strings(&["fs-extra", "path"]),
            template_ref: Some("file-tools.ts.tera".to_string()),
        },
        ToolPattern {
            id: "notification".to_string(),
            name: "Notification Tools".to_string(),
            category: "notification".to_string(),
            description: "Tools for sending notifications via various channels".to_string(),
            actions: strings(&["send", "broadcast", "schedule"]),
            dependencies: strings(&["nodemailer"]),
            template_ref: Some("notification-tools.ts.tera".to_string()),
        },
    ]
}

pub(super) fn integrations() -> Vec<Integration> {
    vec![
        Integration {
            id: "github".to_string(),
            name: "github".to_string(),
            display_name: "GitHub API".to_string(),
            dependencies: strings(&["@octokit/rest"]),
            env_vars: strings(&["GITHUB_TOKEN"]),
            config_template_ref: Some("github.ts.tera".to_string()),
        },
        Integration {
            id: "slack".to_string(),
            name: "slack".to_string(),
            display_name: "Slack API".to_string(),
            dependencies: strings(&["@slack/web-api"]),
            env_vars: strings(&["SLACK_BOT_TOKEN"]),
            config_template_ref: Some("slack.ts.tera".to_string()),
        },
    ]
}

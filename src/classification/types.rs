//! Requirement specification produced by classification

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named tool the classifier believes the user needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomTool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl CustomTool {
    pub fn new(name: &str, description: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

/// Structured requirements derived from a free-text description
///
/// Identifiers are not checked against the catalog here; unknown ones are
/// dropped later by the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSpec {
    pub tool_categories: Vec<String>,
    pub suggested_integrations: Vec<String>,
    pub custom_tools: Vec<CustomTool>,
}

impl RequirementSpec {
    /// Select `api` with a generic tool when no category was chosen
    pub fn with_default_category(mut self) -> Self {
        if self.tool_categories.is_empty() {
            self.tool_categories.push("api".to_string());
            self.custom_tools.push(CustomTool::new(
                "genericApiTool",
                "Generic API operations based on your description",
                "api",
            ));
        }
        self
    }

    /// Remove repeated entries from every list, keeping first occurrences
    pub fn deduplicated(self) -> Self {
        Self {
            tool_categories: dedup(self.tool_categories),
            suggested_integrations: dedup(self.suggested_integrations),
            custom_tools: dedup(self.custom_tools),
        }
    }
}

fn dedup<T: Clone + Eq + std::hash::Hash>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

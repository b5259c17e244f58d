//! Catalog record types

use serde::{Deserialize, Serialize};

/// Describes how the tool file for one category is generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPattern {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Template file name under `base/src/tools/`
    #[serde(default)]
    pub template_ref: Option<String>,
}

/// A third-party service binding with its own dependencies and environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub env_vars: Vec<String>,
    /// Template file name under `integrations/`
    #[serde(default)]
    pub config_template_ref: Option<String>,
}

impl ToolPattern {
    /// Template path relative to the templates root, if the pattern has one
    pub fn template_path(&self) -> Option<String> {
        self.template_ref
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(|r| format!("base/src/tools/{r}"))
    }
}

impl Integration {
    /// Template path relative to the templates root, if the integration has one
    pub fn template_path(&self) -> Option<String> {
        self.config_template_ref
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(|r| format!("integrations/{r}"))
    }
}

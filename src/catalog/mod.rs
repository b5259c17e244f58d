//! Catalog of tool patterns and integrations
//!
//! The catalog is an immutable registry built once at startup and handed to
//! the [`Selector`](crate::generation::Selector). Adding a category or an
//! integration means adding an entry here (or to a catalog YAML file) plus
//! the matching template under `templates/`.

mod builtin;
pub mod types;

pub use types::*;

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while constructing a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Registry of known patterns and integrations, keyed by id
#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<ToolPattern>,
    integrations: Vec<Integration>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    patterns: Vec<ToolPattern>,
    #[serde(default)]
    integrations: Vec<Integration>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(
        patterns: Vec<ToolPattern>,
        integrations: Vec<Integration>,
    ) -> Result<Self, CatalogError> {
        ensure_unique("pattern", patterns.iter().map(|p| p.id.as_str()))?;
        ensure_unique("integration", integrations.iter().map(|i| i.id.as_str()))?;

        Ok(Self {
            patterns,
            integrations,
        })
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Self {
        Self {
            patterns: builtin::patterns(),
            integrations: builtin::integrations(),
        }
    }

    /// Parse a catalog from a YAML document with `patterns` and `integrations` lists
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(content)?;
        Self::new(document.patterns, document.integrations)
    }

    /// Load a catalog YAML file from disk
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_yaml_str(&content)
    }

    pub fn pattern(&self, id: &str) -> Option<&ToolPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn integration(&self, id: &str) -> Option<&Integration> {
        self.integrations.iter().find(|i| i.id == id)
    }

    pub fn patterns(&self) -> &[ToolPattern] {
        &self.patterns
    }

    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

//! Core types for the generation domain

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::catalog::{Integration, ToolPattern};
use crate::generation::DependencyManifest;

/// Extension of every generated source file
pub const SOURCE_EXTENSION: &str = "ts";

/// Everything the renderer needs to materialize a project
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub project_name: String,
    pub description: String,
    pub selected_patterns: Vec<ToolPattern>,
    pub selected_integrations: Vec<Integration>,
    pub output_path: PathBuf,
}

impl GenerationConfig {
    /// Environment variables of all selected integrations, first occurrence wins
    pub fn env_vars(&self) -> Vec<String> {
        let mut vars: Vec<String> = Vec::new();
        for var in self
            .selected_integrations
            .iter()
            .flat_map(|i| i.env_vars.iter())
        {
            if !vars.contains(var) {
                vars.push(var.clone());
            }
        }
        vars
    }
}

/// Generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// What kind of catalog entry a skipped template belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedKind {
    Pattern,
    Integration,
}

impl fmt::Display for SkippedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkippedKind::Pattern => write!(f, "pattern"),
            SkippedKind::Integration => write!(f, "integration"),
        }
    }
}

/// A pattern or integration whose template could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTemplate {
    pub kind: SkippedKind,
    pub id: String,
    /// Template path that was looked up, if the catalog entry named one
    pub template: Option<String>,
}

/// Result of materializing a project
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    /// Files written, in write order
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedTemplate>,
    pub dependencies: DependencyManifest,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

//! Data Transfer Objects for application layer

use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::rules::{default_project_name, validate_project_name};
use crate::generation::{DependencyManifest, SkippedTemplate};

/// Request to generate a project from a description
#[derive(Debug, Clone)]
pub struct GenerateProjectRequest {
    pub description: String,
    pub output_dir: PathBuf,
    /// Defaults to the output directory's name
    pub project_name: Option<String>,
}

impl GenerateProjectRequest {
    pub fn new(description: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            description: description.into(),
            output_dir: output_dir.into(),
            project_name: None,
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// The explicit project name, or one derived from the output directory
    pub fn project_name(&self) -> String {
        self.project_name
            .clone()
            .unwrap_or_else(|| default_project_name(&self.output_dir))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        if let Some(name) = &self.project_name {
            if name.is_empty() {
                return Err(ValidationError::EmptyProjectName);
            }
            validate_project_name(name)
                .map_err(|e| ValidationError::InvalidProjectName(e.to_string()))?;
        }

        Ok(())
    }
}

/// Response from project generation
#[derive(Debug, Clone)]
pub struct GenerateProjectResponse {
    pub project_name: String,
    pub output_path: PathBuf,
    pub files_written: Vec<PathBuf>,
    /// Patterns and integrations whose templates were missing
    pub skipped: Vec<SkippedTemplate>,
    pub dependencies: DependencyManifest,
}

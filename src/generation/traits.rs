//! Port interfaces for the generation domain

use async_trait::async_trait;
use std::path::Path;

use crate::generation::{Artifact, GenerationError, RenderContext};

/// Renders template text against a render context
pub trait TemplateRenderer: Send + Sync {
    /// Render `source`; `name` identifies the template in error messages
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &RenderContext,
    ) -> Result<String, GenerationError>;
}

/// Writes generated artifacts to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write one artifact, creating parent directories as needed
    async fn write_artifact(&self, artifact: &Artifact) -> Result<(), GenerationError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), GenerationError>;
}

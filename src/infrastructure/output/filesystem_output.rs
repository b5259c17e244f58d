//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::generation::{Artifact, GenerationError, OutputService};

/// Writes artifacts below the local filesystem, replacing existing files
#[derive(Debug, Default)]
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

fn output_error(action: &str, path: &Path, e: std::io::Error) -> GenerationError {
    GenerationError::OutputError(format!("Failed to {action} {}: {e}", path.display()))
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifact(&self, artifact: &Artifact) -> Result<(), GenerationError> {
        if let Some(parent) = artifact.path.parent() {
            self.ensure_directory(parent).await?;
        }

        fs::write(&artifact.path, artifact.content.as_bytes())
            .await
            .map_err(|e| output_error("write file", &artifact.path, e))
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), GenerationError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| output_error("create directory", path, e))
    }
}

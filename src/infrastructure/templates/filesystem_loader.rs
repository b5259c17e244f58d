//! Filesystem-based template source
//!
//! Loads templates from a directory on disk, typically specified via the
//! --template-dir CLI flag. The directory mirrors the layout of the embedded
//! `templates/` folder.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use super::{TemplateError, TemplateSource};

/// Template source rooted at a directory
pub struct FileSystemTemplateSource {
    root: PathBuf,
}

impl FileSystemTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build a source, failing when the root directory does not exist
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, TemplateError> {
        let root = root.into();
        if !fs::try_exists(&root).await? {
            return Err(TemplateError::RootNotFound(root));
        }
        Ok(Self { root })
    }
}

#[async_trait]
impl TemplateSource for FileSystemTemplateSource {
    async fn load(&self, relative_path: &str) -> Result<Option<String>, TemplateError> {
        let path = self.root.join(relative_path);

        match fs::read(&path).await {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| TemplateError::InvalidEncoding(path.display().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TemplateError::IoError(e)),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

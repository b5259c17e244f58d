//! Templates embedded in the binary at compile time

use async_trait::async_trait;
use rust_embed::RustEmbed;
use tracing::debug;

use super::{TemplateError, TemplateSource};

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Template source backed by the embedded `templates/` directory
pub struct EmbeddedTemplateSource;

impl EmbeddedTemplateSource {
    pub fn new() -> Self {
        Self
    }

    /// Relative paths of every embedded template, sorted
    pub fn list(&self) -> Vec<String> {
        let mut paths: Vec<String> = EmbeddedTemplates::iter().map(|p| p.to_string()).collect();
        paths.sort();
        paths
    }
}

impl Default for EmbeddedTemplateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateSource for EmbeddedTemplateSource {
    async fn load(&self, relative_path: &str) -> Result<Option<String>, TemplateError> {
        let Some(file) = EmbeddedTemplates::get(relative_path) else {
            debug!(path = %relative_path, "Embedded template not found");
            return Ok(None);
        };

        String::from_utf8(file.data.into_owned())
            .map(Some)
            .map_err(|_| TemplateError::InvalidEncoding(relative_path.to_string()))
    }

    fn describe(&self) -> String {
        "embedded templates".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[tokio::test]
    async fn test_base_templates_are_embedded() {
        let source = EmbeddedTemplateSource::new();

        for path in [
            "base/package.json.tera",
            "base/tsconfig.json.tera",
            "base/src/index.ts.tera",
            "base/README.md.tera",
        ] {
            assert!(
                source.load(path).await.unwrap().is_some(),
                "missing embedded template {path}"
            );
        }
    }

    #[tokio::test]
    async fn test_builtin_catalog_templates_are_embedded() {
        let source = EmbeddedTemplateSource::new();
        let catalog = Catalog::builtin();

        let paths = catalog
            .patterns()
            .iter()
            .filter_map(|p| p.template_path())
            .chain(catalog.integrations().iter().filter_map(|i| i.template_path()));

        for path in paths {
            assert!(
                source.load(&path).await.unwrap().is_some(),
                "missing embedded template {path}"
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_template() {
        let source = EmbeddedTemplateSource::new();
        assert!(source.load("base/missing.tera").await.unwrap().is_none());
    }

    #[test]
    fn test_list_is_sorted() {
        let paths = EmbeddedTemplateSource::new().list();
        assert!(paths.contains(&"integrations/github.ts.tera".to_string()));

        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }
}

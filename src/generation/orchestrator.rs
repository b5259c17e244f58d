//! Generation orchestration - classifier, selector and renderer in sequence

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::catalog::{Integration, ToolPattern};
use crate::classification::{Classifier, RequirementSpec};
use crate::generation::{
    GenerationConfig, GenerationError, GenerationReport, ProjectRenderer, Selector,
};

/// Classification result resolved against the catalog
#[derive(Debug, Clone)]
pub struct Analysis {
    pub spec: RequirementSpec,
    pub patterns: Vec<ToolPattern>,
    pub integrations: Vec<Integration>,
}

impl Analysis {
    /// Build the renderer input for this analysis
    pub fn into_config(
        self,
        project_name: String,
        description: String,
        output_path: PathBuf,
    ) -> GenerationConfig {
        GenerationConfig {
            project_name,
            description,
            selected_patterns: self.patterns,
            selected_integrations: self.integrations,
            output_path,
        }
    }
}

/// Runs description → spec → catalog records → file tree
pub struct GenerationOrchestrator {
    classifier: Arc<Classifier>,
    selector: Selector,
    renderer: Arc<ProjectRenderer>,
}

impl GenerationOrchestrator {
    pub fn new(
        classifier: Arc<Classifier>,
        selector: Selector,
        renderer: Arc<ProjectRenderer>,
    ) -> Self {
        Self {
            classifier,
            selector,
            renderer,
        }
    }

    /// Classify a description and resolve it against the catalog
    pub async fn analyze(&self, description: &str) -> Analysis {
        let spec = self.classifier.classify(description).await;
        let patterns = self.selector.resolve_patterns(&spec.tool_categories);
        let integrations = self.selector.resolve_integrations(&spec.suggested_integrations);

        info!(
            categories = ?spec.tool_categories,
            integrations = ?spec.suggested_integrations,
            custom_tools = spec.custom_tools.len(),
            resolved_patterns = patterns.len(),
            resolved_integrations = integrations.len(),
            "Analysis completed"
        );

        Analysis {
            spec,
            patterns,
            integrations,
        }
    }

    /// Write the project for a prepared configuration
    pub async fn materialize(
        &self,
        config: &GenerationConfig,
    ) -> Result<GenerationReport, GenerationError> {
        self.renderer.materialize(config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::generation::{Artifact, OutputService, RenderContext, TemplateRenderer};
    use crate::infrastructure::templates::{TemplateError, TemplateSource};
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    struct StaticTemplates;

    #[async_trait]
    impl TemplateSource for StaticTemplates {
        async fn load(&self, relative_path: &str) -> Result<Option<String>, TemplateError> {
            Ok(Some(format!("template:{relative_path}")))
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct EchoRenderer;

    impl TemplateRenderer for EchoRenderer {
        fn render(
            &self,
            _name: &str,
            source: &str,
            _context: &RenderContext,
        ) -> Result<String, GenerationError> {
            Ok(source.to_string())
        }
    }

    #[derive(Default)]
    struct RecordingOutput {
        written: Mutex<Vec<Artifact>>,
    }

    #[async_trait]
    impl OutputService for RecordingOutput {
        async fn write_artifact(&self, artifact: &Artifact) -> Result<(), GenerationError> {
            self.written.lock().unwrap().push(artifact.clone());
            Ok(())
        }

        async fn ensure_directory(&self, _path: &Path) -> Result<(), GenerationError> {
            Ok(())
        }
    }

    fn orchestrator(output: Arc<RecordingOutput>) -> GenerationOrchestrator {
        GenerationOrchestrator::new(
            Arc::new(Classifier::offline()),
            Selector::new(Arc::new(Catalog::builtin())),
            Arc::new(ProjectRenderer::new(
                Arc::new(StaticTemplates),
                Arc::new(EchoRenderer),
                output,
            )),
        )
    }

    #[tokio::test]
    async fn test_analyze_drops_unknown_categories() {
        let orchestrator = orchestrator(Arc::new(RecordingOutput::default()));

        let analysis = orchestrator.analyze("store rows in postgres and alert me").await;

        assert_eq!(analysis.spec.tool_categories, vec!["notification", "database"]);
        let ids: Vec<&str> = analysis.patterns.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["notification"]);
        assert!(analysis.integrations.is_empty());
    }

    #[tokio::test]
    async fn test_workflow_writes_through_output_service() {
        let output = Arc::new(RecordingOutput::default());
        let orchestrator = orchestrator(output.clone());

        let analysis = orchestrator.analyze("hello").await;
        let config = analysis.into_config(
            "hello".to_string(),
            "hello".to_string(),
            PathBuf::from("/virtual/hello"),
        );
        let report = orchestrator.materialize(&config).await.unwrap();

        let written = output.written.lock().unwrap();
        assert_eq!(written.len(), report.written.len());
        assert_eq!(written[3].path, PathBuf::from("/virtual/hello/src/tools/api-tools.ts"));
        assert_eq!(written[3].content, "template:base/src/tools/api-tools.ts.tera");
        assert_eq!(written.last().unwrap().content, "");
    }
}

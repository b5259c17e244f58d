//! Use case for generating a project from a description

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::{ApplicationError, GenerateProjectRequest, GenerateProjectResponse};
use crate::catalog::Catalog;
use crate::classification::Classifier;
use crate::generation::{Analysis, GenerationOrchestrator, ProjectRenderer, Selector};
use crate::infrastructure::generation::TeraTemplateRenderer;
use crate::infrastructure::llm::{ClassifierConfig, RemoteClassifier};
use crate::infrastructure::output::FileSystemOutputService;
use crate::infrastructure::templates::TemplateSource;

/// Environment variable holding the classifier credential
pub const API_KEY_ENV: &str = "TOGETHER_API_KEY";

/// Build the classifier for a run
///
/// Without a credential this fails unless `offline` is set, in which case
/// only the keyword heuristic is used.
pub fn build_classifier(
    config: &ClassifierConfig,
    offline: bool,
) -> Result<Classifier, ApplicationError> {
    if offline {
        info!("Offline mode, using keyword classification only");
        return Ok(Classifier::offline());
    }
    if config.api_key.is_none() {
        return Err(ApplicationError::CredentialMissing(API_KEY_ENV));
    }

    let remote = RemoteClassifier::new(config.clone())?;
    Ok(Classifier::new(Arc::new(remote)))
}

/// Use case for generating MCP server projects
pub struct GenerateProjectUseCase {
    orchestrator: Arc<GenerationOrchestrator>,
}

impl GenerateProjectUseCase {
    pub fn new(orchestrator: Arc<GenerationOrchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Wire the default tera renderer and filesystem output around the given parts
    pub fn assemble(
        classifier: Classifier,
        catalog: Catalog,
        templates: Arc<dyn TemplateSource>,
    ) -> Self {
        let renderer = ProjectRenderer::new(
            templates,
            Arc::new(TeraTemplateRenderer::new()),
            Arc::new(FileSystemOutputService::new()),
        );
        let orchestrator = GenerationOrchestrator::new(
            Arc::new(classifier),
            Selector::new(Arc::new(catalog)),
            Arc::new(renderer),
        );
        Self::new(Arc::new(orchestrator))
    }

    /// Validate the request and classify its description
    pub async fn analyze(
        &self,
        request: &GenerateProjectRequest,
    ) -> Result<Analysis, ApplicationError> {
        request.validate()?;
        Ok(self.orchestrator.analyze(&request.description).await)
    }

    /// Materialize a previously analyzed request
    pub async fn generate(
        &self,
        request: GenerateProjectRequest,
        analysis: Analysis,
    ) -> Result<GenerateProjectResponse, ApplicationError> {
        request.validate()?;
        let project_name = request.project_name();

        let config =
            analysis.into_config(project_name.clone(), request.description, request.output_dir);
        let report = self.orchestrator.materialize(&config).await?;

        debug!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "Generation finished"
        );

        Ok(GenerateProjectResponse {
            project_name,
            output_path: report.output_path,
            files_written: report.written,
            skipped: report.skipped,
            dependencies: report.dependencies,
        })
    }

    /// Analyze and generate in one step
    pub async fn execute(
        &self,
        request: GenerateProjectRequest,
    ) -> Result<GenerateProjectResponse, ApplicationError> {
        let analysis = self.analyze(&request).await?;
        self.generate(request, analysis).await
    }
}

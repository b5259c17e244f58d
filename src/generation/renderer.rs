//! Project materialization - writes the generated file tree
//!
//! Files are produced in a fixed order: base files, one tool file per
//! pattern, one client file per integration, the README and finally
//! `.env.example`. Each file is written as soon as it is rendered, so an
//! interrupted run leaves a prefix of that sequence on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::generation::{
    Artifact, DependencyManifest, GenerationConfig, GenerationError, GenerationReport,
    OutputService, RenderContext, SOURCE_EXTENSION, SkippedKind, SkippedTemplate,
    TemplateRenderer,
};
use crate::infrastructure::templates::TemplateSource;

/// Base templates and the files they produce, relative to the output directory
const BASE_FILES: &[(&str, &str)] = &[
    ("base/package.json.tera", "package.json"),
    ("base/tsconfig.json.tera", "tsconfig.json"),
    ("base/src/index.ts.tera", "src/index.ts"),
];

const README_TEMPLATE: (&str, &str) = ("base/README.md.tera", "README.md");

const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Renders a [`GenerationConfig`] into a project directory
pub struct ProjectRenderer {
    templates: Arc<dyn TemplateSource>,
    renderer: Arc<dyn TemplateRenderer>,
    output: Arc<dyn OutputService>,
}

impl ProjectRenderer {
    pub fn new(
        templates: Arc<dyn TemplateSource>,
        renderer: Arc<dyn TemplateRenderer>,
        output: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            templates,
            renderer,
            output,
        }
    }

    /// Materialize the project described by `config`
    ///
    /// Fails on output errors and on a missing base template. A pattern or
    /// integration whose template cannot be found is skipped with a warning.
    pub async fn materialize(
        &self,
        config: &GenerationConfig,
    ) -> Result<GenerationReport, GenerationError> {
        let root = &config.output_path;
        info!(
            output = %root.display(),
            templates = %self.templates.describe(),
            patterns = config.selected_patterns.len(),
            integrations = config.selected_integrations.len(),
            "Materializing project"
        );

        // 1. Directory layout
        self.output.ensure_directory(root).await?;
        self.output.ensure_directory(&root.join("src/tools")).await?;
        self.output
            .ensure_directory(&root.join("src/integrations"))
            .await?;

        let dependencies = DependencyManifest::collect(
            &config.selected_patterns,
            &config.selected_integrations,
        );
        let mut report = GenerationReport {
            output_path: root.clone(),
            written: Vec::new(),
            skipped: Vec::new(),
            dependencies,
        };

        // 2. Base files
        let project_context = RenderContext::for_project(config, &report.dependencies)?;
        for (template, target) in BASE_FILES {
            let path = self
                .render_base(template, &root.join(target), &project_context)
                .await?;
            report.written.push(path);
        }

        // 3. Tool files
        for pattern in &config.selected_patterns {
            let target = root
                .join("src/tools")
                .join(format!("{}-tools.{SOURCE_EXTENSION}", pattern.id));
            let context = RenderContext::for_pattern(config, pattern)?;

            match self
                .render_optional(pattern.template_path(), &target, &context)
                .await?
            {
                Some(path) => report.written.push(path),
                None => {
                    warn!(pattern = %pattern.id, "Skipping pattern (missing template)");
                    report.skipped.push(SkippedTemplate {
                        kind: SkippedKind::Pattern,
                        id: pattern.id.clone(),
                        template: pattern.template_path(),
                    });
                }
            }
        }

        // 4. Integration files
        for integration in &config.selected_integrations {
            let target = root
                .join("src/integrations")
                .join(format!("{}.{SOURCE_EXTENSION}", integration.name));
            let context = RenderContext::for_integration(config, integration)?;

            match self
                .render_optional(integration.template_path(), &target, &context)
                .await?
            {
                Some(path) => report.written.push(path),
                None => {
                    warn!(integration = %integration.name, "Skipping integration (missing template)");
                    report.skipped.push(SkippedTemplate {
                        kind: SkippedKind::Integration,
                        id: integration.id.clone(),
                        template: integration.template_path(),
                    });
                }
            }
        }

        // 5. Documentation
        let (template, target) = README_TEMPLATE;
        let path = self
            .render_base(template, &root.join(target), &project_context)
            .await?;
        report.written.push(path);

        // 6. Environment example
        let path = root.join(ENV_EXAMPLE_FILE);
        self.write(Artifact::new(&path, env_example(&config.env_vars())))
            .await?;
        report.written.push(path);

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "Project materialized"
        );
        Ok(report)
    }

    async fn render_base(
        &self,
        template: &str,
        target: &Path,
        context: &RenderContext,
    ) -> Result<PathBuf, GenerationError> {
        let source = self
            .templates
            .load(template)
            .await?
            .ok_or_else(|| GenerationError::MissingBaseTemplate(template.to_string()))?;

        let content = self.renderer.render(template, &source, context)?;
        self.write(Artifact::new(target, content)).await?;
        Ok(target.to_path_buf())
    }

    /// Render a conditional file; `Ok(None)` when the template is unavailable
    async fn render_optional(
        &self,
        template: Option<String>,
        target: &Path,
        context: &RenderContext,
    ) -> Result<Option<PathBuf>, GenerationError> {
        let Some(template) = template else {
            return Ok(None);
        };
        let Some(source) = self.templates.load(&template).await? else {
            debug!(template = %template, "Template not found");
            return Ok(None);
        };

        let content = self.renderer.render(&template, &source, context)?;
        self.write(Artifact::new(target, content)).await?;
        Ok(Some(target.to_path_buf()))
    }

    async fn write(&self, artifact: Artifact) -> Result<(), GenerationError> {
        self.output.write_artifact(&artifact).await?;
        info!(path = %artifact.path.display(), "Created");
        Ok(())
    }
}

/// Placeholder lines for `.env.example`, one per variable
pub fn env_example(vars: &[String]) -> String {
    vars.iter()
        .map(|var| format!("{var}=your_{}_here\n", var.to_lowercase()))
        .collect()
}

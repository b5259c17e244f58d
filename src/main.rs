//! create-mcp-tool CLI entrypoint
//! Parses command-line arguments and dispatches to the generation use case.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use create_mcp_tool::{
    application::{
        GenerateProjectRequest, GenerateProjectResponse, GenerateProjectUseCase, build_classifier,
    },
    catalog::Catalog,
    generation::{Analysis, rules::DEFAULT_PROJECT_NAME},
    infrastructure::{
        llm::{ApiKey, ClassifierConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS},
        templates::{EmbeddedTemplateSource, FileSystemTemplateSource, TemplateSource},
    },
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "create-mcp-tool")]
#[command(author, version, about = "AI-powered MCP server generator", long_about = None)]
struct Cli {
    /// YAML catalog to use instead of the built-in patterns and integrations
    #[arg(long = "catalog", global = true)]
    catalog_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate an MCP server project from a description
    Generate(GenerateArgs),
    /// List the tool patterns and integrations available for generation
    Catalog,
    /// Inspect the templates bundled with the binary
    Templates {
        #[command(subcommand)]
        action: TemplateCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum TemplateCommands {
    /// List the bundled templates
    List,
    /// Write the bundled templates to a directory for use with --template-dir
    Export {
        /// Destination directory
        path: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Natural language description of the tools needed
    #[arg(short, long)]
    description: Option<String>,
    /// Output directory
    #[arg(short, long, default_value = DEFAULT_PROJECT_NAME)]
    output: PathBuf,
    /// Project name (defaults to the output directory name)
    #[arg(short, long)]
    name: Option<String>,
    /// Custom template directory
    #[arg(long)]
    template_dir: Option<PathBuf>,
    /// Classify with keyword matching only, without contacting the remote service
    #[arg(long)]
    offline: bool,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
    /// API key for the classification service
    #[arg(long, env = "TOGETHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Model used for classification
    #[arg(long, env = "CREATE_MCP_TOOL_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
    /// Chat completion endpoint
    #[arg(long, env = "CREATE_MCP_TOOL_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: Url,
    /// Classification request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

type StdinLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog_file.as_deref()).await?;

    match cli.command {
        Commands::Generate(args) => generate(args, catalog).await,
        Commands::Catalog => {
            print_catalog(&catalog);
            Ok(())
        }
        Commands::Templates { action } => match action {
            TemplateCommands::List => {
                println!("Bundled templates:");
                for path in EmbeddedTemplateSource::new().list() {
                    println!("  {path}");
                }
                Ok(())
            }
            TemplateCommands::Export { path } => export_templates(&path).await,
        },
    }
}

async fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog");
            Catalog::load(path)
                .await
                .with_context(|| format!("Failed to load catalog from {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

async fn load_templates(template_dir: Option<PathBuf>) -> anyhow::Result<Arc<dyn TemplateSource>> {
    let source: Arc<dyn TemplateSource> = match template_dir {
        Some(dir) => Arc::new(
            FileSystemTemplateSource::open(dir)
                .await
                .context("Failed to open template directory")?,
        ),
        None => Arc::new(EmbeddedTemplateSource::new()),
    };
    debug!(source = %source.describe(), "Using template source");
    Ok(source)
}

/// Copy every bundled template below `dir`
async fn export_templates(dir: &Path) -> anyhow::Result<()> {
    let source = EmbeddedTemplateSource::new();
    let paths = source.list();

    for relative in &paths {
        let content = source
            .load(relative)
            .await?
            .with_context(|| format!("Bundled template {relative} is not readable"))?;
        let target = dir.join(relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        tokio::fs::write(&target, content)
            .await
            .with_context(|| format!("Failed to write {}", target.display()))?;
        debug!(path = %target.display(), "Exported template");
    }

    println!("Exported {} templates to {}", paths.len(), dir.display());
    Ok(())
}

/// Generate an MCP server project
async fn generate(args: GenerateArgs, catalog: Catalog) -> anyhow::Result<()> {
    println!("create-mcp-tool - AI-Powered MCP Server Generator\n");

    let config = ClassifierConfig {
        endpoint: args.endpoint,
        model: args.model,
        timeout: Duration::from_secs(args.timeout_secs),
        ..Default::default()
    }
    .with_api_key(args.api_key.and_then(ApiKey::new));

    let classifier = build_classifier(&config, args.offline)?;
    let templates = load_templates(args.template_dir).await?;
    let use_case = GenerateProjectUseCase::assemble(classifier, catalog, templates);

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    let description = match args.description {
        Some(description) => description,
        None => prompt(&mut stdin, "Describe the MCP tools you need", None).await?,
    };

    let output_dir = std::path::absolute(&args.output).context("Failed to resolve output path")?;
    let mut request = GenerateProjectRequest::new(description, &output_dir);
    let name = match args.name {
        Some(name) => name,
        None if args.yes => request.project_name(),
        None => {
            let default = request.project_name();
            prompt(&mut stdin, "Project name", Some(&default)).await?
        }
    };
    request = request.with_project_name(name);

    info!("Analyzing requirements");
    let analysis = use_case.analyze(&request).await?;
    print_analysis(&analysis);

    if !args.yes
        && !confirm(
            &mut stdin,
            "Generate MCP server with these configurations?",
        )
        .await?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let response = use_case.generate(request, analysis).await.map_err(|e| {
        error!(error = %e, "Generation failed");
        e
    })?;

    info!(
        output_path = %response.output_path.display(),
        files = response.files_written.len(),
        "Successfully generated MCP server"
    );
    print_next_steps(&response);
    Ok(())
}

/// Ask for one line of input; an empty answer takes the default
async fn prompt(
    lines: &mut StdinLines,
    message: &str,
    default: Option<&str>,
) -> anyhow::Result<String> {
    match default {
        Some(default) => print!("{message} ({default}): "),
        None => print!("{message}: "),
    }
    std::io::stdout().flush()?;

    let answer = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
        .unwrap_or_default();
    let answer = answer.trim();

    Ok(match default {
        Some(default) if answer.is_empty() => default.to_string(),
        _ => answer.to_string(),
    })
}

async fn confirm(lines: &mut StdinLines, message: &str) -> anyhow::Result<bool> {
    let answer = prompt(lines, &format!("{message} [Y/n]"), None).await?;
    Ok(matches!(
        answer.to_ascii_lowercase().as_str(),
        "" | "y" | "yes"
    ))
}

fn print_analysis(analysis: &Analysis) {
    println!("\nAnalysis Results:");
    println!(
        "Tool Categories: {}",
        analysis.spec.tool_categories.join(", ")
    );
    println!(
        "Suggested Integrations: {}",
        analysis.spec.suggested_integrations.join(", ")
    );
    println!(
        "Custom Tools: {} detected\n",
        analysis.spec.custom_tools.len()
    );
}

fn print_next_steps(response: &GenerateProjectResponse) {
    for skipped in &response.skipped {
        println!(
            "Note: no template for {} '{}', its file was not generated",
            skipped.kind, skipped.id
        );
    }

    let location = std::env::current_dir()
        .ok()
        .and_then(|cwd| {
            response
                .output_path
                .strip_prefix(&cwd)
                .ok()
                .map(Path::to_path_buf)
        })
        .unwrap_or_else(|| response.output_path.clone());

    println!("\nSuccess! Your MCP server has been generated.\n");
    println!("Next steps:");
    println!("1. cd {}", location.display());
    println!("2. npm install");
    println!("3. Copy .env.example to .env and fill in your API keys");
    println!("4. npm run build");
    println!("5. npm start");
}

fn print_catalog(catalog: &Catalog) {
    println!("Tool patterns:");
    for pattern in catalog.patterns() {
        println!("  {:<14} {}", pattern.id, pattern.description);
        if !pattern.dependencies.is_empty() {
            println!("  {:<14} dependencies: {}", "", pattern.dependencies.join(", "));
        }
    }

    println!("\nIntegrations:");
    for integration in catalog.integrations() {
        println!("  {:<14} {}", integration.id, integration.display_name);
        if !integration.env_vars.is_empty() {
            println!("  {:<14} env: {}", "", integration.env_vars.join(", "));
        }
    }
}

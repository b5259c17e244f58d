//! Business rules for the generation domain

use std::path::Path;

use crate::generation::GenerationError;

/// Fallback project name when none is given and the output path has no usable file name
pub const DEFAULT_PROJECT_NAME: &str = "generated-mcp-server";

/// Validates project name format
///
/// The name ends up in `package.json`, so it is restricted to characters npm
/// accepts in a new unscoped package name: lowercase ASCII letters, digits,
/// dots, dashes and underscores, starting with a letter.
pub fn validate_project_name(name: &str) -> Result<(), GenerationError> {
    if name.is_empty() {
        return Err(GenerationError::ValidationError(
            "Project name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' || c == '.')
    {
        return Err(GenerationError::ValidationError(
            "Project name must contain only lowercase letters, digits, dots, dashes, and underscores"
                .to_string(),
        ));
    }

    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(GenerationError::ValidationError(
            "Project name must start with a lowercase letter".to_string(),
        ));
    }

    Ok(())
}

/// Project name derived from the output directory's file name
pub fn default_project_name(output_path: &Path) -> String {
    output_path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| validate_project_name(n).is_ok())
        .unwrap_or(DEFAULT_PROJECT_NAME)
        .to_string()
}

//! Parsing of the remote classifier's text reply
//!
//! Models tend to wrap JSON in markdown fences or add commentary around it.
//! The reply is cleaned, the first balanced JSON object is extracted, and the
//! three required fields are checked before a [`RequirementSpec`] is built.

use crate::classification::{ClassificationError, CustomTool, RequirementSpec};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Wire shape of the classifier reply; every field is required
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClassificationPayload {
    tool_categories: Option<Vec<String>>,
    suggested_integrations: Option<Vec<String>>,
    custom_tools: Option<Vec<CustomTool>>,
}

fn code_fence() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```(?:json|JSON)?\n?").expect("valid fence regex"))
}

/// Remove markdown code fences from a model reply
pub fn strip_code_fences(content: &str) -> String {
    code_fence().replace_all(content.trim(), "").trim().to_string()
}

/// Return the first balanced `{...}` substring, ignoring braces inside strings
pub fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in content[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse a model reply into a requirement specification
pub fn parse_classification(content: &str) -> Result<RequirementSpec, ClassificationError> {
    let cleaned = strip_code_fences(content);
    let json = extract_json_object(&cleaned).unwrap_or(&cleaned);

    let payload: ClassificationPayload = serde_json::from_str(json)
        .map_err(|e| ClassificationError::MalformedResponse(e.to_string()))?;

    let missing = |field: &str| {
        ClassificationError::MalformedResponse(format!("missing field `{field}`"))
    };

    Ok(RequirementSpec {
        tool_categories: payload
            .tool_categories
            .ok_or_else(|| missing("toolCategories"))?,
        suggested_integrations: payload
            .suggested_integrations
            .ok_or_else(|| missing("suggestedIntegrations"))?,
        custom_tools: payload.custom_tools.ok_or_else(|| missing("customTools"))?,
    }
    .deduplicated())
}

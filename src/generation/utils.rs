//! Identifier casing helpers for generated TypeScript
//!
//! Project names come from directory names (`my-mcp-server`) and catalog ids
//! (`aws-s3`); templates need them as class and variable names.

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input.
///
/// # Examples
/// ```
/// use create_mcp_tool::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("apiRequestTool"), "api_request_tool");
/// assert_eq!(to_snake_case("my-mcp-server"), "my_mcp_server");
/// assert_eq!(to_snake_case("Slack Bot"), "slack_bot");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if !result.is_empty() && !result.ends_with('_') {
            // Any separator collapses into a single underscore
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_end_matches('_').to_string()
}

/// Converts a string to PascalCase for class names.
///
/// # Examples
/// ```
/// use create_mcp_tool::generation::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("my-mcp-server"), "MyMcpServer");
/// assert_eq!(to_proper_case("aws-s3"), "AwsS3");
/// ```
pub fn to_proper_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Converts a string to camelCase for variable names.
///
/// # Examples
/// ```
/// use create_mcp_tool::generation::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("notification"), "notification");
/// assert_eq!(to_camel_case("aws-s3"), "awsS3");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_proper_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

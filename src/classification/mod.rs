//! Classification domain - turns free text into a requirement specification
//!
//! A remote chat-completion service is the primary source. The keyword
//! heuristic in [`KeywordClassifier`] answers whenever that source is absent
//! or returns something unusable.

pub mod classifier;
pub mod errors;
pub mod keywords;
pub mod response;
pub mod traits;
pub mod types;

pub use classifier::*;
pub use errors::*;
pub use keywords::*;
pub use response::*;
pub use traits::*;
pub use types::*;

/// Category identifiers the remote classifier may choose from
pub const CATEGORY_VOCABULARY: &[&str] = &["api", "file", "notification", "database", "auth"];

/// Integration identifiers the remote classifier may choose from
pub const INTEGRATION_VOCABULARY: &[&str] = &["github", "slack", "email", "aws-s3"];

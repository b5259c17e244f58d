//! Generation domain - from classified requirements to a project on disk
//!
//! The [`Selector`] resolves classifier output against the catalog, the
//! [`ProjectRenderer`] turns the resulting [`GenerationConfig`] into files,
//! and the [`GenerationOrchestrator`] runs both after classification.

pub mod context;
pub mod dependencies;
pub mod errors;
pub mod orchestrator;
pub mod renderer;
pub mod rules;
pub mod selector;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use dependencies::*;
pub use errors::*;
pub use orchestrator::*;
pub use renderer::*;
pub use selector::*;
pub use traits::*;
pub use types::*;

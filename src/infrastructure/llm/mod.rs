//! Remote classification clients

pub mod config;
pub mod remote_classifier;

pub use config::*;
pub use remote_classifier::*;

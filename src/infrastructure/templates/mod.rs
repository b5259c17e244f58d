//! Template source implementations

pub mod embedded_repository;
pub mod errors;
pub mod filesystem_loader;
pub mod traits;

pub use embedded_repository::*;
pub use errors::*;
pub use filesystem_loader::*;
pub use traits::*;

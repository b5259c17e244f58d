//! create-mcp-tool: generates MCP server projects from plain-language descriptions
//!
//! A description is classified into tool categories and integrations, those
//! are resolved against a [`catalog::Catalog`], and the matching templates are
//! rendered into a TypeScript project on disk.
#![deny(unsafe_code)]

pub mod application;
pub mod catalog;
pub mod classification;
pub mod generation;
pub mod infrastructure;

//! ScrapeGraph MCP adapter
//!
//! Exposes the ScrapeGraph AI API as MCP tools, plus a handful of reference
//! resources and prompts.
//!
//! ## Features
//!
//! - Eight pass-through tools, one per API endpoint
//! - Uniform results: the API body, or `{"error": "..."}`, never a protocol fault
//! - Degraded mode: without an API key the tools stay listed and answer with
//!   a "not initialized" error
//! - Transport-agnostic handler, served over stdio or streamable HTTP

#![deny(unsafe_code, dead_code, unused_imports, unused_variables)]

pub mod guides;
pub mod outcome;
pub mod params;
pub mod server;

pub use outcome::{ToolOutcome, NOT_INITIALIZED};
pub use server::ScrapeGraphServer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::params::*;
    pub use crate::{ScrapeGraphServer, ToolOutcome};
    pub use rmcp::handler::server::wrapper::Parameters;
}

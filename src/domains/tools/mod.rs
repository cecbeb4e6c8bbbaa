//! Tools domain module.
//!
//! Tools are the callable operations advertised to MCP hosts.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Builds the tools and dispatches calls by name
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - Per-call error taxonomy
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolHandler`
//! 2. Export it in `definitions/mod.rs`
//! 3. Construct it in `ToolRegistry::new`
//!
//! The router picks it up from the registry.

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::{ToolHandler, call_with_recovery};
pub use registry::ToolRegistry;
pub use router::build_tool_router;

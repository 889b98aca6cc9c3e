//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the named operations MCP clients can list and call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per concern)
//! - `router.rs` - rmcp ToolRouter builder for the stdio server
//! - `registry.rs` - Ordered catalog, lookup and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/rims/`
//! 2. Define params, `execute()`, `invoke()`, `to_tool()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` and the entry in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;

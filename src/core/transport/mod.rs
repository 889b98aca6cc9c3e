//! Transport layer for the MCP server.
//!
//! The server speaks MCP over its own stdin/stdout; the client spawns it as
//! a child process (see `crate::client`).

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;

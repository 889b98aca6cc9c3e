//! Interactive consumer of the RIMS tool server.
//!
//! Spawns the server as a child process, converts its catalog into
//! [`OperationDescriptor`]s and runs one prompt-driven tool call.

pub mod catalog;
pub mod coerce;
pub mod config;
pub mod connection;
pub mod error;
pub mod session;

pub use catalog::{OperationDescriptor, ParamSpec, ParamType};
pub use coerce::{TRUTHY_TOKENS, coerce};
pub use config::{ClientArgs, ClientConfig};
pub use connection::{RimsClient, ToolInvoker};
pub use error::{ClientError, CoercionError};
pub use session::{InteractiveSession, SessionOutcome};

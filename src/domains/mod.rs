//! Domains module containing business logic organized by bounded contexts.
//!
//! - **rims**: the remote competition API and its payloads
//! - **documents**: PDF download and text extraction
//! - **tools**: the MCP tool catalog built on top of both

pub mod documents;
pub mod rims;
pub mod tools;

//! MCP server that exposes recent GitHub user activity to LLMs.
//!
//! Provides a single read-only `get_user_activity` tool that fetches one
//! page of a user's public events and returns a minimized JSON projection.

pub mod client;
pub mod error;
pub mod pagination;
pub mod server;
pub mod types;

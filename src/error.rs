use rmcp::model::{CallToolResult, Content, ErrorData};

use crate::client::ClientError;

/// Failures the `get_user_activity` tool can hit, split by how they reach
/// the caller: validation, API, and remote-status errors travel back as
/// tool error results; the rest are protocol-level internal errors.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("{0}")]
    Validation(String),

    #[error("{operation}: {source}")]
    Api {
        operation: String,
        #[source]
        source: ClientError,
    },

    /// Non-200 response; the server's body is surfaced verbatim.
    #[error("{body}")]
    RemoteStatus { body: String },

    #[error("internal error: {0}")]
    Internal(#[from] serde_json::Error),

    #[error("failed to resolve GitHub client: {0}")]
    ClientResolution(ClientError),
}

impl ActivityError {
    /// Route the error to the right channel of the tool calling convention.
    pub fn into_call_result(self) -> Result<CallToolResult, ErrorData> {
        match self {
            ActivityError::Validation(_)
            | ActivityError::Api { .. }
            | ActivityError::RemoteStatus { .. } => {
                Ok(CallToolResult::error(vec![Content::text(self.to_string())]))
            }
            ActivityError::Internal(_) | ActivityError::ClientResolution(_) => {
                Err(ErrorData::internal_error(self.to_string(), None))
            }
        }
    }
}

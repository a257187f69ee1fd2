use std::sync::Arc;

use http::StatusCode;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_handler, tool_router, ServerHandler};
use serde::Deserialize;

use crate::client::{ClientProvider, EventsClient, ListOptions};
use crate::error::ActivityError;
use crate::pagination::PaginationParams;
use crate::types::{Event, MinimalEvent};

#[derive(Clone)]
pub struct GithubActivityServer {
    provider: Arc<dyn ClientProvider>,
    tool_router: ToolRouter<Self>,
}

// -- Tool parameter types --

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UserActivityParams {
    #[schemars(description = "The GitHub username to get activity for")]
    #[serde(default)]
    pub username: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl GithubActivityServer {
    pub fn new(provider: Arc<dyn ClientProvider>) -> Self {
        Self {
            provider,
            tool_router: Self::tool_router(),
        }
    }

    /// Core of `get_user_activity`: one remote call, then per-event
    /// projection and JSON encoding. Validation happens before this runs.
    async fn fetch_user_activity(
        &self,
        username: &str,
        opts: ListOptions,
    ) -> Result<String, ActivityError> {
        let client = self
            .provider
            .events_client()
            .map_err(ActivityError::ClientResolution)?;

        let response = client
            .list_public_events_for_user(username, opts)
            .await
            .map_err(|source| ActivityError::Api {
                operation: format!("failed to get activity for user '{}'", username),
                source,
            })?;

        if response.status != StatusCode::OK {
            return Err(ActivityError::RemoteStatus {
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let events: Vec<Event> = serde_json::from_slice(&response.body)?;

        let minimal: Vec<MinimalEvent> = events.into_iter().map(MinimalEvent::from).collect();
        Ok(serde_json::to_string(&minimal)?)
    }
}

/// Validate the username before it is used in an API route. Usernames must
/// not contain characters that could break out of the URL path.
fn validate_username(username: Option<&str>) -> Result<&str, ActivityError> {
    let username = username.ok_or_else(|| {
        ActivityError::Validation("missing required parameter: username".to_string())
    })?;
    if username.is_empty() {
        return Err(ActivityError::Validation(
            "username must not be empty".to_string(),
        ));
    }
    for ch in ['/', '?', '#', '%', '\0', ' ', '\n', '\t'] {
        if username.contains(ch) {
            return Err(ActivityError::Validation(format!(
                "username contains invalid character '{}'",
                ch
            )));
        }
    }
    Ok(username)
}

#[tool_router]
impl GithubActivityServer {
    #[tool(
        name = "get_user_activity",
        description = "Get recent activity for a GitHub user. Returns a list of events performed by the user.",
        annotations(title = "Get user activity", read_only_hint = true)
    )]
    async fn get_user_activity(
        &self,
        Parameters(params): Parameters<UserActivityParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let username = match validate_username(params.username.as_deref()) {
            Ok(u) => u,
            Err(e) => return e.into_call_result(),
        };
        let opts = match params.pagination.resolve() {
            Ok(o) => o,
            Err(e) => return e.into_call_result(),
        };

        match self.fetch_user_activity(username, opts).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => e.into_call_result(),
        }
    }
}

#[tool_handler]
impl ServerHandler for GithubActivityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-github-activity".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "GitHub user activity server. Use get_user_activity with a username \
                 (plus optional page/perPage) to list recent public events performed \
                 by that user."
                    .to_string(),
            ),
        }
    }
}

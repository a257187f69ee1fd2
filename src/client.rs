use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use http_body_util::BodyExt;

/// Resolved page window for a single list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub per_page: u8,
}

/// Response envelope from the events endpoint: the HTTP status plus the
/// fully read body. The body is owned, so it is released exactly once when
/// the envelope is dropped.
#[derive(Debug)]
pub struct EventsResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    #[error("{0}")]
    Other(String),
}

/// Client for the user events endpoint. Abstracted so tests can substitute
/// deterministic fakes for the network client.
#[async_trait]
pub trait EventsClient: Send + Sync {
    /// List public events performed by a user, one page per call.
    async fn list_public_events_for_user(
        &self,
        username: &str,
        opts: ListOptions,
    ) -> Result<EventsResponse, ClientError>;
}

/// Resolves an events client for a tool invocation. Implementations own how
/// the client is constructed and authenticated.
pub trait ClientProvider: Send + Sync {
    fn events_client(&self) -> Result<Arc<dyn EventsClient>, ClientError>;
}

impl<F> ClientProvider for F
where
    F: Fn() -> Result<Arc<dyn EventsClient>, ClientError> + Send + Sync,
{
    fn events_client(&self) -> Result<Arc<dyn EventsClient>, ClientError> {
        self()
    }
}

fn events_route(username: &str, opts: ListOptions) -> String {
    format!(
        "/users/{}/events/public?page={}&per_page={}",
        username, opts.page, opts.per_page
    )
}

/// Production client backed by octocrab. Uses the raw request layer so the
/// status and body envelope stay observable to the caller.
pub struct OctocrabEventsClient {
    github: octocrab::Octocrab,
}

impl OctocrabEventsClient {
    pub fn new(github: octocrab::Octocrab) -> Self {
        Self { github }
    }
}

#[async_trait]
impl EventsClient for OctocrabEventsClient {
    async fn list_public_events_for_user(
        &self,
        username: &str,
        opts: ListOptions,
    ) -> Result<EventsResponse, ClientError> {
        let route = events_route(username, opts);

        let response = self.github._get(route).await?;
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(ClientError::GitHub)?
            .to_bytes();

        Ok(EventsResponse { status, body })
    }
}

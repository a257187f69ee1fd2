use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Fixed output pattern for event timestamps (UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// -- Wire types (what the events endpoint returns) --

/// A single event as returned by the GitHub events API. Fields the API may
/// omit fall back to their zero values rather than failing the whole page.
#[derive(Debug, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,

    #[serde(default, rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub actor: EventActor,

    #[serde(default)]
    pub repo: EventRepo,

    pub created_at: Option<DateTime<Utc>>,

    /// Untyped per-event-type payload, kept raw.
    #[serde(default)]
    pub payload: Option<Box<RawValue>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventActor {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub login: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub avatar_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventRepo {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,
}

// -- Output projections --

/// Reduced event record returned to the tool caller.
#[derive(Debug, Serialize)]
pub struct MinimalEvent {
    pub id: String,

    #[serde(rename = "type")]
    pub event_type: String,

    pub actor: MinimalUser,

    pub repo: MinimalRepo,

    pub created_at: String,

    /// Raw payload passed through verbatim; the key is omitted entirely
    /// when the source event carried none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Box<RawValue>>,
}

#[derive(Debug, Serialize)]
pub struct MinimalUser {
    pub login: String,
    pub id: i64,
    pub avatar_url: String,
    pub profile_url: String,
}

#[derive(Debug, Serialize)]
pub struct MinimalRepo {
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl From<Event> for MinimalEvent {
    fn from(event: Event) -> Self {
        MinimalEvent {
            id: event.id,
            event_type: event.event_type,
            actor: MinimalUser {
                login: event.actor.login,
                id: event.actor.id,
                avatar_url: event.actor.avatar_url,
                profile_url: event.actor.url,
            },
            repo: MinimalRepo {
                id: event.repo.id,
                name: event.repo.name,
                url: event.repo.url,
            },
            created_at: event
                .created_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
            payload: event.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(payload: Option<&str>) -> Event {
        // RawValue requires deserializing from text, not from a Value tree.
        let json = serde_json::json!({
            "id": "22249084947",
            "type": "PushEvent",
            "actor": {
                "id": 583231,
                "login": "octocat",
                "url": "https://api.github.com/users/octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4"
            },
            "repo": {
                "id": 1296269,
                "name": "octocat/Hello-World",
                "url": "https://api.github.com/repos/octocat/Hello-World"
            },
            "created_at": "2024-03-01T09:30:00Z",
            "payload": payload.map(|p| serde_json::from_str::<serde_json::Value>(p).unwrap())
        });
        serde_json::from_str(&json.to_string()).unwrap()
    }

    #[test]
    fn test_projection_copies_all_fields() {
        let minimal = MinimalEvent::from(sample_event(None));
        assert_eq!(minimal.id, "22249084947");
        assert_eq!(minimal.event_type, "PushEvent");
        assert_eq!(minimal.actor.login, "octocat");
        assert_eq!(minimal.actor.id, 583231);
        assert_eq!(
            minimal.actor.profile_url,
            "https://api.github.com/users/octocat"
        );
        assert_eq!(minimal.repo.name, "octocat/Hello-World");
        assert_eq!(minimal.created_at, "2024-03-01T09:30:00Z");
    }

    #[test]
    fn test_missing_payload_key_is_omitted() {
        let minimal = MinimalEvent::from(sample_event(None));
        let json = serde_json::to_value(&minimal).unwrap();
        assert!(json.get("payload").is_none());
    }

    #[test]
    fn test_payload_passes_through_verbatim() {
        let minimal = MinimalEvent::from(sample_event(Some(r#"{"ref":"main"}"#)));
        let text = serde_json::to_string(&minimal).unwrap();
        assert!(text.contains(r#""payload":{"ref":"main"}"#));
    }

    #[test]
    fn test_missing_wire_fields_default() {
        let event: Event = serde_json::from_str(r#"{"created_at":null}"#).unwrap();
        let minimal = MinimalEvent::from(event);
        assert_eq!(minimal.id, "");
        assert_eq!(minimal.actor.login, "");
        assert_eq!(minimal.created_at, "");
    }

    #[test]
    fn test_timestamp_uses_fixed_pattern() {
        let event = sample_event(None);
        let minimal = MinimalEvent::from(event);
        // Second precision, trailing Z, no offset or fractional part.
        assert_eq!(minimal.created_at.len(), 20);
        assert!(minimal.created_at.ends_with('Z'));
    }
}

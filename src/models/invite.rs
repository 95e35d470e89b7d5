use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// Kind of event an invitation is for. Clients may send arbitrary values;
/// those are kept verbatim and rendered with the default theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Birthday,
    Wedding,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Birthday => "Birthday",
            Self::Wedding => "Wedding",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Birthday" => Self::Birthday,
            "Wedding" => Self::Wedding,
            _ => Self::Other(s),
        }
    }
}

impl From<EventType> for String {
    fn from(e: EventType) -> Self {
        match e {
            EventType::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub id: Uuid,
    #[sqlx(try_from = "String")]
    pub event_type: EventType,
    pub receiver_name: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub map_link: Option<String>,
    pub bride: Option<String>,
    pub groom: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload. `event_type` is optional here so a missing value can be
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvite {
    pub event_type: Option<String>,
    pub receiver_name: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub map_link: Option<String>,
    pub bride: Option<String>,
    pub groom: Option<String>,
}

impl NewInvite {
    /// Returns the event type when it is present and not blank.
    pub fn event_type(&self) -> Option<&str> {
        self.event_type
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }

    /// Postgres `TEXT` cannot hold NUL, so such payloads are refused up front
    /// rather than failing inside the insert.
    pub fn reject_nul(&self) -> Result<(), AppError> {
        let fields = [
            ("eventType", &self.event_type),
            ("receiverName", &self.receiver_name),
            ("title", &self.title),
            ("message", &self.message),
            ("date", &self.date),
            ("time", &self.time),
            ("venue", &self.venue),
            ("mapLink", &self.map_link),
            ("bride", &self.bride),
            ("groom", &self.groom),
        ];

        match fields
            .iter()
            .find(|(_, value)| value.as_deref().is_some_and(|v| v.contains('\0')))
        {
            Some((name, _)) => Err(AppError::BadRequest(format!(
                "{name} must not contain NUL characters"
            ))),
            None => Ok(()),
        }
    }

    pub fn require_event_type(&self) -> Result<EventType, AppError> {
        self.event_type()
            .map(|t| EventType::from(t.to_string()))
            .ok_or_else(|| AppError::BadRequest("eventType is required".into()))
    }
}

#[derive(Debug, Serialize)]
pub struct CreateInviteResponse {
    pub id: Uuid,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_event_types_round_trip_through_strings() {
        assert_eq!(EventType::from("Wedding".to_string()), EventType::Wedding);
        assert_eq!(EventType::from("Birthday".to_string()), EventType::Birthday);
        assert_eq!(String::from(EventType::Wedding), "Wedding");
    }

    #[test]
    fn unknown_event_type_is_kept_verbatim() {
        let e = EventType::from("Anniversary".to_string());
        assert_eq!(e, EventType::Other("Anniversary".into()));
        assert_eq!(e.as_str(), "Anniversary");
    }

    #[test]
    fn event_type_matching_is_case_sensitive() {
        assert_eq!(
            EventType::from("wedding".to_string()),
            EventType::Other("wedding".into())
        );
    }

    #[test]
    fn new_invite_reads_camel_case_fields() {
        let body: NewInvite = serde_json::from_value(serde_json::json!({
            "eventType": "Wedding",
            "receiverName": "Sam",
            "mapLink": "https://maps.app.goo.gl/xyz",
            "somethingElse": 42
        }))
        .unwrap();
        assert_eq!(body.event_type(), Some("Wedding"));
        assert_eq!(body.receiver_name.as_deref(), Some("Sam"));
        assert_eq!(body.map_link.as_deref(), Some("https://maps.app.goo.gl/xyz"));
    }

    #[test]
    fn nul_in_any_field_is_refused() {
        let body = NewInvite {
            event_type: Some("Birthday".into()),
            venue: Some("Hall\0B".into()),
            ..Default::default()
        };
        match body.reject_nul() {
            Err(AppError::BadRequest(msg)) => assert!(msg.starts_with("venue")),
            other => panic!("unexpected {other:?}"),
        }

        let clean = NewInvite {
            event_type: Some("Birthday".into()),
            venue: Some("Hall B".into()),
            ..Default::default()
        };
        assert!(clean.reject_nul().is_ok());
    }

    #[test]
    fn blank_event_type_counts_as_missing() {
        let body = NewInvite {
            event_type: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(body.event_type(), None);
        assert_eq!(NewInvite::default().event_type(), None);
        assert!(matches!(
            NewInvite::default().require_event_type(),
            Err(AppError::BadRequest(_))
        ));
    }
}

//! Types shared between the notes UI and the notes REST API
//!
//! The API collaborator speaks camelCase JSON over HTTP; everything here is
//! serde-serializable with that exact wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note record as served by `/api/notes`.
///
/// Wire shape: `{id, title, content, organizationId, createdAt}`.
///
/// `id` and `created_at` are assigned by the server. The defaulted fields
/// keep deserialization absence-safe: a record missing them still loads and
/// simply renders (and matches searches) as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub organization_id: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn note_round_trips_camel_case_wire_shape() {
        let raw = json!({
            "id": 42,
            "title": "Kickoff",
            "content": "Agenda items",
            "organizationId": "ORG-001",
            "createdAt": "2026-08-07T09:30:00Z"
        });

        let note: Note = serde_json::from_value(raw).expect("should deserialize");
        assert_eq!(note.id, 42);
        assert_eq!(note.organization_id, "ORG-001");
        assert!(note.created_at.is_some());

        let back = serde_json::to_value(&note).expect("should serialize");
        assert_eq!(back["organizationId"], "ORG-001");
        assert_eq!(back["createdAt"], "2026-08-07T09:30:00Z");
        assert!(back.get("organization_id").is_none());
    }

    #[test]
    fn missing_optional_fields_default_instead_of_erroring() {
        let note: Note = serde_json::from_value(json!({ "id": 7 })).expect("should deserialize");
        assert_eq!(note.title, "");
        assert_eq!(note.content, "");
        assert_eq!(note.organization_id, "");
        assert!(note.created_at.is_none());
    }
}

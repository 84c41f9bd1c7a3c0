//! Frontend Models
//!
//! Data structures matching backend entities. Records are exchanged
//! verbatim with the backend; field names map to its camelCase JSON.

use serde::{Deserialize, Serialize};

/// User record (matches backend)
///
/// `id` is absent until the backend has persisted the record, and is
/// never sent on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
}

/// Interview lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "SCHEDULED",
            InterviewStatus::Completed => "COMPLETED",
            InterviewStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Interview record (matches backend)
///
/// Read-only here apart from the scheduling endpoints; never edited in
/// place by this frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: String,
    pub interviewer: User,
    pub interviewee: User,
    pub status: InterviewStatus,
    #[serde(rename = "googleMeetLink", default)]
    pub google_meet_link: Option<String>,
}

/// Meeting record from the calendar/video integration (read-only)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoogleMeet {
    pub id: Option<i64>,
    #[serde(rename = "interviewId")]
    pub interview_id: i64,
    #[serde(rename = "meetLink")]
    pub meet_link: String,
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: String,
    pub status: InterviewStatus,
}

/// Body of a 401 auth-status response; extra fields are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthChallenge {
    #[serde(rename = "authUrl")]
    pub auth_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_create_payload_has_no_id() {
        let user = User {
            id: None,
            username: "ana".to_string(),
            email: "ana@x.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["username"], "ana");
        assert_eq!(obj["email"], "ana@x.com");
    }

    #[test]
    fn test_user_update_payload_keeps_id() {
        let user = User {
            id: Some(7),
            username: "bob".to_string(),
            email: "b2@x.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_interview_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "title": "Technical Interview",
            "description": "Round one",
            "scheduledTime": "2025-06-01T14:30:00",
            "interviewer": {"id": 1, "username": "ana", "email": "ana@x.com"},
            "interviewee": {"id": 2, "username": "bob", "email": "bob@x.com"},
            "status": "SCHEDULED"
        }"#;
        let interview: Interview = serde_json::from_str(json).unwrap();
        assert_eq!(interview.id, Some(3));
        assert_eq!(interview.status, InterviewStatus::Scheduled);
        assert_eq!(interview.interviewer.username, "ana");
        assert_eq!(interview.google_meet_link, None);
    }

    #[test]
    fn test_interview_with_meet_link() {
        let json = r#"{
            "id": 4,
            "title": "t",
            "description": "d",
            "scheduledTime": "2025-06-01T14:30",
            "interviewer": {"id": 1, "username": "a", "email": "a@x.com"},
            "interviewee": {"id": 2, "username": "b", "email": "b@x.com"},
            "status": "COMPLETED",
            "googleMeetLink": "https://meet.example/abc"
        }"#;
        let interview: Interview = serde_json::from_str(json).unwrap();
        assert_eq!(
            interview.google_meet_link.as_deref(),
            Some("https://meet.example/abc")
        );
        assert_eq!(interview.status.as_str(), "COMPLETED");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<InterviewStatus, _> = serde_json::from_str("\"POSTPONED\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_auth_challenge_ignores_extra_fields() {
        let json = r#"{"status":"unauthorized","authUrl":"https://accounts.example/consent"}"#;
        let challenge: AuthChallenge = serde_json::from_str(json).unwrap();
        assert_eq!(challenge.auth_url, "https://accounts.example/consent");
    }
}

//! Backend API Client
//!
//! Typed HTTP wrappers over the scheduling backend's REST contract.
//! One function per operation; no retries, no caching, no timeout
//! override. Failures carry the raw status and body for the caller.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{GoogleMeet, Interview, User};

pub const API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The response arrived but its body could not be encoded/decoded.
    #[error("invalid body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failure, if the backend responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message to show the user: the backend-supplied `message` field
    /// when the error body carries one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let ApiError::Http { body, .. } = self {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
                if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
                    if !msg.is_empty() {
                        return msg.to_string();
                    }
                }
            }
        }
        fallback.to_string()
    }
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

async fn check(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Http { status, body })
    }
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_json(check(resp).await?).await
}

/// POST with an empty body; the operation's inputs ride in the path.
async fn post_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::post(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_json(check(resp).await?).await
}

// ========================
// Query Builders
// ========================

#[derive(Serialize)]
struct RandomPairQuery<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(rename = "scheduledTime")]
    scheduled_time: &'a str,
}

#[derive(Serialize)]
struct ManualScheduleQuery<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(rename = "scheduledTime")]
    scheduled_time: &'a str,
    #[serde(rename = "interviewerId")]
    interviewer_id: i64,
    #[serde(rename = "intervieweeId")]
    interviewee_id: i64,
}

fn encode_query<Q: Serialize>(query: &Q) -> Result<String, ApiError> {
    serde_urlencoded::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))
}

fn random_pair_path(
    title: &str,
    description: &str,
    scheduled_time: &str,
) -> Result<String, ApiError> {
    let query = encode_query(&RandomPairQuery { title, description, scheduled_time })?;
    Ok(format!("/google-meet/schedule-random-pair?{}", query))
}

fn manual_schedule_path(
    title: &str,
    description: &str,
    scheduled_time: &str,
    interviewer_id: i64,
    interviewee_id: i64,
) -> Result<String, ApiError> {
    let query = encode_query(&ManualScheduleQuery {
        title,
        description,
        scheduled_time,
        interviewer_id,
        interviewee_id,
    })?;
    Ok(format!("/google-meet/schedule?{}", query))
}

// ========================
// User Operations
// ========================

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    get_json("/users").await
}

pub async fn get_user(id: i64) -> Result<User, ApiError> {
    get_json(&format!("/users/{}", id)).await
}

pub async fn create_user(user: &User) -> Result<User, ApiError> {
    let resp = Request::post(&url("/users"))
        .json(user)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_json(check(resp).await?).await
}

pub async fn update_user(id: i64, user: &User) -> Result<User, ApiError> {
    let resp = Request::put(&url(&format!("/users/{}", id)))
        .json(user)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_json(check(resp).await?).await
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    let resp = Request::delete(&url(&format!("/users/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(resp).await?;
    Ok(())
}

// ========================
// Interview Operations
// ========================

pub async fn list_interviews() -> Result<Vec<Interview>, ApiError> {
    get_json("/interviews").await
}

pub async fn schedule_random_pair(
    title: &str,
    description: &str,
    scheduled_time: &str,
) -> Result<Interview, ApiError> {
    post_json(&random_pair_path(title, description, scheduled_time)?).await
}

pub async fn schedule_manual(
    title: &str,
    description: &str,
    scheduled_time: &str,
    interviewer_id: i64,
    interviewee_id: i64,
) -> Result<Interview, ApiError> {
    post_json(&manual_schedule_path(
        title,
        description,
        scheduled_time,
        interviewer_id,
        interviewee_id,
    )?)
    .await
}

// ========================
// Calendar Integration
// ========================

/// Probe the calendar authorization state. A success means scheduling
/// calls will be accepted; the body is not inspected further.
pub async fn auth_status() -> Result<(), ApiError> {
    let resp = Request::get(&url("/google-meet/auth-status"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(resp).await?;
    Ok(())
}

/// Meeting record attached to an interview, if one was created.
pub async fn get_meet_for_interview(interview_id: i64) -> Result<GoogleMeet, ApiError> {
    get_json(&format!("/google-meet/interview/{}", interview_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_pair_path_encodes_params() {
        let path =
            random_pair_path("Technical Interview", "Round one", "2025-06-01T14:30").unwrap();
        assert_eq!(
            path,
            "/google-meet/schedule-random-pair?title=Technical+Interview&description=Round+one&scheduledTime=2025-06-01T14%3A30"
        );
    }

    #[test]
    fn test_manual_schedule_path_carries_both_ids() {
        let path = manual_schedule_path("t", "d", "2025-06-01T14:30", 1, 2).unwrap();
        assert!(path.starts_with("/google-meet/schedule?"));
        assert!(path.contains("interviewerId=1"));
        assert!(path.contains("intervieweeId=2"));
        assert!(path.contains("scheduledTime=2025-06-01T14%3A30"));
    }

    #[test]
    fn test_user_message_prefers_backend_message() {
        let err = ApiError::Http {
            status: 409,
            body: r#"{"message":"Email already registered"}"#.to_string(),
        };
        assert_eq!(err.user_message("fallback"), "Email already registered");
    }

    #[test]
    fn test_user_message_falls_back_on_plain_body() {
        let err = ApiError::Http { status: 500, body: "Internal Server Error".to_string() };
        assert_eq!(err.user_message("Something broke"), "Something broke");
    }

    #[test]
    fn test_user_message_falls_back_on_network_error() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Try again"), "Try again");
    }

    #[test]
    fn test_status_only_set_for_http_errors() {
        let http = ApiError::Http { status: 401, body: String::new() };
        assert_eq!(http.status(), Some(401));
        assert_eq!(ApiError::Network("x".to_string()).status(), None);
    }
}

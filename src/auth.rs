//! Calendar Authorization Gate
//!
//! State machine for the external calendar/video consent flow. Views
//! probe the auth-status endpoint and apply the resulting transition;
//! an unresolvable probe leaves the gate untouched.

use crate::api::ApiError;
use crate::models::AuthChallenge;

/// Authorization state for scheduling-capable views
#[derive(Debug, Clone, PartialEq)]
pub enum AuthGate {
    /// No probe has resolved yet.
    Unknown,
    /// The backend holds valid calendar credentials.
    Authorized,
    /// The backend wants the user to visit the consent URL.
    NeedsAuth(String),
}

impl AuthGate {
    /// Transition for a finished probe.
    ///
    /// Returns the next state, or `None` when the probe resolved
    /// nothing: a non-401 failure, or a 401 whose body does not carry
    /// a usable consent URL. Callers log that case and keep their
    /// current state.
    pub fn after_probe(outcome: &Result<(), ApiError>) -> Option<AuthGate> {
        match outcome {
            Ok(()) => Some(AuthGate::Authorized),
            Err(ApiError::Http { status: 401, body }) => {
                match serde_json::from_str::<AuthChallenge>(body) {
                    Ok(challenge) if !challenge.auth_url.is_empty() => {
                        Some(AuthGate::NeedsAuth(challenge.auth_url))
                    }
                    _ => None,
                }
            }
            Err(_) => None,
        }
    }

    pub fn needs_auth(&self) -> bool {
        matches!(self, AuthGate::NeedsAuth(_))
    }

    pub fn auth_url(&self) -> Option<&str> {
        match self {
            AuthGate::NeedsAuth(url) => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_probe_authorizes() {
        assert_eq!(AuthGate::after_probe(&Ok(())), Some(AuthGate::Authorized));
    }

    #[test]
    fn test_401_with_url_needs_auth() {
        let outcome = Err(ApiError::Http {
            status: 401,
            body: r#"{"status":"unauthorized","authUrl":"https://accounts.example/consent"}"#
                .to_string(),
        });
        assert_eq!(
            AuthGate::after_probe(&outcome),
            Some(AuthGate::NeedsAuth(
                "https://accounts.example/consent".to_string()
            ))
        );
    }

    #[test]
    fn test_401_with_malformed_body_stays_unresolved() {
        let outcome = Err(ApiError::Http { status: 401, body: "not json".to_string() });
        assert_eq!(AuthGate::after_probe(&outcome), None);
    }

    #[test]
    fn test_401_without_url_stays_unresolved() {
        let outcome = Err(ApiError::Http {
            status: 401,
            body: r#"{"status":"unauthorized"}"#.to_string(),
        });
        assert_eq!(AuthGate::after_probe(&outcome), None);

        let empty_url = Err(ApiError::Http {
            status: 401,
            body: r#"{"authUrl":""}"#.to_string(),
        });
        assert_eq!(AuthGate::after_probe(&empty_url), None);
    }

    #[test]
    fn test_other_failures_stay_unresolved() {
        let server_error = Err(ApiError::Http { status: 500, body: "boom".to_string() });
        assert_eq!(AuthGate::after_probe(&server_error), None);

        let network = Err(ApiError::Network("connection refused".to_string()));
        assert_eq!(AuthGate::after_probe(&network), None);
    }

    #[test]
    fn test_accessors() {
        let gate = AuthGate::NeedsAuth("https://x".to_string());
        assert!(gate.needs_auth());
        assert_eq!(gate.auth_url(), Some("https://x"));
        assert!(!AuthGate::Authorized.needs_auth());
        assert_eq!(AuthGate::Unknown.auth_url(), None);
    }
}

//! View State Machines
//!
//! Explicit phases for list loading and form submission, plus the
//! generation counter that makes the last-issued fetch win over any
//! slower, earlier one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Collection fetch phase. A failure keeps the previously loaded
/// snapshot on screen; only the phase and its message change.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Submission phase. Submit handlers early-return while `Submitting`,
/// so a double submission cannot reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn in_flight(self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

/// Monotonic generation counter shared between a view and its in-flight
/// async work. Each dispatch takes a token with [`begin`](Self::begin);
/// a completion applies its result only while its token
/// [`is_current`](Self::is_current). Whichever request was issued last
/// wins, regardless of arrival order.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::Relaxed) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_fetch_supersedes_earlier() {
        let seq = Generation::new();
        let first = seq.begin();
        let second = seq.begin();
        // The earlier response lands late: it must be ignored.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_single_fetch_is_current() {
        let seq = Generation::new();
        let token = seq.begin();
        assert!(seq.is_current(token));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = Generation::new();
        let handle = seq.clone();
        let token = seq.begin();
        assert!(handle.is_current(token));
        handle.begin();
        assert!(!seq.is_current(token));
    }

    #[test]
    fn test_load_state_accessors() {
        assert!(LoadState::Loading.is_loading());
        assert!(!LoadState::Loaded.is_loading());
        assert_eq!(LoadState::Failed("x".to_string()).error(), Some("x"));
        assert_eq!(LoadState::Idle.error(), None);
    }

    #[test]
    fn test_submit_state_guard() {
        assert!(SubmitState::Submitting.in_flight());
        assert!(!SubmitState::Idle.in_flight());
    }
}

//! Application Context
//!
//! Shared refresh triggers provided via Leptos Context API. Pages
//! re-fetch their collection whenever the matching trigger bumps.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Users re-fetch trigger - read
    pub users_reload: ReadSignal<u32>,
    /// Users re-fetch trigger - write
    set_users_reload: WriteSignal<u32>,
    /// Interviews re-fetch trigger - read
    pub interviews_reload: ReadSignal<u32>,
    /// Interviews re-fetch trigger - write
    set_interviews_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        users_reload: (ReadSignal<u32>, WriteSignal<u32>),
        interviews_reload: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            users_reload: users_reload.0,
            set_users_reload: users_reload.1,
            interviews_reload: interviews_reload.0,
            set_interviews_reload: interviews_reload.1,
        }
    }

    /// Trigger a fresh users fetch
    pub fn reload_users(&self) {
        self.set_users_reload.update(|v| *v += 1);
    }

    /// Trigger a fresh interviews fetch
    pub fn reload_interviews(&self) {
        self.set_interviews_reload.update(|v| *v += 1);
    }
}

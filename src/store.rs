//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each
//! collection is the snapshot of its last successful fetch and is only
//! ever replaced wholesale by a completed list call.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Interview, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Users as of the last successful fetch
    pub users: Vec<User>,
    /// Interviews as of the last successful fetch
    pub interviews: Vec<Interview>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

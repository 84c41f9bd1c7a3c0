//! Snackbar Component
//!
//! Transient error/success banner with auto-hide and manual close.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::Generation;

const AUTO_HIDE_MS: u64 = 6000;

/// Bottom-of-page message banner. A newer message restarts the
/// auto-hide clock; a stale timer never hides it early.
#[component]
pub fn Snackbar(
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    success: ReadSignal<Option<String>>,
    set_success: WriteSignal<Option<String>>,
) -> impl IntoView {
    let hide_seq = Generation::new();

    {
        let hide_seq = hide_seq.clone();
        Effect::new(move |_| {
            if error.get().is_none() && success.get().is_none() {
                return;
            }
            let token = hide_seq.begin();
            let seq = hide_seq.clone();
            spawn_local(async move {
                sleep(Duration::from_millis(AUTO_HIDE_MS)).await;
                if seq.is_current(token) {
                    set_error.set(None);
                    set_success.set(None);
                }
            });
        });
    }

    let close = move |_| {
        set_error.set(None);
        set_success.set(None);
    };

    view! {
        {move || error.get().map(|msg| view! {
            <div class="snackbar error">
                <span>{msg}</span>
                <button on:click=close>"×"</button>
            </div>
        })}
        {move || success.get().map(|msg| view! {
            <div class="snackbar success">
                <span>{msg}</span>
                <button on:click=close>"×"</button>
            </div>
        })}
    }
}

//! Authorization Dialog Component
//!
//! Modal shown when the calendar integration needs user consent. The
//! consent URL is opened in a new browsing context; re-evaluation only
//! happens on the next scheduling attempt or reload.

use leptos::prelude::*;

use crate::auth::AuthGate;

#[component]
pub fn AuthDialog(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    gate: ReadSignal<AuthGate>,
) -> impl IntoView {
    let authorize = move |_| {
        if let AuthGate::NeedsAuth(url) = gate.get() {
            if let Some(win) = web_sys::window() {
                let _ = win.open_with_url_and_target(&url, "_blank");
            }
        }
    };

    view! {
        {move || (open.get() && gate.get().needs_auth()).then(|| view! {
            <div class="modal-overlay">
                <div class="modal">
                    <h2>"Google Calendar Authorization Required"</h2>
                    <p>
                        "This application needs permission to access your Google Calendar \
                         to schedule interviews and create Google Meet links."
                    </p>
                    <p>
                        "Please click the button below to authorize the application. \
                         You will be redirected to Google's consent screen."
                    </p>
                    <div class="modal-actions">
                        <button class="plain-btn" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                        <button class="primary-btn" on:click=authorize>
                            "Authorize Google Calendar"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}

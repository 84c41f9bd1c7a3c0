//! Schedule Page
//!
//! Manual interview scheduling with explicit interviewer/interviewee
//! selection. Pairing rules are enforced client-side before any network
//! call; a 401 hands off to the authorization gate.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::AuthGate;
use crate::components::{AuthDialog, Page, Snackbar};
use crate::context::AppContext;
use crate::datetime;
use crate::forms::ManualScheduleDraft;
use crate::models::User;
use crate::state::{Generation, LoadState, SubmitState};
use crate::store::{use_app_store, AppStateStoreFields};

/// Success message stays visible this long before leaving the page.
const POST_SUCCESS_DELAY_MS: u64 = 2000;

#[component]
pub fn SchedulePage(set_page: WriteSignal<Page>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (load_state, set_load_state) = signal(LoadState::Idle);
    let (draft, set_draft) = signal(ManualScheduleDraft::new(datetime::default_schedule_time(
        datetime::now_local(),
    )));
    let (submit_state, set_submit_state) = signal(SubmitState::Idle);
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(None::<String>);
    let (auth_gate, set_auth_gate) = signal(AuthGate::Unknown);
    let (auth_open, set_auth_open) = signal(false);

    // Users feed both selectors
    let fetch_seq = Generation::new();
    {
        let fetch_seq = fetch_seq.clone();
        Effect::new(move |_| {
            let _ = ctx.users_reload.get();
            set_load_state.set(LoadState::Loading);
            let token = fetch_seq.begin();
            let seq = fetch_seq.clone();
            spawn_local(async move {
                let result = api::list_users().await;
                if !seq.is_current(token) {
                    return;
                }
                match result {
                    Ok(users) => {
                        *store.users().write() = users;
                        set_load_state.set(LoadState::Loaded);
                        set_error.set(None);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[SCHEDULE] load failed: {e}").into());
                        let msg = e.user_message("Failed to load users. Please try again.");
                        set_error.set(Some(msg.clone()));
                        set_load_state.set(LoadState::Failed(msg));
                    }
                }
            });
        });
    }

    let probe_auth = move |_: ()| {
        spawn_local(async move {
            let outcome = api::auth_status().await;
            match AuthGate::after_probe(&outcome) {
                Some(next) => {
                    set_auth_open.set(next.needs_auth());
                    set_auth_gate.set(next);
                }
                None => {
                    web_sys::console::error_1(
                        &format!("[AUTH] probe unresolved: {:?}", outcome.err()).into(),
                    );
                }
            }
        });
    };

    Effect::new(move |_| probe_auth(()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submit_state.get().in_flight() {
            return;
        }
        let current = draft.get();
        let (interviewer_id, interviewee_id) = match current.validate_pairing() {
            Ok(pair) => pair,
            Err(msg) => {
                set_error.set(Some(msg.to_string()));
                return;
            }
        };
        set_submit_state.set(SubmitState::Submitting);
        set_error.set(None);
        set_success.set(None);
        spawn_local(async move {
            let result = api::schedule_manual(
                &current.title,
                &current.description,
                &current.scheduled_time,
                interviewer_id,
                interviewee_id,
            )
            .await;
            set_submit_state.set(SubmitState::Idle);
            match result {
                Ok(_) => {
                    set_success.set(Some("Meeting scheduled successfully!".to_string()));
                    // Leave the success message visible before moving on
                    sleep(Duration::from_millis(POST_SUCCESS_DELAY_MS)).await;
                    set_page.set(Page::Interviews);
                }
                Err(e) if e.status() == Some(401) => probe_auth(()),
                Err(e) => {
                    web_sys::console::error_1(&format!("[SCHEDULE] manual failed: {e}").into());
                    set_error.set(Some(
                        e.user_message("Failed to schedule meeting. Please try again."),
                    ));
                }
            }
        });
    };

    let user_options = move || store.users().get();

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Schedule Interview"</h1>
            </div>
            <p>"Schedule a new interview by filling out the details below"</p>

            <form class="schedule-form" on:submit=on_submit>
                <div class="form-field">
                    <label>"Interview Title"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || draft.get().title
                        on:input=move |ev| {
                            set_draft.set(draft.get().with_title(event_target_value(&ev)));
                        }
                    />
                </div>
                <div class="form-field">
                    <label>"Description"</label>
                    <textarea
                        rows="4"
                        required=true
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            set_draft.set(draft.get().with_description(event_target_value(&ev)));
                        }
                    />
                </div>
                <div class="form-field">
                    <label>"Date and Time"</label>
                    <input
                        type="datetime-local"
                        required=true
                        prop:value=move || draft.get().scheduled_time
                        on:input=move |ev| {
                            set_draft.set(draft.get().with_scheduled_time(event_target_value(&ev)));
                        }
                    />
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label>"Interviewer"</label>
                        <select
                            prop:value=move || {
                                draft.get().interviewer_id.map(|id| id.to_string()).unwrap_or_default()
                            }
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_draft.set(draft.get().with_interviewer(value.parse().ok()));
                            }
                        >
                            <option value="">"Select interviewer"</option>
                            <UserOptions users=Signal::derive(user_options) />
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Interviewee"</label>
                        <select
                            prop:value=move || {
                                draft.get().interviewee_id.map(|id| id.to_string()).unwrap_or_default()
                            }
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_draft.set(draft.get().with_interviewee(value.parse().ok()));
                            }
                        >
                            <option value="">"Select interviewee"</option>
                            <UserOptions users=Signal::derive(user_options) />
                        </select>
                    </div>
                </div>
                {move || load_state.get().is_loading().then(|| view! {
                    <p class="loading-row">"Loading users..."</p>
                })}
                <div class="modal-actions">
                    <button
                        type="submit"
                        class="primary-btn"
                        prop:disabled=move || submit_state.get().in_flight()
                    >
                        {move || if submit_state.get().in_flight() { "Scheduling..." } else { "Schedule Interview" }}
                    </button>
                </div>
            </form>

            <AuthDialog open=auth_open set_open=set_auth_open gate=auth_gate />
            <Snackbar error=error set_error=set_error success=success set_success=set_success />
        </div>
    }
}

/// Options for a participant selector
#[component]
fn UserOptions(users: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <For
            each=move || users.get()
            key=|user| user.id
            children=move |user| {
                let value = user.id.map(|id| id.to_string()).unwrap_or_default();
                view! {
                    <option value=value>{user.username.clone()}</option>
                }
            }
        />
    }
}

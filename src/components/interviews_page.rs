//! Interviews Page
//!
//! Interview list with random-pair scheduling and the calendar
//! authorization gate. Interviews are never edited in place here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::AuthGate;
use crate::components::{AuthDialog, RandomPairDialog, Snackbar};
use crate::context::AppContext;
use crate::datetime;
use crate::models::InterviewStatus;
use crate::state::{Generation, LoadState};
use crate::store::{use_app_store, AppStateStoreFields};

fn status_class(status: InterviewStatus) -> &'static str {
    match status {
        InterviewStatus::Scheduled => "status-badge scheduled",
        InterviewStatus::Completed => "status-badge completed",
        InterviewStatus::Cancelled => "status-badge cancelled",
    }
}

#[component]
pub fn InterviewsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (load_state, set_load_state) = signal(LoadState::Idle);
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(None::<String>);
    let (dialog_open, set_dialog_open) = signal(false);
    let (auth_gate, set_auth_gate) = signal(AuthGate::Unknown);
    let (auth_open, set_auth_open) = signal(false);

    let fetch_seq = Generation::new();
    {
        let fetch_seq = fetch_seq.clone();
        Effect::new(move |_| {
            let _ = ctx.interviews_reload.get();
            set_load_state.set(LoadState::Loading);
            let token = fetch_seq.begin();
            let seq = fetch_seq.clone();
            spawn_local(async move {
                let result = api::list_interviews().await;
                if !seq.is_current(token) {
                    return;
                }
                match result {
                    Ok(interviews) => {
                        *store.interviews().write() = interviews;
                        set_load_state.set(LoadState::Loaded);
                        set_error.set(None);
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[INTERVIEWS] load failed: {e}").into(),
                        );
                        let msg = e.user_message("Failed to load interviews. Please try again.");
                        set_error.set(Some(msg.clone()));
                        set_load_state.set(LoadState::Failed(msg));
                    }
                }
            });
        });
    }

    // Probe the authorization state; an unresolved outcome only logs
    // and leaves the gate as it was.
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

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Interviews"</h1>
                <button class="primary-btn" on:click=move |_| set_dialog_open.set(true)>
                    "Schedule Random Pair"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Interviewer"</th>
                        <th>"Candidate"</th>
                        <th>"Date & Time"</th>
                        <th>"Status"</th>
                        <th>"Meet Link"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.interviews().get()
                        key=|interview| interview.id
                        children=move |interview| {
                            view! {
                                <tr>
                                    <td>{interview.id}</td>
                                    <td>
                                        {interview.interviewer.username.clone()}
                                        <span class="cell-sub">{interview.interviewer.email.clone()}</span>
                                    </td>
                                    <td>
                                        {interview.interviewee.username.clone()}
                                        <span class="cell-sub">{interview.interviewee.email.clone()}</span>
                                    </td>
                                    <td>{datetime::format_display(&interview.scheduled_time)}</td>
                                    <td>
                                        <span class=status_class(interview.status)>
                                            {interview.status.as_str()}
                                        </span>
                                    </td>
                                    <td>
                                        {match interview.google_meet_link.clone() {
                                            Some(link) => view! {
                                                <a class="link-btn" href=link target="_blank">
                                                    "Join Meeting"
                                                </a>
                                            }.into_any(),
                                            None => view! {
                                                <span class="no-link">"No link available"</span>
                                            }.into_any(),
                                        }}
                                    </td>
                                </tr>
                            }
                        }
                    />
                    {move || {
                        (!load_state.get().is_loading() && store.interviews().get().is_empty()).then(|| view! {
                            <tr><td colspan="6" class="empty-row">"No interviews yet"</td></tr>
                        })
                    }}
                </tbody>
            </table>
            {move || load_state.get().is_loading().then(|| view! {
                <p class="loading-row">"Loading interviews..."</p>
            })}

            <RandomPairDialog
                open=dialog_open
                set_open=set_dialog_open
                set_error=set_error
                set_success=set_success
                on_auth_required=Callback::new(probe_auth)
            />
            <AuthDialog open=auth_open set_open=set_auth_open gate=auth_gate />
            <Snackbar error=error set_error=set_error success=success set_success=set_success />
        </div>
    }
}

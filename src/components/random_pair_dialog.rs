//! Random Pair Dialog Component
//!
//! Collects title, description, and time, and asks the backend to pick
//! the participants. The frontend passes no candidate list and makes no
//! pairing decision itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::datetime;
use crate::forms::RandomPairDraft;
use crate::state::SubmitState;

#[component]
pub fn RandomPairDialog(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
    set_success: WriteSignal<Option<String>>,
    #[prop(into)] on_auth_required: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(RandomPairDraft::new(String::new()));
    let (submit_state, set_submit_state) = signal(SubmitState::Idle);

    // Fresh defaults every time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            let default_time = datetime::default_schedule_time(datetime::now_local());
            set_draft.set(RandomPairDraft::new(default_time));
            set_submit_state.set(SubmitState::Idle);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submit_state.get().in_flight() {
            return;
        }
        let current = draft.get();
        set_submit_state.set(SubmitState::Submitting);
        set_error.set(None);
        set_success.set(None);
        spawn_local(async move {
            let result = api::schedule_random_pair(
                &current.title,
                &current.description,
                &current.scheduled_time,
            )
            .await;
            set_submit_state.set(SubmitState::Idle);
            match result {
                Ok(_) => {
                    set_success.set(Some("Interview scheduled successfully!".to_string()));
                    set_open.set(false);
                    ctx.reload_interviews();
                }
                Err(e) if e.status() == Some(401) => on_auth_required.run(()),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[SCHEDULE] random pair failed: {e}").into(),
                    );
                    set_error.set(Some(
                        e.user_message("Failed to schedule interview. Please try again."),
                    ));
                }
            }
        });
    };

    view! {
        {move || open.get().then(|| view! {
            <div class="modal-overlay">
                <div class="modal">
                    <h2>"Schedule Random Pair Interview"</h2>
                    <form on:submit=on_submit>
                        <div class="form-field">
                            <label>"Title"</label>
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
                                rows="3"
                                required=true
                                prop:value=move || draft.get().description
                                on:input=move |ev| {
                                    set_draft.set(draft.get().with_description(event_target_value(&ev)));
                                }
                            />
                        </div>
                        <div class="form-field">
                            <label>"Date & Time"</label>
                            <input
                                type="datetime-local"
                                required=true
                                prop:value=move || draft.get().scheduled_time
                                on:input=move |ev| {
                                    set_draft.set(draft.get().with_scheduled_time(event_target_value(&ev)));
                                }
                            />
                        </div>
                        <div class="modal-actions">
                            <button type="button" class="plain-btn" on:click=move |_| set_open.set(false)>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="primary-btn"
                                prop:disabled=move || submit_state.get().in_flight()
                            >
                                {move || if submit_state.get().in_flight() { "Scheduling..." } else { "Schedule" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        })}
    }
}

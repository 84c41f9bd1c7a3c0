//! User Dialog Component
//!
//! Create/edit modal bound to an immutable draft record. The draft is
//! replaced wholesale on every field edit and on open/close; nothing is
//! written back to the list until the backend confirms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::forms::{UserDialogMode, UserDraft};
use crate::state::SubmitState;

#[component]
pub fn UserDialog(
    dialog: ReadSignal<Option<UserDialogMode>>,
    set_dialog: WriteSignal<Option<UserDialogMode>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(UserDraft::empty());
    let (submit_state, set_submit_state) = signal(SubmitState::Idle);
    let (error, set_error) = signal(None::<String>);

    // Swap in a fresh draft on every open/close transition
    Effect::new(move |_| {
        match dialog.get() {
            Some(mode) => set_draft.set(mode.initial_draft()),
            None => set_draft.set(UserDraft::empty()),
        }
        set_error.set(None);
        set_submit_state.set(SubmitState::Idle);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submit_state.get().in_flight() {
            return;
        }
        let Some(mode) = dialog.get() else { return };
        let current = draft.get();
        // (id, record): id present = update, absent = create
        let request = match &mode {
            UserDialogMode::Create => (None, current.into_record(None)),
            UserDialogMode::Edit(user) => match user.id {
                Some(id) => (Some(id), current.into_record(Some(id))),
                // Rows come from the backend and always carry an id.
                None => return,
            },
        };
        set_submit_state.set(SubmitState::Submitting);
        set_error.set(None);
        spawn_local(async move {
            let result = match request {
                (Some(id), record) => api::update_user(id, &record).await,
                (None, record) => api::create_user(&record).await,
            };
            set_submit_state.set(SubmitState::Idle);
            match result {
                Ok(_) => {
                    set_dialog.set(None);
                    ctx.reload_users();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[USERS] save failed: {e}").into());
                    set_error.set(Some(e.user_message("Failed to save user. Please try again.")));
                }
            }
        });
    };

    view! {
        {move || dialog.get().map(|mode| {
            let is_edit = matches!(mode, UserDialogMode::Edit(_));
            let title = if is_edit { "Edit User" } else { "Add User" };
            view! {
                <div class="modal-overlay">
                    <div class="modal">
                        <h2>{title}</h2>
                        <form on:submit=on_submit>
                            <div class="form-field">
                                <label>"Username"</label>
                                <input
                                    type="text"
                                    required=true
                                    prop:value=move || draft.get().username
                                    on:input=move |ev| {
                                        set_draft.set(draft.get().with_username(event_target_value(&ev)));
                                    }
                                />
                            </div>
                            <div class="form-field">
                                <label>"Email"</label>
                                <input
                                    type="email"
                                    required=true
                                    prop:value=move || draft.get().email
                                    on:input=move |ev| {
                                        set_draft.set(draft.get().with_email(event_target_value(&ev)));
                                    }
                                />
                            </div>
                            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                            <div class="modal-actions">
                                <button type="button" class="plain-btn" on:click=move |_| set_dialog.set(None)>
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="primary-btn"
                                    prop:disabled=move || submit_state.get().in_flight()
                                >
                                    {move || {
                                        if submit_state.get().in_flight() {
                                            "Saving..."
                                        } else if is_edit {
                                            "Update"
                                        } else {
                                            "Add"
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        })}
    }
}

//! Users Page
//!
//! User list with row-level edit/delete and a create dialog. The table
//! always shows the snapshot of the last successful fetch; every
//! mutation triggers an unconditional re-fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Snackbar, UserDialog};
use crate::context::AppContext;
use crate::forms::UserDialogMode;
use crate::state::{Generation, LoadState};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (load_state, set_load_state) = signal(LoadState::Idle);
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(None::<String>);
    let (dialog, set_dialog) = signal(None::<UserDialogMode>);

    // Fetch on mount and on every reload trigger; a superseded fetch's
    // result is dropped so the last-issued request wins.
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
                        web_sys::console::error_1(&format!("[USERS] load failed: {e}").into());
                        let msg = e.user_message("Failed to load users. Please try again.");
                        set_error.set(Some(msg.clone()));
                        set_load_state.set(LoadState::Failed(msg));
                    }
                }
            });
        });
    }

    let on_delete = move |id: i64| {
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => ctx.reload_users(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[USERS] delete failed: {e}").into());
                    set_error.set(Some(e.user_message("Failed to delete user. Please try again.")));
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Users"</h1>
                <button class="primary-btn" on:click=move |_| set_dialog.set(Some(UserDialogMode::Create))>
                    "Add User"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.users().get()
                        key=|user| user.id
                        children=move |user| {
                            let edit_user = user.clone();
                            view! {
                                <tr>
                                    <td>{user.id}</td>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>
                                        <button
                                            class="row-btn"
                                            on:click=move |_| {
                                                set_dialog.set(Some(UserDialogMode::Edit(edit_user.clone())));
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        {user.id.map(|id| view! {
                                            <DeleteConfirmButton
                                                button_class="row-btn"
                                                on_confirm=Callback::new(move |_| on_delete(id))
                                            />
                                        })}
                                    </td>
                                </tr>
                            }
                        }
                    />
                    {move || {
                        (!load_state.get().is_loading() && store.users().get().is_empty()).then(|| view! {
                            <tr><td colspan="4" class="empty-row">"No users yet"</td></tr>
                        })
                    }}
                </tbody>
            </table>
            {move || load_state.get().is_loading().then(|| view! {
                <p class="loading-row">"Loading users..."</p>
            })}

            <UserDialog dialog=dialog set_dialog=set_dialog />
            <Snackbar error=error set_error=set_error success=success set_success=set_success />
        </div>
    }
}

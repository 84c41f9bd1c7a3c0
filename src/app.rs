//! Interview Admin App
//!
//! Top-level component: page switching, shared refresh context, and the
//! global store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{InterviewsPage, NavBar, Page, SchedulePage, UsersPage};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Interviews);
    let (users_reload, set_users_reload) = signal(0u32);
    let (interviews_reload, set_interviews_reload) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(
        (users_reload, set_users_reload),
        (interviews_reload, set_interviews_reload),
    ));
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            <NavBar page=page set_page=set_page />
            <main class="main-content">
                {move || match page.get() {
                    Page::Interviews => view! { <InterviewsPage /> }.into_any(),
                    Page::Users => view! { <UsersPage /> }.into_any(),
                    Page::Schedule => view! { <SchedulePage set_page=set_page /> }.into_any(),
                }}
            </main>
        </div>
    }
}

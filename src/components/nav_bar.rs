//! Navigation Bar Component
//!
//! Tab bar for switching between the console's pages.

use leptos::prelude::*;

/// Console pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Interviews,
    Users,
    Schedule,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Interviews => "Interviews",
            Page::Users => "Users",
            Page::Schedule => "Schedule",
        }
    }
}

const PAGES: &[Page] = &[Page::Interviews, Page::Users, Page::Schedule];

/// Navigation tab bar
#[component]
pub fn NavBar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {PAGES.iter().map(|&tab| {
                let is_active = move || page.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        on:click=move |_| set_page.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

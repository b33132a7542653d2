//! App frame: collapsible navigation sidebar plus the routed page.
//!
//! ARCHITECTURE
//! ============
//! Wraps `Routes` so every page shares one sidebar. Links depend on
//! `AuthState::has_session`, which the logout and login flows keep in step
//! with token storage.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let open = move || ui.get().sidebar_open;

    view! {
        <div class="app-layout" class:app-layout--collapsed=move || !open()>
            <aside class="sidebar">
                <div class="sidebar__header">
                    <span class="sidebar__brand">"LithoSurfer"</span>
                    <button
                        class="sidebar__toggle"
                        type="button"
                        aria-label=move || if open() { "Collapse sidebar" } else { "Expand sidebar" }
                        on:click=move |_| ui.update(UiState::toggle_sidebar)
                    >
                        {move || if open() { "‹" } else { "›" }}
                    </button>
                </div>
                <Show when=open>
                    <nav class="sidebar__nav">
                        <Show
                            when=move || auth.get().has_session
                            fallback=|| {
                                view! {
                                    <A href="/login">"Login"</A>
                                    <A href="/register">"Register"</A>
                                }
                            }
                        >
                            <A href="/samples">"Samples"</A>
                            <A href="/account">"Account"</A>
                        </Show>
                    </nav>
                </Show>
            </aside>
            <main class="app-main">{children()}</main>
        </div>
    }
}

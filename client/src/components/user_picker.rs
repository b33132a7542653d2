//! Creator picker: type-ahead search over LithoDat users.
//!
//! DESIGN
//! ======
//! The search box is debounced (250 ms) through the same generation guard the
//! filter store uses, and results come from a last-request-wins
//! [`QueryState`]. Picking a user writes the creator id and label into the
//! filter; typing again clears the creator until a new pick is made.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::LithoUser;
use crate::state::debounce::Debounced;
use crate::state::filter::SampleFilter;
use crate::state::query::{QueryState, run_query};

pub const USER_SEARCH_DEBOUNCE_MS: u32 = 250;
pub const USER_SEARCH_PAGE_SIZE: u32 = 50;

#[component]
pub fn UserPicker() -> impl IntoView {
    let filter = expect_context::<RwSignal<SampleFilter>>();
    let search = RwSignal::new(Debounced::new(String::new()));
    let results = RwSignal::new(QueryState::<Vec<LithoUser>>::default());
    let open = RwSignal::new(false);

    Effect::new(move || {
        let term = search.with(|s| s.settled().clone());
        let key = api::litho_users_path(&term, 0, USER_SEARCH_PAGE_SIZE);
        run_query(results, key, async move { api::fetch_litho_users(&term, 0, USER_SEARCH_PAGE_SIZE).await });
    });

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let Some(generation) = search.try_update(|s| s.set(text)) else {
            return;
        };
        open.set(true);
        if filter.with_untracked(|f| f.created_by_id.is_some()) {
            filter.update(|f| f.set_created_by(None, None));
        }
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(USER_SEARCH_DEBOUNCE_MS, move || {
            search.maybe_update(|s| s.settle_with(generation, |t| t.trim().to_owned()));
        })
        .forget();
        #[cfg(not(feature = "hydrate"))]
        let _ = generation;
    };

    let pick = move |user: LithoUser| {
        let label = user.label();
        search.update(|s| s.reset(String::new()));
        filter.update(|f| f.set_created_by(Some(user.id), Some(label)));
        open.set(false);
    };

    // Show the picked creator's label; otherwise whatever is being typed.
    let display = move || {
        filter
            .with(|f| f.created_by_label.clone())
            .unwrap_or_else(|| search.with(|s| s.live().clone()))
    };

    view! {
        <div class="user-picker">
            <input
                class="user-picker__input"
                type="text"
                placeholder="Created By (search user)"
                prop:value=display
                on:input=on_input
                on:focus=move |_| open.set(true)
                on:blur=move |_| open.set(false)
            />
            <Show when=move || open.get() && results.with(|r| r.data.as_ref().is_some_and(|d| !d.is_empty()))>
                <ul class="user-picker__results" role="listbox">
                    <For
                        each=move || results.with(|r| r.data.clone().unwrap_or_default())
                        key=|user| user.id.clone()
                        let:user
                    >
                        {
                            let label = user.label();
                            view! {
                                <li
                                    class="user-picker__option"
                                    role="option"
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        pick(user.clone());
                                    }
                                >
                                    {label}
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Show>
        </div>
    }
}

//! Status filter chips.

use leptos::prelude::*;
use tagdex_core::{QueryEvent, QueryState, StatusFilter};

/// One chip per status present in the dataset, behind the "All"
/// sentinel. Exactly one chip is active at a time.
#[component]
pub fn FilterChips(statuses: Vec<String>, state: RwSignal<QueryState>) -> impl IntoView {
    let chip = move |label: String, filter: StatusFilter| {
        let is_active = {
            let filter = filter.clone();
            move || state.with(|s| s.filter == filter)
        };
        view! {
            <button
                class=move || if is_active() { "filter-chip active" } else { "filter-chip" }
                on:click=move |_| {
                    state.update(|s| s.apply(QueryEvent::FilterSelected(filter.clone())));
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="filter-chips">
            {chip("All".to_string(), StatusFilter::All)}
            {statuses
                .into_iter()
                .map(|status| chip(status.clone(), StatusFilter::Only(status)))
                .collect::<Vec<_>>()}
        </div>
    }
}

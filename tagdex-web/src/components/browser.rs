//! Interactive wrapper around a loaded dataset.

use leptos::prelude::*;
use tagdex_core::{dataset::distinct_statuses, derive_view, ElementRecord, QueryEvent, QueryState};

use super::{ElementsTable, FilterChips};

/// Search box, live count, filter chips, and the sortable table.
///
/// Owns the query state; every interaction re-derives the view from the
/// full dataset, so the count always equals the rendered row set.
#[component]
pub fn ElementsBrowser(records: Vec<ElementRecord>) -> impl IntoView {
    let statuses = distinct_statuses(&records);
    let all = StoredValue::new(records);
    let state = RwSignal::new(QueryState::default());
    let rows = Memo::new(move |_| all.with_value(|all| derive_view(all, &state.get())));

    view! {
        <div class="toolbar">
            <input
                type="search"
                class="search-input"
                placeholder="Search name, description, or CSS"
                on:input=move |ev| {
                    state.update(|s| s.apply(QueryEvent::SearchChanged(event_target_value(&ev))));
                }
            />
            <span class="element-count">
                {move || format!("Elements: {}", rows.get().len())}
            </span>
        </div>
        <FilterChips statuses=statuses state=state />
        <ElementsTable rows=rows state=state />
    }
}

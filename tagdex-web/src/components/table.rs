//! The element table: sortable headers and status-classed rows.

use leptos::prelude::*;
use tagdex_core::{ElementRecord, QueryEvent, QueryState, SortKey};

/// Column headers in table order.
const COLUMNS: [(SortKey, &str); 4] = [
    (SortKey::Name, "Element"),
    (SortKey::Description, "Description"),
    (SortKey::DefaultCss, "Default CSS"),
    (SortKey::Status, "Status"),
];

/// Sortable table over the derived view.
///
/// No keyed diffing: every derivation clears the body and rebuilds all
/// rows in view order.
#[component]
pub fn ElementsTable(rows: Memo<Vec<ElementRecord>>, state: RwSignal<QueryState>) -> impl IntoView {
    view! {
        <table class="elements-table">
            <thead>
                <tr>
                    {COLUMNS
                        .iter()
                        .map(|&(key, label)| view! {
                            <SortHeader key=key label=label state=state />
                        })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {move || rows.get().into_iter().map(element_row).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// One sortable column header; the active key carries an asc/desc marker.
#[component]
fn SortHeader(key: SortKey, label: &'static str, state: RwSignal<QueryState>) -> impl IntoView {
    let class = move || {
        state.with(|s| match s.sort.key {
            Some(active) if active == key => {
                if s.sort.ascending {
                    "sortable sort-asc"
                } else {
                    "sortable sort-desc"
                }
            }
            _ => "sortable",
        })
    };

    view! {
        <th
            class=class
            data-sort-key=key.as_str()
            on:click=move |_| state.update(|s| s.apply(QueryEvent::SortToggled(key)))
        >
            {label}
        </th>
    }
}

// Description is inserted as provided: the dataset is an
// author-controlled resource, not user input.
fn element_row(record: ElementRecord) -> impl IntoView {
    view! {
        <tr class=format!("status-{}", record.status)>
            <td>
                <a class="tag-code" href=record.spec_url target="_blank" rel="noopener">
                    {format!("<{}>", record.name)}
                </a>
            </td>
            <td>
                <span class="description" inner_html=record.description></span>
            </td>
            <td>
                <pre class="default-css">{record.default_css}</pre>
            </td>
            <td>
                <span class="status-label">{record.status.clone()}</span>
            </td>
        </tr>
    }
}

//! The view derivation pipeline: search, then filter, then sort.

use std::cmp::Ordering;

use crate::types::{ElementRecord, QueryState, StatusFilter};

/// Derive the view list from the full dataset.
///
/// Always starts from `all`, never from a previous view - composing on
/// an already-filtered list would compound stale filters. The search
/// query matches as a case-insensitive substring across name,
/// description, and default CSS; the status filter matches exactly; the
/// sort (when a key is set) is a stable, case-insensitive ordering.
pub fn derive_view(all: &[ElementRecord], state: &QueryState) -> Vec<ElementRecord> {
    let mut view: Vec<ElementRecord> = all.to_vec();

    let query = state.query.trim().to_lowercase();
    if !query.is_empty() {
        view.retain(|record| {
            record.name.to_lowercase().contains(&query)
                || record.description.to_lowercase().contains(&query)
                || record.default_css.to_lowercase().contains(&query)
        });
    }

    if let StatusFilter::Only(status) = &state.filter {
        view.retain(|record| record.status == *status);
    }

    if let Some(key) = state.sort.key {
        view.sort_by(|a, b| {
            let ordering = compare_ci(key.field(a), key.field(b));
            if state.sort.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }

    view
}

// Unicode lowercase + code-point order stands in for locale collation.
fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

//! # tagdex-core
//!
//! Data model and query pipeline for the tagdex HTML element reference
//! table.
//!
//! This crate holds everything about the table that does not touch a
//! browser: the element record type, dataset decoding with status
//! normalization, the search/filter/sort pipeline, and the light/dark
//! theme model. The companion `tagdex-web` crate wires these into a
//! Leptos page.
//!
//! ## Features
//!
//! - **DOM-free** - the whole state machine compiles and tests natively
//! - **Pure derivation** - the view is a function of (dataset, state),
//!   recomputed from the full dataset on every change
//! - **Serializable** - records decode straight from the `tags.json`
//!   wire format via serde
//!
//! ## Quick Start
//!
//! ```rust
//! use tagdex_core::{derive_view, parse_dataset, QueryEvent, QueryState, SortKey};
//!
//! let records = parse_dataset(
//!     r#"[
//!         {"name": "div", "description": "Generic block container",
//!          "defaultCSS": "display: block;", "specURL": "https://developer.mozilla.org/docs/Web/HTML/Element/div"},
//!         {"name": "span", "description": "Generic inline container",
//!          "defaultCSS": "display: inline;", "specURL": "https://developer.mozilla.org/docs/Web/HTML/Element/span"}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let mut state = QueryState::default();
//! state.apply(QueryEvent::SearchChanged("block".into()));
//! state.apply(QueryEvent::SortToggled(SortKey::Name));
//!
//! let view = derive_view(&records, &state);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].name, "div");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dataset;
pub mod query;
pub mod theme;
pub mod types;

pub use dataset::{parse_dataset, DatasetError};
pub use query::derive_view;
pub use theme::Theme;
pub use types::{ElementRecord, QueryEvent, QueryState, SortKey, SortState, StatusFilter};

//! Leptos components for the element reference page.
//!
//! ```text
//! App
//! ├── ThemeToggle
//! └── ElementsBrowser
//!     ├── search box + live count
//!     ├── FilterChips
//!     └── ElementsTable
//!         ├── SortHeader (per column)
//!         └── rows (rebuilt wholesale per derivation)
//! ```

mod browser;
mod filters;
mod table;
mod theme_toggle;

pub use browser::ElementsBrowser;
pub use filters::FilterChips;
pub use table::ElementsTable;
pub use theme_toggle::ThemeToggle;

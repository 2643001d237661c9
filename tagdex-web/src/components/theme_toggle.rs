//! Theme toggle control.

use leptos::prelude::*;

use crate::theme;

/// Button flipping between light and dark. Label and icon always
/// describe the switch it will perform next, not the current theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (current, set_current) = signal(theme::load_preference());

    let toggle = move |_| {
        let next = current.get().complement();
        theme::apply(next);
        set_current.set(next);
    };

    view! {
        <button class="theme-toggle" on:click=toggle>
            <span class="theme-toggle-icon">{move || current.get().toggle_icon()}</span>
            <span class="theme-toggle-label">{move || current.get().toggle_label()}</span>
        </button>
    }
}

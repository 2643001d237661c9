// tagdex — HTML element reference table, Leptos 0.8 CSR edition.

mod components;
mod fetch;
mod theme;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tagdex_core::ElementRecord;

use components::{ElementsBrowser, ThemeToggle};

/// Relative path of the dataset resource.
const DATA_URL: &str = "tags.json";

/// Dataset lifecycle. Interactive controls exist only once `Ready`, so
/// no search/filter/sort event can fire against an unloaded dataset.
#[derive(Clone)]
enum LoadPhase {
    Loading,
    Ready(Vec<ElementRecord>),
    Failed,
}

fn main() {
    console_error_panic_hook::set_once();
    theme::apply(theme::load_preference());
    leptos::mount::mount_to_body(App);
}

// ============================================
// App shell
// ============================================
#[component]
fn App() -> impl IntoView {
    let (phase, set_phase) = signal(LoadPhase::Loading);

    // One load per page lifetime; no retry, a full reload is the only
    // recovery path.
    spawn_local(async move {
        match fetch::load_dataset(DATA_URL).await {
            Ok(records) => set_phase.set(LoadPhase::Ready(records)),
            Err(err) => {
                web_sys::console::error_1(&format!("tagdex: {err}").into());
                set_phase.set(LoadPhase::Failed);
            }
        }
    });

    view! {
        <header class="page-header">
            <div class="page-title">
                <h1>"tagdex"</h1>
                <p class="tagline">"HTML element reference"</p>
            </div>
            <ThemeToggle />
        </header>
        <main class="container">
            {move || match phase.get() {
                LoadPhase::Loading => view! {
                    <p class="load-state">"Loading\u{2026}"</p>
                }.into_any(),
                LoadPhase::Failed => view! {
                    <p class="load-state element-count">"Elements: failed to load"</p>
                }.into_any(),
                LoadPhase::Ready(records) => view! {
                    <ElementsBrowser records=records />
                }.into_any(),
            }}
        </main>
    }
}

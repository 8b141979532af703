use leptos::prelude::*;
use truthlens_core::InputMode;

use crate::state::AppState;

#[component]
pub fn ModeSelector() -> impl IntoView {
    let state = expect_context::<AppState>();
    let current = move || state.session.with(|s| s.mode());

    let buttons: Vec<_> = InputMode::ALL
        .iter()
        .map(|&mode| {
            let is_active = move || current() == mode;
            view! {
                <button
                    class=move || if is_active() { "mode-btn active" } else { "mode-btn" }
                    data-mode=mode.as_str()
                    disabled=move || state.is_running()
                    on:click=move |_| state.select_mode(mode)
                >
                    {mode.label()}
                </button>
            }
        })
        .collect();

    view! {
        <div class="mode-selector">{buttons}</div>
    }
}

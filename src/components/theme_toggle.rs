use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <button
            class="theme-toggle"
            title=move || format!("Switch to {} theme", state.theme.get().toggled())
            on:click=move |_| state.toggle_theme()
        >
            {move || state.theme.get().icon()}
        </button>
    }
}

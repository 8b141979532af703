use leptos::prelude::*;
use truthlens_core::runner::CancelToken;
use truthlens_core::AnalyzerConfig;

use crate::browser;
use crate::components::input_panel::InputPanel;
use crate::components::mode_selector::ModeSelector;
use crate::components::progress::ProgressView;
use crate::components::results::ResultsView;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AnalyzerConfig::from_query(&browser::page_query());
    log::info!("TruthLens ({} variant)", config.variant);
    let theme_toggle = config.theme_toggle;

    let cancel = CancelToken::new();
    let state = AppState::new(config, cancel.clone());
    provide_context(state);
    on_cleanup(move || cancel.cancel());

    if theme_toggle {
        Effect::new(move |_| browser::apply_theme(state.theme.get()));
    }

    view! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-title">"TruthLens"</h1>
                <span class="app-subtitle">"Authenticity & credibility check"</span>
                {theme_toggle.then(|| view! { <ThemeToggle /> })}
            </header>
            <main class="main">
                <ModeSelector />
                <InputPanel />
                <AnalyzeButton />
                <ProgressView />
                <ResultsView />
            </main>
        </div>
    }
}

#[component]
fn AnalyzeButton() -> impl IntoView {
    let state = expect_context::<AppState>();
    let running = move || state.is_running();

    view! {
        <button
            class="analyze-btn"
            disabled=running
            on:click=move |_| state.start_analysis()
        >
            {move || if running() { "Analyzing..." } else { "Analyze" }}
        </button>
    }
}

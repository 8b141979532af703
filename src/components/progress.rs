use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub fn ProgressView() -> impl IntoView {
    let state = expect_context::<AppState>();

    move || {
        let progress = state.progress.get()?;
        let view = match progress.percent {
            None => view! {
                <div class="loading-spinner active">
                    <div class="spinner"></div>
                    <span class="loading-text">"Analyzing content..."</span>
                </div>
            }
            .into_any(),
            Some(pct) => view! {
                <div class="progress-steps active">
                    <div class="progress-caption">{progress.caption.unwrap_or_default()}</div>
                    <div class="progress-track">
                        <div class="progress-fill" style=format!("width: {pct}%")></div>
                    </div>
                    <div class="progress-percent">{format!("{pct}%")}</div>
                </div>
            }
            .into_any(),
        };
        Some(view)
    }
}

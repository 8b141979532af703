use leptos::prelude::*;
use truthlens_core::present::{present, AssessmentView, ListRow};

use crate::browser;
use crate::state::AppState;

#[component]
pub fn ResultsView() -> impl IntoView {
    let state = expect_context::<AppState>();
    let outcome_view = Memo::new(move |_| {
        state.session.with(|s| {
            s.outcome()
                .map(|outcome| state.config.with_value(|config| present(outcome, config)))
        })
    });
    let section_ref = NodeRef::<leptos::html::Section>::new();

    Effect::new(move |_| {
        if let Some(el) = section_ref.get() {
            browser::scroll_into_view(&el);
        }
    });

    move || {
        outcome_view.get().map(|outcome| {
            view! {
                <section class="results-section active" node_ref=section_ref>
                    <div class="results-grid">
                        <AssessmentCard axis="authenticity" assessment=outcome.authenticity />
                        <AssessmentCard axis="credibility" assessment=outcome.credibility />
                    </div>
                    <div class="results-actions">
                        <button class="secondary-btn" on:click=move |_| state.export_report()>
                            "Export report"
                        </button>
                        <button class="secondary-btn" on:click=move |_| state.new_analysis()>
                            "New analysis"
                        </button>
                    </div>
                </section>
            }
        })
    }
}

#[component]
fn AssessmentCard(axis: &'static str, assessment: AssessmentView) -> impl IntoView {
    let state = expect_context::<AppState>();
    let revealed = state.bars_revealed;
    let bar_width = assessment.bar_width();
    let bar_style = move || {
        if revealed.get() {
            format!("width: {bar_width}")
        } else {
            "width: 0%".to_string()
        }
    };
    let verdict_css = assessment.verdict_css();
    let confidence_label = assessment.confidence_label();
    let bar_class = format!("confidence-bar {}", assessment.class.css_class());
    let AssessmentView { title, verdict, evidence, limitations, .. } = assessment;
    let has_limitations = !limitations.is_empty();

    view! {
        <div class=format!("result-card {axis}")>
            <h2 class="result-title">{title}</h2>
            <div class="verdict">
                <span class="verdict-label">"Verdict"</span>
                <span class=verdict_css>{verdict}</span>
            </div>
            <div class="confidence">
                <div class="confidence-header">
                    <span>"Confidence"</span>
                    <span class="confidence-value">{confidence_label}</span>
                </div>
                <div class="confidence-track">
                    <div class=bar_class style=bar_style></div>
                </div>
            </div>
            <h3 class="list-title">"Evidence"</h3>
            <ul class="evidence-list">{rows(evidence)}</ul>
            {has_limitations.then(|| view! {
                <h3 class="list-title">"Limitations"</h3>
                <ul class="limitations-list">{rows(limitations)}</ul>
            })}
        </div>
    }
}

fn rows(rows: Vec<ListRow>) -> Vec<impl IntoView> {
    rows.into_iter()
        .map(|row| {
            let class = if row.polarity_class.is_empty() {
                "list-item".to_string()
            } else {
                format!("list-item {}", row.polarity_class)
            };
            let style = row.style();
            view! { <li class=class style=style>{row.text}</li> }
        })
        .collect()
}

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use truthlens_core::format::format_file_size;
use truthlens_core::InputMode;

use crate::state::AppState;

#[component]
pub fn InputPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    // Memo so typing doesn't rebuild the text area
    let mode = Memo::new(move |_| state.session.with(|s| s.mode()));

    view! {
        <div class="input-panel">
            {move || match mode.get() {
                InputMode::Text => view! { <TextInput /> }.into_any(),
                file_mode => view! { <FileDropZone mode=file_mode /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn TextInput() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="input-container active" data-input="text">
            <textarea
                class="text-input"
                placeholder="Paste a claim, post or article to check..."
                rows="8"
                prop:value=move || state.session.with(|s| s.text().to_string())
                disabled=move || state.is_running()
                on:input=move |ev| state.set_text(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
fn FileDropZone(mode: InputMode) -> impl IntoView {
    let state = expect_context::<AppState>();
    let drag_over = RwSignal::new(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        drag_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        if state.is_running() {
            return;
        }

        let Some(dt) = ev.data_transfer() else { return };
        let Some(file_list) = dt.files() else { return };
        if let Some(file) = file_list.get(0) {
            state.stage_file(file);
        }
    };

    let on_browse_click = move |_: web_sys::MouseEvent| {
        if let Some(input) = file_input_ref.get() {
            let el: &HtmlInputElement = input.as_ref();
            el.click();
        }
    };

    let on_file_input_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let input: HtmlInputElement = target.unchecked_into();
        let Some(file_list) = input.files() else { return };
        if let Some(file) = file_list.get(0) {
            state.stage_file(file);
        }

        // Reset the input so the same file can be re-selected
        input.set_value("");
    };

    let staged = Memo::new(move |_| {
        state
            .session
            .with(|s| s.staged().map(|f| (f.name.clone(), format_file_size(f.size))))
    });

    view! {
        <div class="input-container active" data-input=mode.as_str()>
            <div
                class=move || if drag_over.get() { "drop-zone drag-over" } else { "drop-zone" }
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <input
                    node_ref=file_input_ref
                    type="file"
                    accept=mode.accept_attr()
                    style="display:none"
                    on:change=on_file_input_change
                />
                <div class="drop-hint">
                    {drop_hint(mode)}
                    <button class="upload-btn" on:click=on_browse_click disabled=move || state.is_running()>
                        "Browse files"
                    </button>
                </div>
            </div>
            {move || staged.get().map(|(name, size)| view! {
                <div class="preview active">
                    <MediaPreview mode=mode />
                    <div class="file-info">
                        <div class="file-name">{name}</div>
                        <div class="file-size">{size}</div>
                    </div>
                    <button
                        class="remove-file-btn"
                        title="Remove file"
                        disabled=move || state.is_running()
                        on:click=move |_| state.remove_file()
                    >
                        "\u{00D7}"
                    </button>
                </div>
            })}
        </div>
    }
}

fn drop_hint(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Image => "Drop an image here",
        InputMode::Audio => "Drop an audio file here",
        InputMode::Video => "Drop a video here",
        InputMode::Text => "",
    }
}

#[component]
fn MediaPreview(mode: InputMode) -> impl IntoView {
    let state = expect_context::<AppState>();

    move || {
        let url = state.preview_url.get()?;
        match mode {
            InputMode::Image => Some(view! { <img class="preview-media" src=url alt="Selected image" /> }.into_any()),
            InputMode::Video => Some(view! { <video class="preview-media" src=url controls=true></video> }.into_any()),
            _ => None,
        }
    }
}

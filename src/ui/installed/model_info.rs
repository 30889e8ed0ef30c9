use dioxus::prelude::*;

use crate::app::AppState;

/// Details of the selected installed model
#[component]
pub fn ModelInfo() -> Element {
    let app_state = use_context::<AppState>();
    let info = app_state.model_info.read().clone();

    rsx! {
        div {
            class: "pane",
            span { class: "pane-title", "Model Information" }
            pre { class: "pane-body", "{info}" }
        }
    }
}

#[component]
pub fn TestResults() -> Element {
    let app_state = use_context::<AppState>();
    let results = app_state.test_results.read().clone();

    rsx! {
        div {
            class: "pane",
            span { class: "pane-title", "Test Results" }
            pre { class: "pane-body", "{results}" }
        }
    }
}

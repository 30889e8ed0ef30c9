//! Installed models panel

mod model_info;

use dioxus::prelude::*;

use crate::app::AppState;
use model_info::{ModelInfo, TestResults};

#[component]
pub fn InstalledPanel() -> Element {
    let app_state = use_context::<AppState>();

    let models = app_state.installed.read().clone();
    let selected = app_state.selected_installed.read().clone();

    let handle_refresh = {
        let app_state = app_state.clone();
        move |_| app_state.refresh_installed()
    };
    let handle_test = {
        let app_state = app_state.clone();
        move |_| app_state.test_selected()
    };
    let handle_remove = {
        let app_state = app_state.clone();
        move |_| app_state.request_remove()
    };

    rsx! {
        section {
            class: "panel",

            div {
                class: "panel-header",
                span { class: "panel-title", "Installed Models" }
                button {
                    class: "btn-ghost",
                    onclick: handle_refresh,
                    title: "Reload the installed models",
                    "Refresh"
                }
            }

            div {
                class: "model-list",

                if models.is_empty() {
                    div { class: "empty-hint", "No models installed" }
                } else {
                    {models.into_iter().map(|model| {
                        let is_selected = selected.as_deref() == Some(model.name.as_str());
                        let row_class = if is_selected { "list-row selected" } else { "list-row" };
                        let label = model.list_label();
                        let name = model.name.clone();
                        let app_state = app_state.clone();

                        rsx! {
                            div {
                                key: "{model.name}",
                                class: "{row_class}",
                                onclick: move |_| app_state.select_installed(name.clone()),
                                "{label}"
                            }
                        }
                    })}
                }
            }

            ModelInfo {}
            TestResults {}

            div {
                class: "button-row",
                button { class: "btn-primary", onclick: handle_test, "Test Model" }
                button { class: "btn-danger", onclick: handle_remove, "Remove Model" }
            }
        }
    }
}

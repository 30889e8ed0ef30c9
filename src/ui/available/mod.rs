//! Available models panel
//!
//! Search box, sortable catalog table and the description of the selected entry.

mod catalog_table;

use dioxus::prelude::*;

use crate::app::AppState;
use catalog_table::CatalogTable;

#[component]
pub fn AvailablePanel() -> Element {
    let app_state = use_context::<AppState>();
    let mut search = app_state.search;

    let selected = *app_state.selected_available.read();
    let description = selected
        .map(|entry| entry.description_text())
        .unwrap_or_default();

    let handle_install = {
        let app_state = app_state.clone();
        move |_| app_state.request_install()
    };

    rsx! {
        section {
            class: "panel",

            div {
                class: "panel-header",
                span { class: "panel-title", "Available Models" }
            }

            div {
                class: "search-row",
                label { class: "search-label", "Search:" }
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Filter by name, family or description",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }

            CatalogTable {}

            div {
                class: "pane",
                span { class: "pane-title", "Model Description" }
                pre { class: "pane-body", "{description}" }
            }

            div {
                class: "button-row",
                button { class: "btn-primary", onclick: handle_install, "Install Selected Model" }
            }
        }
    }
}

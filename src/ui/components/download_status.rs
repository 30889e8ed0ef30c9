use dioxus::prelude::*;

use crate::app::AppState;

/// Progress bar shown while a pull is running
#[component]
pub fn DownloadStatus() -> Element {
    let app_state = use_context::<AppState>();

    let Some(view) = app_state.download.read().clone() else {
        return rsx! {};
    };

    let width = format!("{:.0}", view.percent.clamp(0.0, 100.0));

    rsx! {
        div {
            class: "download",

            div {
                class: "download-header",
                span { class: "download-model", "Installing {view.model}" }
                span { class: "download-label", "{view.label}" }
            }

            div {
                class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "width: {width}%;",
                }
            }

            span { class: "download-detail", "{view.detail}" }
        }
    }
}

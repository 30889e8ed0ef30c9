use dioxus::prelude::*;

use crate::app::{AppState, NoticeLevel};

/// Message box for success, warning and error notices
#[component]
pub fn NoticeDialog() -> Element {
    let app_state = use_context::<AppState>();
    let mut notice = app_state.notice;

    let Some(current) = notice.read().clone() else {
        return rsx! { div {} };
    };

    let accent = match current.level {
        NoticeLevel::Info => "notice-info",
        NoticeLevel::Warning => "notice-warning",
        NoticeLevel::Error => "notice-error",
    };

    rsx! {
        div {
            class: "backdrop",

            div {
                class: "dialog {accent}",

                div {
                    class: "dialog-header",
                    h2 { class: "dialog-title", "{current.title}" }
                }

                p { class: "dialog-body", "{current.body}" }

                div {
                    class: "dialog-footer",
                    button {
                        class: "btn-primary",
                        onclick: move |_| notice.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}

//! Confirmation dialog UI component
//!
//! Asks before removing or installing a model

use dioxus::prelude::*;

use crate::app::{AppState, PendingAction};

#[component]
pub fn ConfirmDialog() -> Element {
    let app_state = use_context::<AppState>();
    let mut pending = app_state.pending;

    let Some(action) = pending.read().clone() else {
        return rsx! { div {} };
    };

    let title = action.title();
    let prompt = action.prompt();
    let confirm_label = match action {
        PendingAction::Remove(_) => "Remove",
        PendingAction::Install(_) => "Install",
    };
    let confirm_class = match action {
        PendingAction::Remove(_) => "btn-danger",
        PendingAction::Install(_) => "btn-primary",
    };

    let handle_confirm = {
        let app_state = app_state.clone();
        move |_| app_state.confirm(action.clone())
    };

    rsx! {
        div {
            class: "backdrop",

            div {
                class: "dialog",

                div {
                    class: "dialog-header",
                    h2 { class: "dialog-title", "{title}" }
                }

                p { class: "dialog-body", "{prompt}" }

                div {
                    class: "dialog-footer",
                    button {
                        class: "btn-ghost",
                        onclick: move |_| pending.set(None),
                        "Cancel"
                    }
                    button {
                        class: "{confirm_class}",
                        onclick: handle_confirm,
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::app::{AppState, ServerState};

#[component]
pub fn StatusBar() -> Element {
    let app_state = use_context::<AppState>();
    let status = app_state.status.read().clone();

    let (server_class, server_text) = match &*app_state.server.read() {
        ServerState::Unknown => ("server-dot", "Connecting...".to_string()),
        ServerState::Online(version) if version.is_empty() => {
            ("server-dot online", "Ollama online".to_string())
        }
        ServerState::Online(version) => ("server-dot online", format!("Ollama {}", version)),
        ServerState::Offline(reason) => ("server-dot offline", reason.clone()),
    };

    rsx! {
        footer {
            class: "status-bar",
            span { class: "status-text", "{status}" }
            span {
                class: "server-state",
                title: "{server_text}",
                span { class: "{server_class}" }
                "{server_text}"
            }
        }
    }
}

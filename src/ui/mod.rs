//! UI components for Llama Herder
//!
//! This module contains all user interface components built with Dioxus.

pub mod available;
pub mod components;
pub mod installed;

use dioxus::prelude::*;

use crate::app::APP_TITLE;
use crate::ui::available::AvailablePanel;
use crate::ui::components::{ConfirmDialog, DownloadStatus, NoticeDialog, StatusBar};
use crate::ui::installed::InstalledPanel;

const STYLES: &str = include_str!("style.css");

/// Window layout: two panels side by side, download area and status bar below
#[component]
pub fn Layout() -> Element {
    rsx! {
        style { "{STYLES}" }

        div {
            class: "app-shell",

            h1 { class: "app-title", "{APP_TITLE}" }

            div {
                class: "panels",
                InstalledPanel {}
                AvailablePanel {}
            }

            DownloadStatus {}
            StatusBar {}
        }

        ConfirmDialog {}
        NoticeDialog {}
    }
}

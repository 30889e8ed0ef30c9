//! Shared dialogs and status widgets

mod confirm_dialog;
mod download_status;
mod notice_dialog;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use download_status::DownloadStatus;
pub use notice_dialog::NoticeDialog;
pub use status_bar::StatusBar;

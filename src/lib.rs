//! Llama Herder Library
//!
//! Core library for the Llama Herder desktop application, a manager for the
//! models installed on a local Ollama server.

pub mod app;
pub mod catalog;
pub mod manager;
pub mod ollama;
pub mod types;
pub mod ui;

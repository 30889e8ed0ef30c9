//! Shared type definitions
//!
//! This module contains the data types exchanged between the Ollama client, the
//! model manager and the UI.

pub mod config;
pub mod model;
pub mod pull;

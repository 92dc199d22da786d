//! Chatsift: chat transcript cleanup and analysis relay.
//!
//! The core is the `normalizer` module: it turns a pasted chat export into a
//! clean, line-per-message corpus. Everything else is glue around it. The CLI
//! runs one-shot cleanup, and the HTTP API exposes the same transform plus a
//! relay that forwards cleaned text to an external analysis service.

pub mod analysis;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod global;
pub mod normalizer;

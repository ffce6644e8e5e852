//! Guest review board.
//!
//! Visitors leave a star rating and a comment. Reviews are kept in the
//! browser's local storage under a single key and listed newest first.
//! Nothing leaves the browser.

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod render;
pub mod store;
pub mod utils;

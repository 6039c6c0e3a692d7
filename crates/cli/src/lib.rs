//! `heroes-cli` library crate.
//!
//! Terminal presentation of the hero catalog: list and detail views,
//! the interactive browser, and argument/config parsing. The binary
//! entrypoint lives in `main.rs`.

pub mod app;
pub mod args;
pub mod browse;
pub mod config;
pub mod state;
pub mod views;

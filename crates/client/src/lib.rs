//! Hero catalog HTTP adapter.
//!
//! Implements [`heroes_core::ports::HeroRepository`] over the public REST
//! API, with environment-driven configuration and user-facing error
//! messages for transport and status failures.

pub mod api;
pub mod config;
pub mod error;

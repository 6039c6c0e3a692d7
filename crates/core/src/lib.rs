//! `heroes-core` -- domain layer of the hero catalog.
//!
//! Models, payload validation, pagination and display helpers are pure
//! logic with no I/O. The [`ports::HeroRepository`] trait is the seam the
//! HTTP adapter plugs into, and [`service::HeroService`] is the
//! application-layer wrapper the views call.

pub mod display;
pub mod error;
pub mod hero;
pub mod pagination;
pub mod ports;
pub mod service;
pub mod validator;

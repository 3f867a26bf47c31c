//! Sports League API Library
//!
//! This library provides the sports league domain model (players, teams
//! and leagues), an in-memory team repository, and the HTTP adapter that
//! exposes them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;

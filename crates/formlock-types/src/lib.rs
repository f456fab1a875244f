//! Shared types, collaborator traits, and error types for Formlock.
//!
//! This crate contains the foundational types shared between the main
//! library and the storage adapter implementations. Extracting these into a
//! separate crate allows adapters to compile without pulling in the
//! resolution logic.

pub mod auth_adapter;
pub mod config_adapter;
pub mod error;
pub mod prelude;
pub mod translate;

// vim: ts=4

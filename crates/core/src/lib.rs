//! Samaj Core - Shared domain types.
//!
//! This crate provides common types used across all Samaj Portal components:
//! - `portal` - JSON API server for the community website and admin back office
//! - `cli` - Command-line tools for migrations and admin account management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, email addresses, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Samaj Portal library.
//!
//! This crate provides the portal backend as a library, allowing the
//! server binary, the provisioning CLI, and tests to share the same code.
//!
//! # Architecture
//!
//! - JSON API served by Axum; the public website and the admin back
//!   office are a separate React frontend
//! - `PostgreSQL` via sqlx for the member registry, community boards,
//!   and admin accounts
//! - Stateless signed bearer tokens for admin sessions; account state is
//!   re-read from the database on every authenticated request

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

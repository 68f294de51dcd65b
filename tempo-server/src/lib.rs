//! Server crate for the `tempo` weather facade.
//!
//! This crate focuses on:
//! - Parsing CLI arguments (`serve`, `configure`)
//! - The HTTP surface (`/weather`, `/forecast`, `/health`)
//! - Process startup and logging

pub mod cli;
pub mod http;

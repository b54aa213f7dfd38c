//! # dotenvx
//!
//! Loads layered `.env` files on top of a snapshot of the process environment.
//!
//! A dotted file name such as `app.env.production.api` expands into a chain of
//! files (`app.env`, `app.env.production`, `app.env.production.api`) that are
//! merged from least to most specific. Entries preceded by a `# LOCK` comment
//! cannot be overridden by later layers.

pub mod cli;
pub mod constants;
pub mod core;
pub mod dev_utils;
pub mod models;
pub mod system;

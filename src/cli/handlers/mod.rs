// src/cli/handlers/mod.rs

//! One module per thing the binary can do with a resolved environment.

pub mod commons;
pub mod exec;
pub mod plan;
pub mod print;

// src/core/mod.rs

//! The layered override resolution engine.

pub mod chain;
pub mod diff;
pub mod loader;
pub mod merge;
pub mod parser;
pub mod paths;

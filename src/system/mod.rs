//! # System Interaction Layer
//!
//! The boundary between the resolution engine and the operating system.
//!
//! ## Modules
//!
//! - **`environ`**: Takes the point-in-time snapshot of the process environment
//!   that every load starts from.
//! - **`executor`**: Runs the user's command with the merged map as its entire
//!   environment (`exec` on Unix, spawn-and-wait elsewhere).
//! - **`settings`**: Loads the optional `config.toml` and combines it with the
//!   command-line flags.

pub mod environ;
pub mod executor;
pub mod settings;

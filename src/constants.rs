// src/constants.rs

//! Names and markers shared across the crate.

/// The env file loaded when none is given on the command line or in the config.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Prefix of a full-line comment that locks the next parsed entry.
pub const LOCK_MARKER: &str = "# LOCK";

/// Prefix that marks a line as a full-line comment (after trimming).
pub const COMMENT_PREFIX: char = '#';

/// The dotted segment that starts an override chain (`app.env.production`).
pub const CHAIN_ANCHOR: &str = "env";

/// The name of the directory holding the user configuration (inside the system config dir).
pub const CONFIG_DIR_NAME: &str = "dotenvx";

/// The name of the user configuration file (inside the config directory).
pub const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable that overrides the location of the config directory.
pub const CONFIG_DIR_ENV_VAR: &str = "DOTENVX_CONFIG_DIR";

//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the REST resource path so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "roster";

/// Crate version, injected by cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (picked up from the working directory).
pub const CONFIG_FILENAME: &str = ".roster.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "roster";

/// Collection path of the user resource on the backend.
pub const USERS_PATH: &str = "/users";

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Request timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;


// ── Environment variable names ──────────────────────────────────────

pub const ENV_API_URL: &str = "ROSTER_API_URL";
pub const ENV_FORMAT: &str = "ROSTER_FORMAT";
pub const ENV_TIMEOUT_SECS: &str = "ROSTER_TIMEOUT_SECS";

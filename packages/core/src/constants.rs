use std::env;
use std::path::PathBuf;

/// Base URL used when no API location is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Get the path to the CMS console directory (~/.cms)
pub fn cms_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".cms")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cms")
    }
}

/// Get the path to the persisted session file (~/.cms/session.toml)
pub fn session_file() -> PathBuf {
    cms_dir().join("session.toml")
}

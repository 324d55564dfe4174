// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names read by the CMS console

// API Gateway Configuration
pub const CMS_API_BASE_URL: &str = "CMS_API_BASE_URL";
pub const CMS_API_TIMEOUT_MS: &str = "CMS_API_TIMEOUT_MS";
pub const CMS_API_RETRY_ATTEMPTS: &str = "CMS_API_RETRY_ATTEMPTS";

// Session Persistence
pub const CMS_SESSION_FILE: &str = "CMS_SESSION_FILE";

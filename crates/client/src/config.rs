use std::path::PathBuf;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (default: `http://localhost:8080/api`).
    pub api_url: String,
    /// Start in fixture (mock) mode (default: `false`).
    pub mock_mode: bool,
    /// Path of the durable session file (default:
    /// `orgdesk-session.json`).
    pub session_file: PathBuf,
}

/// Default API base URL.
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default durable session file path.
const DEFAULT_SESSION_FILE: &str = "orgdesk-session.json";

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `ORGDESK_API_URL`      | `http://localhost:8080/api` |
    /// | `ORGDESK_MOCK`         | `false`                     |
    /// | `ORGDESK_SESSION_FILE` | `orgdesk-session.json`      |
    pub fn from_env() -> Self {
        let api_url = std::env::var("ORGDESK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let mock_mode = std::env::var("ORGDESK_MOCK")
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let session_file = std::env::var("ORGDESK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Self {
            api_url,
            mock_mode,
            session_file,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            mock_mode: false,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

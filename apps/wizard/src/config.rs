use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Every variable has a usable default — a bare `wizard` invocation works.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the draft envelope is persisted between sessions.
    pub draft_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            draft_path: std::env::var("CV_DRAFT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cv_draft.json")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

use std::env;

/// Default cap on call numbers per shelf-order request.
pub const DEFAULT_MAX_BATCH: usize = 1000;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// JSON classification table replacing the built-in one
    pub classification_table: Option<String>,
    /// Add the title Cutter as second Cutter when generating
    pub title_cutter: bool,
    pub max_batch: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (environment, test fixtures).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            classification_table: lookup("LCC_CLASSIFICATION_TABLE")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            title_cutter: lookup("LCC_TITLE_CUTTER")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
            max_batch: lookup("LCC_MAX_BATCH")
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_MAX_BATCH),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

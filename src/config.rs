/// Application configuration
///
/// In debug builds a `.env` file is loaded first; in all builds the
/// environment wins over the defaults.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the similarity-search service
    pub api_base_url: String,
}

const DEFAULT_API_URL: &str = "http://localhost:8080";

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Config: loaded .env file");
        }

        Self::from_env()
    }

    fn from_env() -> Self {
        let api_base_url = base_url_from(std::env::var("ESMFINDER_API_URL").ok());

        tracing::info!("Config: similarity service at {}", api_base_url);

        Self { api_base_url }
    }
}

/// Normalize the configured base URL: blank or missing values fall back to
/// the default, trailing slashes are trimmed so endpoint paths join cleanly.
fn base_url_from(raw: Option<String>) -> String {
    raw.filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

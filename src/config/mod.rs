use std::env;
use std::path::PathBuf;

const DEFAULT_GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";
const DEFAULT_POLYTAPE_API_URL: &str = "https://api.polytape.xyz";
const DEFAULT_SAMPLE_DIR: &str = "data_samples";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gamma_api_url: String,
    pub polytape_api_url: String,

    // PolyTape API key (optional — required for the simulation service)
    pub polytape_api_key: Option<String>,

    /// Directory the sample tap mirrors responses into.
    pub sample_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gamma_api_url = base_url(
            lookup("GAMMA_API_URL").unwrap_or_else(|| DEFAULT_GAMMA_API_URL.into()),
        )?;
        let polytape_api_url = base_url(
            lookup("POLYTAPE_API_URL").unwrap_or_else(|| DEFAULT_POLYTAPE_API_URL.into()),
        )?;

        Ok(Self {
            gamma_api_url,
            polytape_api_url,
            polytape_api_key: lookup("POLYTAPE_API_KEY")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            sample_dir: lookup("SAMPLE_DIR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SAMPLE_DIR.into())
                .into(),
        })
    }

    /// Returns true if the PolyTape API key is configured.
    pub fn has_polytape_auth(&self) -> bool {
        self.polytape_api_key.is_some()
    }
}

fn base_url(raw: String) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        anyhow::bail!("base URL must not be empty");
    }
    Ok(trimmed.to_string())
}

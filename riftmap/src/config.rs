use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse `CORS_ORIGINS`.
/// Format: comma-separated origins, e.g. `http://localhost:5173,https://riftmap.gg`.
/// A single `*` allows any origin.
fn parse_cors_origins() -> Vec<String> {
    match env::var("CORS_ORIGINS") {
        Ok(val) if !val.trim().is_empty() => val
            .split(',')
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect(),
        _ => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
    }
}

const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

pub const DEFAULT_RIOT_BASE_URL: &str = "https://europe.api.riotgames.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub riot: RiotConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

/// Upstream match-data API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RiotConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Retries applied to `429 Too Many Requests` only.
    pub max_retries: u32,
}

/// Location of the pre-computed projection artifacts.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    pub dir: PathBuf,
    pub scaler_file: String,
    pub model_file: String,
    pub pro_coords_file: String,
}

impl AssetsConfig {
    pub fn scaler_path(&self) -> PathBuf {
        self.dir.join(&self.scaler_file)
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(&self.model_file)
    }

    pub fn pro_coords_path(&self) -> PathBuf {
        self.dir.join(&self.pro_coords_file)
    }

    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Default for RiotConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_RIOT_BASE_URL.to_string(),
            timeout_secs: 10,
            max_retries: 2,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            scaler_file: "scaler.json".to_string(),
            model_file: "embedding-model.json".to_string(),
            pro_coords_file: "pro-coords.json".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let riot_defaults = RiotConfig::default();
        let asset_defaults = AssetsConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("RIFTMAP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("RIFTMAP_PORT", 8000),
                cors_origins: parse_cors_origins(),
            },
            riot: RiotConfig {
                api_key: env::var("RIOT_API_KEY")
                    .ok()
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty()),
                base_url: env::var("RIOT_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(riot_defaults.base_url),
                timeout_secs: parse_env_or("RIOT_TIMEOUT_SECS", riot_defaults.timeout_secs),
                max_retries: parse_env_or("RIOT_MAX_RETRIES", riot_defaults.max_retries),
            },
            assets: AssetsConfig {
                dir: env::var("ASSETS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(asset_defaults.dir),
                scaler_file: env::var("SCALER_FILE").unwrap_or(asset_defaults.scaler_file),
                model_file: env::var("MODEL_FILE").unwrap_or(asset_defaults.model_file),
                pro_coords_file: env::var("PRO_COORDS_FILE")
                    .unwrap_or(asset_defaults.pro_coords_file),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

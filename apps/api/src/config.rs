use anyhow::{bail, Context, Result};

const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for request bodies and decoded résumé text.
    pub max_input_bytes: usize,
    /// Raw-text passthrough when a request does not say.
    pub include_raw_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            include_raw_text: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            max_input_bytes: optional_env("MAX_INPUT_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_INPUT_BYTES must be a positive integer")?
                .unwrap_or(defaults.max_input_bytes),
            include_raw_text: optional_env("INCLUDE_RAW_TEXT")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("INCLUDE_RAW_TEXT must be a boolean")?
                .unwrap_or(defaults.include_raw_text),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Accepts the usual spellings of a boolean form/env flag.
pub fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "127.0.0.1"),
            port: env_or("PORT", "3000")
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}

/// Environment lookup with a fixed fallback. Every default literal the
/// metadata endpoints use goes through here, so each is written exactly once.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

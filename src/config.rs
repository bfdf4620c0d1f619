use std::env;
use std::path::PathBuf;

use anyhow::Context;

use crate::infer::ProviderConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Reads an environment variable, treating unset, non-unicode and blank values alike.
pub fn env_value(name: &str) -> Option<Box<str>> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(String::into_boxed_str)
}

/// Everything the chat server needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub provider: Option<ProviderConfig>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: parse_port(env_value("PORT").as_deref())?,
            static_dir: static_dir(env_value("STATIC_DIR").as_deref()),
            provider: ProviderConfig::from_env(),
        })
    }
}

fn parse_port(value: Option<&str>) -> anyhow::Result<u16> {
    match value {
        Some(port) => port
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT: {port:?}")),
        None => Ok(DEFAULT_PORT),
    }
}

fn static_dir(value: Option<&str>) -> PathBuf {
    PathBuf::from(value.unwrap_or(DEFAULT_STATIC_DIR))
}

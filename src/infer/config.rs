use std::fmt;

use crate::config::env_value;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::OpenAi => super::openai::DEFAULT_BASE_URL,
            Self::Gemini => super::gemini::DEFAULT_BASE_URL,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The one upstream provider this process talks to.
///
/// Resolved once at startup and never renegotiated: an OpenAI key wins over a
/// Gemini key, and with neither there is no provider at all.
#[derive(Clone)]
pub struct ProviderConfig {
    kind: ProviderKind,
    api_key: Box<str>,
    base_url: Box<str>,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind, api_key: impl Into<Box<str>>) -> Self {
        Self {
            kind,
            api_key: api_key.into(),
            base_url: kind.default_base_url().into(),
        }
    }

    /// Points the provider at another host, e.g. a local stub.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').into();
        self
    }

    pub fn resolve(openai_key: Option<&str>, gemini_key: Option<&str>) -> Option<Self> {
        fn present(key: Option<&str>) -> Option<&str> {
            key.map(str::trim).filter(|key| !key.is_empty())
        }

        if let Some(key) = present(openai_key) {
            Some(Self::new(ProviderKind::OpenAi, key))
        } else {
            present(gemini_key).map(|key| Self::new(ProviderKind::Gemini, key))
        }
    }

    pub fn from_env() -> Option<Self> {
        Self::resolve(
            env_value(OPENAI_API_KEY).as_deref(),
            env_value(GEMINI_API_KEY).as_deref(),
        )
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

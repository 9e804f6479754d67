//! Server Configuration

use concierge_runtime::{ProviderKind, Result};

/// Settings read from the environment (after `.env` is loaded)
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the built WASM frontend
    pub static_dir: String,

    /// Completion backend
    pub provider: ProviderKind,

    /// Override for the provider's default model
    pub model: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: "static".into(),
            provider: ProviderKind::default(),
            model: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let provider = match lookup("CONCIERGE_PROVIDER") {
            Some(name) => ProviderKind::parse(&name)?,
            None => defaults.provider,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            provider,
            model: lookup("CONCIERGE_MODEL").filter(|m| !m.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.provider, ProviderKind::Gemini);
        assert!(config.model.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            "BIND_ADDR" => Some("127.0.0.1:8080".into()),
            "CONCIERGE_PROVIDER" => Some("mock".into()),
            "CONCIERGE_MODEL" => Some("gemini-2.5-flash".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.provider, ProviderKind::Mock);
        assert_eq!(config.model.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!(ServerConfig::from_lookup(|key| (key == "CONCIERGE_PROVIDER").then(|| "gpt".into())).is_err());
    }
}

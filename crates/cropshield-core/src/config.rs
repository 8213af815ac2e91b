//! Client configuration.
//!
//! Defaults target the development backend; every value can be overridden
//! through `CROPSHIELD_*` environment variables and then by command-line
//! flags in the binaries.

use crate::error::{ClientError, ClientResult};

pub const ENV_API_URL: &str = "CROPSHIELD_API_URL";
pub const ENV_TIMEOUT_MS: &str = "CROPSHIELD_TIMEOUT_MS";
pub const ENV_INSURED_AMOUNT: &str = "CROPSHIELD_INSURED_AMOUNT";
pub const ENV_EXPLORER_URL: &str = "CROPSHIELD_EXPLORER_URL";
pub const ENV_WALLET_RPC: &str = "CROPSHIELD_WALLET_RPC";

/// Configuration for the claim service client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Service root; `/api/...` paths are appended to it.
    pub base_url: String,
    pub timeout_ms: u64,
    /// Insured value the payout percentage is applied to.
    pub insured_amount: f64,
    /// Transaction page prefix of the block explorer.
    pub explorer_tx_base: String,
    /// JSON-RPC endpoint of the wallet provider.
    pub wallet_rpc_url: String,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";
    pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;
    pub const DEFAULT_INSURED_AMOUNT: f64 = 1000.0;
    pub const DEFAULT_EXPLORER_TX_BASE: &'static str = "https://sepolia.etherscan.io/tx/";
    pub const DEFAULT_WALLET_RPC_URL: &'static str = "http://localhost:8545";

    /// Read overrides from the process environment.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup (environment, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = get(ENV_API_URL) {
            cfg.base_url = url;
        }
        if let Some(raw) = get(ENV_TIMEOUT_MS) {
            cfg.timeout_ms = raw.parse().map_err(|_| {
                ClientError::Config(format!("{} must be an integer: {}", ENV_TIMEOUT_MS, raw))
            })?;
        }
        if let Some(raw) = get(ENV_INSURED_AMOUNT) {
            cfg.insured_amount = raw.parse().map_err(|_| {
                ClientError::Config(format!("{} must be a number: {}", ENV_INSURED_AMOUNT, raw))
            })?;
        }
        if let Some(url) = get(ENV_EXPLORER_URL) {
            cfg.explorer_tx_base = url;
        }
        if let Some(url) = get(ENV_WALLET_RPC) {
            cfg.wallet_rpc_url = url;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> ClientResult<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ClientError::Config("base_url is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base_url must start with http:// or https://: {}",
                base
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ClientError::Config("timeout_ms must be positive".to_string()));
        }
        if !self.insured_amount.is_finite() || self.insured_amount < 0.0 {
            return Err(ClientError::Config(format!(
                "insured_amount must be a non-negative number: {}",
                self.insured_amount
            )));
        }
        Ok(())
    }

    /// Join the base URL and an API path.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            insured_amount: Self::DEFAULT_INSURED_AMOUNT,
            explorer_tx_base: Self::DEFAULT_EXPLORER_TX_BASE.to_string(),
            wallet_rpc_url: Self::DEFAULT_WALLET_RPC_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let cfg = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(cfg.insured_amount, 1000.0);
    }

    #[test]
    fn test_env_overrides() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://claims.example.org/"),
            (ENV_TIMEOUT_MS, "500"),
            (ENV_INSURED_AMOUNT, "2500.5"),
            (ENV_WALLET_RPC, "http://127.0.0.1:7545"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "https://claims.example.org/");
        assert_eq!(cfg.timeout_ms, 500);
        assert_eq!(cfg.insured_amount, 2500.5);
        assert_eq!(cfg.wallet_rpc_url, "http://127.0.0.1:7545");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let cfg = ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "   ")])).unwrap();
        assert_eq!(cfg.base_url, ClientConfig::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "soon")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "localhost:8080")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[(ENV_INSURED_AMOUNT, "-1")])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_url_join() {
        let cfg = ClientConfig::default().with_base_url("http://host:1/");
        assert_eq!(cfg.url("/api/login"), "http://host:1/api/login");
        assert_eq!(cfg.url("api/lands"), "http://host:1/api/lands");
    }
}

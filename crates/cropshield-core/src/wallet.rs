//! Wallet connection.
//!
//! Talks EIP-1193 style JSON-RPC (`eth_requestAccounts`) to a wallet
//! provider endpoint and hands back the first account, which the register
//! form then uses as the farmer's payout address.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ClientError, ClientResult};

/// A 20-byte account address in `0x`-prefixed hex form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(s: &str) -> ClientResult<Self> {
        let s = s.trim();
        let hex_part = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| ClientError::InvalidInput(format!("address must start with 0x: {}", s)))?;
        let bytes = hex::decode(hex_part)
            .map_err(|e| ClientError::InvalidInput(format!("invalid address {}: {}", s, e)))?;
        if bytes.len() != 20 {
            return Err(ClientError::InvalidInput(format!(
                "address must be 20 bytes (got {})",
                bytes.len()
            )));
        }
        // Preserve the caller's casing so EIP-55 checksums survive.
        Ok(Self(format!("0x{}", hex_part)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for buttons and headers (`0x1234…abcd`).
    pub fn short(&self) -> String {
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = ClientError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<WalletAddress> for String {
    fn from(a: WalletAddress) -> Self {
        a.0
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// JSON-RPC wallet provider.
#[derive(Debug, Clone)]
pub struct WalletConnector {
    rpc_url: String,
    http: reqwest::Client,
}

impl WalletConnector {
    /// Code a provider returns when the user rejects the request (EIP-1193).
    pub const USER_REJECTED: i64 = 4001;

    pub fn new(rpc_url: impl Into<String>) -> ClientResult<Self> {
        let rpc_url = rpc_url.into();
        if rpc_url.trim().is_empty() {
            return Err(ClientError::Config("wallet rpc url is empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self { rpc_url, http })
    }

    /// Ask the provider for account access.
    pub async fn request_accounts(&self) -> ClientResult<Vec<WalletAddress>> {
        let result = self.call("eth_requestAccounts").await?;
        let raw: Vec<String> = serde_json::from_value(result)
            .map_err(|e| ClientError::Wallet(format!("unexpected accounts payload: {}", e)))?;
        raw.iter().map(|a| WalletAddress::parse(a)).collect()
    }

    /// Connect and return the first account.
    pub async fn connect(&self) -> ClientResult<WalletAddress> {
        let accounts = self.request_accounts().await?;
        let first = accounts
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Wallet("wallet returned no accounts".to_string()))?;
        info!("Wallet connected: {}", first.short());
        Ok(first)
    }

    async fn call(&self, method: &str) -> ClientResult<Value> {
        debug!("wallet rpc {} -> {}", method, self.rpc_url);
        let req = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params: Vec::new(),
        };
        let resp = self
            .http
            .post(&self.rpc_url)
            .json(&req)
            .send()
            .await
            .map_err(|e| ClientError::Wallet(format!("wallet provider unreachable: {}", e)))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Wallet(format!(
                "wallet provider returned HTTP {}",
                status.as_u16()
            )));
        }
        let body: RpcResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Wallet(format!("invalid wallet response: {}", e)))?;

        if let Some(err) = body.error {
            return Err(ClientError::Wallet(if err.code == Self::USER_REJECTED {
                "request rejected in wallet".to_string()
            } else {
                format!("{} (code {})", err.message, err.code)
            }));
        }
        body.result
            .ok_or_else(|| ClientError::Wallet("wallet response had no result".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_parse_valid_address_keeps_case() {
        let a = WalletAddress::parse(ADDR).unwrap();
        assert_eq!(a.as_str(), ADDR);
        assert_eq!(a.short(), "0x5290…9EE7");
    }

    #[test]
    fn test_parse_rejects_bad_addresses() {
        assert!(WalletAddress::parse("52908400098527886E0F7030069857D2E4169EE7").is_err());
        assert!(WalletAddress::parse("0x1234").is_err());
        assert!(WalletAddress::parse("0xZZ908400098527886E0F7030069857D2E4169EE7").is_err());
    }

    #[test]
    fn test_address_serde_validates() {
        let ok: WalletAddress = serde_json::from_value(serde_json::json!(ADDR)).unwrap();
        assert_eq!(ok.to_string(), ADDR);
        assert!(serde_json::from_value::<WalletAddress>(serde_json::json!("0x12")).is_err());
    }

    #[test]
    fn test_connector_requires_url() {
        assert!(WalletConnector::new("  ").is_err());
    }
}

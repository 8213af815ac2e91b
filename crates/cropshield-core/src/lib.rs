//! CropShield Core Library
//!
//! Typed client for the crop-insurance claim service.
//!
//! ## Overview
//!
//! Farmers register, verify their identity with a one-time code, register
//! land parcels, submit claims with agronomic sensor readings and view the
//! computed payout. Scoring, OTP issuance, payout computation and chain
//! submission all happen server-side; this crate only speaks the JSON/HTTP
//! contract and presents the results.
//!
//! ## Principles
//!
//! - **One request per action**: no retries, no caching, no background work
//! - **Uniform errors**: every failure becomes `{ ok: false, error }`, see [`envelope`]
//! - **Server owns correctness**: the client checks types, not business rules
//!
//! ## Quick Start
//!
//! ```ignore
//! use cropshield_core::{ApiClient, ClientConfig, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ClientConfig::from_env()?)?;
//!
//!     let session = client.login(&Credentials::registration("HBL-2025-3F9A1C")).await?;
//!     for land in client.list_lands(session.farmer_id).await? {
//!         println!("{}", land.label());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod attachment;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod payout;
pub mod storage;
pub mod types;
pub mod wallet;

// Re-exports
pub use attachment::Attachment;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{ClientError, ClientResult};
pub use payout::{claimable_amount, explorer_tx_url, PayoutSummary};
pub use storage::SessionStore;
pub use types::*;
pub use wallet::{WalletAddress, WalletConnector};

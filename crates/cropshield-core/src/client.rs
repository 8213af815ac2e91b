//! HTTP client for the claim service.
//!
//! One method per endpoint; each call sends exactly one request and never
//! retries. Responses go through [`Envelope`] so every failure surfaces as a
//! single error string.

use std::time::Duration;

use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::envelope::{decode, Envelope};
use crate::error::{ClientError, ClientResult};
use crate::types::{
    AccountRegistration, AddedLand, ClaimId, ClaimRequest, ClaimResult, Credentials, FarmerId,
    FarmerSession, LandForm, LandSummary, NewLand, OtpVerification, Registration,
    RegistrationForm, TxStatus, VerifyOutcome,
};
use crate::wallet::WalletAddress;

/// Service paths.
pub mod paths {
    pub const HEALTH: &str = "/health";
    pub const REGISTER: &str = "/api/register";
    pub const VERIFY_OTP: &str = "/api/verify-otp";
    pub const LOGIN: &str = "/api/login";
    pub const ADD_LAND: &str = "/api/add-land";
    pub const LANDS: &str = "/api/lands";
    pub const SUBMIT_CLAIM: &str = "/api/claims/submit";
    pub const AUTHORIZE_ORACLE: &str = "/api/authorize_oracle";

    pub fn tx_status(claim_id: impl std::fmt::Display) -> String {
        format!("/api/claims/{}/tx_status", claim_id)
    }
}

/// Client for the crop-insurance claim service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    cfg: ClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(cfg: ClientConfig) -> ClientResult<Self> {
        cfg.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self { cfg, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Farmer
    // ═══════════════════════════════════════════════════════════════════════

    /// Register a farmer with identity photos (multipart).
    pub async fn register(&self, form: &RegistrationForm) -> ClientResult<Registration> {
        let mut multipart = text_form(form.text_fields());
        for (field, attachment) in form.file_fields() {
            multipart = multipart.part(field, attachment.to_part()?);
        }
        self.post_multipart(paths::REGISTER, multipart).await
    }

    /// Register an email/password account (JSON).
    pub async fn register_account(&self, body: &AccountRegistration) -> ClientResult<Registration> {
        self.post_json(paths::REGISTER, body).await
    }

    pub async fn verify_otp(&self, body: &OtpVerification) -> ClientResult<VerifyOutcome> {
        self.post_json(paths::VERIFY_OTP, body).await
    }

    pub async fn login(&self, credentials: &Credentials) -> ClientResult<FarmerSession> {
        self.post_json(paths::LOGIN, credentials).await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Land
    // ═══════════════════════════════════════════════════════════════════════

    /// Register a parcel with optional verification image and geolocation.
    pub async fn add_land(&self, form: &LandForm) -> ClientResult<AddedLand> {
        let mut multipart = text_form(form.text_fields());
        if let Some(ref image) = form.verification_image {
            multipart = multipart.part("verification_image", image.to_part()?);
        }
        self.post_multipart(paths::ADD_LAND, multipart).await
    }

    /// Quick-add a parcel for a logged-in farmer (JSON).
    ///
    /// The response body is returned as-is.
    pub async fn create_land(&self, body: &NewLand) -> ClientResult<Value> {
        self.post_json(paths::LANDS, body).await
    }

    pub async fn list_lands(&self, farmer_id: FarmerId) -> ClientResult<Vec<LandSummary>> {
        let id = farmer_id.to_string();
        let req = self
            .http
            .get(self.cfg.url(paths::LANDS))
            .query(&[("farmer_id", id.as_str())]);
        let value = self.send("GET", paths::LANDS, req).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        decode(value)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Claims
    // ═══════════════════════════════════════════════════════════════════════

    pub async fn submit_claim(&self, body: &ClaimRequest) -> ClientResult<ClaimResult> {
        debug!(
            "claim payload: land={} model1={} model2={}",
            body.land_id,
            serde_json::to_string(&body.model1).unwrap_or_default(),
            serde_json::to_string(&body.model2).unwrap_or_default()
        );
        self.post_json(paths::SUBMIT_CLAIM, body).await
    }

    /// On-chain status of a claim's oracle transaction.
    pub async fn tx_status(&self, claim_id: ClaimId) -> ClientResult<TxStatus> {
        self.get_json(&paths::tx_status(claim_id)).await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Operator
    // ═══════════════════════════════════════════════════════════════════════

    pub async fn health(&self) -> ClientResult<Value> {
        self.get_json(paths::HEALTH).await
    }

    /// Allow an address to post oracle data to the insurance pool.
    pub async fn authorize_oracle(&self, address: &WalletAddress) -> ClientResult<Value> {
        let body = serde_json::json!({ "address": address.to_string() });
        self.post_json(paths::AUTHORIZE_ORACLE, &body).await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Transport
    // ═══════════════════════════════════════════════════════════════════════

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.http.get(self.cfg.url(path));
        let value = self.send("GET", path, req).await?;
        decode(value)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.post(self.cfg.url(path)).json(body);
        let value = self.send("POST", path, req).await?;
        decode(value)
    }

    async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> ClientResult<T> {
        let req = self.http.post(self.cfg.url(path)).multipart(form);
        let value = self.send("POST", path, req).await?;
        decode(value)
    }

    /// Send one request and normalize whatever comes back.
    async fn send(
        &self,
        method: &str,
        path: &str,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<Value> {
        info!("{} {}", method, path);
        let resp = req
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("{} {} failed: {}", method, path, e);
                ClientError::from(e)
            })?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        let envelope = Envelope::from_response(status, &body);
        if let Some(msg) = envelope.error_message() {
            warn!("{} {} -> {}: {}", method, path, status, msg);
        } else {
            debug!("{} {} -> {}", method, path, status);
        }
        envelope.into_result()
    }
}

fn text_form(fields: Vec<(&'static str, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_status_path() {
        assert_eq!(paths::tx_status(ClaimId(12)), "/api/claims/12/tx_status");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let cfg = ClientConfig::default().with_base_url("");
        assert!(matches!(ApiClient::new(cfg), Err(ClientError::Config(_))));
    }
}

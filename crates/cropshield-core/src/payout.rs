//! Payout presentation.
//!
//! The service computes the payout percentage; the client only turns it into
//! a claimable amount against the insured value and links the oracle
//! transaction on a block explorer.

use crate::config::ClientConfig;
use crate::types::{ClaimId, ClaimResult};

/// `insured × percentage / 100`, rounded to cents.
///
/// Percentages outside `0..=100` are clamped; non-finite values count as 0.
pub fn claimable_amount(insured: f64, payout_percentage: f64) -> f64 {
    let pct = if payout_percentage.is_finite() {
        payout_percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    ((insured * pct) / 100.0 * 100.0).round() / 100.0
}

/// Explorer page for a transaction hash.
pub fn explorer_tx_url(explorer_tx_base: &str, tx_hash: &str) -> String {
    let base = explorer_tx_base.trim();
    if base.ends_with('/') {
        format!("{}{}", base, tx_hash)
    } else {
        format!("{}/{}", base, tx_hash)
    }
}

/// Everything the payout view shows for one claim.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutSummary {
    pub claim_id: ClaimId,
    pub is_stressed: bool,
    pub probability: f64,
    pub payout_percentage: f64,
    pub insured_amount: f64,
    pub amount: f64,
    pub tx_hash: Option<String>,
    pub explorer_url: Option<String>,
    /// Error reported by the service when the oracle submission failed
    pub onchain_error: Option<String>,
}

impl PayoutSummary {
    pub fn new(result: &ClaimResult, cfg: &ClientConfig) -> Self {
        let tx_hash = result.tx_hash().map(str::to_string);
        Self {
            claim_id: result.claim_id,
            is_stressed: result.is_stressed,
            probability: result.probability,
            payout_percentage: result.payout_percentage,
            insured_amount: cfg.insured_amount,
            amount: claimable_amount(cfg.insured_amount, result.payout_percentage),
            explorer_url: tx_hash
                .as_deref()
                .map(|h| explorer_tx_url(&cfg.explorer_tx_base, h)),
            tx_hash,
            onchain_error: result.onchain.as_ref().and_then(|o| o.error.clone()),
        }
    }

    pub fn stressed_label(&self) -> &'static str {
        if self.is_stressed {
            "Yes"
        } else {
            "No"
        }
    }

    /// Display lines shared by the desktop view and the CLI.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            format!("Claim ID: {}", self.claim_id),
            format!("Is stressed: {}", self.stressed_label()),
            format!("Probability: {}", self.probability),
            format!("Payout %: {}%", self.payout_percentage),
            format!(
                "Claimable amount (insured {}): {}",
                self.insured_amount, self.amount
            ),
        ];
        if let Some(ref hash) = self.tx_hash {
            out.push(format!("On-chain tx: {}", hash));
        }
        if let Some(ref url) = self.explorer_url {
            out.push(format!("Explorer: {}", url));
        }
        if let Some(ref err) = self.onchain_error {
            out.push(format!("On-chain submission failed: {}", err));
        }
        out
    }
}

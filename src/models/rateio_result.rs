//! Rateio result models.
//!
//! This module contains the [`RateioResult`] type and its associated structures
//! that capture the outcome of a rateio: one share per claimant, a summary of
//! the distributed amount, and the audit trail of the calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonetaryAmount;

/// A worker taking part in a rateio, weighted by months worked.
///
/// # Example
///
/// ```
/// use rateio_engine::models::Claimant;
///
/// let claimant = Claimant::new("prof_001", "Maria da Silva", 117);
/// assert_eq!(claimant.months_worked, 117);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claimant {
    /// Caller-owned identity of the claimant.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Months worked inside the eligibility window; the apportionment weight.
    pub months_worked: u32,
}

impl Claimant {
    /// Creates a new claimant.
    pub fn new(id: impl Into<String>, name: impl Into<String>, months_worked: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            months_worked,
        }
    }
}

/// One claimant's share of the rateio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimantShare {
    /// The claimant's identity.
    pub claimant_id: String,
    /// The claimant's display name.
    pub name: String,
    /// The weight used for this claimant.
    pub months_worked: u32,
    /// The exact share, in cents precision.
    pub share: MonetaryAmount,
    /// The share rendered as currency text (e.g., "R$ 46.937,46").
    pub share_formatted: String,
}

/// Aggregated figures for a rateio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateioSummary {
    /// The weighting criterion, always "months_worked".
    pub criterion: String,
    /// Number of claimants.
    pub claimant_count: usize,
    /// The total as parsed, at full precision.
    pub total: Decimal,
    /// The total quantized to cents; the shares add up to exactly this.
    pub available: MonetaryAmount,
    /// Sum of all weights.
    pub weight_sum: u64,
    /// The parsed total rendered as currency text.
    pub total_formatted: String,
    /// The available amount rendered as currency text.
    pub available_formatted: String,
}

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a rateio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateioResult {
    /// One share per claimant, in input order.
    pub shares: Vec<ClaimantShare>,
    /// Aggregated figures.
    pub summary: RateioSummary,
    /// The sequence of calculation steps.
    pub audit_steps: Vec<AuditStep>,
}

impl RateioResult {
    /// Returns the sum of all shares.
    pub fn distributed(&self) -> MonetaryAmount {
        self.shares.iter().map(|s| s.share).sum()
    }
}

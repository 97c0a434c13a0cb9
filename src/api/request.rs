//! Request types for the Rateio Engine API.
//!
//! This module defines the JSON request structures for the `/rateio` and
//! `/periods/preview` endpoints. Record validation takes a
//! [`WorkerForm`](crate::models::WorkerForm) body as is.

use serde::{Deserialize, Serialize};

use crate::models::Claimant;

/// Request body for the `/rateio` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateioRequest {
    /// The settlement amount as typed (e.g., "5.632.494,99").
    /// The configured default is used when absent.
    #[serde(default)]
    pub total: Option<String>,
    /// The claimants, in the order the shares should come back.
    pub claimants: Vec<ClaimantRequest>,
}

/// Claimant information in a rateio request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimantRequest {
    /// Caller-owned identity of the claimant.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Months worked inside the eligibility window.
    pub months_worked: u32,
}

/// Request body for the `/periods/preview` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodPreviewRequest {
    /// First day worked, `YYYY-MM-DD`.
    pub window_start: String,
    /// Last day worked, `YYYY-MM-DD`.
    pub window_end: String,
}

impl From<ClaimantRequest> for Claimant {
    fn from(req: ClaimantRequest) -> Self {
        Claimant {
            id: req.id,
            name: req.name,
            months_worked: req.months_worked,
        }
    }
}

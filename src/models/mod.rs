//! Core data models for the Rateio Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod date_range;
mod identifier;
mod money;
mod rateio_result;
mod worker;

pub use date_range::DateRange;
pub use identifier::IdentifierDigits;
pub use money::{CURRENCY_SCALE, MonetaryAmount, quantize_half_up};
pub use rateio_result::{AuditStep, Claimant, ClaimantShare, RateioResult, RateioSummary};
pub use worker::{EmploymentStatus, WorkerForm, WorkerRecord, Workplace};

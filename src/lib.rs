//! Validation and apportionment engine for precatório rateio.
//!
//! This crate validates worker registration data (CPF checksum, service
//! period inside the fund eligibility window) and splits a settlement amount
//! across workers in proportion to months worked, without losing or creating
//! a single cent.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

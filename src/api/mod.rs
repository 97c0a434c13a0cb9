//! HTTP API module for the Rateio Engine.
//!
//! A thin JSON adapter over the calculation functions: worker record
//! validation, the settlement rateio, and the months-worked preview.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClaimantRequest, PeriodPreviewRequest, RateioRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

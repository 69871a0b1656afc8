//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing the quote endpoint that delegates to the
//! get-quote use case.

mod controller;
mod response;

pub use controller::{AppState, create_router};
pub use response::{HealthResponse, QuoteResponse};

//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the get-quote use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::application::ports::{QuoteFetchPort, QuotePublisherPort};
use crate::application::use_cases::{GetQuoteError, GetQuoteUseCase};

use super::response::{HealthResponse, QuoteResponse};

/// Application state shared across handlers.
pub struct AppState<F, P>
where
    F: QuoteFetchPort,
    P: QuotePublisherPort,
{
    /// Use case serving quote requests.
    pub get_quote: Arc<GetQuoteUseCase<F, P>>,
    /// Application version.
    pub version: String,
}

impl<F, P> Clone for AppState<F, P>
where
    F: QuoteFetchPort,
    P: QuotePublisherPort,
{
    fn clone(&self) -> Self {
        Self {
            get_quote: Arc::clone(&self.get_quote),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<F, P>(state: AppState<F, P>) -> Router
where
    F: QuoteFetchPort + 'static,
    P: QuotePublisherPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/quotes/{symbol}", get(get_quote))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<F, P>(State(state): State<AppState<F, P>>) -> impl IntoResponse
where
    F: QuoteFetchPort + 'static,
    P: QuotePublisherPort + 'static,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Quote endpoint: fetch, publish off the request path, respond.
async fn get_quote<F, P>(
    State(state): State<AppState<F, P>>,
    Path(symbol): Path<String>,
) -> Response
where
    F: QuoteFetchPort + 'static,
    P: QuotePublisherPort + 'static,
{
    match state.get_quote.execute(&symbol).await {
        Ok(quote) => (
            StatusCode::OK,
            Json(QuoteResponse {
                symbol: quote.symbol,
                price: quote.price,
            }),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// Map a pipeline error to its response status and text body.
fn error_response(err: &GetQuoteError) -> Response {
    let status = match err {
        GetQuoteError::BlankSymbol => StatusCode::BAD_REQUEST,
        GetQuoteError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        GetQuoteError::Timeout | GetQuoteError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_statuses_match_the_fault_classes() {
        let cases = [
            (GetQuoteError::BlankSymbol, StatusCode::BAD_REQUEST),
            (
                GetQuoteError::Upstream {
                    body: "bad".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (GetQuoteError::Timeout, StatusCode::INTERNAL_SERVER_ERROR),
            (
                GetQuoteError::Fetch {
                    message: "connection reset".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(error_response(&err).status(), expected);
        }
    }
}

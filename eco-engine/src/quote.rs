//! Order quotes - JSON in, response envelope out

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{LineItem, PriceBreakdown};

use crate::pricing::{DeliveryPolicy, EcoRankPricingEngine};
use crate::ranking::RankProgress;

/// Quote request: the cart and the buyer's lifetime eco points
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_points: Decimal,
}

/// Quote payload: rounded breakdown plus rank progress
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub breakdown: PriceBreakdown,
    pub progress: RankProgress,
}

/// Price a parsed request
pub fn quote<P: DeliveryPolicy>(
    engine: &EcoRankPricingEngine<P>,
    request: &QuoteRequest,
) -> AppResult<QuoteResponse> {
    let breakdown = engine.compute_breakdown(&request.items, request.total_points)?;
    let progress = engine.rank_progress(request.total_points)?;
    Ok(QuoteResponse {
        breakdown: breakdown.rounded(),
        progress,
    })
}

/// Parse a JSON request and price it
pub fn quote_json<P: DeliveryPolicy>(
    engine: &EcoRankPricingEngine<P>,
    input: &str,
) -> AppResult<QuoteResponse> {
    let request: QuoteRequest = serde_json::from_str(input).map_err(|e| {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid quote request: {e}"))
            .with_detail("line", e.line())
            .with_detail("column", e.column())
    })?;
    quote(engine, &request)
}

/// Envelope for a quote result
pub fn into_response(result: AppResult<QuoteResponse>) -> ApiResponse<QuoteResponse> {
    match result {
        Ok(data) => ApiResponse::success(data),
        Err(err) => err.into(),
    }
}

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::config::{Config, Preset};
use crate::error::ApiError;
use crate::models::profit::{
    CalculationInputs, DisplayAmounts, ErrorResponse, HealthStatus, ProfitResponse,
};
use crate::services::calculation_service::{evaluate, format_amount, parse_inputs};

/// GET /api/health
/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn get_health() -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/presets
/// List input presets
///
/// Returns the configured sets of raw inputs the UI offers as one-click presets.
#[utoipa::path(
    get,
    path = "/api/presets",
    responses(
        (status = 200, description = "Configured presets", body = Vec<Preset>)
    )
)]
pub async fn list_presets(State(config): State<Arc<Config>>) -> impl IntoResponse {
    Json(config.presets.clone())
}

/// POST /api/profit
/// Compare profit under two forecast errors
///
/// Parses the four raw fields (unparsable values count as 0 and are listed in
/// `warnings`), computes the profit for each sigma and the net gain of the
/// improved forecast. The raw inputs are echoed back unmodified.
#[utoipa::path(
    post,
    path = "/api/profit",
    request_body = CalculationInputs,
    responses(
        (status = 200, description = "Profit comparison", body = ProfitResponse),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = ErrorResponse),
        (status = 422, description = "Inputs outside the model's domain (sigma = 0, non-finite value, overflow)", body = ErrorResponse)
    )
)]
pub async fn calculate_profit(
    State(config): State<Arc<Config>>,
    payload: Result<Json<CalculationInputs>, JsonRejection>,
) -> Result<Json<ProfitResponse>, ApiError> {
    let Json(inputs) = payload?;
    let (parsed, fallbacks) = parse_inputs(&inputs);
    if !fallbacks.is_empty() {
        tracing::warn!(fields = ?fallbacks, "unparsable inputs evaluated as 0.0");
    }

    let result = evaluate(&parsed)?;
    let net_gain = result.net_gain();

    tracing::info!(
        profit1 = %format_amount(result.profit1),
        profit2 = %format_amount(result.profit2),
        net_gain = %format_amount(net_gain),
        "calculation completed"
    );

    Ok(Json(ProfitResponse {
        profit1: result.profit1,
        profit2: result.profit2,
        net_gain,
        display: DisplayAmounts {
            profit1: format_amount(result.profit1),
            profit2: format_amount(result.profit2),
            net_gain: format_amount(net_gain),
            unit: config.display.currency_label.clone(),
        },
        inputs,
        warnings: fallbacks.into_iter().map(String::from).collect(),
        calculated_at: chrono::Utc::now(),
    }))
}

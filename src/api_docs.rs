use utoipa::OpenApi;
use crate::controllers::profit_controller;
use crate::models::profit;
use crate::config;

#[derive(OpenApi)]
#[openapi(
    paths(
        profit_controller::get_health,
        profit_controller::list_presets,
        profit_controller::calculate_profit
    ),
    components(
        schemas(
            profit::CalculationInputs,
            profit::ProfitResponse,
            profit::DisplayAmounts,
            profit::ErrorResponse,
            profit::HealthStatus,
            config::Preset
        )
    ),
    tags(
        (name = "pv-forecast-profit", description = "Forecast accuracy profit calculator API")
    )
)]
pub struct ApiDoc;

use axum::{routing::{get, post}, Router};
use crate::controllers::profit_controller::{calculate_profit, get_health, list_presets};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router.
/// Handlers pull `State<Arc<Config>>` through `FromRef<AppState>`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health",  get(get_health))
        .route("/presets", get(list_presets))
        .route("/profit",  post(calculate_profit))
        .with_state(state)
}

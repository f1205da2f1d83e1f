mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod error;

use std::net::{IpAddr, SocketAddr};
use axum::{Router, routing::get, response::Html};
use crate::routes::profit_routes::api_routes;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;
use crate::api_docs::ApiDoc;
use crate::shared_state::AppState;
use crate::config::Config;

use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_ENV: &str = "PV_PROFIT_CONFIG";

#[cfg(feature = "verbose_log")]
const DEFAULT_LOG_FILTER: &str = "pv_forecast_profit=debug,tower_http=debug";
#[cfg(not(feature = "verbose_log"))]
const DEFAULT_LOG_FILTER: &str = "pv_forecast_profit=info,tower_http=info";

fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    Router::new()
        .nest("/api", api_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    // 1. Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Load configuration
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "config.json".to_string());
    let config = match Config::load_or_default(&config_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(path = %config_path, "failed to load configuration: {e}");
            return;
        }
    };
    tracing::info!(
        presets = config.presets.len(),
        currency = %config.display.currency_label,
        "configuration loaded"
    );

    let host: IpAddr = match config.server.host.parse() {
        Ok(h) => h,
        Err(e) => {
            tracing::error!(host = %config.server.host, "invalid server host: {e}");
            return;
        }
    };
    let addr = SocketAddr::new(host, config.server.port);

    // 3. Start HTTP server
    let state = AppState::new(config);
    tracing::info!("calculator UI: http://{addr}/");
    tracing::info!("Scalar UI: http://{addr}/scalar");

    if let Err(e) = axum_server::bind(addr)
        .serve(app(state).into_make_service())
        .await
    {
        tracing::error!("HTTP server error: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_scalar_docs_served() {
        let request = Request::builder().uri("/scalar").body(Body::empty()).unwrap();
        let response = app(AppState::new(Config::default())).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_openapi_lists_profit_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/profit"));
        assert!(doc.paths.paths.contains_key("/api/presets"));
    }
}

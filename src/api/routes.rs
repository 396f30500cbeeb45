use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use crate::api::extract::JsonObject;
use crate::api::preflight::handle_preflight;
use crate::config::Config;
use crate::error::ApiError;
use crate::types::envelope::Envelope;
use crate::types::market::MarketSnapshot;
use crate::types::order::Order;
use crate::types::position::Portfolio;
use crate::types::strategy::StrategyExecution;
use crate::{market, orders, portfolio, strategy};

pub const AVAILABLE_ENDPOINTS: [&str; 6] = [
    "/api",
    "/api/health",
    "/api/market/quotes",
    "/api/portfolio",
    "/api/trading/place-order",
    "/api/strategy/execute",
];

pub const ENVIRONMENT: &str = "production";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub upstox_configured: bool,
    pub environment: &'static str,
    pub timestamp: chrono::DateTime<Utc>,
}

async fn api_root() -> Json<Value> {
    Json(json!({
        "message": "AlgoTrader API v2.0 - Fully Functional",
        "status": "operational",
        "endpoints": {
            "health": "/api/health",
            "market": "/api/market/quotes",
            "portfolio": "/api/portfolio",
            "trading": "/api/trading/place-order",
            "strategy": "/api/strategy/execute",
        },
        "timestamp": Utc::now(),
    }))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        upstox_configured: state.config.upstox_configured(),
        environment: ENVIRONMENT,
        timestamp: Utc::now(),
    })
}

/// Text carried by a panic payload, if it is a string.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run `generate`; if it panics, report the failure but still return a second,
/// freshly generated payload. Read-only endpoints answer 200 either way.
pub fn generate_or_mask<T>(generate: impl Fn() -> T, message: &str) -> Envelope<T> {
    match panic::catch_unwind(AssertUnwindSafe(|| generate())) {
        Ok(data) => Envelope::ok(data, message),
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            error!(%reason, "data generation failed, returning fallback payload");
            Envelope::masked(reason, generate())
        }
    }
}

async fn market_quotes() -> Json<Envelope<MarketSnapshot>> {
    Json(generate_or_mask(
        || market::snapshot(&mut rand::thread_rng()),
        "Market data retrieved successfully",
    ))
}

async fn portfolio_summary() -> Json<Envelope<Portfolio>> {
    Json(generate_or_mask(
        || portfolio::portfolio(&mut rand::thread_rng()),
        "Portfolio data retrieved successfully",
    ))
}

async fn place_order(JsonObject(body): JsonObject) -> Result<Json<Envelope<Order>>, ApiError> {
    match orders::place_order(&mut rand::thread_rng(), &body) {
        Ok(order) => {
            info!(order_id = %order.order_id, quantity = order.quantity, price = order.price, "order executed");
            Ok(Json(Envelope::ok(order, "Order placed successfully")))
        }
        Err(e @ ApiError::MissingFields(_)) => {
            warn!(error = %e, "order rejected");
            Err(e)
        }
        Err(e) => {
            error!(error = %e, "order placement failed");
            Err(e)
        }
    }
}

async fn execute_strategy(
    JsonObject(body): JsonObject,
) -> Result<Json<Envelope<StrategyExecution>>, ApiError> {
    let execution = strategy::execute_strategy(&mut rand::thread_rng(), &body).inspect_err(|e| {
        error!(error = %e, "strategy execution failed");
    })?;
    info!(
        strategy_id = %execution.strategy_id,
        strategy_type = %execution.strategy_type,
        legs = execution.orders.len(),
        total_premium = execution.total_premium,
        "strategy executed"
    );
    let message = strategy::success_message(&execution.strategy_type);
    Ok(Json(Envelope::ok(execution, message)))
}

/// Route-level preflight acknowledgement. The preflight middleware normally answers first.
async fn options_ack() -> Json<Value> {
    Json(json!({}))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    error!(reason = %panic_message(payload.as_ref()), "handler panicked");
    ApiError::Internal.into_response()
}

pub fn app_router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .route("/api", get(api_root))
        .route("/api/health", get(health))
        .route("/api/market/quotes", get(market_quotes))
        .route("/api/portfolio", get(portfolio_summary))
        .route("/api/trading/place-order", post(place_order).options(options_ack))
        .route("/api/strategy/execute", post(execute_strategy).options(options_ack))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer)
        .layer(middleware::from_fn(handle_preflight))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

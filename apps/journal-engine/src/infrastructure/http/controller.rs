//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use rust_decimal::Decimal;

use crate::analytics::StatsAggregator;
use crate::application::dto::{ComputeStatsRequestDto, DashboardQuery, ImportTradesRequestDto};
use crate::application::use_cases::{
    ComputeStatsUseCase, DashboardUseCase, DeleteTradeUseCase, ImportTradesUseCase,
};
use crate::domain::trade_journal::TradeRepository;
use crate::error::JournalError;

use super::response::HealthResponse;

/// Application state shared across handlers.
pub struct AppState<R>
where
    R: TradeRepository,
{
    /// Use case for stateless stats computation.
    pub compute_stats: ComputeStatsUseCase,
    /// Use case for the dashboard report.
    pub dashboard: Arc<DashboardUseCase<R>>,
    /// Use case for importing trades.
    pub import_trades: Arc<ImportTradesUseCase<R>>,
    /// Use case for deleting a trade.
    pub delete_trade: Arc<DeleteTradeUseCase<R>>,
    /// Application version.
    pub version: String,
}

impl<R> AppState<R>
where
    R: TradeRepository,
{
    /// Wire every use case against one repository.
    pub fn new(
        trade_repo: Arc<R>,
        aggregator: StatsAggregator,
        starting_balance: Decimal,
        version: impl Into<String>,
    ) -> Self {
        Self {
            compute_stats: ComputeStatsUseCase::new(aggregator),
            dashboard: Arc::new(DashboardUseCase::new(
                Arc::clone(&trade_repo),
                aggregator,
                starting_balance,
            )),
            import_trades: Arc::new(ImportTradesUseCase::new(Arc::clone(&trade_repo))),
            delete_trade: Arc::new(DeleteTradeUseCase::new(trade_repo)),
            version: version.into(),
        }
    }
}

impl<R> Clone for AppState<R>
where
    R: TradeRepository,
{
    fn clone(&self) -> Self {
        Self {
            compute_stats: self.compute_stats,
            dashboard: Arc::clone(&self.dashboard),
            import_trades: Arc::clone(&self.import_trades),
            delete_trade: Arc::clone(&self.delete_trade),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: TradeRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/stats", post(compute_stats))
        .route("/api/v1/users/{user_id}/trades", post(import_trades))
        .route(
            "/api/v1/users/{user_id}/trades/{trade_id}",
            delete(delete_trade),
        )
        .route("/api/v1/users/{user_id}/dashboard", get(dashboard))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<R>(State(state): State<AppState<R>>) -> impl IntoResponse
where
    R: TradeRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Stateless stats endpoint.
async fn compute_stats<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<ComputeStatsRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, JournalError>
where
    R: TradeRepository,
{
    let Json(request) = payload.map_err(|e| JournalError::invalid_request(e.body_text()))?;
    Ok(Json(state.compute_stats.execute(&request)))
}

/// Import trades endpoint.
async fn import_trades<R>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
    payload: Result<Json<ImportTradesRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, JournalError>
where
    R: TradeRepository,
{
    let Json(request) = payload.map_err(|e| JournalError::invalid_request(e.body_text()))?;
    let response = state.import_trades.execute(&user_id, &request).await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Dashboard endpoint.
async fn dashboard<R>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<impl IntoResponse, JournalError>
where
    R: TradeRepository,
{
    let Query(query) = query.map_err(|e| JournalError::invalid_request(e.body_text()))?;
    let report = state.dashboard.execute(&user_id, &query).await?;
    Ok(Json(report))
}

/// Delete trade endpoint.
async fn delete_trade<R>(
    State(state): State<AppState<R>>,
    Path((user_id, trade_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, JournalError>
where
    R: TradeRepository,
{
    state.delete_trade.execute(&user_id, &trade_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{BreakevenPolicy, TradingStats};
    use crate::error::HttpErrorResponse;
    use crate::infrastructure::persistence::InMemoryTradeRepository;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState<InMemoryTradeRepository> {
        AppState::new(
            Arc::new(InMemoryTradeRepository::new()),
            StatsAggregator::new(BreakevenPolicy::Reset),
            Decimal::ZERO,
            "1.0.0-test",
        )
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.version, "1.0.0-test");
    }

    #[tokio::test]
    async fn stats_for_empty_list() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json("/api/v1/stats", &serde_json::json!({ "trades": [] })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stats: TradingStats = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(stats, TradingStats::default());
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_request() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_json("/api/v1/stats", &serde_json::json!({ "trades": 7 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let err: HttpErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(err.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn delete_unknown_trade_is_not_found() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/users/alice/trades/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let err: HttpErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(err.code, "TRADE_NOT_FOUND");
    }

    #[tokio::test]
    async fn dashboard_rejects_bad_query() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/alice/dashboard?mode=SIDEWAYS")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

use axum::{extract::State, response::Json};
use serde_json::json;
use taxi_shared::ApiResponse;
use crate::app_state::AppState;

pub async fn health_check(
    State(app_state): State<AppState>,
) -> Json<ApiResponse<serde_json::Value>> {
    let registry = app_state.resolver.registry();

    let health_data = json!({
        "status": "healthy",
        "service": "taxi-site-gateway",
        "version": app_state.status.version,
        "environment": app_state.status.environment,
        "start_time": app_state.status.start_time,
        "uptime_seconds": app_state.uptime_seconds(),
        "tenants": {
            "count": registry.len(),
            "default_configured": registry.default_tenant().is_some()
        }
    });

    Json(ApiResponse::success(health_data))
}

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};
use crate::app_state::AppState;
use crate::handlers;
use crate::middleware::{request_logging, resolve_tenant};

pub fn create_app(app_state: AppState) -> Router {
    // 页面路由：只有这里需要解析租户
    let pages = Router::new()
        .route("/", get(handlers::page::landing_page))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), resolve_tenant));

    let middleware_layer = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging))
        .into_inner();

    Router::new()
        .merge(pages)
        // 健康检查
        .route("/health", get(handlers::health::health_check))
        // 静态资源（图片、图标）
        .nest_service("/static", ServeDir::new(&app_state.config.server.static_dir))
        .layer(middleware_layer)
        .with_state(app_state)
}

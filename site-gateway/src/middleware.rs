use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::time::Instant;
use taxi_shared::{encode_tenant, TENANT_HEADER};
use tracing::{debug, error, info, warn};
use crate::app_state::AppState;
use crate::error::PageError;

pub async fn request_logging(
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    debug!("Incoming request: {} {}", method, uri);

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() || status.is_redirection() {
        info!("Request completed: {} {} - {} ({}ms)", method, uri, status, duration.as_millis());
    } else if status.is_client_error() {
        warn!("Client error: {} {} - {} ({}ms)", method, uri, status, duration.as_millis());
    } else {
        error!("Server error: {} {} - {} ({}ms)", method, uri, status, duration.as_millis());
    }

    response
}

/// 租户解析中间件
///
/// Resolves the tenant for this request and hands it to the page handler in
/// the `x-client-data` header. Any value the client sent under that name is
/// discarded first.
pub async fn resolve_tenant(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    req.headers_mut().remove(TENANT_HEADER);

    let host = request_host(&req);
    let override_id = query_param(&req, &state.config.dev.override_param);

    let encoded = match state
        .resolver
        .resolve(host.as_deref(), override_id.as_deref())
        .and_then(encode_tenant)
    {
        Ok(encoded) => encoded,
        Err(e) => return PageError::from(e).into_response(),
    };

    match HeaderValue::from_str(&encoded) {
        Ok(value) => {
            req.headers_mut().insert(TENANT_HEADER, value);
        }
        // base64 输出总是合法的 header 值
        Err(e) => error!("Encoded tenant is not a valid header value: {}", e),
    }

    next.run(req).await
}

/// `Host` header, falling back to the URI authority (HTTP/2).
fn request_host(req: &Request) -> Option<String> {
    req.headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned)
        .or_else(|| req.uri().authority().map(|a| a.to_string()))
}

fn query_param(req: &Request, name: &str) -> Option<String> {
    let Query(mut params) = Query::<HashMap<String, String>>::try_from_uri(req.uri()).ok()?;
    params.remove(name)
}

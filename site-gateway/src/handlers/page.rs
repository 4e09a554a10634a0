use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::request::Parts,
    response::Html,
};
use std::convert::Infallible;
use taxi_shared::{decode_tenant, TenantConfig, TENANT_HEADER};
use tracing::{error, warn};
use crate::app_state::AppState;
use crate::error::PageError;

/// Tenant handed over by the resolution middleware.
///
/// `None` means the header was missing or could not be decoded; the page then
/// shows the "tenant identification failed" notice instead of guessing.
#[derive(Debug, Clone)]
pub struct TenantData(pub Option<TenantConfig>);

#[async_trait]
impl<S> FromRequestParts<S> for TenantData
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(raw) = parts.headers.get(TENANT_HEADER) else {
            warn!("Request reached the page without tenant data");
            return Ok(TenantData(None));
        };

        let decoded = raw
            .to_str()
            .map_err(|e| e.to_string())
            .and_then(|value| decode_tenant(value).map_err(|e| e.to_string()));

        match decoded {
            Ok(tenant) => Ok(TenantData(Some(tenant))),
            Err(e) => {
                error!("Failed to parse client data from header: {}", e);
                Ok(TenantData(None))
            }
        }
    }
}

// 落地页
pub async fn landing_page(
    State(app_state): State<AppState>,
    TenantData(tenant): TenantData,
) -> Result<Html<String>, PageError> {
    let html = match tenant {
        Some(tenant) => app_state.renderer.render_tenant(&tenant)?,
        None => app_state.renderer.render_notice()?,
    };

    Ok(Html(html))
}

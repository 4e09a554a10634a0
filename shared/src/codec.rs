// 租户数据传递编码：base64(UTF-8 JSON)
use crate::types::{SiteError, TenantConfig};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Request header carrying the resolved tenant from the routing layer to the page.
pub const TENANT_HEADER: &str = "x-client-data";

pub fn encode_tenant(tenant: &TenantConfig) -> Result<String, SiteError> {
    let json = serde_json::to_vec(tenant)?;
    Ok(STANDARD.encode(json))
}

pub fn decode_tenant(encoded: &str) -> Result<TenantConfig, SiteError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

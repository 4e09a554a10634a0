use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifier of the fallback tenant served for unknown hosts.
pub const DEFAULT_TENANT_ID: &str = "default";

// 租户相关类型

/// One branded taxi business served by the shared site.
///
/// Records are authored as camelCase JSON files and never change after the
/// registry is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TenantConfig {
    pub id: String,
    /// Bare hostname (no `www.`). The default record may leave it empty.
    #[serde(default)]
    pub domain: String,
    pub title: String,
    pub description: String,
    pub taxi_name: String,
    pub main_heading: String,
    pub sub_heading_text: String,
    pub whatsapp_number: String,
    pub phone_number: String,
    pub popular_routes_title: String,
    #[serde(default)]
    pub popular_routes: Vec<String>,
    pub hero_image: String,
    pub taxi_icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_ads_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_conversion_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_site_verification: Option<String>,
}

impl TenantConfig {
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_TENANT_ID
    }

    /// Google Ads id, treating an empty string as "analytics disabled".
    pub fn ads_id(&self) -> Option<&str> {
        non_empty(&self.google_ads_id)
    }

    pub fn conversion_label(&self) -> Option<&str> {
        non_empty(&self.google_conversion_label)
    }

    pub fn site_verification(&self) -> Option<&str> {
        non_empty(&self.google_site_verification)
    }

    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }

    pub fn phone_link(&self) -> String {
        format!("tel:{}", self.phone_number)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

// API 请求/响应类型
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            timestamp: Utc::now(),
        }
    }
}

// 配置类型

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub dev: DevConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: PathBuf::from("public"),
        }
    }
}

/// Where tenant records are read from: a directory of `*.json` files or a
/// single JSON file holding an array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data"),
        }
    }
}

/// Local development switches for the tenant resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevConfig {
    /// A host containing any of these markers is treated as local development.
    pub host_markers: Vec<String>,
    /// Query parameter naming a tenant id to preview.
    pub override_param: String,
    /// Whether `?client=default` may select the default record.
    pub allow_default_override: bool,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            host_markers: vec![
                "localhost".to_string(),
                "127.0.0.1".to_string(),
                "[::1]".to_string(),
            ],
            override_param: "client".to_string(),
            allow_default_override: true,
        }
    }
}

// 错误类型
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tenant file {path}: {source}")]
    TenantFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Tenant payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("No tenant record with id \"default\" is configured")]
    DefaultTenantMissing,

    #[error("Tenant registry at {0} contains no records")]
    EmptyRegistry(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use taxi_shared::{AppConfig, TenantRegistry, TenantResolver};
use crate::render::PageRenderer;

/// 应用程序状态
///
/// Everything here is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// 服务配置
    pub config: Arc<AppConfig>,
    /// 租户解析器（持有只读注册表）
    pub resolver: Arc<TenantResolver>,
    /// 页面渲染器
    pub renderer: Arc<PageRenderer>,
    /// 应用状态信息
    pub status: Arc<AppStatus>,
}

/// 应用状态
#[derive(Debug, Clone, Serialize)]
pub struct AppStatus {
    pub start_time: DateTime<Utc>,
    pub version: String,
    pub environment: String,
}

impl AppState {
    pub fn new(config: AppConfig, registry: TenantRegistry) -> Result<Self, minijinja::Error> {
        let resolver = TenantResolver::new(Arc::new(registry), config.dev.clone());
        let renderer = PageRenderer::new()?;

        let status = AppStatus {
            start_time: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: std::env::var("ENV").unwrap_or_else(|_| "development".to_string()),
        };

        Ok(Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            renderer: Arc::new(renderer),
            status: Arc::new(status),
        })
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.status.start_time).num_seconds()
    }
}

use anyhow::{Context, Result};
use std::net::SocketAddr;
use taxi_shared::{load_config, TenantRegistry};
use taxi_site_gateway::{create_app, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Taxi site gateway starting...");

    // 加载配置
    let config = load_config().context("failed to load configuration")?;
    info!("Configuration loaded successfully");

    // 加载租户注册表（进程生命周期内只读）
    let registry = TenantRegistry::load(&config.registry.path)
        .with_context(|| format!("failed to load tenants from {}", config.registry.path.display()))?;
    info!("Tenant registry loaded: {} tenant(s)", registry.len());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;

    let app_state = AppState::new(config, registry)?;
    let app = create_app(app_state);

    // 启动服务器
    let listener = TcpListener::bind(addr).await?;
    info!("Taxi site gateway listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Taxi site gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, stopping...");
}

use crate::types::{AppConfig, SiteError};
use config::{Config, Environment, File};
use dotenvy::dotenv;
use std::env;

pub fn load_config() -> Result<AppConfig, SiteError> {
    // 加载 .env 文件
    dotenv().ok();

    let settings = Config::builder()
        // 添加默认配置文件
        .add_source(File::with_name("config/default").required(false))
        // 添加环境特定配置文件
        .add_source(
            File::with_name(&format!("config/{}", env::var("ENV").unwrap_or_else(|_| "development".to_string())))
                .required(false)
        )
        // 环境变量，例如 APP_SERVER__PORT=8080
        .add_source(Environment::with_prefix("APP").prefix_separator("_").separator("__"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;

    validate_config(&config)?;

    Ok(config)
}

pub fn validate_config(config: &AppConfig) -> Result<(), SiteError> {
    if config.server.port == 0 {
        return Err(SiteError::InvalidConfig("server port cannot be 0".to_string()));
    }

    if config.registry.path.as_os_str().is_empty() {
        return Err(SiteError::InvalidConfig("registry path cannot be empty".to_string()));
    }

    if config.dev.override_param.trim().is_empty() {
        return Err(SiteError::InvalidConfig("dev override parameter cannot be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.registry.path, PathBuf::from("data"));
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(validate_config(&config), Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_empty_registry_path() {
        let mut config = AppConfig::default();
        config.registry.path = PathBuf::new();
        assert!(matches!(validate_config(&config), Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_sources_fall_back_to_defaults() {
        let settings = Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 8080\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.dev.override_param, "client");
    }
}

use crate::types::{SiteError, TenantConfig, DEFAULT_TENANT_ID};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 租户注册表
///
/// Ordered, read-only set of tenant records. Order is the load order and is
/// significant: the first record is the local-development fallback and the
/// first record with a given domain wins on duplicates.
#[derive(Debug, Clone)]
pub struct TenantRegistry {
    tenants: Vec<TenantConfig>,
}

impl TenantRegistry {
    pub fn new(tenants: Vec<TenantConfig>) -> Self {
        let registry = Self { tenants };
        registry.audit();
        registry
    }

    /// Load every record under `path`.
    ///
    /// A directory is read file by file (`*.json`, sorted by file name); a
    /// plain file must contain a JSON array or a single record.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let files = if path.is_dir() {
            json_files_in(path)?
        } else {
            vec![path.to_path_buf()]
        };

        let mut tenants = Vec::new();
        for file in &files {
            let loaded = read_tenant_file(file)?;
            info!("Loaded {} tenant record(s) from {}", loaded.len(), file.display());
            tenants.extend(loaded);
        }

        if tenants.is_empty() {
            return Err(SiteError::EmptyRegistry(path.display().to_string()));
        }

        Ok(Self::new(tenants))
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TenantConfig> {
        self.tenants.iter()
    }

    pub fn first(&self) -> Option<&TenantConfig> {
        self.tenants.first()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&TenantConfig> {
        self.tenants.iter().find(|t| t.id == id)
    }

    /// First record whose domain equals `host`. Hosts must already be normalized.
    pub fn find_by_domain(&self, host: &str) -> Option<&TenantConfig> {
        if host.is_empty() {
            return None;
        }
        self.tenants.iter().find(|t| !t.domain.is_empty() && t.domain == host)
    }

    pub fn default_tenant(&self) -> Option<&TenantConfig> {
        self.find_by_id(DEFAULT_TENANT_ID)
    }

    /// Report authoring mistakes without rejecting the registry.
    fn audit(&self) {
        let defaults = self.tenants.iter().filter(|t| t.is_default()).count();
        match defaults {
            0 => warn!("Tenant registry has no \"{}\" record; unknown hosts will fail", DEFAULT_TENANT_ID),
            1 => {}
            n => warn!("Tenant registry has {} \"{}\" records; the first one is used", n, DEFAULT_TENANT_ID),
        }

        let mut ids = HashSet::new();
        let mut domains = HashSet::new();
        for tenant in &self.tenants {
            if !ids.insert(tenant.id.as_str()) {
                warn!("Duplicate tenant id \"{}\"; the first record wins", tenant.id);
            }
            if tenant.domain.is_empty() {
                if !tenant.is_default() {
                    warn!("Tenant \"{}\" has no domain and can only be reached via the dev override", tenant.id);
                }
            } else if !domains.insert(tenant.domain.as_str()) {
                warn!("Duplicate tenant domain \"{}\" (tenant \"{}\"); the first record wins", tenant.domain, tenant.id);
            }
        }
    }
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let entries = fs::read_dir(dir).map_err(|source| SiteError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SiteError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

fn read_tenant_file(path: &Path) -> Result<Vec<TenantConfig>, SiteError> {
    let raw = fs::read_to_string(path).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // 文件可以是单条记录或记录数组；直接按类型解析，错误信息会指出具体字段
    let parsed = if raw.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<TenantConfig>>(&raw)
    } else {
        serde_json::from_str::<TenantConfig>(&raw).map(|tenant| vec![tenant])
    };

    parsed.map_err(|source| SiteError::TenantFile {
        path: path.to_path_buf(),
        source,
    })
}

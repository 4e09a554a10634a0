use crate::registry::TenantRegistry;
use crate::types::{DevConfig, SiteError, TenantConfig, DEFAULT_TENANT_ID};
use crate::utils::{is_dev_host, normalize_host};
use std::sync::Arc;
use tracing::{debug, warn};

/// 租户解析器
///
/// Maps an inbound host (plus the dev override parameter) to exactly one
/// tenant record. Resolution is a pure lookup against the pre-loaded registry.
#[derive(Debug, Clone)]
pub struct TenantResolver {
    registry: Arc<TenantRegistry>,
    dev: DevConfig,
}

impl TenantResolver {
    pub fn new(registry: Arc<TenantRegistry>, dev: DevConfig) -> Self {
        Self { registry, dev }
    }

    pub fn registry(&self) -> &TenantRegistry {
        &self.registry
    }

    pub fn resolve(&self, host: Option<&str>, override_id: Option<&str>) -> Result<&TenantConfig, SiteError> {
        let raw_host = host.unwrap_or_default();

        if is_dev_host(raw_host, &self.dev.host_markers) {
            if let Some(tenant) = self.resolve_dev(override_id) {
                return Ok(tenant);
            }
        }

        let host = normalize_host(raw_host);
        if let Some(tenant) = self.registry.find_by_domain(&host) {
            debug!("Resolved host {} to tenant {}", host, tenant.id);
            return Ok(tenant);
        }

        match self.registry.default_tenant() {
            Some(tenant) => {
                warn!("Unknown domain: {}. Serving default client.", host);
                Ok(tenant)
            }
            None => Err(SiteError::DefaultTenantMissing),
        }
    }

    /// Preview selection on a local machine: the named id, else the first record.
    fn resolve_dev(&self, override_id: Option<&str>) -> Option<&TenantConfig> {
        let requested = override_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .filter(|id| self.dev.allow_default_override || *id != DEFAULT_TENANT_ID);

        if let Some(id) = requested {
            if let Some(tenant) = self.registry.find_by_id(id) {
                debug!("Dev override selected tenant {}", tenant.id);
                return Some(tenant);
            }
            warn!("Dev override names unknown tenant {}; using the first record", id);
        }

        self.registry.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::tenant;

    fn resolver(tenants: Vec<TenantConfig>) -> TenantResolver {
        TenantResolver::new(Arc::new(TenantRegistry::new(tenants)), DevConfig::default())
    }

    fn sample() -> TenantResolver {
        resolver(vec![
            tenant("mersin", "mersintaksi.com"),
            tenant("adana", "adanataksi.com"),
            tenant("default", "taxi-default.com"),
        ])
    }

    #[test]
    fn test_exact_domain_match() {
        let resolver = sample();
        for t in resolver.registry().iter() {
            let resolved = resolver.resolve(Some(&t.domain), None).unwrap();
            assert_eq!(resolved, t);
        }
    }

    #[test]
    fn test_www_prefix_is_ignored() {
        let resolver = sample();
        let bare = resolver.resolve(Some("adanataksi.com"), None).unwrap();
        let www = resolver.resolve(Some("www.adanataksi.com"), None).unwrap();
        assert_eq!(bare.id, "adana");
        assert_eq!(bare, www);

        let default = resolver.resolve(Some("www.taxi-default.com"), None).unwrap();
        assert_eq!(default.id, "default");
    }

    #[test]
    fn test_port_and_case_are_ignored() {
        let resolver = sample();
        assert_eq!(resolver.resolve(Some("MersinTaksi.com:443"), None).unwrap().id, "mersin");
    }

    #[test]
    fn test_unknown_host_falls_back_to_default() {
        let resolver = resolver(vec![tenant("default", "taxi-default.com")]);
        assert_eq!(resolver.resolve(Some("unknown.com"), None).unwrap().id, "default");
        assert_eq!(resolver.resolve(None, None).unwrap().id, "default");
    }

    #[test]
    fn test_override_ignored_outside_dev() {
        let resolver = sample();
        let resolved = resolver.resolve(Some("mersintaksi.com"), Some("adana")).unwrap();
        assert_eq!(resolved.id, "mersin");
    }

    #[test]
    fn test_missing_default_is_an_error() {
        let resolver = resolver(vec![tenant("mersin", "mersintaksi.com")]);
        assert!(matches!(
            resolver.resolve(Some("unknown.com"), None),
            Err(SiteError::DefaultTenantMissing)
        ));
        // 已知域名不受影响
        assert!(resolver.resolve(Some("mersintaksi.com"), None).is_ok());
    }

    #[test]
    fn test_dev_override_selects_by_id() {
        let resolver = sample();
        let resolved = resolver.resolve(Some("localhost:3000"), Some("adana")).unwrap();
        assert_eq!(resolved.id, "adana");
    }

    #[test]
    fn test_dev_override_unknown_id_uses_first_record() {
        let resolver = sample();
        let resolved = resolver.resolve(Some("localhost:3000"), Some("missingid")).unwrap();
        assert_eq!(resolved.id, "mersin");
    }

    #[test]
    fn test_dev_without_override_uses_first_record() {
        let resolver = sample();
        assert_eq!(resolver.resolve(Some("127.0.0.1:3000"), None).unwrap().id, "mersin");
        assert_eq!(resolver.resolve(Some("localhost"), Some("  ")).unwrap().id, "mersin");
    }

    #[test]
    fn test_dev_override_of_default_is_configurable() {
        let tenants = vec![tenant("mersin", "mersintaksi.com"), tenant("default", "")];

        let allowing = resolver(tenants.clone());
        assert_eq!(allowing.resolve(Some("localhost"), Some("default")).unwrap().id, "default");

        let dev = DevConfig {
            allow_default_override: false,
            ..DevConfig::default()
        };
        let denying = TenantResolver::new(Arc::new(TenantRegistry::new(tenants)), dev);
        assert_eq!(denying.resolve(Some("localhost"), Some("default")).unwrap().id, "mersin");
    }

    #[test]
    fn test_duplicate_domains_resolve_to_first_record() {
        let resolver = resolver(vec![
            tenant("first", "shared.com"),
            tenant("second", "shared.com"),
            tenant("default", ""),
        ]);
        assert_eq!(resolver.resolve(Some("www.shared.com"), None).unwrap().id, "first");
    }
}

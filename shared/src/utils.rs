// Host 工具函数

/// Remove a single leading `www.` label.
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Drop a trailing `:port`, leaving bracketed IPv6 literals intact.
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Canonical form used to compare an inbound `Host` header with a tenant domain.
pub fn normalize_host(host: &str) -> String {
    let host = strip_port(host.trim()).to_ascii_lowercase();
    strip_www(&host).to_string()
}

/// Whether `host` names a local development machine.
pub fn is_dev_host(host: &str, markers: &[String]) -> bool {
    let host = host.to_ascii_lowercase();
    markers
        .iter()
        .filter(|m| !m.is_empty())
        .any(|m| host.contains(&m.to_ascii_lowercase()))
}

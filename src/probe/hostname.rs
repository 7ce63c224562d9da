use crate::constants::PRINTER_KEYWORDS;
use dns_lookup::lookup_addr;
use std::net::{IpAddr, Ipv4Addr};

/// Reverse DNS off the async path. Resolver failures and useless names
/// ("localhost") read as no data.
pub async fn reverse_dns(ip: Ipv4Addr) -> Option<String> {
    let target: IpAddr = ip.into();
    let name = tokio::task::spawn_blocking(move || lookup_addr(&target).ok())
        .await
        .ok()
        .flatten()?;
    let trimmed = name.trim().trim_end_matches('.');
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("localhost")
        || trimmed == ip.to_string()
    {
        return None;
    }
    Some(trimmed.to_string())
}

/// Weak heuristic: does the hostname itself mention a printer keyword?
/// Kept deliberately naive; its hits carry the low-confidence
/// `Hostname` source tag.
pub fn looks_like_printer(hostname: &str) -> bool {
    let lower = hostname.to_lowercase();
    PRINTER_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

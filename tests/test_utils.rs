use printscout::model::{ProbeCandidate, ProbeSource};
use printscout::ScanConfig;
use std::net::Ipv4Addr;

/// Scan configuration with short timeouts and SNMP disabled, suitable
/// for probing loopback listeners in tests.
#[allow(dead_code)]
pub fn fast_config() -> ScanConfig {
    ScanConfig {
        snmp_community: String::new(),
        ping_timeout_ms: 50,
        tcp_connect_timeout_ms: 200,
        http_read_timeout_ms: 300,
        snmp_timeout_ms: 100,
        max_concurrent_probes: 8,
        ..ScanConfig::default()
    }
}

/// Create a test candidate with the given identity fields.
#[allow(dead_code)]
pub fn create_candidate(
    ip: &str,
    name: Option<&str>,
    model: Option<&str>,
    source: ProbeSource,
) -> ProbeCandidate {
    ProbeCandidate {
        ip: ip.parse::<Ipv4Addr>().unwrap(),
        name: name.map(|s| s.to_string()),
        model: model.map(|s| s.to_string()),
        status: "Online".to_string(),
        source,
        web_port: None,
    }
}

use crate::config::ScanConfig;
use crate::constants::STATUS_ONLINE;
use crate::model::{ProbeCandidate, ProbeSource};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub mod hostname;
pub mod http;
pub mod ping;
pub mod port;
pub mod snmp;

pub use snmp::{select_snmp_probe, NoopSnmpProbe, SnmpProbe};

/// Run the ordered probe chain against a single host and fold whatever
/// partial evidence turns up into one candidate, or `None` if nothing
/// suggests a printer.
///
/// Sub-steps are strictly sequential and individually degraded: an I/O
/// failure in any one of them means "no data for that step", never an
/// error for the host.
pub async fn probe_host(
    ip: Ipv4Addr,
    config: Arc<ScanConfig>,
    snmp: Arc<dyn SnmpProbe>,
) -> Option<ProbeCandidate> {
    let started = Instant::now();

    // 1. reachability; failure does not end the pipeline, firewalled
    //    hosts may still answer on service ports
    let reachable = ping::is_reachable(ip, config.ping_timeout_ms).await;

    // 2. printer service ports in order
    let open_port = port::first_open_port(ip, &config.printer_ports, config.tcp_connect_timeout_ms).await;

    let candidate = match open_port {
        Some(open) => Some(confirmed_by_port(ip, open, &config, snmp.as_ref()).await),
        None => {
            // 3. web interface sniff; a keyword hit short-circuits
            if let Some(hit) = http::sniff_web(ip, &config).await {
                Some(ProbeCandidate {
                    ip,
                    model: hit.title.clone(),
                    name: hit.title,
                    status: STATUS_ONLINE.to_string(),
                    source: ProbeSource::Http(hit.port),
                    web_port: Some(hit.port),
                })
            } else if reachable {
                // 4. hostname heuristic, only for hosts that answered ping
                hostname_candidate(ip, true, hostname::reverse_dns(ip).await)
            } else {
                None
            }
        }
    };

    debug!(
        "probe of {} finished in {:?} ({})",
        ip,
        started.elapsed(),
        candidate
            .as_ref()
            .map(|c| c.source.to_string())
            .unwrap_or_else(|| "no candidate".to_string())
    );
    candidate
}

/// Fold the evidence of the hostname heuristic: a host that answered
/// ping and whose reverse-DNS name mentions a printer keyword becomes a
/// low-confidence `Hostname` candidate; everything else is no printer.
pub fn hostname_candidate(
    ip: Ipv4Addr,
    reachable: bool,
    host: Option<String>,
) -> Option<ProbeCandidate> {
    if !reachable {
        return None;
    }
    match host {
        Some(host) if hostname::looks_like_printer(&host) => Some(ProbeCandidate {
            ip,
            name: Some(host),
            model: None,
            status: STATUS_ONLINE.to_string(),
            source: ProbeSource::Hostname,
            web_port: None,
        }),
        _ => None,
    }
}

/// A printer port answered: gather best-effort SNMP identity, reverse
/// DNS and a web title, then merge. Name priority is SNMP sysName, then
/// HTTP title, then reverse DNS, then the synthesized fallback.
async fn confirmed_by_port(
    ip: Ipv4Addr,
    _open_port: u16,
    config: &ScanConfig,
    snmp: &dyn SnmpProbe,
) -> ProbeCandidate {
    let info = snmp.query(ip).await;
    let rdns = hostname::reverse_dns(ip).await;

    let mut web_port = None;
    let mut title = None;
    for &p in &config.http_ports {
        if let Some(t) = http::fetch_title(ip, p, config).await {
            web_port = Some(p);
            title = Some(t);
            break;
        }
    }

    let name = info
        .name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| title.clone())
        .or(rdns);
    let model = info.descr.filter(|d| !d.trim().is_empty()).or(title);

    ProbeCandidate {
        ip,
        name,
        model,
        status: STATUS_ONLINE.to_string(),
        source: ProbeSource::Scan,
        web_port,
    }
}

use std::fmt;
use std::net::Ipv4Addr;

/// Which mechanism produced a candidate. Native sources outrank probe
/// results during deduplication; `Hostname` is the weakest signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeSource {
    Wmi,
    GetPrinter,
    EventLog,
    Scan,
    Hostname,
    Http(u16),
}

impl fmt::Display for ProbeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeSource::Wmi => write!(f, "WMI"),
            ProbeSource::GetPrinter => write!(f, "GetPrinter"),
            ProbeSource::EventLog => write!(f, "EventLog"),
            ProbeSource::Scan => write!(f, "Scan"),
            ProbeSource::Hostname => write!(f, "Hostname"),
            ProbeSource::Http(port) => write!(f, "HTTP-{}", port),
        }
    }
}

/// Transient result of probing one host (or one native enumeration hit).
/// Produced once, consumed once by the aggregator, never persisted as-is.
#[derive(Debug, Clone)]
pub struct ProbeCandidate {
    pub ip: Ipv4Addr,
    pub name: Option<String>,
    pub model: Option<String>,
    pub status: String,
    pub source: ProbeSource,
    pub web_port: Option<u16>,
}

impl ProbeCandidate {
    /// Display name with the synthesized fallback applied.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Printer {}", self.ip))
    }
}

/// One persisted catalog row, keyed by unique IP. Owned by the store;
/// reporting collaborators read it back through `CatalogStore::all`.
#[derive(Debug, Clone)]
pub struct DiscoveredPrinter {
    pub id: i64,
    pub name: String,
    pub ip: String,
    pub model: String,
    pub status: String,
    pub detected_at: String,
}

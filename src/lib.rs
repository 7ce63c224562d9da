//! printscout - best-effort LAN printer discovery
//!
//! Locates network-attached printers on a flat subnet by fusing several
//! unreliable signals: native OS printer enumeration, print-service
//! event-log mining, ICMP reachability, printer-port scanning, SNMP
//! identity queries, web-interface sniffing and a reverse-DNS hostname
//! heuristic. Results land in a deduplicated SQLite catalog keyed by IP.

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod model;
pub mod native;
pub mod preflight;
pub mod probe;
pub mod range;
pub mod scheduler;
pub mod store;

// Re-export commonly used types for convenience
pub use config::ScanConfig;
pub use engine::ScanOrchestrator;
pub use errors::{DiscoveryError, ProbeError};
pub use model::{DiscoveredPrinter, ProbeCandidate, ProbeSource};
pub use probe::{probe_host, select_snmp_probe, NoopSnmpProbe, SnmpProbe};
pub use range::generate_range;
pub use store::CatalogStore;

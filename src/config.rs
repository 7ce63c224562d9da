use crate::constants;
use std::path::PathBuf;

/// Configuration for one discovery session. Built once, passed to the
/// orchestrator and shared read-only by every concurrent probe.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// First address of the scan range (dotted quad)
    pub range_start: String,

    /// Last address of the scan range; a last octet above 255 means
    /// "the whole /24 of this prefix"
    pub range_end: String,

    /// SNMP v2c community string; empty disables SNMP entirely
    pub snmp_community: String,

    /// Timeout in milliseconds for ICMP reachability checks
    pub ping_timeout_ms: u64,

    /// Timeout in milliseconds for TCP connection attempts
    pub tcp_connect_timeout_ms: u64,

    /// Timeout in milliseconds for reading an HTTP response body
    pub http_read_timeout_ms: u64,

    /// Timeout in milliseconds for a single SNMP request
    pub snmp_timeout_ms: u64,

    /// Maximum number of per-host probe pipelines in flight at once
    pub max_concurrent_probes: usize,

    /// Printer service ports, checked in order
    pub printer_ports: Vec<u16>,

    /// Web management ports checked when no printer port is open
    pub http_ports: Vec<u16>,

    /// Path of the SQLite catalog database
    pub db_path: PathBuf,

    /// Directory receiving the scan log file
    pub log_dir: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            range_start: constants::DEFAULT_RANGE_START.to_string(),
            range_end: constants::DEFAULT_RANGE_END.to_string(),
            snmp_community: "public".to_string(),
            ping_timeout_ms: 1000,
            tcp_connect_timeout_ms: 300,
            http_read_timeout_ms: 2000,
            snmp_timeout_ms: 2000,
            max_concurrent_probes: 100,
            printer_ports: constants::PRINTER_PORTS.to_vec(),
            http_ports: constants::HTTP_PORTS.to_vec(),
            db_path: PathBuf::from("printers.db"),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl ScanConfig {
    /// Directory that must be writable for the catalog database.
    pub fn catalog_dir(&self) -> PathBuf {
        match self.db_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

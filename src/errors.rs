use thiserror::Error;

/// Fatal error types for the discovery engine. Anything that reaches the
/// caller through this enum aborts the scan; per-host trouble never does.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Preflight Error: {0}")]
    Preflight(String),

    #[error("Database Error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error: {0}")]
    Other(String),
}

/// Soft error for a single probe sub-step. Always reduced to `Option`
/// (or logged at debug) at the step boundary, never propagated upward.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Connect Error: {0}")]
    Connect(String),

    #[error("HTTP Error: {0}")]
    Http(String),

    #[error("SNMP Error: {0}")]
    Snmp(String),

    #[error("DNS Error: {0}")]
    Dns(String),

    #[error("Command Error: {0}")]
    Command(String),
}

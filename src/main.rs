// ==========================================================
//  printscout — LAN printer discovery engine
// ==========================================================

use printscout::{DiscoveryError, ScanConfig, ScanOrchestrator};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), DiscoveryError> {
    let raw_args: Vec<String> = std::env::args().collect();
    let mut args = raw_args.iter().skip(1);

    let mut config = ScanConfig::default();

    // Parse command line arguments
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--start" => {
                if let Some(value) = args.next() {
                    config.range_start = value.clone();
                }
            }
            "--end" => {
                if let Some(value) = args.next() {
                    config.range_end = value.clone();
                }
            }
            "--db" => {
                if let Some(value) = args.next() {
                    config.db_path = PathBuf::from(value);
                }
            }
            "--community" => {
                if let Some(value) = args.next() {
                    config.snmp_community = value.clone();
                }
            }
            "--jobs" | "-j" => {
                if let Some(jobs) = args.next().and_then(|s| s.parse().ok()) {
                    config.max_concurrent_probes = jobs;
                }
            }
            "--help" | "-h" => {
                println!("Usage: printscout [OPTIONS]");
                println!("Options:");
                println!("  --start <IP>        first address of the scan range");
                println!("  --end <IP>          last address; a last octet > 255 means the whole /24");
                println!("  --db <PATH>         SQLite catalog path (default: printers.db)");
                println!("  --community <S>     SNMP community string (default: public; empty disables SNMP)");
                println!("  -j, --jobs <N>      max concurrent probes (default: 100)");
                println!("  -h, --help          show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {} (see --help)", other);
                return Err(DiscoveryError::Other(format!("unknown option {}", other)));
            }
        }
    }

    init_logging(&config);

    let orchestrator = ScanOrchestrator::new(config);
    let discovered = orchestrator.run_scan().await?;
    println!("Discovered {} printer(s)", discovered);
    Ok(())
}

/// Stdout logging plus a plain-text file under the configured log dir.
/// The file layer is best effort; preflight reports the real permission
/// verdict later.
fn init_logging(config: &ScanConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false));

    let _ = std::fs::create_dir_all(&config.log_dir);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_dir.join("printscout.log"));

    match log_file {
        Ok(file) => registry
            .with(
                fmt::layer()
                    .with_writer(std::sync::Arc::new(file))
                    .with_ansi(false)
                    .with_target(false),
            )
            .init(),
        Err(_) => registry.init(),
    }
}

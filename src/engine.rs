use crate::config::ScanConfig;
use crate::errors::DiscoveryError;
use crate::model::ProbeCandidate;
use crate::probe::{self, SnmpProbe};
use crate::range::generate_range;
use crate::scheduler::scan_all;
use crate::store::CatalogStore;
use crate::{native, preflight};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Orchestrates one discovery session in a fixed stage order: preflight,
/// native enumeration, range generation, concurrent probing, persistence
/// and the final summary. The only component exposed to callers.
pub struct ScanOrchestrator {
    config: Arc<ScanConfig>,
    snmp: Arc<dyn SnmpProbe>,
}

impl ScanOrchestrator {
    pub fn new(config: ScanConfig) -> Self {
        let snmp = probe::select_snmp_probe(&config);
        Self {
            config: Arc::new(config),
            snmp,
        }
    }

    /// Run the full scan and return the number of distinct printers
    /// discovered in this session. Only a preflight failure or a
    /// database-open failure aborts; everything per-host is best effort.
    pub async fn run_scan(&self) -> Result<usize, DiscoveryError> {
        let started = Instant::now();

        info!("[ETAPA 1] checking write permissions");
        let (ok, warnings) = preflight::check_permissions(&self.config);
        for warning in &warnings {
            warn!("{}", warning);
        }
        if !ok {
            return Err(DiscoveryError::Preflight(warnings.join("; ")));
        }

        let store = CatalogStore::open(&self.config.db_path)?;
        info!("SNMP capability: {}", self.snmp.name());

        info!("[ETAPA 2] querying native printer subsystem");
        let native_found = native::discover_native();
        info!("native discovery returned {} candidate(s)", native_found.len());
        let known: HashSet<Ipv4Addr> = native_found.iter().map(|c| c.ip).collect();
        let mut discovered = 0usize;
        for candidate in &native_found {
            log_candidate(candidate);
            store.save(candidate);
            discovered += 1;
        }

        info!(
            "[ETAPA 3] generating scan range {} - {}",
            self.config.range_start, self.config.range_end
        );
        let range = generate_range(&self.config.range_start, &self.config.range_end);
        let targets = exclude_known(range, &known);

        info!(
            "[ETAPA 4] probing {} host(s), at most {} in flight",
            targets.len(),
            self.config.max_concurrent_probes
        );
        let attempted = targets.len();
        let config = self.config.clone();
        let snmp = self.snmp.clone();
        let probed = scan_all(
            targets,
            self.config.max_concurrent_probes,
            move |ip| probe::probe_host(ip, config.clone(), snmp.clone()),
            |candidate| {
                log_candidate(&candidate);
                store.save(&candidate);
            },
        )
        .await;
        discovered += probed;

        let elapsed = started.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            attempted as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        info!(
            "[ETAPA 5] scan finished: {} printer(s) in {:.2}s ({:.1} IPs/s)",
            discovered,
            elapsed.as_secs_f64(),
            throughput
        );

        if let Ok(rows) = store.all() {
            println!("{}", catalog_table(&rows));
        }

        Ok(discovered)
    }
}

fn log_candidate(candidate: &ProbeCandidate) {
    info!(
        "{} | {} | {} | {}",
        candidate.ip,
        candidate.display_name(),
        candidate.model.as_deref().unwrap_or("-"),
        candidate.source
    );
}

/// Drop addresses the native adapter already accounted for, before the
/// scheduler ever sees them. Native results take priority and are not
/// re-probed.
pub fn exclude_known(range: Vec<Ipv4Addr>, known: &HashSet<Ipv4Addr>) -> Vec<Ipv4Addr> {
    range.into_iter().filter(|ip| !known.contains(ip)).collect()
}

fn catalog_table(rows: &[crate::model::DiscoveredPrinter]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table.set_header(vec!["IP", "Name", "Model", "Status", "Detected"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.ip),
            Cell::new(&row.name),
            Cell::new(&row.model),
            Cell::new(&row.status),
            Cell::new(&row.detected_at),
        ]);
    }
    table
}

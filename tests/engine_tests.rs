use printscout::engine::exclude_known;
use printscout::{CatalogStore, ScanOrchestrator};
use std::collections::HashSet;
use std::net::Ipv4Addr;
use test_utils::fast_config;
use tokio::net::TcpListener;

mod test_utils;

#[test]
fn known_ips_are_removed_before_scheduling() {
    let range: Vec<Ipv4Addr> = (1..=10).map(|h| Ipv4Addr::new(192, 168, 0, h)).collect();
    let known: HashSet<Ipv4Addr> = [Ipv4Addr::new(192, 168, 0, 3), Ipv4Addr::new(192, 168, 0, 7)]
        .into_iter()
        .collect();

    let targets = exclude_known(range, &known);
    assert_eq!(targets.len(), 8);
    assert!(targets.iter().all(|ip| !known.contains(ip)));
}

#[tokio::test(flavor = "multi_thread")]
async fn full_scan_persists_a_loopback_listener() {
    let dir = tempfile::tempdir().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let mut config = fast_config();
    config.range_start = "127.0.0.1".to_string();
    config.range_end = "127.0.0.1".to_string();
    config.printer_ports = vec![port];
    config.http_ports = Vec::new();
    config.db_path = dir.path().join("printers.db");
    config.log_dir = dir.path().join("logs");
    let db_path = config.db_path.clone();

    let orchestrator = ScanOrchestrator::new(config);
    let discovered = orchestrator.run_scan().await.unwrap();
    assert_eq!(discovered, 1);

    let store = CatalogStore::open(&db_path).unwrap();
    assert_eq!(store.count().unwrap(), 1);
    let rows = store.all().unwrap();
    assert_eq!(rows[0].ip, "127.0.0.1");
    assert_eq!(rows[0].status, "Online");
    assert_eq!(rows[0].name, "Printer 127.0.0.1");
    drop(listener);
}

#[tokio::test(flavor = "multi_thread")]
async fn rescan_does_not_duplicate_rows() {
    let dir = tempfile::tempdir().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let mut config = fast_config();
    config.range_start = "127.0.0.1".to_string();
    config.range_end = "127.0.0.1".to_string();
    config.printer_ports = vec![port];
    config.http_ports = Vec::new();
    config.db_path = dir.path().join("printers.db");
    config.log_dir = dir.path().join("logs");
    let db_path = config.db_path.clone();

    let orchestrator = ScanOrchestrator::new(config);
    assert_eq!(orchestrator.run_scan().await.unwrap(), 1);
    assert_eq!(orchestrator.run_scan().await.unwrap(), 1);

    let store = CatalogStore::open(&db_path).unwrap();
    assert_eq!(store.count().unwrap(), 1);
    drop(listener);
}

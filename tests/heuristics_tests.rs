use printscout::model::ProbeSource;
use printscout::native::{dedup_by_ip, extract_ips};
use printscout::probe::hostname::looks_like_printer;
use printscout::probe::hostname_candidate;
use printscout::probe::http::{contains_printer_keyword, extract_title};
use std::net::Ipv4Addr;
use test_utils::create_candidate;

mod test_utils;

#[test]
fn printer_hostnames_are_recognized() {
    for name in [
        "hp-laserjet-3f.corp.local",
        "PRINTER-RADIOLOGY",
        "epson-wf3720",
        "impressora-uti2",
    ] {
        assert!(looks_like_printer(name), "{} should look like a printer", name);
    }
}

#[test]
fn generic_hostnames_are_not_recognized() {
    for name in ["workstation-12", "db-server-3", "nas01.corp.local"] {
        assert!(!looks_like_printer(name), "{} should not look like a printer", name);
    }
}

#[test]
fn reachable_printer_hostname_becomes_low_confidence_candidate() {
    let ip = Ipv4Addr::new(192, 168, 0, 31);
    let candidate = hostname_candidate(ip, true, Some("hp-laserjet-3f.corp.local".to_string()))
        .expect("printer hostname on a reachable host must produce a candidate");
    assert_eq!(candidate.source, ProbeSource::Hostname);
    assert_eq!(candidate.name.as_deref(), Some("hp-laserjet-3f.corp.local"));
    assert_eq!(candidate.status, "Online");
}

#[test]
fn hostname_heuristic_needs_reachability_and_a_keyword() {
    let ip = Ipv4Addr::new(192, 168, 0, 31);
    // not reachable: even a printer-looking name is ignored
    assert!(hostname_candidate(ip, false, Some("printer-hall2".to_string())).is_none());
    // reachable but generically named, or nameless
    assert!(hostname_candidate(ip, true, Some("workstation-12".to_string())).is_none());
    assert!(hostname_candidate(ip, true, None).is_none());
}

#[test]
fn title_extraction_handles_attributes_and_case() {
    let body = r#"<HTML><HEAD><TITLE lang="en"> HP LaserJet 400 </TITLE></HEAD></HTML>"#;
    assert_eq!(extract_title(body).as_deref(), Some("HP LaserJet 400"));
    assert_eq!(extract_title("<html><body>no title</body></html>"), None);
    assert_eq!(extract_title("<title></title>"), None);
}

#[test]
fn keyword_matching_is_case_insensitive() {
    assert!(contains_printer_keyword("Embedded JetDirect status page"));
    assert!(contains_printer_keyword("CUPS 2.4 administration"));
    assert!(!contains_printer_keyword("Apache default welcome page"));
}

#[test]
fn ip_extraction_from_command_output() {
    let text = "Printer on IP_192.168.0.55 via TCPMon\nanother line 10.1.2.3:9100\njunk 999.1.1.1";
    let ips = extract_ips(text);
    assert!(ips.contains(&Ipv4Addr::new(192, 168, 0, 55)));
    assert!(ips.contains(&Ipv4Addr::new(10, 1, 2, 3)));
    assert!(!ips.iter().any(|ip| ip.to_string().starts_with("999")));
}

#[test]
fn dedup_keeps_first_seen_source() {
    let merged = dedup_by_ip(vec![
        create_candidate("192.168.0.9", Some("from wmi"), None, ProbeSource::Wmi),
        create_candidate("192.168.0.9", Some("from scan"), None, ProbeSource::Scan),
        create_candidate("192.168.0.10", None, None, ProbeSource::EventLog),
    ]);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].source, ProbeSource::Wmi);
    assert_eq!(merged[0].name.as_deref(), Some("from wmi"));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn native_discovery_is_empty_off_windows() {
    assert!(printscout::native::discover_native().is_empty());
}

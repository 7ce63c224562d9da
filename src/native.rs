use crate::model::ProbeCandidate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::net::Ipv4Addr;

// no word boundaries: port names like "IP_192.168.0.55" must still match
static IPV4_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})").expect("valid regex"));

/// Query the platform's printer subsystem and its print-service event log
/// for already-known network printers.
///
/// The three sources (WMI enumeration, `Get-Printer`, event-log mining)
/// run independently; a failure in one yields an empty list for that
/// source only. The combined output is deduplicated by IP, first-seen
/// source winning.
#[cfg(target_os = "windows")]
pub fn discover_native() -> Vec<ProbeCandidate> {
    use tracing::debug;

    let mut found = Vec::new();
    found.extend(windows::query_wmi().unwrap_or_else(|e| {
        debug!("WMI printer query failed: {}", e);
        Vec::new()
    }));
    found.extend(windows::query_get_printer().unwrap_or_else(|e| {
        debug!("Get-Printer query failed: {}", e);
        Vec::new()
    }));
    found.extend(windows::mine_event_log().unwrap_or_else(|e| {
        debug!("print-service event log query failed: {}", e);
        Vec::new()
    }));
    dedup_by_ip(found)
}

/// Native printer enumeration exists only on Windows; elsewhere the
/// adapter reports nothing, which is not an error.
#[cfg(not(target_os = "windows"))]
pub fn discover_native() -> Vec<ProbeCandidate> {
    Vec::new()
}

/// Keep the first candidate seen for each IP, preserving arrival order.
pub fn dedup_by_ip(candidates: Vec<ProbeCandidate>) -> Vec<ProbeCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.ip))
        .collect()
}

/// Pull every dotted-quad that parses as an IPv4 address out of raw
/// command or event-log output.
pub fn extract_ips(text: &str) -> Vec<Ipv4Addr> {
    IPV4_RE
        .captures_iter(text)
        .filter_map(|cap| cap[1].parse().ok())
        .collect()
}

#[cfg(target_os = "windows")]
mod windows {
    use super::extract_ips;
    use crate::constants::{PRINT_JOB_EVENT_ID, PRINT_SERVICE_CHANNEL, STATUS_ONLINE};
    use crate::errors::ProbeError;
    use crate::model::{ProbeCandidate, ProbeSource};
    use std::process::Command;

    fn run(program: &str, args: &[&str]) -> Result<String, ProbeError> {
        let out = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ProbeError::Command(format!("{}: {}", program, e)))?;
        if !out.status.success() {
            return Err(ProbeError::Command(format!(
                "{} exited with {}",
                program, out.status
            )));
        }
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }

    fn candidate(ip: std::net::Ipv4Addr, name: Option<String>, source: ProbeSource) -> ProbeCandidate {
        ProbeCandidate {
            ip,
            name,
            model: None,
            status: STATUS_ONLINE.to_string(),
            source,
            web_port: None,
        }
    }

    /// Installed printers via WMI; the port name usually carries the IP
    /// for network-attached devices.
    pub fn query_wmi() -> Result<Vec<ProbeCandidate>, ProbeError> {
        let output = run(
            "wmic",
            &["printer", "get", "Name,PortName", "/format:csv"],
        )?;
        Ok(parse_name_port_lines(&output, ProbeSource::Wmi))
    }

    /// Shared/installed printers via the PowerShell print cmdlets.
    pub fn query_get_printer() -> Result<Vec<ProbeCandidate>, ProbeError> {
        let output = run(
            "powershell",
            &[
                "-NoProfile",
                "-Command",
                "Get-Printer | Select-Object Name,PortName | ConvertTo-Csv -NoTypeInformation",
            ],
        )?;
        Ok(parse_name_port_lines(&output, ProbeSource::GetPrinter))
    }

    /// Recent successful print jobs from the operational event log; each
    /// event's rendered text is pattern-matched for a device address.
    pub fn mine_event_log() -> Result<Vec<ProbeCandidate>, ProbeError> {
        let query = format!("/q:*[System[(EventID={})]]", PRINT_JOB_EVENT_ID);
        let output = run(
            "wevtutil",
            &["qe", PRINT_SERVICE_CHANNEL, &query, "/f:text", "/c:200"],
        )?;
        Ok(extract_ips(&output)
            .into_iter()
            .map(|ip| candidate(ip, None, ProbeSource::EventLog))
            .collect())
    }

    /// Parse CSV-ish `...,Name,PortName` lines, pairing each printer name
    /// with the first address found in its port column.
    fn parse_name_port_lines(output: &str, source: ProbeSource) -> Vec<ProbeCandidate> {
        let mut found = Vec::new();
        for line in output.lines().skip(1) {
            let columns: Vec<&str> = line.trim().trim_matches('"').split(',').collect();
            if columns.len() < 2 {
                continue;
            }
            let name = columns[columns.len() - 2].trim().trim_matches('"');
            let port = columns[columns.len() - 1].trim().trim_matches('"');
            if let Some(ip) = extract_ips(port).into_iter().next() {
                let name = (!name.is_empty()).then(|| name.to_string());
                found.push(candidate(ip, name, source.clone()));
            }
        }
        found
    }
}

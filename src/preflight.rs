use crate::config::ScanConfig;
use std::fs;
use std::io;
use std::path::Path;

/// Marker file used to exercise write permission on a directory.
const MARKER: &str = ".printscout_write_check";

/// Verify the catalog and log directories are writable before any probing
/// starts. A write failure on either path is fatal (`ok = false`); the
/// elevated-privilege check only ever appends a warning.
pub fn check_permissions(config: &ScanConfig) -> (bool, Vec<String>) {
    let mut ok = true;
    let mut warnings = Vec::new();

    for dir in [config.catalog_dir(), config.log_dir.clone()] {
        if let Err(e) = probe_writable(&dir) {
            ok = false;
            warnings.push(format!("no write permission on {}: {}", dir.display(), e));
        }
    }

    if !is_elevated() {
        warnings.push(
            "not running with elevated privileges; ICMP probes may be unavailable".to_string(),
        );
    }

    (ok, warnings)
}

/// Create the directory if missing, then round-trip a marker file.
fn probe_writable(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let marker = dir.join(MARKER);
    fs::write(&marker, b"ok")?;
    fs::remove_file(&marker)?;
    Ok(())
}

/// Whether the process runs as root/administrator. Advisory only.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}

#[cfg(windows)]
pub fn is_elevated() -> bool {
    // `net session` succeeds only in an elevated shell
    std::process::Command::new("net")
        .arg("session")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

#[cfg(not(any(unix, windows)))]
pub fn is_elevated() -> bool {
    false
}

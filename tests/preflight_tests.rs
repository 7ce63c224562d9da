use printscout::preflight::{check_permissions, is_elevated};
use test_utils::fast_config;

mod test_utils;

#[test]
fn writable_directories_pass() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fast_config();
    config.db_path = dir.path().join("catalog").join("printers.db");
    config.log_dir = dir.path().join("logs");

    let (ok, _warnings) = check_permissions(&config);
    assert!(ok);
    // missing directories are created on the way
    assert!(dir.path().join("catalog").is_dir());
    assert!(dir.path().join("logs").is_dir());
}

#[test]
fn privilege_warning_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fast_config();
    config.db_path = dir.path().join("printers.db");
    config.log_dir = dir.path().join("logs");

    let (ok, warnings) = check_permissions(&config);
    assert!(ok);
    if !is_elevated() {
        assert!(warnings.iter().any(|w| w.contains("elevated")));
    }
}

#[cfg(unix)]
#[test]
fn unwritable_directory_is_fatal() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    // root writes anywhere, the check cannot fail there
    if is_elevated() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let mut config = fast_config();
    config.db_path = locked.join("printers.db");
    config.log_dir = dir.path().join("logs");

    let (ok, warnings) = check_permissions(&config);
    assert!(!ok);
    assert!(warnings.iter().any(|w| w.contains("no write permission")));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Printer service ports probed in order: JetDirect raw printing, IPP,
/// LPR and the SNMP agent port. A connect on any of these is treated as
/// strong evidence the host is a print device.
pub const PRINTER_PORTS: &[u16] = &[9100, 631, 515, 161];

/// Web management ports checked when no printer port answers.
pub const HTTP_PORTS: &[u16] = &[80, 443, 8080];

/// Keywords that mark a banner, page title or hostname as printer-related.
/// Deliberately broad; hits on this list alone are low-confidence.
pub const PRINTER_KEYWORDS: &[&str] = &[
    "printer",
    "impressora",
    "print",
    "jetdirect",
    "laserjet",
    "deskjet",
    "officejet",
    "ipp",
    "cups",
    "hp",
    "epson",
    "canon",
    "brother",
    "lexmark",
    "kyocera",
    "ricoh",
    "xerox",
    "samsung",
    "konica",
    "minolta",
    "sharp",
    "zebra",
    "oki",
];

/// SNMP sysName (MIB-II system.sysName.0)
pub const OID_SYS_NAME: &[u64] = &[1, 3, 6, 1, 2, 1, 1, 5, 0];

/// SNMP sysDescr (MIB-II system.sysDescr.0)
pub const OID_SYS_DESCR: &[u64] = &[1, 3, 6, 1, 2, 1, 1, 1, 0];

/// Fallback /24 prefix used when the configured range cannot be parsed.
pub const DEFAULT_SUBNET: [u8; 3] = [192, 168, 0];

pub const DEFAULT_RANGE_START: &str = "192.168.0.1";
pub const DEFAULT_RANGE_END: &str = "192.168.0.254";

pub const STATUS_ONLINE: &str = "Online";

/// Windows print-service operational log and the event id written for
/// every successfully printed document.
pub const PRINT_SERVICE_CHANNEL: &str = "Microsoft-Windows-PrintService/Operational";
pub const PRINT_JOB_EVENT_ID: u32 = 307;

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use surge_ping::ping;
use tokio::time::timeout;

/// ICMP reachability check with a short deadline. Any failure (timeout,
/// missing raw-socket privilege, unreachable) simply reads as "no reply";
/// a firewalled printer may still expose service ports.
pub async fn is_reachable(ip: Ipv4Addr, timeout_ms: u64) -> bool {
    let payload = [0; 56];
    let target: IpAddr = ip.into();
    matches!(
        timeout(Duration::from_millis(timeout_ms), ping(target, &payload)).await,
        Ok(Ok(_))
    )
}

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Attempt a TCP connect with a short deadline.
pub async fn is_port_open(ip: Ipv4Addr, port: u16, timeout_ms: u64) -> bool {
    let addr = SocketAddr::new(ip.into(), port);
    matches!(
        timeout(Duration::from_millis(timeout_ms), TcpStream::connect(addr)).await,
        Ok(Ok(_))
    )
}

/// Walk the configured printer ports in order and return the first one
/// accepting a connection. Sub-steps of one host are sequential; the
/// fan-out across hosts happens in the scheduler.
pub async fn first_open_port(ip: Ipv4Addr, ports: &[u16], timeout_ms: u64) -> Option<u16> {
    for &port in ports {
        if is_port_open(ip, port, timeout_ms).await {
            return Some(port);
        }
    }
    None
}

use crate::config::ScanConfig;
use crate::constants::PRINTER_KEYWORDS;
use crate::errors::ProbeError;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Evidence gathered from one web port.
#[derive(Debug, Clone)]
pub struct WebHit {
    pub port: u16,
    pub title: Option<String>,
    pub keyword_match: bool,
}

/// Probe the configured HTTP(S) ports for a printer-looking web
/// interface and return the first keyword hit. Hosts whose web server
/// connects but yields no readable body are not treated as printers.
pub async fn sniff_web(ip: Ipv4Addr, config: &ScanConfig) -> Option<WebHit> {
    for &port in &config.http_ports {
        match fetch_body(ip, port, config).await {
            Ok(Some(body)) => {
                if contains_printer_keyword(&body) {
                    return Some(WebHit {
                        port,
                        title: extract_title(&body),
                        keyword_match: true,
                    });
                }
            }
            // Connected but unreadable (e.g. TLS on 443): no keyword
            // evidence, keep looking
            Ok(None) => continue,
            Err(_) => continue,
        }
    }
    None
}

/// Best-effort page title from a web port, used as a display name when a
/// printer port already confirmed the device.
pub async fn fetch_title(ip: Ipv4Addr, port: u16, config: &ScanConfig) -> Option<String> {
    match fetch_body(ip, port, config).await {
        Ok(Some(body)) => extract_title(&body),
        _ => None,
    }
}

/// Minimal raw-socket HTTP GET. `Ok(None)` means the connection
/// succeeded but no body could be read.
async fn fetch_body(
    ip: Ipv4Addr,
    port: u16,
    config: &ScanConfig,
) -> Result<Option<String>, ProbeError> {
    let addr = SocketAddr::new(ip.into(), port);
    let connect_timeout = Duration::from_millis(config.tcp_connect_timeout_ms);
    let read_timeout = Duration::from_millis(config.http_read_timeout_ms);

    let mut stream = timeout(connect_timeout, TcpStream::connect(addr))
        .await
        .map_err(|_| ProbeError::Connect(format!("{}:{} connect timeout", ip, port)))?
        .map_err(|e| ProbeError::Connect(format!("{}:{} {}", ip, port, e)))?;

    let request = format!(
        "GET / HTTP/1.1\r\nHost: {}\r\nUser-Agent: printscout/0.1\r\nConnection: close\r\n\r\n",
        ip
    );
    if timeout(connect_timeout, stream.write_all(request.as_bytes()))
        .await
        .map_err(|_| ProbeError::Http(format!("{}:{} write timeout", ip, port)))?
        .is_err()
    {
        return Ok(None);
    }

    let mut buf = vec![0u8; 8192];
    let mut body = Vec::new();
    loop {
        match timeout(read_timeout, stream.read(&mut buf)).await {
            Ok(Ok(0)) => break,
            Ok(Ok(n)) => {
                body.extend_from_slice(&buf[..n]);
                if body.len() >= 64 * 1024 {
                    break;
                }
            }
            _ => break,
        }
    }

    if body.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&body).into_owned()))
}

/// Case-insensitive `<title>` extraction; tolerates attributes on the tag.
pub fn extract_title(body: &str) -> Option<String> {
    let lower = body.to_lowercase();
    let open = lower.find("<title")?;
    let start = lower[open..].find('>')? + open + 1;
    let end = lower[start..].find("</title>")? + start;
    // index into the original body; lowercasing can shift byte offsets
    // for non-ASCII pages, so bail out instead of slicing blindly
    let title = body.get(start..end)?.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Whether the text mentions a printer brand or protocol keyword.
pub fn contains_printer_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    PRINTER_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

use crate::constants::DEFAULT_SUBNET;
use std::net::Ipv4Addr;

/// Expand a start/end pair into a concrete, ascending list of addresses.
///
/// Normal case: inclusive 32-bit walk from `start` to `end`. If the last
/// octet of `end` is numerically above 255 it is treated as a sentinel
/// meaning "the whole /24 of end's prefix" and `start` is ignored. Any
/// other malformed input falls back to the default /24 range instead of
/// failing the scan.
pub fn generate_range(start: &str, end: &str) -> Vec<Ipv4Addr> {
    if let Some(range) = sentinel_subnet(end) {
        return range;
    }

    match (start.parse::<Ipv4Addr>(), end.parse::<Ipv4Addr>()) {
        (Ok(s), Ok(e)) => {
            let lo = u32::from(s);
            let hi = u32::from(e);
            if lo > hi {
                return default_range();
            }
            (lo..=hi).map(Ipv4Addr::from).collect()
        }
        _ => default_range(),
    }
}

/// Recognize the "whole last octet" form: three valid octets followed by
/// a syntactically numeric last octet greater than 255.
fn sentinel_subnet(end: &str) -> Option<Vec<Ipv4Addr>> {
    let parts: Vec<&str> = end.split('.').collect();
    if parts.len() != 4 {
        return None;
    }

    let last: u32 = parts[3].parse().ok()?;
    if last <= 255 {
        return None;
    }

    let a: u8 = parts[0].parse().ok()?;
    let b: u8 = parts[1].parse().ok()?;
    let c: u8 = parts[2].parse().ok()?;
    Some((1..=254).map(|host| Ipv4Addr::new(a, b, c, host)).collect())
}

/// Hard-coded .1-.254 walk of the default subnet.
fn default_range() -> Vec<Ipv4Addr> {
    let [a, b, c] = DEFAULT_SUBNET;
    (1..=254).map(|host| Ipv4Addr::new(a, b, c, host)).collect()
}

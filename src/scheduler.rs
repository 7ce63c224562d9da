use crate::model::ProbeCandidate;
use futures::pin_mut;
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::net::Ipv4Addr;
use tracing::debug;

/// Fan the per-host pipeline out over every candidate IP with a hard cap
/// on simultaneously in-flight probes.
///
/// Each pipeline runs inside its own task so a panic in one host is
/// contained at this boundary and read as "no candidate" without
/// disturbing siblings. Every IP is attempted exactly once; non-empty
/// results are handed to `sink` as they complete, in no particular
/// order. Returns the number of candidates produced.
pub async fn scan_all<P, Fut, S>(ips: Vec<Ipv4Addr>, limit: usize, probe: P, mut sink: S) -> usize
where
    P: Fn(Ipv4Addr) -> Fut,
    Fut: Future<Output = Option<ProbeCandidate>> + Send + 'static,
    S: FnMut(ProbeCandidate),
{
    let results = stream::iter(ips.into_iter().map(|ip| {
        let pipeline = probe(ip);
        async move {
            match tokio::spawn(pipeline).await {
                Ok(candidate) => candidate,
                Err(e) => {
                    debug!("probe task for {} aborted: {}", ip, e);
                    None
                }
            }
        }
    }))
    .buffer_unordered(limit.max(1));

    pin_mut!(results);
    let mut found = 0;
    while let Some(result) = results.next().await {
        if let Some(candidate) = result {
            found += 1;
            sink(candidate);
        }
    }
    found
}

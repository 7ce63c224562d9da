use crate::config::ScanConfig;
use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Best-effort identity data from a device's SNMP agent.
#[derive(Debug, Clone, Default)]
pub struct SnmpInfo {
    pub name: Option<String>,
    pub descr: Option<String>,
}

/// SNMP capability seam. The pipeline only ever talks to this trait; the
/// no-op implementation stands in when SNMP support is compiled out or
/// no community string is configured.
#[async_trait]
pub trait SnmpProbe: Send + Sync {
    /// Query sysName/sysDescr; every failure degrades to empty fields.
    async fn query(&self, ip: Ipv4Addr) -> SnmpInfo;

    fn name(&self) -> &'static str;
}

/// Degraded-capability implementation: always empty.
pub struct NoopSnmpProbe;

#[async_trait]
impl SnmpProbe for NoopSnmpProbe {
    async fn query(&self, _ip: Ipv4Addr) -> SnmpInfo {
        SnmpInfo::default()
    }

    fn name(&self) -> &'static str {
        "SNMP disabled"
    }
}

/// Pick the SNMP implementation for this session. Called once at
/// startup so availability checks never leak into the pipeline.
pub fn select_snmp_probe(config: &ScanConfig) -> Arc<dyn SnmpProbe> {
    #[cfg(feature = "snmp")]
    {
        if !config.snmp_community.is_empty() {
            return Arc::new(v2c::Snmp2Probe::new(
                config.snmp_community.clone(),
                config.snmp_timeout_ms,
            ));
        }
    }
    let _ = config;
    Arc::new(NoopSnmpProbe)
}

#[cfg(feature = "snmp")]
pub mod v2c {
    use super::{SnmpInfo, SnmpProbe};
    use crate::constants::{OID_SYS_DESCR, OID_SYS_NAME};
    use async_trait::async_trait;
    use snmp2::{Oid, SyncSession, Value};
    use std::net::Ipv4Addr;
    use std::time::Duration;
    use tracing::debug;

    /// Real SNMP v2c client over the synchronous `snmp2` session,
    /// off-loaded to the blocking pool so one slow agent cannot stall
    /// probe admission.
    pub struct Snmp2Probe {
        community: String,
        timeout: Duration,
    }

    impl Snmp2Probe {
        pub fn new(community: String, timeout_ms: u64) -> Self {
            Self {
                community,
                timeout: Duration::from_millis(timeout_ms),
            }
        }
    }

    fn get_string(session: &mut SyncSession, oid: &[u64]) -> Option<String> {
        let oid = Oid::from(oid).ok()?;
        let response = session.get(&oid).ok()?;
        match response.varbinds.into_iter().next() {
            Some((_, Value::OctetString(bytes))) => {
                let text = String::from_utf8_lossy(&bytes).trim().to_string();
                (!text.is_empty()).then_some(text)
            }
            _ => None,
        }
    }

    #[async_trait]
    impl SnmpProbe for Snmp2Probe {
        async fn query(&self, ip: Ipv4Addr) -> SnmpInfo {
            let community = self.community.clone();
            let timeout = self.timeout;
            let result = tokio::task::spawn_blocking(move || {
                let target = format!("{}:161", ip);
                let mut session =
                    SyncSession::new_v2c(&target, community.as_bytes(), Some(timeout), 0).ok()?;
                Some(SnmpInfo {
                    name: get_string(&mut session, OID_SYS_NAME),
                    descr: get_string(&mut session, OID_SYS_DESCR),
                })
            })
            .await;

            match result {
                Ok(Some(info)) => info,
                Ok(None) => SnmpInfo::default(),
                Err(e) => {
                    debug!("SNMP query task for {} failed: {}", ip, e);
                    SnmpInfo::default()
                }
            }
        }

        fn name(&self) -> &'static str {
            "SNMP v2c"
        }
    }
}

use crate::errors::DiscoveryError;
use crate::model::{DiscoveredPrinter, ProbeCandidate};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Persistent printer catalog, one row per IP. Each save is its own
/// short transaction; concurrent writers only contend on normal SQLite
/// serialization.
#[derive(Clone)]
pub struct CatalogStore {
    conn: Arc<Mutex<Connection>>,
}

impl CatalogStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DiscoveryError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;",
        )?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory catalog for tests.
    pub fn in_memory() -> Result<Self, DiscoveryError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), DiscoveryError> {
        let conn = self.conn.lock();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS impressoras (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nome TEXT,
                ip TEXT UNIQUE,
                modelo TEXT,
                status TEXT,
                data_detectada DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_impressoras_ip ON impressoras(ip)",
            [],
        )?;
        Ok(())
    }

    /// Idempotent upsert keyed on IP. Re-discovery overwrites name,
    /// model, status and the detection timestamp; the catalog reflects
    /// the latest sighting, not history. A failed write is logged and
    /// reported as `false` without touching the rest of the scan.
    pub fn save(&self, candidate: &ProbeCandidate) -> bool {
        let conn = self.conn.lock();
        let result = conn.execute(
            "INSERT INTO impressoras (nome, ip, modelo, status, data_detectada)
             VALUES (?1, ?2, ?3, ?4, CURRENT_TIMESTAMP)
             ON CONFLICT(ip) DO UPDATE SET
                 nome = excluded.nome,
                 modelo = excluded.modelo,
                 status = excluded.status,
                 data_detectada = CURRENT_TIMESTAMP",
            params![
                candidate.display_name(),
                candidate.ip.to_string(),
                candidate.model.clone().unwrap_or_default(),
                candidate.status,
            ],
        );
        match result {
            Ok(_) => true,
            Err(e) => {
                warn!("failed to save {}: {}", candidate.ip, e);
                false
            }
        }
    }

    /// Number of cataloged printers.
    pub fn count(&self) -> Result<i64, DiscoveryError> {
        let conn = self.conn.lock();
        let count = conn.query_row("SELECT COUNT(*) FROM impressoras", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Full catalog in insertion order, the read path the reporting
    /// collaborators use.
    pub fn all(&self) -> Result<Vec<DiscoveredPrinter>, DiscoveryError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, nome, ip, modelo, status, data_detectada FROM impressoras ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(DiscoveredPrinter {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    ip: row.get(2)?,
                    model: row.get(3)?,
                    status: row.get(4)?,
                    detected_at: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

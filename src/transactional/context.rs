//! Database-backed test context.
//!
//! A context is described by one or more XML resources:
//!
//! ```xml
//! <test-context>
//!     <data-source path=":memory:"/>
//!     <script>CREATE TABLE contact (name TEXT NOT NULL)</script>
//! </test-context>
//! ```
//!
//! The first resource names the data source; the scripts of every resource
//! run in order when the context is loaded.

use crate::transactional::errors::{ContextError, Result};
use crate::transactional::resources::ResourceLoader;
use rusqlite::{Connection, Transaction};
use serde::Deserialize;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContextConfig {
    #[serde(rename = "data-source", default)]
    pub data_source: Option<DataSourceConfig>,
    #[serde(rename = "script", default)]
    pub scripts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataSourceConfig {
    /// `:memory:` or a database file path
    #[serde(rename = "@path")]
    pub path: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            path: IN_MEMORY.to_string(),
        }
    }
}

impl ContextConfig {
    pub fn from_xml(location: &str, xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).map_err(|source| ContextError::InvalidConfig {
            location: location.to_string(),
            source,
        })
    }
}

/// Commit/rollback counters for a context.
#[derive(Debug, Default)]
pub struct TransactionStats {
    committed: AtomicU64,
    rolled_back: AtomicU64,
}

impl TransactionStats {
    fn record_commit(&self) {
        self.committed.fetch_add(1, Ordering::Relaxed);
    }

    fn record_rollback(&self) {
        self.rolled_back.fetch_add(1, Ordering::Relaxed);
    }

    /// `(committed, rolled_back)`
    pub fn get_stats(&self) -> (u64, u64) {
        (
            self.committed.load(Ordering::Relaxed),
            self.rolled_back.load(Ordering::Relaxed),
        )
    }
}

/// Open data source plus the locations it was built from.
pub struct TransactionalContext {
    conn: Connection,
    locations: Vec<String>,
    stats: TransactionStats,
}

impl TransactionalContext {
    /// Build a context from the given resource locations.
    pub fn load(loader: &ResourceLoader, locations: &[String]) -> Result<Self> {
        let first = locations.first().ok_or(ContextError::NoLocations)?;

        let mut configs = Vec::with_capacity(locations.len());
        for location in locations {
            let xml = loader.read_to_string(location)?;
            configs.push(ContextConfig::from_xml(location, &xml)?);
            info!("Loaded test context configuration from {}", location);
        }

        let data_source = configs[0].data_source.clone().unwrap_or_default();
        let conn = Self::open(&data_source)?;
        debug!("Opened data source {} for {}", data_source.path, first);

        for script in configs.iter().flat_map(|c| &c.scripts) {
            conn.execute_batch(script)?;
        }

        Ok(Self {
            conn,
            locations: locations.to_vec(),
            stats: TransactionStats::default(),
        })
    }

    fn open(data_source: &DataSourceConfig) -> Result<Connection> {
        let conn = if data_source.path == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(&data_source.path)?
        };
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn stats(&self) -> &TransactionStats {
        &self.stats
    }

    /// Run `f` inside a transaction.
    ///
    /// The transaction is rolled back afterwards unless `f` called
    /// [`TestTransaction::set_complete`] and returned `Ok`.
    pub fn in_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TestTransaction<'_>) -> Result<T>,
    {
        let mut tx = TestTransaction {
            tx: self.conn.unchecked_transaction()?,
            complete: false,
        };

        match f(&mut tx) {
            Ok(result) if tx.complete => {
                tx.tx.commit()?;
                self.stats.record_commit();
                debug!("Committed test transaction");
                Ok(result)
            }
            Ok(result) => {
                tx.tx.rollback()?;
                self.stats.record_rollback();
                debug!("Rolled back test transaction");
                Ok(result)
            }
            Err(e) => {
                let _ = tx.tx.rollback(); // keep the original error
                self.stats.record_rollback();
                Err(e)
            }
        }
    }
}

/// Transaction handed to a test body. Derefs to the connection.
pub struct TestTransaction<'c> {
    tx: Transaction<'c>,
    complete: bool,
}

impl TestTransaction<'_> {
    /// Keep this transaction's changes instead of rolling them back.
    pub fn set_complete(&mut self) {
        self.complete = true;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl Deref for TestTransaction<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.tx
    }
}

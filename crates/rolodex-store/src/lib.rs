pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod repo;

use crate::error::{Result, StoreError};
use rolodex_core::{Record, Storage};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn contacts(&self) -> repo::ContactsRepo<'_> {
        repo::ContactsRepo::new(&self.conn)
    }
}

/// Address book snapshot kept in a single SQLite file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks an existing file without writing to it and returns its schema
    /// version. Foreign databases and books from a newer rolodex are refused.
    fn inspect(&self, conn: &Connection) -> Result<Option<i64>> {
        if migrate::is_foreign_database(conn)? {
            return Err(StoreError::UnrecognizedFile(self.path.clone()));
        }
        let version = migrate::schema_version(conn)?;
        if let Some(found) = version {
            if found > migrate::latest_version() {
                return Err(StoreError::Migration(format!(
                    "book version {} newer than available migrations {}",
                    found,
                    migrate::latest_version()
                )));
            }
        }
        Ok(version)
    }
}

impl Storage for SnapshotFile {
    type Error = StoreError;

    fn read_records(&self) -> Result<Option<Vec<Record>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved address book");
            return Ok(None);
        }
        let conn = db::open_read_only(&self.path)?;
        let records = match self.inspect(&conn)? {
            None | Some(0) => Vec::new(),
            Some(version) if version == migrate::latest_version() => {
                repo::ContactsRepo::new(&conn).list_all()?
            }
            Some(version) => {
                return Err(StoreError::Migration(format!(
                    "book version {} must be upgraded before it can be read",
                    version
                )))
            }
        };
        debug!(path = %self.path.display(), count = records.len(), "address book loaded");
        Ok(Some(records))
    }

    fn write_records(&self, records: &[Record]) -> Result<()> {
        if self.path.exists() {
            let conn = db::open_read_only(&self.path)?;
            self.inspect(&conn)?;
        }
        paths::ensure_parent_dir(&self.path)?;
        let store = Store::open(&self.path)?;
        store.migrate()?;
        store.contacts().replace_all(records)?;
        db::restrict_db_permissions(&self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "address book saved");
        Ok(())
    }
}

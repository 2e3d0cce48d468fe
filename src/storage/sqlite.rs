//! SQLite-backed domain registry

use crate::storage::{DomainKind, DomainRecord, DomainStatus, NewDomain, StorageError, StorageResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

/// SQLite registry backend
pub struct SqliteRegistry {
    conn: Connection,
}

impl SqliteRegistry {
    /// Opens (or creates) the registry database at the given path
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory registry (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Lists all registered domains in registration order
    pub fn list(&self) -> StorageResult<Vec<DomainRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, domain, status, kind, description, registered_at
             FROM domains ORDER BY id",
        )?;

        let records = stmt
            .query_map([], row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Gets one domain by id
    pub fn get(&self, id: i64) -> StorageResult<Option<DomainRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, domain, status, kind, description, registered_at
             FROM domains WHERE id = ?1",
        )?;

        Ok(stmt.query_row(params![id], row_to_record).optional()?)
    }

    /// Registers a new domain, returning the stored record
    pub fn insert(&mut self, new: NewDomain) -> StorageResult<DomainRecord> {
        let now = Utc::now();
        let kind = new.kind.unwrap_or(DomainKind::Primary);
        let status = DomainStatus::Pending;

        self.conn.execute(
            "INSERT INTO domains (domain, status, kind, description, registered_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                new.domain,
                status.to_db_string(),
                kind.to_db_string(),
                new.description,
                now.to_rfc3339(),
            ],
        )?;

        Ok(DomainRecord {
            id: self.conn.last_insert_rowid(),
            domain: new.domain,
            status,
            kind,
            description: new.description,
            registered_at: now,
        })
    }

    /// Deletes a domain by id; Err(NotFound) if no row matched
    pub fn delete(&mut self, id: i64) -> StorageResult<()> {
        let affected = self
            .conn
            .execute("DELETE FROM domains WHERE id = ?1", params![id])?;

        if affected == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }
}

fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS domains (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain TEXT NOT NULL,
            status TEXT NOT NULL,
            kind TEXT NOT NULL,
            description TEXT,
            registered_at TEXT NOT NULL
        );
    ",
    )
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<DomainRecord> {
    let status: String = row.get(2)?;
    let kind: String = row.get(3)?;
    let registered_at: String = row.get(5)?;

    Ok(DomainRecord {
        id: row.get(0)?,
        domain: row.get(1)?,
        status: DomainStatus::from_db_string(&status).unwrap_or(DomainStatus::Pending),
        kind: DomainKind::from_db_string(&kind).unwrap_or(DomainKind::Primary),
        description: row.get(4)?,
        registered_at: registered_at
            .parse::<DateTime<Utc>>()
            .unwrap_or_else(|_| Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_domain(domain: &str) -> NewDomain {
        NewDomain {
            domain: domain.to_string(),
            kind: None,
            description: None,
        }
    }

    #[test]
    fn test_insert_and_list_in_order() {
        let mut registry = SqliteRegistry::open_in_memory().unwrap();
        registry.insert(new_domain("example.com")).unwrap();
        registry.insert(new_domain("blog.example.com")).unwrap();

        let records = registry.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].domain, "example.com");
        assert_eq!(records[1].domain, "blog.example.com");
        assert!(records[0].id < records[1].id);
    }

    #[test]
    fn test_insert_defaults() {
        let mut registry = SqliteRegistry::open_in_memory().unwrap();
        let record = registry.insert(new_domain("example.com")).unwrap();

        assert_eq!(record.status, DomainStatus::Pending);
        assert_eq!(record.kind, DomainKind::Primary);
        assert!(record.description.is_none());
    }

    #[test]
    fn test_insert_with_kind_and_description() {
        let mut registry = SqliteRegistry::open_in_memory().unwrap();
        let record = registry
            .insert(NewDomain {
                domain: "rival.com".to_string(),
                kind: Some(DomainKind::Competitor),
                description: Some("main competitor".to_string()),
            })
            .unwrap();

        assert_eq!(record.kind, DomainKind::Competitor);
        assert_eq!(record.description.as_deref(), Some("main competitor"));
    }

    #[test]
    fn test_get_roundtrip() {
        let mut registry = SqliteRegistry::open_in_memory().unwrap();
        let inserted = registry.insert(new_domain("example.com")).unwrap();

        let fetched = registry.get(inserted.id).unwrap().unwrap();
        assert_eq!(fetched.domain, "example.com");
        assert_eq!(fetched.id, inserted.id);
    }

    #[test]
    fn test_get_missing_is_none() {
        let registry = SqliteRegistry::open_in_memory().unwrap();
        assert!(registry.get(42).unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let mut registry = SqliteRegistry::open_in_memory().unwrap();
        let record = registry.insert(new_domain("example.com")).unwrap();

        registry.delete(record.id).unwrap();
        assert!(registry.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut registry = SqliteRegistry::open_in_memory().unwrap();
        let result = registry.delete(42);
        assert!(matches!(result, Err(StorageError::NotFound(42))));
    }
}

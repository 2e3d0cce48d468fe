//! Domain registry storage
//!
//! The dashboard keeps an ordered list of registered domains, keyed by id. The
//! crawler core has no dependency on this registry; it exists so the dashboard
//! has somewhere server-side to read and write its domain list.

mod sqlite;

pub use sqlite::SqliteRegistry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during registry operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Domain not found: {0}")]
    NotFound(i64),
}

/// Result type for registry operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Lifecycle status of a registered domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Active,
    Pending,
    Inactive,
}

impl DomainStatus {
    pub fn to_db_string(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Inactive => "inactive",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "pending" => Some(Self::Pending),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// How a registered domain relates to the site being managed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    Primary,
    Subdomain,
    Competitor,
}

impl DomainKind {
    pub fn to_db_string(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Subdomain => "subdomain",
            Self::Competitor => "competitor",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "primary" => Some(Self::Primary),
            "subdomain" => Some(Self::Subdomain),
            "competitor" => Some(Self::Competitor),
            _ => None,
        }
    }
}

/// One registered domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub id: i64,
    pub domain: String,
    pub status: DomainStatus,
    pub kind: DomainKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub registered_at: DateTime<Utc>,
}

/// Fields accepted when registering a new domain
#[derive(Debug, Clone, Deserialize)]
pub struct NewDomain {
    pub domain: String,

    #[serde(default)]
    pub kind: Option<DomainKind>,

    #[serde(default)]
    pub description: Option<String>,
}

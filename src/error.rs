//! Catalog load errors

use thiserror::Error;

/// Coarse classification used to pick the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog was fetched but could not be written to the local cache
    Caching,
    /// The catalog could not be fetched or read
    Load,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is {size} bytes, cache quota is {quota} bytes")]
    CacheQuota { size: usize, quota: usize },

    #[error("cache storage is full")]
    DiskFull,

    #[error("failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog request returned HTTP {0}")]
    Status(u16),

    #[error("cache database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("catalog fetch ended without a result")]
    TaskDropped,
}

impl From<rusqlite::Error> for CatalogError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(code, _)
                if code.code == rusqlite::ErrorCode::DiskFull =>
            {
                CatalogError::DiskFull
            }
            _ => CatalogError::Database(e),
        }
    }
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::CacheQuota { .. } | CatalogError::DiskFull => ErrorKind::Caching,
            _ => ErrorKind::Load,
        }
    }

    /// Message shown in place of the result list
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Caching => {
                "The catalog could not be saved to the local cache because it exceeds the storage quota."
            }
            ErrorKind::Load => "The book catalog could not be loaded. Check your connection and retry.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_and_disk_full_are_caching_errors() {
        let quota = CatalogError::CacheQuota { size: 10, quota: 5 };
        assert_eq!(quota.kind(), ErrorKind::Caching);
        assert_eq!(CatalogError::DiskFull.kind(), ErrorKind::Caching);
    }

    #[test]
    fn fetch_failures_are_load_errors() {
        assert_eq!(CatalogError::Status(404).kind(), ErrorKind::Load);
        assert_eq!(CatalogError::TaskDropped.kind(), ErrorKind::Load);
    }

    #[test]
    fn kinds_have_distinct_messages() {
        let caching = CatalogError::DiskFull.user_message();
        let load = CatalogError::Status(500).user_message();
        assert_ne!(caching, load);
    }

    #[test]
    fn sqlite_full_maps_to_disk_full() {
        let full = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_FULL),
            None,
        );
        assert!(matches!(CatalogError::from(full), CatalogError::DiskFull));

        let other = rusqlite::Error::QueryReturnedNoRows;
        assert!(matches!(CatalogError::from(other), CatalogError::Database(_)));
    }
}

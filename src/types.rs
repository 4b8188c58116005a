//! Common types and data structures

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Where the catalog text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Cache,
    Network,
}

/// Lifecycle of the initial catalog load
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Loaded(CatalogOrigin),
    Failed(CatalogError),
}

/// What a finished fetch does to the app
#[derive(Debug)]
pub enum FetchOutcome {
    /// Show the fetched catalog
    Install(Catalog),
    /// A refresh failed; the catalog on screen stays
    KeepCurrent(CatalogError),
    /// Nothing to show, the load failed
    Fail(CatalogError),
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// Decide how a fetch result lands. Errors only fail the load when no
    /// catalog is showing yet.
    pub fn settle(&self, fetched: Result<Catalog, CatalogError>) -> FetchOutcome {
        match fetched {
            Ok(catalog) => FetchOutcome::Install(catalog),
            Err(e) if self.is_loaded() => FetchOutcome::KeepCurrent(e),
            Err(e) => FetchOutcome::Fail(e),
        }
    }
}

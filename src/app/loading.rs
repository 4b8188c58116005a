//! Catalog load lifecycle: cache lookup, background fetch, install

use super::App;
use crate::catalog::{self, Catalog};
use crate::error::CatalogError;
use crate::model::ListModel;
use crate::types::{CatalogOrigin, FetchOutcome, LoadState};
use chrono::Utc;
use eframe::egui;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{error, info, warn};

impl App {
    /// Load from cache if present, otherwise start a fetch
    pub fn start_load(&mut self, ctx: &egui::Context) {
        self.load_state = LoadState::Loading;
        self.pending_fetch = None;
        self.refresh_error = None;

        if let Some(cached) = catalog::load_cached(&self.db) {
            self.cached_at = cached.stored_at;
            self.install_catalog(catalog::parse_catalog(&cached.value), CatalogOrigin::Cache);
            return;
        }

        self.spawn_fetch(ctx);
    }

    /// Fetch a fresh copy. The current list and cached copy stay in place
    /// until the new one has been stored.
    pub fn refresh_catalog(&mut self, ctx: &egui::Context) {
        info!("Refreshing catalog");
        self.refresh_error = None;
        if !self.load_state.is_loaded() {
            self.load_state = LoadState::Loading;
        }
        self.spawn_fetch(ctx);
    }

    pub fn is_fetching(&self) -> bool {
        self.pending_fetch.is_some()
    }

    fn spawn_fetch(&mut self, ctx: &egui::Context) {
        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let url = self.catalog_url.clone();
        let ctx = ctx.clone();

        info!(url = %url, "Fetching catalog");
        self.runtime.spawn(async move {
            let result = catalog::fetch_catalog_text(&client, &url).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });
        self.pending_fetch = Some(rx);
    }

    /// Check for a finished fetch; called once per frame
    pub fn poll_load_result(&mut self) {
        let Some(rx) = self.pending_fetch.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(CatalogError::TaskDropped),
        };
        self.pending_fetch = None;

        let stored = catalog::store_fetched(&self.db, result, self.cache_quota);
        match self.load_state.settle(stored) {
            FetchOutcome::Install(parsed) => {
                self.cached_at = Some(Utc::now());
                self.install_catalog(parsed, CatalogOrigin::Network);
            }
            FetchOutcome::KeepCurrent(e) => {
                warn!(
                    error = %e,
                    kind = ?e.kind(),
                    "Catalog refresh failed, keeping current list"
                );
                self.refresh_error = Some(e);
            }
            FetchOutcome::Fail(e) => self.fail_load(e),
        }
    }

    fn install_catalog(&mut self, parsed: Catalog, origin: CatalogOrigin) {
        info!(
            entries = parsed.entries.len(),
            skipped = parsed.skipped.len(),
            origin = ?origin,
            "Catalog ready"
        );
        self.skipped_lines = parsed.skipped.len();
        self.model = ListModel::new(parsed.entries);
        self.model.set_term(&self.search_query);
        self.scroll_to_top = true;
        self.load_state = LoadState::Loaded(origin);
    }

    fn fail_load(&mut self, e: CatalogError) {
        error!(error = %e, kind = ?e.kind(), "Catalog load failed");
        self.skipped_lines = 0;
        self.model = ListModel::new(Vec::new());
        self.load_state = LoadState::Failed(e);
    }
}

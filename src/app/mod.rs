//! App module - contains the main application state and logic

mod filters;
mod loading;
mod views;

use crate::db::Database;
use crate::error::CatalogError;
use crate::model::ListModel;
use crate::nav::{Focus, FocusRing};
use crate::paging::ScrollMetrics;
use crate::settings::Settings;
use crate::theme;
use crate::types::LoadState;
use chrono::{DateTime, Utc};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::oneshot;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) db: Database,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) client: reqwest::Client,
    // Catalog
    pub(crate) catalog_url: String,
    pub(crate) cache_quota: usize,
    pub(crate) load_state: LoadState,
    pub(crate) pending_fetch: Option<oneshot::Receiver<Result<String, CatalogError>>>,
    pub(crate) cached_at: Option<DateTime<Utc>>,
    pub(crate) refresh_error: Option<CatalogError>,
    pub(crate) skipped_lines: usize,
    // Search & list
    pub(crate) model: ListModel,
    pub(crate) search_query: String,
    pub(crate) focus_search: bool,
    pub(crate) show_timing: bool,
    // Scrolling
    pub(crate) scroll_metrics: ScrollMetrics,
    pub(crate) scroll_to_top: bool,
    // Keyboard focus
    pub(crate) focus_ring: FocusRing<egui::Id>,
    pub(crate) pending_focus: Option<Focus>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        db: Database,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self {
            db,
            runtime,
            client: reqwest::Client::new(),
            catalog_url: settings.catalog_url_or_default(),
            cache_quota: settings.cache_quota_bytes,
            load_state: LoadState::Loading,
            pending_fetch: None,
            cached_at: None,
            refresh_error: None,
            skipped_lines: 0,
            model: ListModel::new(Vec::new()),
            search_query: String::new(),
            focus_search: true,
            show_timing: settings.show_timing,
            scroll_metrics: ScrollMetrics::default(),
            scroll_to_top: false,
            focus_ring: FocusRing::default(),
            pending_focus: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };

        app.start_load(&cc.egui_ctx);
        app
    }

    pub fn save_settings(&self) {
        let catalog_url = if self.catalog_url == crate::constants::CATALOG_URL {
            None
        } else {
            Some(self.catalog_url.clone())
        };
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            catalog_url,
            cache_quota_bytes: self.cache_quota,
            show_timing: self.show_timing,
        };
        settings.save(&self.data_dir);
    }

    /// Stable focus handle for the row at `position`
    pub fn entry_id(position: usize) -> egui::Id {
        egui::Id::new(("catalog_entry", position))
    }

    pub fn search_id() -> egui::Id {
        egui::Id::new("search_box")
    }
}

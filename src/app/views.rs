//! View rendering (search box, result list, status bar)

use super::App;
use crate::constants::APP_NAME;
use crate::error::ErrorKind;
use crate::nav::Focus;
use crate::paging::ScrollMetrics;
use crate::theme;
use crate::types::{CatalogOrigin, LoadState};
use crate::ui::components;
use crate::utils::{format_bytes, format_elapsed, pluralize};
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::{info, warn};

impl App {
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(icons::BOOKS)
                    .size(theme::FONT_HEADING)
                    .color(theme::ACCENT),
            );
            ui.label(
                egui::RichText::new(APP_NAME)
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_PRIMARY),
            );
        });
    }

    pub fn render_search_box(&mut self, ui: &mut egui::Ui) {
        let search_id = Self::search_id();
        self.focus_ring.set_input(search_id);
        let focused = ui.memory(|m| m.has_focus(search_id));

        theme::search_frame(focused).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(icons::MAGNIFYING_GLASS)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_DIM),
                );
                let clear_width = if self.search_query.is_empty() { 0.0 } else { 20.0 };
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search_query)
                        .id(search_id)
                        .hint_text("Search Gutenberg Catalog")
                        .font(egui::FontId::proportional(theme::FONT_BODY))
                        .frame(false)
                        .desired_width(ui.available_width() - clear_width),
                );

                if self.focus_search || self.pending_focus == Some(Focus::Input) {
                    self.focus_search = false;
                    self.pending_focus = None;
                    response.request_focus();
                }
                if response.changed() {
                    self.apply_filters();
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.clear_search();
                    self.focus_search = true;
                }

                if !self.search_query.is_empty()
                    && ui
                        .add(egui::Button::new(icons::X).frame(false))
                        .on_hover_text("Clear search")
                        .clicked()
                {
                    self.clear_search();
                    self.focus_search = true;
                }
            });
        });
    }

    /// Body of the central panel for the current load state
    pub fn render_body(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        match &self.load_state {
            LoadState::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 4.0);
                    ui.spinner();
                    ui.add_space(theme::SPACING_MD);
                    ui.label(egui::RichText::new("Loading catalog…").color(theme::TEXT_MUTED));
                });
            }
            LoadState::Failed(e) => {
                let title = e.user_message();
                let detail = e.to_string();
                let mut retry = false;
                ui.vertical_centered(|ui| {
                    components::centered_message(
                        ui,
                        icons::WARNING_CIRCLE,
                        title,
                        Some(&detail),
                        theme::STATUS_ERROR,
                    );
                    ui.add_space(theme::SPACING_LG);
                    retry = ui
                        .add(theme::button(format!("{}  Retry", icons::ARROW_CLOCKWISE)))
                        .clicked();
                });
                if retry {
                    self.start_load(ctx);
                }
            }
            LoadState::Loaded(_) => self.render_results(ui),
        }
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        let total_rows = self.model.row_count();
        if total_rows == 0 {
            let (title, detail) = if self.model.search().is_active() {
                ("No books match your search", Some("Try part of a title or an author's name"))
            } else {
                ("The catalog is empty", None)
            };
            ui.vertical_centered(|ui| {
                components::centered_message(ui, icons::FUNNEL_X, title, detail, theme::TEXT_DIM);
            });
            return;
        }

        self.focus_ring.set_rows(total_rows);

        let stride = theme::ROW_HEIGHT + ui.spacing().item_spacing.y;
        let mut scroll_area = egui::ScrollArea::vertical()
            .id_salt("results")
            .auto_shrink([false; 2]);

        let focus_target = match self.pending_focus.take() {
            Some(Focus::Entry(position)) => Some(position.min(total_rows - 1)),
            _ => None,
        };
        let reset = std::mem::take(&mut self.scroll_to_top);
        if reset {
            scroll_area = scroll_area.vertical_scroll_offset(0.0);
        } else if let Some(position) = focus_target {
            // Keep the target row inside the viewport so it is laid out this frame
            let top = position as f32 * stride;
            let bottom = top + stride;
            let m = self.scroll_metrics;
            if top < m.offset {
                scroll_area = scroll_area.vertical_scroll_offset(top);
            } else if bottom > m.offset + m.viewport {
                scroll_area = scroll_area.vertical_scroll_offset(bottom - m.viewport);
            }
        }

        let model = &self.model;
        let ring = &mut self.focus_ring;
        let mut opened: Option<String> = None;
        let output = scroll_area.show_rows(ui, theme::ROW_HEIGHT, total_rows, |ui, range| {
            for row in model.rows_in(range) {
                let id = Self::entry_id(row.position);
                ring.push(row.position, id);
                let response = components::entry_row(ui, id, &row.entry.name, row.highlight);
                if focus_target == Some(row.position) {
                    response.request_focus();
                }
                let url = row.entry.url();
                if response.on_hover_text(url.as_str()).clicked() {
                    opened = Some(url);
                }
            }
        });

        if let Some(url) = opened {
            info!(url = %url, "Opening book page");
            if let Err(e) = open::that(&url) {
                warn!(error = %e, url = %url, "Failed to open book page");
            }
        }

        let metrics = ScrollMetrics {
            offset: output.state.offset.y,
            viewport: output.inner_rect.height(),
            content: output.content_size.y,
        };
        self.handle_scroll(metrics, reset, ui.ctx());
    }

    pub fn render_status_bar(&mut self, ctx: &egui::Context) {
        let mut refresh = false;

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(theme::STATUS_BAR_HEIGHT)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let small = |text: String| {
                        egui::RichText::new(text)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED)
                    };

                    let summary = match &self.load_state {
                        LoadState::Loading => "Loading catalog…".to_string(),
                        LoadState::Failed(e) => match e.kind() {
                            ErrorKind::Caching => "Catalog could not be cached".to_string(),
                            ErrorKind::Load => "Catalog could not be loaded".to_string(),
                        },
                        LoadState::Loaded(_) => self.summary_text(),
                    };
                    ui.label(small(summary));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        refresh = ui
                            .add_enabled(
                                !self.is_fetching(),
                                egui::Button::new(icons::ARROW_CLOCKWISE).frame(false),
                            )
                            .on_hover_text("Refresh catalog")
                            .clicked();
                        if self.is_fetching() && self.load_state.is_loaded() {
                            ui.spinner();
                        }

                        if let Some(e) = &self.refresh_error {
                            ui.label(
                                egui::RichText::new(format!("{} Refresh failed", icons::WARNING))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::STATUS_WARNING),
                            )
                            .on_hover_text(format!("{}\n{}", e.user_message(), e));
                        }

                        if let Some(stored_at) = self.cached_at {
                            let local = stored_at.with_timezone(&chrono::Local);
                            let source = match self.load_state {
                                LoadState::Loaded(CatalogOrigin::Cache) => "Loaded from cache",
                                LoadState::Loaded(CatalogOrigin::Network) => "Downloaded this session",
                                _ => "Cached copy",
                            };
                            ui.label(small(format!("Cached {}", local.format("%Y-%m-%d %H:%M"))))
                                .on_hover_text(format!(
                                    "{}, cache quota {}",
                                    source,
                                    format_bytes(self.cache_quota as u64)
                                ));
                        }

                        if self.skipped_lines > 0 {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} {} skipped",
                                    icons::WARNING,
                                    pluralize(self.skipped_lines, "malformed line", "malformed lines")
                                ))
                                .size(theme::FONT_SMALL)
                                .color(theme::STATUS_WARNING),
                            );
                        }
                    });
                });
            });

        if refresh {
            self.refresh_catalog(ctx);
        }
    }

    fn summary_text(&self) -> String {
        let search = self.model.search();
        match search.matches() {
            Some(matches) => {
                let mut text = format!(
                    "{} for \u{201c}{}\u{201d}",
                    pluralize(matches.len(), "match", "matches"),
                    search.term()
                );
                if self.show_timing {
                    text.push_str(&format!(" in {}", format_elapsed(search.elapsed())));
                }
                text
            }
            None => format!(
                "Showing {} of {}",
                self.model.window().shown(),
                pluralize(self.model.entries().len(), "book", "books")
            ),
        }
    }
}

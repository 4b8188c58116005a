//! Search, scroll and keyboard event handling

use super::App;
use crate::nav::{self, NavKey};
use crate::paging::ScrollMetrics;
use eframe::egui;
use tracing::debug;

impl App {
    pub fn apply_filters(&mut self) {
        self.model.set_term(&self.search_query);
        self.scroll_to_top = true;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.apply_filters();
    }

    /// Record the list geometry and grow the window when a scroll reaches
    /// the bottom. `reset` marks frames where the list was put back at the top.
    pub fn handle_scroll(&mut self, metrics: ScrollMetrics, reset: bool, ctx: &egui::Context) {
        let scrolled = metrics.scrolled_since(&self.scroll_metrics, reset);
        self.scroll_metrics = metrics;
        if scrolled && self.model.on_scroll(metrics) {
            ctx.request_repaint();
        }
    }

    /// Arrow-key traversal between the search box and the rows rendered
    /// last frame. Handled keys are consumed.
    pub fn handle_navigation(&mut self, ctx: &egui::Context) {
        let Some(current) = ctx
            .memory(|m| m.focused())
            .and_then(|id| self.focus_ring.focus_of(id))
        else {
            return;
        };

        let pressed = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowDown) {
                Some((NavKey::Down, egui::Key::ArrowDown))
            } else if i.key_pressed(egui::Key::ArrowUp) {
                Some((NavKey::Up, egui::Key::ArrowUp))
            } else {
                None
            }
        });
        let Some((key, egui_key)) = pressed else {
            return;
        };
        let Some(target) = nav::step(current, key, self.focus_ring.len()) else {
            return;
        };

        ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui_key));
        // Rows outside the viewport get focus once render_results lays them out
        let handle = self.focus_ring.handle(target);
        ctx.memory_mut(|m| {
            if let Some(id) = handle {
                m.request_focus(id);
            }
            m.move_focus(egui::FocusDirection::None);
        });
        debug!(from = ?current, to = ?target, "Keyboard focus moved");
        self.pending_focus = Some(target);
    }
}

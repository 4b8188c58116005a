//! Reusable UI components

use crate::search::Highlight;
use crate::theme;
use eframe::egui;
use egui::text::{LayoutJob, TextFormat, TextWrapping};

/// Lay out an entry name, emphasizing the matched part if any
pub fn entry_job(name: &str, highlight: Option<Highlight<'_>>, max_width: f32) -> LayoutJob {
    let plain = TextFormat {
        font_id: egui::FontId::proportional(theme::FONT_BODY),
        color: theme::TEXT_SECONDARY,
        ..Default::default()
    };
    let marked = TextFormat {
        color: theme::HIGHLIGHT_TEXT,
        background: theme::HIGHLIGHT_BG,
        ..plain.clone()
    };

    let mut job = LayoutJob::default();
    match highlight {
        Some(h) => {
            job.append(h.before, 0.0, plain.clone());
            job.append(h.matched, 0.0, marked);
            job.append(h.after, 0.0, plain);
        }
        None => job.append(name, 0.0, plain),
    }
    job.wrap = TextWrapping::truncate_at_width(max_width);
    job
}

/// A focusable, clickable catalog row with a caller-chosen id
pub fn entry_row(
    ui: &mut egui::Ui,
    id: egui::Id,
    name: &str,
    highlight: Option<Highlight<'_>>,
) -> egui::Response {
    let width = ui.available_width();
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(width, theme::ROW_HEIGHT), egui::Sense::hover());
    let response = ui.interact(rect, id, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = if response.has_focus() {
            theme::BG_ROW_FOCUS
        } else if response.hovered() {
            theme::BG_ROW_HOVER
        } else {
            egui::Color32::TRANSPARENT
        };
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, fill);

        let job = entry_job(name, highlight, width - 2.0 * theme::ROW_PADDING_X);
        let galley = ui.fonts(|f| f.layout_job(job));
        let pos = egui::pos2(
            rect.left() + theme::ROW_PADDING_X,
            rect.center().y - galley.size().y / 2.0,
        );
        ui.painter().galley(pos, galley, theme::TEXT_SECONDARY);
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Centered icon + title + optional detail, used for empty and error states
pub fn centered_message(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    detail: Option<&str>,
    color: egui::Color32,
) {
    ui.add_space(ui.available_height() / 4.0);
    ui.label(egui::RichText::new(icon).size(40.0).color(color));
    ui.add_space(theme::SPACING_MD);
    ui.label(
        egui::RichText::new(title)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT_PRIMARY),
    );
    if let Some(detail) = detail {
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(detail)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::highlight;

    fn sections(job: &LayoutJob) -> Vec<(&str, egui::Color32)> {
        job.sections
            .iter()
            .filter(|s| !s.byte_range.is_empty())
            .map(|s| (&job.text[s.byte_range.clone()], s.format.background))
            .collect()
    }

    #[test]
    fn plain_name_is_a_single_section() {
        let job = entry_job("Dune", None, 200.0);
        assert_eq!(sections(&job), vec![("Dune", egui::Color32::TRANSPARENT)]);
    }

    #[test]
    fn highlighted_name_marks_only_the_match() {
        let name = "Mobile Homes";
        let job = entry_job(name, highlight(name, "mobi"), 200.0);
        assert_eq!(job.text, name);
        assert_eq!(
            sections(&job),
            vec![
                ("Mobi", theme::HIGHLIGHT_BG),
                ("le Homes", egui::Color32::TRANSPARENT),
            ]
        );
    }
}

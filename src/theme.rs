//! Centralized theme constants for Gutenberg Search
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x1c, 0x19, 0x17); // stone-900
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x29, 0x25, 0x24); // stone-800
pub const BG_INPUT: Color32 = Color32::from_rgb(0x23, 0x1f, 0x1d);
pub const BG_ROW_HOVER: Color32 = Color32::from_rgb(0x2f, 0x2a, 0x27);
pub const BG_ROW_FOCUS: Color32 = Color32::from_rgb(0x45, 0x2a, 0x0c); // amber tint

// =============================================================================
// COLORS - Accent (Amber)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b); // amber-500
pub const HIGHLIGHT_BG: Color32 = Color32::from_rgb(0x78, 0x35, 0x0f); // amber-900
pub const HIGHLIGHT_TEXT: Color32 = Color32::from_rgb(0xfd, 0xe6, 0x8a); // amber-200

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xf9); // stone-50
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xd6, 0xd3, 0xd1); // stone-300
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa8, 0xa2, 0x9e); // stone-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x78, 0x71, 0x6c); // stone-500

// =============================================================================
// COLORS - Borders & status
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x35, 0x30, 0x2d);
pub const BORDER_FOCUS: Color32 = Color32::from_rgb(0xb4, 0x53, 0x09); // amber-700
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x44, 0x40, 0x3c); // stone-700

// =============================================================================
// TYPOGRAPHY & LAYOUT
// =============================================================================
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

pub const CONTENT_MAX_WIDTH: f32 = 720.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const ROW_PADDING_X: f32 = 10.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: HIGHLIGHT_BG,
            stroke: egui::Stroke::new(1.0, HIGHLIGHT_TEXT),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 2.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

/// Frame around the search box
pub fn search_frame(focused: bool) -> egui::Frame {
    let border = if focused { BORDER_FOCUS } else { BORDER_SUBTLE };
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(1.0, border))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(10, 8))
}

/// Default button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

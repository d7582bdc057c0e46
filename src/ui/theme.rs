use egui::{Align2, Color32, FontId, Rounding, Stroke, Visuals};
use life_timeline::render::{Anchor, Rgb, TextRole};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_PANEL: Color32 = Color32::from_rgb(245, 245, 247);
pub const BG_STATUS: Color32 = Color32::from_rgb(232, 233, 237);
pub const BG_FIELD: Color32 = Color32::from_rgb(255, 255, 255);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(205, 207, 214);
pub const ACCENT: Color32 = Color32::from_rgb(40, 110, 200);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 30, 36);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(85, 90, 105);
pub const TEXT_DIM: Color32 = Color32::from_rgb(130, 135, 150);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const DIALOG_WIDTH: f32 = 320.0;
/// Pointer distance (px) at which an event marker shows its tooltip.
pub const EVENT_HOVER_RADIUS: f32 = 8.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.5)
}

/// Font for canvas text, by what the text is for.
pub fn font(role: TextRole) -> FontId {
    match role {
        TextRole::RowNumber | TextRole::Legend => FontId::proportional(12.0),
        TextRole::Distance | TextRole::EventLabel => FontId::proportional(12.5),
    }
}

// ── Conversions ──────────────────────────────────────────────────────────────

pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub fn align(anchor: Anchor) -> Align2 {
    match anchor {
        Anchor::LeftCenter => Align2::LEFT_CENTER,
        Anchor::Center => Align2::CENTER_CENTER,
        Anchor::RightCenter => Align2::RIGHT_CENTER,
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}

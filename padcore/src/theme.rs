//! Calculator theme
//!
//! Flat light surfaces, one navy label color, no rounding.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Palette of the calculator window.
pub struct PadColors;

impl PadColors {
    /// Display background.
    pub const LIGHT_GRAY: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
    /// Text on every label and button.
    pub const LABEL: Color32 = Color32::from_rgb(0x25, 0x26, 0x5E);
    /// Digit buttons.
    pub const WHITE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
    /// The equals button.
    pub const LIGHT_BLUE: Color32 = Color32::from_rgb(0xCC, 0xED, 0xFF);
    /// Operator and special buttons.
    pub const OFF_WHITE: Color32 = Color32::from_rgb(0xF8, 0xF8, 0xFF);
}

/// Font sizes and spacing for the calculator.
pub struct CalcTheme {
    /// Running total line.
    pub font_size_small: f32,
    /// Operator and special buttons.
    pub font_size_default: f32,
    /// Digit buttons.
    pub font_size_digits: f32,
    /// Current term line.
    pub font_size_large: f32,
    pub display_padding: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_small: 16.0,
            font_size_default: 20.0,
            font_size_digits: 24.0,
            font_size_large: 40.0,
            display_padding: 24.0,
        }
    }
}

impl CalcTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_default, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_default, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_large, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_default, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.override_text_color = Some(PadColors::LABEL);
        visuals.window_fill = PadColors::WHITE;
        visuals.panel_fill = PadColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::NONE;

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::NONE;
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(0.0, 0.0);
        style.spacing.window_margin = egui::Margin::same(0.0);

        ctx.set_style(style);
    }

    /// Frame around the two display lines.
    pub fn display_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(PadColors::LIGHT_GRAY)
            .inner_margin(egui::Margin::symmetric(self.display_padding, 8.0))
    }
}

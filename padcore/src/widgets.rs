//! Custom widgets

use egui::{Color32, Response, Ui, Widget};
use crate::theme::PadColors;

/// Darken a color by `amount` (0.0 = unchanged, 1.0 = black).
pub fn shade(color: Color32, amount: f32) -> Color32 {
    let keep = 1.0 - amount.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * keep).round() as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

/// A keypad button: flat fill, no border, darker while hovered or pressed.
pub struct KeypadButton<'a> {
    text: &'a str,
    fill: Color32,
    font_size: f32,
    size: egui::Vec2,
}

impl<'a> KeypadButton<'a> {
    pub fn new(text: &'a str, size: egui::Vec2) -> Self {
        Self {
            text,
            fill: PadColors::WHITE,
            font_size: 20.0,
            size,
        }
    }

    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl<'a> Widget for KeypadButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let fill = if response.is_pointer_button_down_on() {
                shade(self.fill, 0.15)
            } else if response.hovered() {
                shade(self.fill, 0.06)
            } else {
                self.fill
            };
            painter.rect_filled(rect, 0.0, fill);

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(self.font_size),
                PadColors::LABEL,
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_zero_keeps_color() {
        assert_eq!(shade(PadColors::LIGHT_BLUE, 0.0), PadColors::LIGHT_BLUE);
    }

    #[test]
    fn shade_full_is_black() {
        assert_eq!(shade(PadColors::WHITE, 1.0), Color32::from_rgb(0, 0, 0));
        assert_eq!(shade(PadColors::WHITE, 4.0), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn shade_darkens_each_channel() {
        let darker = shade(PadColors::OFF_WHITE, 0.5);
        assert_eq!(darker, Color32::from_rgb(124, 124, 128));
    }
}

//! padcalc application

use crate::accumulator::Expression;
use crate::config::CalcConfig;
use crate::evaluator::{Evaluate, NumParser};
use crate::keypad::{self, Button, Role, COLUMNS};
use egui::{Context, Key};
use padcore::theme::{CalcTheme, PadColors};
use padcore::KeypadButton;
use tracing::trace;

/// Share of the window height given to the display.
const DISPLAY_SHARE: f32 = 0.33;

pub struct PadCalcApp {
    expression: Expression,
    evaluator: Box<dyn Evaluate>,
    config: CalcConfig,
    theme: CalcTheme,
}

impl PadCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CalcConfig) -> Self {
        Self {
            expression: Expression::new(),
            evaluator: Box::new(NumParser),
            config,
            theme: CalcTheme::default(),
        }
    }

    fn press(&mut self, button: Button) {
        trace!(?button, "press");
        self.expression.apply(button, self.evaluator.as_ref());
    }

    /// Buttons typed this frame: digits, `.`, `+ - * /` and Enter.
    fn keyboard_buttons(ctx: &Context) -> Vec<Button> {
        ctx.input(|i| {
            let mut buttons = Vec::new();
            for event in &i.events {
                match event {
                    egui::Event::Text(text) => {
                        buttons.extend(text.chars().filter_map(Button::from_char));
                    }
                    egui::Event::Key { key: Key::Enter, pressed: true, .. } => {
                        buttons.push(Button::Equals);
                    }
                    _ => {}
                }
            }
            buttons
        })
    }

    fn render_display(&self, ui: &mut egui::Ui, height: f32) {
        self.theme.display_frame().show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), height));
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.add_space(height * 0.25);
                ui.label(
                    egui::RichText::new(self.expression.total_label())
                        .font(egui::FontId::proportional(self.theme.font_size_small))
                        .color(PadColors::LABEL),
                );
                ui.label(
                    egui::RichText::new(self.expression.current_label(self.config.display_chars))
                        .font(egui::FontId::proportional(self.theme.font_size_large))
                        .color(PadColors::LABEL)
                        .strong(),
                );
            });
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) -> Vec<Button> {
        let btn_w = ui.available_width() / COLUMNS as f32;
        let btn_h = ui.available_height() / keypad::ROWS as f32;
        let mut clicked = Vec::new();

        for row in keypad::rows() {
            ui.horizontal(|ui| {
                for (button, cell) in row {
                    let label = button.label();
                    let (fill, font_size) = match button.role() {
                        Role::Digit => (PadColors::WHITE, self.theme.font_size_digits),
                        Role::Operator => (PadColors::OFF_WHITE, self.theme.font_size_default),
                        Role::Equals => (PadColors::LIGHT_BLUE, self.theme.font_size_default),
                    };
                    let size = egui::vec2(btn_w * cell.span as f32, btn_h);
                    let widget = KeypadButton::new(&label, size)
                        .fill(fill)
                        .font_size(font_size);
                    if ui.add(widget).clicked() {
                        clicked.push(button);
                    }
                }
            });
        }
        clicked
    }
}

impl eframe::App for PadCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        for button in Self::keyboard_buttons(ctx) {
            self.press(button);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(PadColors::WHITE))
            .show(ctx, |ui| {
                let display_height = ui.available_height() * DISPLAY_SHARE;
                self.render_display(ui, display_height);
                for button in self.render_keypad(ui) {
                    self.press(button);
                }
            });
    }
}

//! GUI example using egui.
//!
//! An on-screen numeric keypad feeding an amount editor, with the filler
//! digits of the live display drawn in a muted color.
//! Run with: RUST_LOG=amount_keypad=trace cargo run --example egui_keypad

use amount_keypad::{
    AmountEditor, AmountView, InputEvent, KeyCode, KeyEvent, Keystroke, PlaceholderRange,
};
use eframe::egui;
use eframe::egui::text::{LayoutJob, TextFormat};
use tracing_subscriber::EnvFilter;

const KEYPAD: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    [".", "0", "⌫"],
];

/// Layout of the last presented frame, real digits bright and filler dim
#[derive(Default)]
struct AmountLabel {
    job: LayoutJob,
}

impl AmountView for AmountLabel {
    fn render(&mut self, formatted: &str, placeholder: Option<PlaceholderRange>) {
        let font = egui::FontId::proportional(48.0);
        let real = TextFormat::simple(font.clone(), egui::Color32::WHITE);
        let filler = TextFormat::simple(font, egui::Color32::DARK_GRAY);

        let mut job = LayoutJob::default();
        match placeholder {
            Some(range) => {
                let (before, fill, after) = range.split(formatted);
                job.append(before, 0.0, real.clone());
                job.append(fill, 0.0, filler);
                job.append(after, 0.0, real);
            }
            None => job.append(formatted, 0.0, real),
        }
        self.job = job;
    }
}

struct KeypadApp {
    editor: AmountEditor,
    label: AmountLabel,
}

impl Default for KeypadApp {
    fn default() -> Self {
        let editor = AmountEditor::new();
        let mut label = AmountLabel::default();
        editor.present(&mut label);
        Self { editor, label }
    }
}

impl KeypadApp {
    fn press(&mut self, cap: &str) {
        let changed = match cap {
            "⌫" => self.editor.delete_backward(),
            _ => self.editor.insert_text(cap),
        };
        if changed.is_changed() {
            self.editor.present(&mut self.label);
        }
    }

    fn handle_input(&mut self, events: &[egui::Event]) {
        for event in events {
            let input = match event {
                egui::Event::Text(text) => {
                    for ch in text.chars().filter(|c| Keystroke::from_char(*c).is_some()) {
                        self.apply(InputEvent::ReceivedChar(ch));
                    }
                    continue;
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match convert_egui_key(*key) {
                    Some(input) => input,
                    None => continue,
                },
                _ => continue,
            };
            self.apply(input);
        }
    }

    fn apply(&mut self, input: InputEvent) {
        if self.editor.handle_event(input).is_changed() {
            self.editor.present(&mut self.label);
        }
    }
}

fn convert_egui_key(key: egui::Key) -> Option<InputEvent> {
    let code = match key {
        egui::Key::Backspace => KeyCode::Backspace,
        egui::Key::Escape => KeyCode::Esc,
        egui::Key::Enter => KeyCode::Enter,
        _ => return None,
    };
    Some(InputEvent::Key(KeyEvent::new(code)))
}

impl eframe::App for KeypadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|i| i.events.clone());
        self.handle_input(&events);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(self.label.job.clone());
                ui.add_space(24.0);

                egui::Grid::new("keypad")
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        for row in KEYPAD {
                            for cap in row {
                                let button = egui::Button::new(
                                    egui::RichText::new(cap).size(28.0),
                                )
                                .min_size(egui::vec2(72.0, 56.0));
                                if ui.add(button).clicked() {
                                    self.press(cap);
                                }
                            }
                            ui.end_row();
                        }
                    });

                ui.add_space(12.0);
                ui.label(format!("{} cents", self.editor.amount().cents()));
            });
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "amount_keypad keypad demo",
        options,
        Box::new(|_cc| Box::<KeypadApp>::default()),
    )
}

/// Quick question buttons and the new chat confirmation dialog
use crate::core::quick::{self, QuickQuestion};
use eframe::egui;

/// Рисует быстрые вопросы. Возвращает ключ нажатой категории.
pub fn draw_quick_questions(ui: &mut egui::Ui, enabled: bool) -> Option<&'static str> {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for QuickQuestion { key, label, query } in quick::quick_questions() {
            let response = ui
                .add_enabled(enabled, egui::Button::new(*label))
                .on_hover_text(*query);
            if response.clicked() {
                clicked = Some(*key);
            }
        }
    });

    clicked
}

/// Ответ пользователя в диалоге нового чата
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Confirm,
    Cancel,
}

pub fn draw_new_chat_dialog(ctx: &egui::Context) -> Option<DialogChoice> {
    let mut choice = None;

    egui::Window::new("Start a new chat?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("The current conversation will be cleared.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("New chat").clicked() {
                    choice = Some(DialogChoice::Confirm);
                }
                if ui.button("Cancel").clicked() {
                    choice = Some(DialogChoice::Cancel);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        choice = Some(DialogChoice::Cancel);
    }

    choice
}

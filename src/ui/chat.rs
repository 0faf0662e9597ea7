/// Chat transcript rendering and input field
use crate::core::Message;
use chrono::{DateTime, Local, Utc};
use eframe::egui;

pub const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(51, 51, 51);
pub const ASSISTANT_BUBBLE: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);
pub const DEGRADED_BUBBLE: egui::Color32 = egui::Color32::from_rgb(48, 36, 20);
pub const USER_ACCENT: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);
pub const ASSISTANT_ACCENT: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
pub const BUBBLE_WIDTH_RATIO: f32 = 0.85;

/// Время сообщения в формате HH:MM (локальное)
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

fn draw_bubble(ui: &mut egui::Ui, message: &Message) {
    let (fill, accent, avatar) = if message.is_user() {
        (USER_BUBBLE, USER_ACCENT, "👤")
    } else if message.is_degraded() {
        (DEGRADED_BUBBLE, ASSISTANT_ACCENT, "🤖")
    } else {
        (ASSISTANT_BUBBLE, ASSISTANT_ACCENT, "🤖")
    };

    let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;
    let layout = if message.is_user() {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        ui.label(egui::RichText::new(avatar).color(accent).size(18.0));
        egui::Frame::NONE
            .fill(fill)
            .inner_margin(egui::Margin::same(12))
            .corner_radius(egui::CornerRadius::same(10))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.label(egui::RichText::new(message.text()).size(15.0));
                    ui.label(
                        egui::RichText::new(format_timestamp(message.created_at()))
                            .small()
                            .weak(),
                    );
                });
            });
    });
}

/// Рисует всю переписку; при is_pending показывает индикатор набора
pub fn draw_messages(ui: &mut egui::Ui, messages: &[Message], is_pending: bool) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                draw_bubble(ui, message);
                ui.add_space(10.0);
            }

            if is_pending {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("🤖").color(ASSISTANT_ACCENT).size(18.0));
                    ui.add(egui::Spinner::new());
                    ui.label(egui::RichText::new("Typing...").weak());
                });
            }
        });
}

/// Поле ввода и кнопка отправки. Возвращает true, если нужно отправить.
pub fn draw_input(ui: &mut egui::Ui, input_text: &mut String, enabled: bool) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        let send_width = 70.0;
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut *input_text)
                .hint_text("Ask about courses, fees, admissions...")
                .desired_width(ui.available_width() - send_width),
        );

        // Отправка по Enter
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
            response.request_focus();
        }

        let can_send = enabled && !input_text.trim().is_empty();
        if ui.add_enabled(can_send, egui::Button::new("Send ➤")).clicked() {
            submit = true;
        }
    });

    submit && enabled
}

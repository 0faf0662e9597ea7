/// Header, status indicator and offline banner
use crate::core::{ConnectivityState, Language};
use eframe::egui;

pub const ONLINE_COLOR: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
pub const OFFLINE_COLOR: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
pub const BANNER_FILL: egui::Color32 = egui::Color32::from_rgb(69, 26, 26);

/// Что пользователь нажал в заголовке
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAction {
    pub new_chat_requested: bool,
    pub language_changed: Option<Language>,
}

/// Подпись под именем ассистента
pub fn status_line(institution: &str, connectivity: ConnectivityState) -> String {
    if connectivity.is_online() {
        institution.to_string()
    } else {
        format!("{} (Offline Mode)", institution)
    }
}

pub fn language_label(language: Language) -> String {
    format!("{} {}", language.flag(), language.display_name())
}

fn status_dot(ui: &mut egui::Ui, connectivity: ConnectivityState) {
    let color = if connectivity.is_online() {
        ONLINE_COLOR
    } else {
        OFFLINE_COLOR
    };
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.0, color);
}

pub fn draw_header(
    ui: &mut egui::Ui,
    assistant_name: &str,
    institution: &str,
    connectivity: ConnectivityState,
    language: Language,
) -> HeaderAction {
    let mut action = HeaderAction::default();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("🤖").size(26.0));
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(assistant_name).strong().size(20.0));
                status_dot(ui, connectivity);
            });
            ui.label(
                egui::RichText::new(status_line(institution, connectivity))
                    .small()
                    .weak(),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut selected = language;
            egui::ComboBox::from_id_salt("language_picker")
                .selected_text(language_label(selected))
                .show_ui(ui, |ui| {
                    for lang in Language::all() {
                        ui.selectable_value(&mut selected, lang, language_label(lang));
                    }
                });
            if selected != language {
                action.language_changed = Some(selected);
            }

            if ui
                .button("🔄")
                .on_hover_text("Start a new chat")
                .clicked()
            {
                action.new_chat_requested = true;
            }
        });
    });

    action
}

/// Баннер офлайн-режима. Возвращает true, если нажата кнопка Retry.
pub fn draw_offline_banner(ui: &mut egui::Ui, probe_in_flight: bool) -> bool {
    let mut retry = false;

    egui::Frame::NONE
        .fill(BANNER_FILL)
        .inner_margin(egui::Margin::same(8))
        .corner_radius(egui::CornerRadius::same(4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(OFFLINE_COLOR, "⚠ Backend connection lost. Using offline responses.");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if probe_in_flight {
                        ui.add(egui::Spinner::new());
                    } else if ui.button("Retry").clicked() {
                        retry = true;
                    }
                });
            });
        });

    retry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_marks_offline_mode() {
        assert_eq!(
            status_line("Invertis University", ConnectivityState::Online),
            "Invertis University"
        );
        assert_eq!(
            status_line("Invertis University", ConnectivityState::Offline),
            "Invertis University (Offline Mode)"
        );
    }

    #[test]
    fn language_label_shows_native_name() {
        assert_eq!(language_label(Language::Hi), "🇮🇳 हिंदी");
    }
}

/// Main application structure and lifecycle management
use crate::ai::{ChatBackend, ChatError};
use crate::config::Config;
use crate::core::{ChatOrchestrator, Clock, ExchangeOutcome, PendingExchange};
use crate::services::HealthCheck;
use eframe::egui;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use super::{buttons, chat, widgets};

/// Результаты фоновых задач, которые применяются в UI потоке
#[derive(Debug)]
pub enum BackgroundUpdate {
    Reply {
        exchange: PendingExchange,
        result: Result<String, ChatError>,
    },
    /// `issued_after` - сколько обменов было завершено на момент запуска пробы
    Probe { reachable: bool, issued_after: u64 },
}

pub struct BrofessorApp {
    pub config: Config,
    pub chat: ChatOrchestrator,
    pub backend: Arc<dyn ChatBackend>,
    pub probe: Arc<dyn HealthCheck>,
    pub runtime: Handle,
    pub input_text: String,
    pub update_receiver: std_mpsc::Receiver<BackgroundUpdate>,
    pub update_sender: std_mpsc::Sender<BackgroundUpdate>,
    pub show_new_chat_dialog: bool,
    pub probe_in_flight: bool,
    pub completed_exchanges: u64,
    pub startup_probe_started: bool,
    pub style_initialized: bool,
}

impl BrofessorApp {
    pub fn new(
        config: Config,
        backend: Arc<dyn ChatBackend>,
        probe: Arc<dyn HealthCheck>,
        clock: Arc<dyn Clock>,
        runtime: Handle,
    ) -> Self {
        let mut chat = ChatOrchestrator::new(config.greeting.clone(), clock);
        chat.set_language(config.language);
        let (update_sender, update_receiver) = std_mpsc::channel();

        Self {
            config,
            chat,
            backend,
            probe,
            runtime,
            input_text: String::new(),
            update_receiver,
            update_sender,
            show_new_chat_dialog: false,
            probe_in_flight: false,
            completed_exchanges: 0,
            startup_probe_started: false,
            style_initialized: false,
        }
    }

    /// Отправляет текст из поля ввода
    pub fn send_input(&mut self, ctx: &egui::Context) {
        if let Some(exchange) = self.chat.begin_submit(&self.input_text) {
            self.input_text.clear();
            self.dispatch(ctx, exchange);
        }
    }

    pub fn send_quick(&mut self, ctx: &egui::Context, key: &str) {
        if let Some(exchange) = self.chat.begin_quick(key) {
            self.dispatch(ctx, exchange);
        }
    }

    /// Запускает удаленный вызов в фоне; результат вернется через канал
    fn dispatch(&self, ctx: &egui::Context, exchange: PendingExchange) {
        let backend = Arc::clone(&self.backend);
        let sender = self.update_sender.clone();
        let ctx_clone = ctx.clone();

        self.runtime.spawn(async move {
            let result = backend.send(&exchange.query).await;

            if let Err(e) = sender.send(BackgroundUpdate::Reply { exchange, result }) {
                log::error!("Ошибка отправки ответа в UI: {}", e);
            }

            ctx_clone.request_repaint();
        });
    }

    /// Проверка связи (при старте и по кнопке Retry)
    pub fn check_connection(&mut self, ctx: &egui::Context) {
        if self.probe_in_flight {
            return;
        }
        self.probe_in_flight = true;

        let probe = Arc::clone(&self.probe);
        let sender = self.update_sender.clone();
        let ctx_clone = ctx.clone();
        let issued_after = self.completed_exchanges;

        self.runtime.spawn(async move {
            let reachable = probe.check().await;

            if let Err(e) = sender.send(BackgroundUpdate::Probe { reachable, issued_after }) {
                log::error!("Ошибка отправки результата проверки связи: {}", e);
            }

            ctx_clone.request_repaint();
        });
    }

    /// Применяет все готовые результаты фоновых задач
    pub fn process_updates(&mut self) {
        while let Ok(update) = self.update_receiver.try_recv() {
            match update {
                BackgroundUpdate::Reply { exchange, result } => {
                    match self.chat.complete(exchange, result) {
                        ExchangeOutcome::Answered => {
                            self.completed_exchanges += 1;
                            log::debug!("✓ Ответ сервера получен");
                        }
                        ExchangeOutcome::Fallback => {
                            self.completed_exchanges += 1;
                            log::debug!("📴 Показан локальный ответ");
                        }
                        ExchangeOutcome::Stale => {}
                    }
                }
                BackgroundUpdate::Probe { reachable, issued_after } => {
                    self.probe_in_flight = false;
                    // Обмен, завершившийся после запуска пробы, знает о связи больше
                    if issued_after < self.completed_exchanges {
                        log::debug!("🔕 Устаревший результат проверки связи пропущен");
                        continue;
                    }
                    self.chat.apply_probe(reachable);
                }
            }
        }
    }

    /// Подтвержденный "новый чат"
    pub fn start_new_chat(&mut self) {
        self.chat.start_new_chat();
        self.input_text.clear();
        self.show_new_chat_dialog = false;
    }

    fn init_style(&mut self, ctx: &egui::Context) {
        if self.style_initialized {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = egui::Visuals::dark();
        style.visuals.panel_fill = egui::Color32::from_rgb(23, 23, 23);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);
        self.style_initialized = true;
    }
}

impl eframe::App for BrofessorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.init_style(ctx);

        if !self.startup_probe_started {
            self.startup_probe_started = true;
            self.check_connection(ctx);
        }

        self.process_updates();

        let connectivity = self.chat.connectivity();
        let pending = self.chat.is_pending();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            let action = widgets::draw_header(
                ui,
                &self.config.assistant_name,
                &self.config.institution_name,
                connectivity,
                self.chat.language(),
            );
            if let Some(language) = action.language_changed {
                log::info!("🌐 Язык: {}", language.code());
                self.chat.set_language(language);
            }
            if action.new_chat_requested {
                self.show_new_chat_dialog = true;
            }

            if !connectivity.is_online() && widgets::draw_offline_banner(ui, self.probe_in_flight) {
                self.check_connection(ctx);
            }
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("composer").show(ctx, |ui| {
            ui.add_space(6.0);
            if let Some(key) = buttons::draw_quick_questions(ui, !pending) {
                self.send_quick(ctx, key);
            }
            ui.add_space(6.0);
            if chat::draw_input(ui, &mut self.input_text, !self.chat.is_pending()) {
                self.send_input(ctx);
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat::draw_messages(ui, self.chat.messages(), self.chat.is_pending());
        });

        if self.show_new_chat_dialog {
            match buttons::draw_new_chat_dialog(ctx) {
                Some(buttons::DialogChoice::Confirm) => self.start_new_chat(),
                Some(buttons::DialogChoice::Cancel) => self.show_new_chat_dialog = false,
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConnectivityState, FixedClock};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::time::Duration;

    struct EchoBackend;

    #[async_trait]
    impl ChatBackend for EchoBackend {
        async fn send(&self, query: &str) -> Result<String, ChatError> {
            Ok(format!("echo: {}", query))
        }
    }

    struct DownBackend;

    #[async_trait]
    impl ChatBackend for DownBackend {
        async fn send(&self, _query: &str) -> Result<String, ChatError> {
            Err(ChatError::Network("connection refused".into()))
        }
    }

    struct StaticProbe(bool);

    #[async_trait]
    impl HealthCheck for StaticProbe {
        async fn check(&self) -> bool {
            self.0
        }
    }

    fn app(backend: Arc<dyn ChatBackend>, reachable: bool) -> BrofessorApp {
        BrofessorApp::new(
            Config::default(),
            backend,
            Arc::new(StaticProbe(reachable)),
            Arc::new(FixedClock(Utc::now())),
            Handle::current(),
        )
    }

    async fn settle(app: &mut BrofessorApp) {
        for _ in 0..200 {
            app.process_updates();
            if !app.chat.is_pending() && !app.probe_in_flight {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("background work did not finish");
    }

    #[tokio::test]
    async fn input_is_sent_and_reply_applied() {
        let ctx = egui::Context::default();
        let mut app = app(Arc::new(EchoBackend), true);
        app.input_text = "  When does the semester start?  ".to_string();

        app.send_input(&ctx);
        assert!(app.input_text.is_empty());
        assert!(app.chat.is_pending());

        settle(&mut app).await;
        let last = app.chat.messages().last().unwrap();
        assert_eq!(last.text(), "echo: When does the semester start?");
    }

    #[tokio::test]
    async fn blank_input_is_kept_and_not_sent() {
        let ctx = egui::Context::default();
        let mut app = app(Arc::new(EchoBackend), true);
        app.input_text = "   ".to_string();

        app.send_input(&ctx);

        assert_eq!(app.input_text, "   ");
        assert!(!app.chat.is_pending());
        assert_eq!(app.chat.messages().len(), 1);
    }

    #[tokio::test]
    async fn failed_probe_then_fallback_reply() {
        let ctx = egui::Context::default();
        let mut app = app(Arc::new(DownBackend), false);

        app.check_connection(&ctx);
        settle(&mut app).await;
        assert_eq!(app.chat.connectivity(), ConnectivityState::Offline);

        app.send_quick(&ctx, "scholarship");
        settle(&mut app).await;
        let last = app.chat.messages().last().unwrap();
        assert!(last.is_degraded());
        assert!(last.text().contains("scholarship"));
    }

    #[tokio::test]
    async fn connection_check_older_than_last_exchange_is_ignored() {
        let ctx = egui::Context::default();
        let mut app = app(Arc::new(EchoBackend), false);

        // Проба стартует раньше ответа, а приходит позже
        let issued_after = app.completed_exchanges;
        app.probe_in_flight = true;
        app.input_text = "What courses are offered?".to_string();
        app.send_input(&ctx);
        while app.chat.is_pending() {
            app.process_updates();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(app.chat.connectivity(), ConnectivityState::Online);

        app.update_sender
            .send(BackgroundUpdate::Probe { reachable: false, issued_after })
            .unwrap();
        app.process_updates();

        assert!(!app.probe_in_flight);
        assert_eq!(app.chat.connectivity(), ConnectivityState::Online);

        app.check_connection(&ctx);
        settle(&mut app).await;
        assert_eq!(app.chat.connectivity(), ConnectivityState::Offline);
    }

    #[tokio::test]
    async fn new_chat_while_sending_drops_late_reply() {
        let ctx = egui::Context::default();
        let mut app = app(Arc::new(EchoBackend), true);
        app.input_text = "first question".to_string();
        app.send_input(&ctx);
        app.show_new_chat_dialog = true;

        app.start_new_chat();
        assert!(!app.show_new_chat_dialog);

        tokio::time::sleep(Duration::from_millis(50)).await;
        app.process_updates();
        assert_eq!(app.chat.messages().len(), 1);
    }
}

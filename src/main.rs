use anyhow::Context;
use brofessor::ai::RemoteChatClient;
use brofessor::config::Config;
use brofessor::core::clock::system_clock;
use brofessor::logger;
use brofessor::services::{build_http_client, HttpConnectivityProbe};
use brofessor::ui::BrofessorApp;
use eframe::NativeOptions;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // Инициализируем логирование
    logger::init();
    log::info!("🚀 BROFESSOR запущен");

    // Создаем tokio runtime для сетевых запросов
    let rt = tokio::runtime::Runtime::new().context("Не удалось создать tokio runtime")?;
    let handle = rt.handle().clone();

    let config = Config::default();
    log::info!("📁 Конфигурация загружена, сервер: {}", config.api_base_url);

    let http = build_http_client(&config)?;
    let backend = Arc::new(RemoteChatClient::new(http.clone(), &config.api_base_url));
    let probe = Arc::new(HttpConnectivityProbe::new(http, &config.api_base_url));

    let title = format!("{} · {}", config.assistant_name, config.institution_name);
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([420.0, 480.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(BrofessorApp::new(
                config,
                backend,
                probe,
                system_clock(),
                handle,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Ошибка окна: {}", e))?;

    log::info!("👋 BROFESSOR завершен");
    Ok(())
}

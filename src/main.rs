use phone_price_predictor::application::system::Application;
use phone_price_predictor::config::Config;
use phone_price_predictor::infrastructure::i18n::I18nService;
use phone_price_predictor::interfaces::app::PredictorApp;
use phone_price_predictor::interfaces::design_system::DesignSystem;
use phone_price_predictor::interfaces::fonts::configure_fonts;
use phone_price_predictor::interfaces::view_models::prediction_view_model::AppState;

use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Initializing Mobile Phone Price Predictor...");

    // 2. Load Config
    let config = Config::from_env()?;
    let window_size = [config.ui.window_width, config.ui.window_height];
    let i18n = I18nService::new().with_language(&config.ui.language);
    let title = i18n.t("window_title").to_string();

    // 3. Load the model once; failure leaves only the error screen
    let startup = Application::build(&config).map(|app| app.adapter);
    if let Err(e) = &startup {
        error!("Model unavailable, prediction disabled: {}", e.guidance());
    }
    let state = AppState::from_startup(startup);

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(PredictorApp::new(state, i18n)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}

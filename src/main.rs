use carbon_dashboard::services::loader;
use carbon_dashboard::ui::{self, Canvas};
use carbon_dashboard::{render, Config, Dashboard};
use chrono::Utc;
use dotenv::dotenv;
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting carbon credit dashboard");
    let config = Config::from_env()?;

    let mut dashboard = Dashboard::new(Canvas::new(), config.pipeline);
    let source = loader::source_for(&config.data_location);
    dashboard.load(source.as_ref()).await;

    let (events, mut inbox) = ui::channel();
    for event in config.initial_events() {
        events.send(event)?;
    }
    drop(events);

    while let Some(event) = inbox.recv().await {
        dashboard.dispatch(event);
    }

    if !dashboard.page().content_visible() {
        warn!("Writing dashboard without data");
    }
    let html = render::render_dashboard(&dashboard, &config.title, Utc::now())?;
    tokio::fs::write(&config.output_path, html).await?;
    info!("Wrote {}", config.output_path);

    Ok(())
}

use anyhow::Result;
use resume_intake::{core::ConfigManager, init_tracing, start_web_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("resume_intake=info,rocket::server=off");

    let config = ConfigManager::load()?;

    info!("Starting resume intake API server");
    info!("Port: {}", config.server.port);
    info!("Intake service: {}", config.service.intake_service_url);
    info!("OCR: {} ({})", config.ocr.command, config.ocr.language);

    start_web_server(config).await
}

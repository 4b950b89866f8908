use chatfolio::{config, logging, ui};
use dotenv::dotenv;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    config::initialize_config()?;
    let config = config::get_config();

    // Dropping the handle stops the logger
    let _logger = logging::init_logging(&config)?;
    info!(
        "Starting chatfolio, resume asset at {}",
        config.resume_path
    );

    ui::run_ui(config).await?;
    Ok(())
}

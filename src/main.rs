use anyhow::Result;
use rewardsdesk::config::Config;
use rewardsdesk::logger::{self, LogBuffer};
use rewardsdesk::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--generate-config") {
        let path = match args.iter().position(|arg| arg == "--generate-config").and_then(|i| args.get(i + 1)) {
            Some(path) => std::path::PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("rewardsdesk - prizes admin in the terminal");
        println!();
        println!("Usage: rewardsdesk [--generate-config [PATH]]");
        println!();
        println!("Configuration is read from ./rewardsdesk.toml or the XDG config directory.");
        return Ok(());
    }

    let config = Config::load()?;

    let log_buffer = LogBuffer::new();
    logger::init(&config.logging, log_buffer.clone())?;

    // Run the TUI application
    ui::run_app(config, log_buffer).await?;

    Ok(())
}

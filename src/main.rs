use clap::Parser;
use planet_vote::config::cli::Command;
use planet_vote::core::ConfigProvider;
use planet_vote::utils::error::ErrorSeverity;
use planet_vote::utils::{logger, validation::Validate};
use planet_vote::{
    AssetResolver, CliConfig, ClientConfig, HeadlessPage, HttpPlanetApi, PageController,
    PlanetError,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting planet-vote CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli.command, &config).await {
        match e.downcast_ref::<PlanetError>() {
            Some(err) => {
                tracing::error!(
                    "❌ {} (Category: {:?}, Severity: {:?})",
                    err,
                    err.category(),
                    err.severity()
                );
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());

                let exit_code = match err.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };
                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_config(cli: &CliConfig) -> planet_vote::Result<ClientConfig> {
    let config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    }
    .with_cli_overrides(cli);

    config.validate()?;
    Ok(config)
}

async fn run(command: &Command, config: &ClientConfig) -> anyhow::Result<()> {
    let page = HeadlessPage::with_info_text(config.placeholder());
    let api = HttpPlanetApi::from_config(config)?;
    let controller = Arc::new(
        PageController::new(api, page.elements(), AssetResolver::from_config(config))
            .with_placeholder(config.placeholder()),
    );
    controller.attach_vote_controls();

    match command {
        Command::Gallery => {
            controller.initialize().await?;
            println!("🪐 Gallery");
            for tile in page.tiles() {
                println!("  {:<10} {}", tile.alt, tile.image_src);
            }
            println!("🗳️  Vote options");
            for option in page.options() {
                println!("  {}", option.label);
            }
        }
        Command::Hover { name } => {
            controller.initialize().await?;
            let index = page
                .tile_index(name)
                .ok_or_else(|| anyhow::anyhow!("no tile for planet '{}'", name))?;
            page.hover(index);
            println!("{}", page.info_text());
            page.unhover(index);
            tracing::debug!("Info panel reset to: {}", page.info_text());
        }
        Command::Toggle => {
            println!(
                "select: {:?}, button: {:?}",
                page.select_display(),
                page.button_display()
            );
            for _ in 0..2 {
                page.click_toggle()?;
                println!(
                    "select: {:?}, button: {:?}",
                    page.select_display(),
                    page.button_display()
                );
            }
        }
        Command::Vote { name } => {
            controller.initialize().await?;
            page.select(name)?;
            if !page.button_display().is_visible() {
                page.click_toggle()?;
            }
            page.click_vote().await?;
            for alert in page.alerts() {
                println!("📣 {}", alert);
            }
        }
        Command::Describe { name } => {
            controller.describe_planet(name).await?;
            println!("{}", page.info_text());
        }
        Command::Comment { name, text } => {
            controller.comment(name, text).await?;
            for alert in page.alerts() {
                println!("📣 {}", alert);
            }
        }
        Command::Register { username, password } => {
            controller.register(username, password).await?;
            for alert in page.alerts() {
                println!("📣 {}", alert);
            }
        }
    }

    Ok(())
}

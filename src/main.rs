use clap::Parser;
use shoplist::app::session::Session;
use shoplist::domain::ports::ConfigProvider;
use shoplist::utils::{logger, validation::Validate};
use shoplist::{AppConfig, CliConfig, JsonFileStore, ListController};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting shoplist");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let config = match AppConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = JsonFileStore::new(config.store_path());
    let controller = ListController::with_defaults(store, config.default_products());
    tracing::info!(
        "Loaded {} products from {}",
        controller.products().len(),
        config.store_path().display()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(controller);
    session.run(stdin.lock(), stdout.lock())?;

    println!("✅ List saved to {}", config.store_path().display());
    Ok(())
}

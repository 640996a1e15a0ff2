//! # rndline Main Entry Point

use anyhow::{Context, Result};
use rndline::{
    cmd_args::CommandLineArgs,
    config::ConsoleSettings,
    logging::{init_tracing_subscriber, resolve_log_file},
    AppController, Catalog,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    let log_file = resolve_log_file(cmd_args.log_file());
    init_tracing_subscriber(log_file.as_deref())?;

    let settings = ConsoleSettings::from_args(&cmd_args)?;
    tracing::debug!("Settings: {:?}", settings);

    let catalog = match cmd_args.catalog() {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let mut app = AppController::new(&settings, &catalog)?;
    app.run().await
}

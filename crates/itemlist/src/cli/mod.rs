//! Command-line entry: parse flags, layer them over the loaded config, start logging
//! and run the server.

mod args;

pub use args::Cli;

use crate::logging::init_logging;
use crate::server::Server;
use clap::Parser;
use itemlistapp::config::ServerConfig;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = ServerConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_logging(&config.log_level, config.json_logs);

    let server = Server::new(config)?;
    server.run().await
}

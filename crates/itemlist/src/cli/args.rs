use clap::Parser;
use itemlistapp::config::ServerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itemlist", bin_name = "itemlist", version)]
#[command(about = "Serve one shared list of text items over HTTP", long_about = None)]
pub struct Cli {
    /// TOML config file (skipped if missing)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// JSON file holding the items
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Front-end directory, served under /static
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Flags given on the command line win over every other source.
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if self.json_logs {
            config.json_logs = true;
        }
    }
}

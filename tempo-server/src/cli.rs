use anyhow::Context;
use clap::{Parser, Subcommand};
use tempo_core::{Config, WeatherApiClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tempo", version, about = "HTTP facade over weatherapi.com")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key in the config file.
    Configure,

    /// Run the HTTP server.
    Serve {
        /// Bind address, e.g. "127.0.0.1:3000". Overrides the config file.
        #[arg(long)]
        listen: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Serve { listen } => serve(listen).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("weatherapi.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn serve(listen: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?.to_owned();

    let client = match config.base_url.as_deref() {
        Some(base_url) => WeatherApiClient::with_base_url(api_key, base_url.to_owned()),
        None => WeatherApiClient::new(api_key),
    };

    let listen = listen.as_deref().unwrap_or_else(|| config.listen_addr());
    crate::http::run(client, listen).await
}

//! Interactive CLI for the e-book store client.

mod commands;
mod shell;

use anyhow::Result;
use clap::Parser;
use ebs_core::api::ApiClient;
use ebs_core::config;
use ebs_core::session::Session;

/// Top-level CLI for the `ebs` store client.
#[derive(Debug, Parser)]
#[command(name = "ebs")]
#[command(about = "ebs: interactive client for the e-book store API", long_about = None)]
pub struct Cli {
    /// Override the API base URL from the config file.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory where downloaded files are saved (default from config,
    /// else the current directory).
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<std::path::PathBuf>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_init()?;
    if let Some(url) = cli.base_url {
        cfg.base_url = url;
    }
    if let Some(dir) = cli.download_dir {
        cfg.download_dir = Some(dir);
    }
    tracing::debug!("loaded config: {:?}", cfg);

    let api = ApiClient::new(&cfg)?;
    let mut session = Session::new(api);

    // Session-restore probe. A fresh process has an empty cookie jar so
    // this normally answers 401 and stays silent.
    if let Some(welcome) = session.refresh().await {
        println!("{welcome}");
    }

    shell::run_shell(&mut session, &cfg).await
}

#[cfg(test)]
mod tests;

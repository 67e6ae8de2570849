use anyhow::Result;
use clap::Parser;
use pipeline_ci::{Config, Overrides};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Pipeline CI status service")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Log every request and enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?.apply(Overrides {
        host: cli.host,
        port: cli.port,
        debug: cli.debug,
    });

    pipeline_ci::init_tracing(config.debug);

    let handle = pipeline_ci::run_server(&config).await?;
    info!("Server started on port {}", handle.port());

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received");

    handle.shutdown().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "pipeline-ci",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--debug",
        ]);
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(9000));
        assert!(cli.debug);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pipeline-ci"]);
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_rejects_bad_port() {
        assert!(Cli::try_parse_from(["pipeline-ci", "--port", "99999"]).is_err());
    }
}

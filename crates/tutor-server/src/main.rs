use anyhow::Context;
use clap::Parser;

use tutor_server::config::{
    LlmConfig, ServerConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROBE_MODEL,
    DEFAULT_WORKER_COUNT,
};
use tutor_server::logging::init_logging;
use tutor_server::run_server;

#[derive(Parser, Debug, Clone)]
#[command(name = "tutor-server")]
#[command(about = "Learning-style content generation server")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Bind address
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// HTTP worker count
    #[arg(long, default_value_t = DEFAULT_WORKER_COUNT)]
    workers: usize,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = tutor_llm::providers::openai::DEFAULT_BASE_URL)]
    base_url: String,

    /// Model used for generation
    #[arg(long, env = "OPENAI_MODEL", default_value = tutor_llm::providers::openai::DEFAULT_MODEL)]
    model: String,

    /// Model used for the startup connectivity check
    #[arg(long, env = "OPENAI_PROBE_MODEL", default_value = DEFAULT_PROBE_MODEL)]
    probe_model: String,

    /// Skip the startup connectivity check
    #[arg(long)]
    skip_probe: bool,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        ServerConfig {
            host: cli.host,
            port: cli.port,
            workers: cli.workers.max(1),
            startup_probe: !cli.skip_probe,
            llm: LlmConfig {
                api_key: cli.api_key,
                base_url: cli.base_url,
                model: cli.model,
                probe_model: cli.probe_model,
            },
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.debug {
        log::debug!("Debug mode enabled");
    }

    let config = ServerConfig::from(cli);
    let (host, port) = (config.host.clone(), config.port);

    run_server(config)
        .await
        .with_context(|| format!("tutor server failed on {host}:{port}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "tutor-server",
            "--port",
            "8088",
            "--host",
            "0.0.0.0",
            "--api-key",
            "sk-test",
            "--model",
            "gpt-4o",
            "--skip-probe",
        ])
        .unwrap();

        let config = ServerConfig::from(cli);
        assert_eq!(config.port, 8088);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.llm.api_key(), Some("sk-test"));
        assert_eq!(config.llm.model, "gpt-4o");
        assert!(!config.startup_probe);
    }

    #[test]
    fn test_zero_workers_is_clamped() {
        let cli = Cli::try_parse_from(["tutor-server", "--workers", "0"]).unwrap();
        assert_eq!(ServerConfig::from(cli).workers, 1);
    }
}

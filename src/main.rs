//! reddit-embed-relay - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_embed_relay::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_run_stats, print_success},
    run::run,
};

#[tokio::main]
async fn main() -> ExitCode {
    match relay().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Publish(_) | Error::RateLimitExhausted(_) => {
                    ExitCode::from(exit_codes::PUBLISH_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn relay() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration file if present; env/CLI args fill the rest
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration before touching the state file or network
    validate_config(&config)?;

    print_config_summary(&config.subreddit, &config.top_time, config.max_per_run);

    let stats = run(&config).await?;

    print_run_stats(&stats);
    print_success(&format!("Sent {} item(s).", stats.sent));

    Ok(())
}

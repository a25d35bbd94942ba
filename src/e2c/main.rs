use clap::Parser;
use e2c::api::E2cApi;
use e2c::config::E2cConfig;
use e2c::error::Result;
use e2c::store::fs::JsonStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

/// Failures print one line to stdout and the process still exits 0.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        println!("{}", e);
    }
}

/// `--verbose` wins over `RUST_LOG`; without it `RUST_LOG` applies, else `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = E2cConfig::cli();
    debug!(
        data_dir = %config.data_dir.display(),
        intent = %config.default_intent,
        "loaded config"
    );
    let mut api = E2cApi::from_config(&config)?;

    match cli.command {
        Commands::Get { key } => handle_get(&mut api, &key),
        Commands::Put { key, value } => handle_put(&mut api, &key, &value),
    }
}

fn handle_get(api: &mut E2cApi<JsonStore>, key: &str) -> Result<()> {
    let result = api.get(key)?;
    println!("{}", result.value.unwrap_or_default());
    Ok(())
}

fn handle_put(api: &mut E2cApi<JsonStore>, key: &str, value: &str) -> Result<()> {
    api.put(key, value)?;
    Ok(())
}

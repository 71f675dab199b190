use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cf_import::cli::Cli;
use cf_import::{CloudflareClient, ImportConfig, ImportError, Importer, StateBackend, TofuRunner};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(cli: Cli) -> Result<(), ImportError> {
    let config = ImportConfig::from_cli(&cli)?;
    tracing::debug!(?config, "configuration resolved");

    let client = CloudflareClient::with_base_url(&config.api_token, cli.api_base)?;
    let state = StateBackend::new(TofuRunner::new(cli.tofu_bin, cli.chdir));

    let report = Importer::new(&config, &client, state)
        .dry_run(cli.dry_run)
        .run()
        .await?;

    tracing::info!(
        imported = report.imported_count(),
        total = report.outcomes.len(),
        "run complete"
    );

    if cli.dry_run {
        println!("{}", cf_import::output::render_table(&report));
        println!("dry run completed");
    } else {
        println!("terraform import completed");
    }

    Ok(())
}

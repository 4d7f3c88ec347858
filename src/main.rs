//! Icon Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use icon_downloader::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_success, print_warning,
    },
    pipeline::run_pipeline,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    let init = args.init;
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    if init {
        config.save(&config_path)?;
        print_success(&format!(
            "Configuration written to {}",
            config_path.display()
        ));
        return Ok(());
    }

    let archive_display = config.output.archive_path.display().to_string();
    print_config_summary(
        &config.input.mapping_path.display().to_string(),
        &config.http.base_url,
        &config.output.directory.display().to_string(),
        (!config.options.skip_archive).then_some(archive_display.as_str()),
        config.options.concurrency,
    );

    let report = run_pipeline(&config).await?;

    if let Some(ref archive) = report.archive {
        print_success(&format!(
            "Archive created: {} ({} files)",
            archive.path.display(),
            archive.entries
        ));
    }

    print_run_stats(&report.summary, report.archive.as_ref());

    Ok(())
}

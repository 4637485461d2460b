//! DSPreset Sorter - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dspreset_sorter::{
    cli::Args,
    config::{validate_config, Config},
    descriptor::parse_descriptor,
    error::{exit_codes, Error, Result},
    organize::run_batch,
    output::{
        print_banner, print_batch_stats, print_config_summary, print_error, print_info,
        print_plan, print_plan_json, print_warning,
    },
    route::Router,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // JSON output goes to stdout untouched
    let chatty = !args.json;

    if chatty {
        print_banner();
    }

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        if chatty {
            print_warning(&format!(
                "Configuration file not found: {}",
                args.config.display()
            ));
            print_info("Using default configuration with CLI arguments");
        }
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    if chatty {
        print_config_summary(
            &args.descriptor.display().to_string(),
            &config.output_root().display().to_string(),
            &config.output.pack_suffix,
            &config.options.failure_policy.to_string(),
            config.options.dry_run,
        );
    }

    let entries = parse_descriptor(&args.descriptor)?;
    if chatty {
        print_info(&format!("Found {} samples", entries.len()));
    }

    let router = Router::from_config(&config);
    let state = run_batch(&args.descriptor, &entries, &router, &config.options)?;

    if args.json {
        print_plan_json(&state)?;
    } else {
        if config.options.dry_run {
            print_plan(&state);
        }
        print_batch_stats(&state, config.options.dry_run);
    }

    if !state.failures.is_empty() {
        return Err(Error::EntriesFailed(state.failed_count()));
    }

    Ok(())
}

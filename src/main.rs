use std::process::ExitCode;

use clap::Parser;

use vecprep::cli::Cli;
use vecprep::cli::commands::{PrepareArgs, handle_create_samples, handle_prepare};
use vecprep::cli::output::get_formatter;
use vecprep::error::ConfigError;

const CREATE_SAMPLES_HINT: &str = "Run with --create-samples to create a sample config file";

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; credentials may come from the config file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let format = cli.format;

    let result = if cli.create_samples {
        handle_create_samples(&cli.config, &cli.docs, format)
    } else {
        let args = PrepareArgs {
            config: cli.config,
            docs: cli.docs,
            verbose: cli.verbose,
            quiet: cli.quiet,
        };
        handle_prepare(args, format).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let hint = is_missing_config(&err).then_some(CREATE_SAMPLES_HINT);
            eprint!(
                "{}",
                get_formatter(format).format_error(&err.to_string(), hint)
            );
            ExitCode::FAILURE
        }
    }
}

fn is_missing_config(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| matches!(cause.downcast_ref::<ConfigError>(), Some(ConfigError::Missing(_))))
}

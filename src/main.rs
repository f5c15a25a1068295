use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;

use tfdocs_lint::check::schema::ProvidersSchema;
use tfdocs_lint::check::{Check, discover};
use tfdocs_lint::config::{Args, Config};

fn run(config: Config) -> Result<()> {
    let mut options = config.options;

    let directories = discover(&config.path)?;
    if directories.is_empty() {
        bail!(
            "No Terraform Provider documentation directories found in path: {}",
            config.path.display()
        );
    }

    if let Some(schema_path) = &config.providers_schema_json {
        if options.provider_name.is_empty() {
            bail!(
                "Unknown provider name for enabling Terraform Provider schema checks.\n\n\
                 Check that the current working directory or provided path is prefixed with terraform-provider-*."
            );
        }

        log::debug!("Loading providers schema JSON file: {}", schema_path.display());
        let schema = ProvidersSchema::load(schema_path)?;
        options.schema_names =
            Some(schema.names(options.provider_source.as_deref(), &options.provider_name));
    }

    Check::new(options).run(&directories)
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error checking Terraform Provider documentation: {err:#}");
            ExitCode::FAILURE
        }
    }
}

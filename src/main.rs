mod aggregate;
mod catalog;
mod cli;
mod config;
mod error;
mod presets;
mod rank;
mod report;
mod resolve;
mod score;
mod types;

use crate::error::DevrankError;
use crate::types::weights::{WeightOverrides, WeightRequest};
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, DevrankError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let loaded = config::load_config(cmd.config.as_deref())?;

            let settings = loaded
                .as_ref()
                .map(config::DevrankConfig::engine_settings)
                .unwrap_or_default();
            let registry = match &loaded {
                Some(config) => presets::PresetRegistry::with_overrides(config.preset_overrides()),
                None => presets::PresetRegistry::builtin(),
            };

            let mut overrides = WeightOverrides::default();
            for (name, value) in &cmd.weights {
                // Names were validated at parse time.
                overrides.set(name, *value);
            }
            let request = WeightRequest {
                preset: cmd.preset.clone(),
                overrides,
            };

            let devices = catalog::load_catalog(&cmd.catalog)?;
            let resolver = resolve::WeightResolver::new(registry);
            let weights = resolver.resolve(&request);
            let engine = score::ScoringEngine::new(settings);

            let mut results = rank::rank(&engine, &devices, &weights);
            if let Some(limit) = cmd.limit {
                results.truncate(limit);
            }

            let format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&results, format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Presets(cmd) => {
            let loaded = config::load_config(cmd.config.as_deref())?;
            let registry = match &loaded {
                Some(config) => presets::PresetRegistry::with_overrides(config.preset_overrides()),
                None => presets::PresetRegistry::builtin(),
            };

            println!("presets:");
            for (name, vector) in registry.iter() {
                let coefficients = vector
                    .as_array()
                    .iter()
                    .zip(types::weights::CATEGORY_NAMES)
                    .map(|(value, category)| format!("{category}={value:.3}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("- {name}: {coefficients}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

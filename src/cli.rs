use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::types::weights::CATEGORY_NAMES;

#[derive(Parser)]
#[command(
    name = "devrank",
    version,
    about = "Multi-criteria device catalog ranking CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a device catalog by weighted category scores
    Rank(RankCommand),
    /// List available weight presets
    Presets(PresetsCommand),
}

#[derive(Args)]
pub struct RankCommand {
    /// Device catalog JSON file
    pub catalog: PathBuf,

    /// Weight preset name (unknown names fall back to balanced)
    #[arg(long)]
    pub preset: Option<String>,

    /// Per-category weight override, e.g. --weight performance=0.5 (repeatable;
    /// overrides win over --preset)
    #[arg(long = "weight", value_name = "CATEGORY=VALUE", value_parser = parse_weight_override)]
    pub weights: Vec<(String, f64)>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Keep only the top N results after ranking
    #[arg(long)]
    pub limit: Option<usize>,

    /// devrank.toml with FX rate, chipset tiers and extra presets
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct PresetsCommand {
    /// devrank.toml with extra presets to include in the listing
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

/// Parses `category=value`. The category must be one of the eight known
/// names; the value only has to be a float, non-finite values are handled
/// by the resolver per its never-fails contract.
fn parse_weight_override(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if !CATEGORY_NAMES.contains(&name) {
        return Err(format!(
            "unknown category '{name}' (expected one of: {})",
            CATEGORY_NAMES.join(", ")
        ));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_category() {
        let (name, value) = parse_weight_override("performance=0.5").expect("should parse");
        assert_eq!(name, "performance");
        assert_eq!(value, 0.5);
    }

    #[test]
    fn trims_whitespace() {
        let (name, value) = parse_weight_override(" battery = 1 ").expect("should parse");
        assert_eq!(name, "battery");
        assert_eq!(value, 1.0);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = parse_weight_override("speed=0.5").expect_err("should fail");
        assert!(err.contains("unknown category"));
    }

    #[test]
    fn rejects_missing_separator_and_bad_value() {
        assert!(parse_weight_override("performance").is_err());
        assert!(parse_weight_override("performance=fast").is_err());
    }

    #[test]
    fn passes_non_finite_values_through() {
        let (_, value) = parse_weight_override("camera=NaN").expect("should parse");
        assert!(value.is_nan());
    }
}

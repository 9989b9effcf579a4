use std::{fs, path::PathBuf};

use clap::Parser;
use eyre::{bail, Result, WrapErr};
use itertools::Itertools;
use soundcalc::{ProofSystemConfig, Regime, SoundnessCalculator};
use soundcalc_sdk::{
    config::zkvms::{load_configs, standard_presets},
    report::{build_json_report, build_markdown_report},
    utils::setup_tracing,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with `[[zkvm]]` tables. The built-in presets are used if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only evaluate the proof systems with these names.
    #[arg(long)]
    preset: Vec<String>,

    /// Only evaluate these regimes: unique_decoding, johnson_bound, capacity_bound, ethstark.
    #[arg(long)]
    regime: Vec<Regime>,

    /// Where to write the Markdown report.
    #[arg(long, default_value = "results.md")]
    output: PathBuf,

    /// Also write the report as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn select(configs: Vec<ProofSystemConfig>, names: &[String]) -> Result<Vec<ProofSystemConfig>> {
    if names.is_empty() {
        return Ok(configs);
    }
    if let Some(missing) = names
        .iter()
        .find(|name| configs.iter().all(|config| &config.name != *name))
    {
        bail!(
            "unknown proof system {missing}, expected one of: {}",
            configs.iter().map(|config| &config.name).join(", ")
        );
    }
    Ok(configs
        .into_iter()
        .filter(|config| names.contains(&config.name))
        .collect())
}

fn main() -> Result<()> {
    setup_tracing();
    let args = Args::parse();

    let configs = match &args.config {
        Some(path) => load_configs(path)?,
        None => standard_presets(),
    };
    let configs = select(configs, &args.preset)?;
    let calculator = if args.regime.is_empty() {
        SoundnessCalculator::default()
    } else {
        SoundnessCalculator::new(args.regime.clone())
    };

    let reports = calculator
        .calculate_all(&configs)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    for report in &reports {
        let totals = report
            .totals()
            .map(|(regime, bits)| format!("{regime}: {bits}b"))
            .join("; ");
        println!("{}: {totals}", report.name());
    }

    fs::write(&args.output, build_markdown_report(&reports))
        .wrap_err_with(|| format!("failed to write {}", args.output.display()))?;
    println!("wrote {}", args.output.display());

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&build_json_report(&reports))?;
        fs::write(path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

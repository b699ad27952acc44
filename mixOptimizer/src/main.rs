use anyhow::{anyhow, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use energymix::analysis::reporting;
use energymix::cli::cli::Args;
use energymix::config::scenario_config::{self, ScenarioConfig};
use energymix::core::screening::run_screening;
use energymix::utils::csv_export::CsvExporter;
use energymix::utils::logging::{self, FileIOType, OperationCategory};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging())
        .map_err(|e| anyhow!(e))
        .context("failed to initialise logging")?;

    if let Some(path) = args.write_default_config() {
        scenario_config::save_scenario(&ScenarioConfig::default(), path)
            .with_context(|| format!("failed to write default scenario to {}", path))?;
        info!("Wrote default scenario to {}", path);
        return Ok(());
    }

    let mut scenario = load_scenario(args.config());
    if let Some(samples) = args.samples() {
        scenario.screening.samples = samples;
    }
    if let Some(seed) = args.seed() {
        scenario.screening.random_seed = seed;
    }
    scenario.screening.parallel = args.parallel();

    println!("Energy Mix Screening - {}", scenario.country_name);
    println!("Samples: {}, Seed: {}, Parallel: {}",
             scenario.screening.samples,
             scenario.screening.random_seed,
             if scenario.screening.parallel { "enabled" } else { "disabled" });

    let problem = scenario.build_problem();

    // The evaluator never reports data errors itself, so surface them before the run
    for (name, err) in problem.catalog.invalid_entries() {
        warn!("Catalog entry '{}' is unusable: {}", name, err);
    }
    for source in &scenario.screening.sources {
        if !problem.catalog.contains(source) {
            warn!("Screened source '{}' is not in the catalog; candidates using it will be rejected", source);
        }
    }
    if let Err(reason) = problem.country.validate() {
        warn!("Country data for {} is invalid: {}", scenario.country_name, reason);
    }
    debug!("Energy required: {:.2} MWh/day, catalog size: {}", problem.total_energy_required, problem.catalog.len());

    let progress = ProgressBar::new(scenario.screening.samples as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} candidates")
            .context("invalid progress bar template")?,
    );

    let outcome = run_screening(&problem, &scenario.screening, Some(&progress));
    progress.finish_and_clear();

    reporting::print_screening_summary(&scenario.country_name, &outcome);

    if let Some(&best) = outcome.front.iter().min_by(|a, b| {
        outcome.evaluations[**a].total_cost()
            .total_cmp(&outcome.evaluations[**b].total_cost())
    }) {
        println!("\nLowest-cost non-dominated candidate:");
        reporting::print_evaluation(&outcome.candidates[best], &outcome.evaluations[best]);
    }

    if let Some(dir) = args.output_dir() {
        let exporter = CsvExporter::new(dir).map_err(|e| anyhow!(e))?;
        let path = exporter
            .export_screening_results(&outcome, &scenario.screening.sources, args.front_only())
            .map_err(|e| anyhow!(e))
            .context("failed to export screening results")?;
        println!("Results written to {}", path.display());
    }

    logging::print_timing_report();
    Ok(())
}

fn load_scenario(path: Option<&str>) -> ScenarioConfig {
    let _timing = logging::start_timing("load_scenario",
        OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });

    match path {
        Some(path) => match scenario_config::load_scenario(path) {
            Ok(scenario) => {
                info!("Loaded scenario '{}' from {}", scenario.country_name, path);
                scenario
            }
            Err(e) => {
                warn!("Failed to load scenario from {}: {}. Using built-in scenario.", path, e);
                ScenarioConfig::default()
            }
        },
        None => {
            info!("No scenario file given, using built-in scenario");
            ScenarioConfig::default()
        }
    }
}

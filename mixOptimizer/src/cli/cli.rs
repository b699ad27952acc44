use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Screen national energy mixes for cost and land pressure", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Scenario JSON file (falls back to the built-in scenario)")]
    config: Option<String>,

    #[arg(short = 'n', long, help = "Number of candidates to evaluate")]
    samples: Option<usize>,

    #[arg(long, help = "Random seed for candidate sampling")]
    seed: Option<u64>,

    #[arg(long, default_value_t = false, help = "Evaluate candidates on a single thread")]
    sequential: bool,

    #[arg(short, long, help = "Directory for CSV results")]
    output_dir: Option<String>,

    #[arg(long, default_value_t = false, help = "Only export the non-dominated candidates")]
    front_only: bool,

    #[arg(long, help = "Write the built-in scenario to this path and exit")]
    write_default_config: Option<String>,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn samples(&self) -> Option<usize> {
        self.samples
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn parallel(&self) -> bool {
        !self.sequential
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output_dir.as_deref()
    }

    pub fn front_only(&self) -> bool {
        self.front_only
    }

    pub fn write_default_config(&self) -> Option<&str> {
        self.write_default_config.as_deref()
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}

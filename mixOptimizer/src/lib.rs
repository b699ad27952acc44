// Main module declarations for the energy mix evaluator

// Core evaluation modules
pub mod core {
    pub mod evaluator;
    pub mod balance;
    pub mod screening;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod const_funcs;
    pub mod scenario_config;
}

// Model definitions
pub mod models {
    pub mod energy_source;
    pub mod catalog;
    pub mod country;
    pub mod mix;
}

// Analysis and reporting
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::core::evaluator::{evaluate, evaluate_for_country, Evaluation, EvaluationError, EvaluationResult};
pub use crate::models::catalog::EnergyCatalog;
pub use crate::models::country::CountryContext;
pub use crate::models::energy_source::{Emissions, EmissionsMode, EnergySource, SourceRecord};
pub use crate::models::mix::MixCandidate;

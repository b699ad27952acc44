//! Constrained two-objective fitness function for a candidate energy mix.
//!
//! `evaluate` never fails: data errors and land-cap violations come back as
//! `Evaluation::Infeasible`, whose cost is `+inf`, so a search driver can rank
//! every candidate of a population without special cases.

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::constants::MAX_LAND_USE_FRACTION;
use crate::config::const_funcs::calc_max_land_area;
use crate::models::catalog::EnergyCatalog;
use crate::models::country::CountryContext;
use crate::models::mix::MixCandidate;

pub const HYDRO_SOURCE: &str = "hydro";

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    MissingOutputData { source: String },
    UnknownEmissionsMode { source: String, mode: Option<String> },
    InvalidSourceData { source: String, field: &'static str },
    LandCapExceeded { land_used: f64, max_land: f64, land_pressure: f64 },
    InvalidCountryData { reason: String },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::MissingOutputData { source } => {
                write!(f, "Missing or non-positive output per unit for source: {}", source)
            }
            EvaluationError::UnknownEmissionsMode { source, mode: Some(mode) } => {
                write!(f, "Unknown emissions mode '{}' for source: {}", mode, source)
            }
            EvaluationError::UnknownEmissionsMode { source, mode: None } => {
                write!(f, "Missing emissions mode for source: {}", source)
            }
            EvaluationError::InvalidSourceData { source, field } => {
                write!(f, "Non-finite or negative {} for source: {}", field, source)
            }
            EvaluationError::LandCapExceeded { land_used, max_land, .. } => {
                write!(f, "Land use {:.2} m² exceeds cap of {:.2} m²", land_used, max_land)
            }
            EvaluationError::InvalidCountryData { reason } => write!(f, "Invalid country data: {}", reason),
        }
    }
}

impl std::error::Error for EvaluationError {}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub land: f64,   // land_pressure - cap, feasible when <= 0
    pub hydro: f64,  // 1 - hydro_output / demand
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub units_needed: BTreeMap<String, f64>,
    pub total_cost: f64,
    pub total_land_used: f64,
    pub land_pressure: f64,
    pub emissions_total: f64,
    pub constraints: Constraints,
}

impl EvaluationResult {
    pub fn objectives(&self) -> [f64; 2] {
        [self.total_cost, self.land_pressure]
    }

    pub fn constraint_values(&self) -> [f64; 2] {
        [self.constraints.land, self.constraints.hydro]
    }

    pub fn is_feasible_for_optimizer(&self) -> bool {
        self.constraint_values().iter().all(|&g| g <= 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Feasible(EvaluationResult),
    Infeasible(EvaluationError),
}

impl Evaluation {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Evaluation::Feasible(_))
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        match self {
            Evaluation::Feasible(result) => Some(result),
            Evaluation::Infeasible(_) => None,
        }
    }

    pub fn error(&self) -> Option<&EvaluationError> {
        match self {
            Evaluation::Feasible(_) => None,
            Evaluation::Infeasible(e) => Some(e),
        }
    }

    pub fn total_cost(&self) -> f64 {
        match self {
            Evaluation::Feasible(result) => result.total_cost,
            Evaluation::Infeasible(_) => f64::INFINITY,
        }
    }

    /// `[cost, land_pressure]`. Infeasible candidates cost `+inf`; their land
    /// pressure is only known when the land cap was what rejected them.
    pub fn objectives(&self) -> [f64; 2] {
        match self {
            Evaluation::Feasible(result) => result.objectives(),
            Evaluation::Infeasible(EvaluationError::LandCapExceeded { land_pressure, .. }) => {
                [f64::INFINITY, *land_pressure]
            }
            Evaluation::Infeasible(_) => [f64::INFINITY, f64::INFINITY],
        }
    }

    /// `[land, hydro]`, feasible when <= 0.
    pub fn constraint_values(&self) -> [f64; 2] {
        match self {
            Evaluation::Feasible(result) => result.constraint_values(),
            Evaluation::Infeasible(EvaluationError::LandCapExceeded { land_pressure, .. }) => {
                [land_pressure - MAX_LAND_USE_FRACTION, f64::INFINITY]
            }
            Evaluation::Infeasible(_) => [f64::INFINITY, f64::INFINITY],
        }
    }
}

impl From<Result<EvaluationResult, EvaluationError>> for Evaluation {
    fn from(result: Result<EvaluationResult, EvaluationError>) -> Self {
        match result {
            Ok(result) => Evaluation::Feasible(result),
            Err(e) => Evaluation::Infeasible(e),
        }
    }
}

pub fn evaluate(
    total_energy_required: f64,
    mix: &MixCandidate,
    country: &CountryContext,
    catalog: &EnergyCatalog,
    land_price_per_m2: f64,
    carbon_price_per_kg: f64,
) -> Evaluation {
    try_evaluate(total_energy_required, mix, country, catalog, land_price_per_m2, carbon_price_per_kg).into()
}

/// Same as `evaluate`, priced with the country's own land and carbon prices.
pub fn evaluate_for_country(
    total_energy_required: f64,
    mix: &MixCandidate,
    country: &CountryContext,
    catalog: &EnergyCatalog,
) -> Evaluation {
    evaluate(
        total_energy_required,
        mix,
        country,
        catalog,
        country.land_price_per_m2,
        country.carbon_price_per_kg,
    )
}

fn try_evaluate(
    total_energy_required: f64,
    mix: &MixCandidate,
    country: &CountryContext,
    catalog: &EnergyCatalog,
    land_price_per_m2: f64,
    carbon_price_per_kg: f64,
) -> Result<EvaluationResult, EvaluationError> {
    country.validate().map_err(|reason| EvaluationError::InvalidCountryData { reason })?;

    let mut units_needed = BTreeMap::new();
    let mut total_cost = 0.0;
    let mut total_land_used = 0.0;
    let mut emissions_total = 0.0;

    for (name, share) in mix.active() {
        let target_energy = total_energy_required * share;
        let source = catalog.get(name)?;
        let output_per_unit = source.get_output_per_unit();

        let units = target_energy / output_per_unit;
        units_needed.insert(name.to_string(), units);

        total_cost += units * source.get_unit_cost();
        total_land_used += units * source.get_land_area();
        emissions_total += source.get_emissions().for_units(units, output_per_unit);
    }

    // Hard constraint, the boundary itself is allowed
    let max_land = calc_max_land_area(country.land_area_m2);
    let land_pressure = total_land_used / country.land_area_m2;
    if total_land_used > max_land {
        return Err(EvaluationError::LandCapExceeded {
            land_used: total_land_used,
            max_land,
            land_pressure,
        });
    }

    total_cost += total_land_used * land_price_per_m2;
    if carbon_price_per_kg > 0.0 {
        total_cost += emissions_total * carbon_price_per_kg;
    }

    let hydro_share = mix.share(HYDRO_SOURCE);
    let hydro_output = if hydro_share > 0.0 {
        let hydro_per_unit = catalog.get(HYDRO_SOURCE)?.get_output_per_unit();
        let hydro_units = (total_energy_required * hydro_share) / hydro_per_unit;
        hydro_units * hydro_per_unit
    } else {
        0.0
    };
    let hydro_constraint = 1.0 - hydro_output / country.daily_demand_mwh;

    Ok(EvaluationResult {
        units_needed,
        total_cost,
        total_land_used,
        land_pressure,
        emissions_total,
        constraints: Constraints {
            land: land_pressure - MAX_LAND_USE_FRACTION,
            hydro: hydro_constraint,
        },
    })
}

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use serde::{Deserialize, Serialize};

use crate::config::constants::*;
use crate::config::const_funcs::{calc_daily_energy, calc_hydro_power, calc_solar_output, calc_wind_power};
use crate::core::screening::ScreeningProblem;
use crate::models::catalog::EnergyCatalog;
use crate::models::country::CountryContext;
use crate::models::energy_source::{EmissionsMode, SourceRecord};

#[derive(Debug)]
pub enum ScenarioLoadError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl From<std::io::Error> for ScenarioLoadError {
    fn from(err: std::io::Error) -> Self {
        ScenarioLoadError::IoError(err)
    }
}

impl From<serde_json::Error> for ScenarioLoadError {
    fn from(err: serde_json::Error) -> Self {
        ScenarioLoadError::JsonError(err)
    }
}

impl std::fmt::Display for ScenarioLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioLoadError::IoError(e) => write!(f, "IO error: {}", e),
            ScenarioLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ScenarioLoadError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    pub sources: Vec<String>,   // Sources varied by the search, one share each
    pub samples: usize,
    pub random_seed: u64,
    pub parallel: bool,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            sources: vec!["solar".to_string(), "wind".to_string(), "hydro".to_string()],
            samples: DEFAULT_POPULATION_SIZE,
            random_seed: DEFAULT_RANDOM_SEED,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub country_name: String,
    pub country: CountryContext,
    #[serde(default)]
    pub total_energy_required: Option<f64>,  // MWh/day, defaults to the country's daily demand
    pub catalog: BTreeMap<String, SourceRecord>,
    #[serde(default)]
    pub screening: ScreeningConfig,
}

impl ScenarioConfig {
    pub fn energy_required(&self) -> f64 {
        self.total_energy_required.unwrap_or(self.country.daily_demand_mwh)
    }

    pub fn build_catalog(&self) -> EnergyCatalog {
        EnergyCatalog::from_records(&self.catalog)
    }

    pub fn build_problem(&self) -> ScreeningProblem {
        ScreeningProblem {
            catalog: self.build_catalog(),
            country: self.country.clone(),
            total_energy_required: self.energy_required(),
            land_price_per_m2: self.country.land_price_per_m2,
            carbon_price_per_kg: self.country.carbon_price_per_kg,
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let solar_output = calc_solar_output(
            PANEL_AREA_M2,
            REFERENCE_IRRADIANCE_KWH_M2_DAY,
            PANEL_EFFICIENCY,
            PANEL_PERFORMANCE_RATIO,
        );
        let wind_output = calc_daily_energy(calc_wind_power(
            REFERENCE_WIND_SPEED_MS,
            AIR_DENSITY,
            TURBINE_ROTOR_RADIUS_M,
            DEFAULT_WIND_POWER_COEFFICIENT,
        ));
        let hydro_output = calc_daily_energy(calc_hydro_power(
            HYDRO_EFFICIENCY,
            WATER_DENSITY,
            GRAVITY,
            HYDRO_FLOW_RATE_M3S,
            HYDRO_HEAD_HEIGHT_M,
        ));

        let mut catalog = BTreeMap::new();
        catalog.insert("solar".to_string(), SourceRecord::new(500.0, 0.02, solar_output, PANEL_AREA_M2, 0.0, EmissionsMode::PerUnit));
        catalog.insert("wind".to_string(), SourceRecord::new(1_000_000.0, 120.0, wind_output, TURBINE_LAND_AREA_M2, 0.0, EmissionsMode::PerUnit));
        catalog.insert("hydro".to_string(), SourceRecord::new(5_000_000.0, 400.0, hydro_output, HYDRO_LAND_AREA_M2, 0.0, EmissionsMode::PerUnit));
        catalog.insert("coal".to_string(), SourceRecord::new(2_000_000_000.0, 100_000.0, 12_000.0, 1_000_000.0, 1000.0, EmissionsMode::PerEnergy));
        catalog.insert("gas".to_string(), SourceRecord::new(800_000_000.0, 50_000.0, 9_600.0, 200_000.0, 450.0, EmissionsMode::PerEnergy));
        catalog.insert("oil".to_string(), SourceRecord::new(600_000_000.0, 60_000.0, 4_800.0, 150_000.0, 650.0, EmissionsMode::PerEnergy));
        catalog.insert("nuclear".to_string(), SourceRecord::new(6_000_000_000.0, 200_000.0, 24_000.0, 4_000_000.0, 12.0, EmissionsMode::PerEnergy));

        Self {
            country_name: "Ireland".to_string(),
            country: CountryContext::from_annual_consumption(
                70_273_000_000.0, // 70,273 km²
                31_000_000.0,     // 31 TWh per year
                2.5,
                0.085,            // €85 per tonne
            ),
            total_energy_required: None,
            catalog,
            screening: ScreeningConfig::default(),
        }
    }
}

pub fn load_scenario(path: &str) -> Result<ScenarioConfig, ScenarioLoadError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let scenario: ScenarioConfig = serde_json::from_reader(reader)?;
    Ok(scenario)
}

pub fn save_scenario(scenario: &ScenarioConfig, path: &str) -> Result<(), ScenarioLoadError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, scenario)?;
    writer.flush()?;
    Ok(())
}

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::evaluator::EvaluationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionsMode {
    PerUnit,    // kg CO2 per installed unit
    PerEnergy,  // kg CO2 per MWh generated
}

impl FromStr for EmissionsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per_unit" => Ok(EmissionsMode::PerUnit),
            "per_energy" => Ok(EmissionsMode::PerEnergy),
            _ => Err(format!("Unknown emissions mode: {}", s)),
        }
    }
}

impl fmt::Display for EmissionsMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EmissionsMode::PerUnit => write!(f, "per_unit"),
            EmissionsMode::PerEnergy => write!(f, "per_energy"),
        }
    }
}

/// Emission factor tagged with how it scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "factor", rename_all = "snake_case")]
pub enum Emissions {
    PerUnit(f64),
    PerEnergy(f64),
}

impl Emissions {
    pub fn new(mode: EmissionsMode, factor: f64) -> Self {
        match mode {
            EmissionsMode::PerUnit => Emissions::PerUnit(factor),
            EmissionsMode::PerEnergy => Emissions::PerEnergy(factor),
        }
    }

    pub fn mode(&self) -> EmissionsMode {
        match self {
            Emissions::PerUnit(_) => EmissionsMode::PerUnit,
            Emissions::PerEnergy(_) => EmissionsMode::PerEnergy,
        }
    }

    /// Emissions of `units` installed units each delivering `output_per_unit` MWh/day.
    pub fn for_units(&self, units: f64, output_per_unit: f64) -> f64 {
        match *self {
            Emissions::PerEnergy(factor) => units * output_per_unit * factor,
            Emissions::PerUnit(factor) => units * factor,
        }
    }
}

/// Raw catalog record as it appears in a scenario file. Nothing is validated
/// until it is turned into an `EnergySource`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub capital_cost: f64,
    #[serde(default)]
    pub operational_cost: f64,
    #[serde(default)]
    pub output_per_unit: Option<f64>,
    #[serde(default)]
    pub land_area: f64,
    #[serde(default)]
    pub emissions: f64,
    #[serde(default)]
    pub emissions_mode: Option<String>,
}

impl SourceRecord {
    pub fn new(
        capital_cost: f64,
        operational_cost: f64,
        output_per_unit: f64,
        land_area: f64,
        emissions: f64,
        emissions_mode: EmissionsMode,
    ) -> Self {
        Self {
            capital_cost,
            operational_cost,
            output_per_unit: Some(output_per_unit),
            land_area,
            emissions,
            emissions_mode: Some(emissions_mode.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySource {
    name: String,
    capital_cost: f64,
    operational_cost: f64,
    output_per_unit: f64,
    land_area: f64,
    emissions: Emissions,
}

impl EnergySource {
    pub fn new(
        name: String,
        capital_cost: f64,
        operational_cost: f64,
        output_per_unit: f64,
        land_area: f64,
        emissions: Emissions,
    ) -> Result<Self, EvaluationError> {
        if output_per_unit.is_nan() || output_per_unit <= 0.0 {
            return Err(EvaluationError::MissingOutputData { source: name });
        }

        let factor = match emissions {
            Emissions::PerUnit(f) | Emissions::PerEnergy(f) => f,
        };
        let checked = [
            ("capital_cost", capital_cost),
            ("operational_cost", operational_cost),
            ("land_area", land_area),
            ("emissions", factor),
        ];
        // NaN would slip past the land cap comparison
        if let Some((field, _)) = checked.into_iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(EvaluationError::InvalidSourceData { source: name, field });
        }

        Ok(Self {
            name,
            capital_cost,
            operational_cost,
            output_per_unit,
            land_area,
            emissions,
        })
    }

    pub fn from_record(name: &str, record: &SourceRecord) -> Result<Self, EvaluationError> {
        let output_per_unit = record.output_per_unit
            .ok_or_else(|| EvaluationError::MissingOutputData { source: name.to_string() })?;

        let mode = match record.emissions_mode.as_deref() {
            Some(raw) => raw.parse::<EmissionsMode>()
                .map_err(|_| EvaluationError::UnknownEmissionsMode {
                    source: name.to_string(),
                    mode: Some(raw.to_string()),
                })?,
            None => return Err(EvaluationError::UnknownEmissionsMode {
                source: name.to_string(),
                mode: None,
            }),
        };

        Self::new(
            name.to_string(),
            record.capital_cost,
            record.operational_cost,
            output_per_unit,
            record.land_area,
            Emissions::new(mode, record.emissions),
        )
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_capital_cost(&self) -> f64 {
        self.capital_cost
    }

    pub fn get_operational_cost(&self) -> f64 {
        self.operational_cost
    }

    pub fn get_unit_cost(&self) -> f64 {
        self.capital_cost + self.operational_cost
    }

    pub fn get_output_per_unit(&self) -> f64 {
        self.output_per_unit
    }

    pub fn get_land_area(&self) -> f64 {
        self.land_area
    }

    pub fn get_emissions(&self) -> Emissions {
        self.emissions
    }

    pub fn to_record(&self) -> SourceRecord {
        let factor = match self.emissions {
            Emissions::PerUnit(f) | Emissions::PerEnergy(f) => f,
        };
        SourceRecord::new(
            self.capital_cost,
            self.operational_cost,
            self.output_per_unit,
            self.land_area,
            factor,
            self.emissions.mode(),
        )
    }
}

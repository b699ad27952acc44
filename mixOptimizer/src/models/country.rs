use serde::{Deserialize, Serialize};
use crate::config::const_funcs::calc_daily_demand;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryContext {
    pub land_area_m2: f64,
    pub daily_demand_mwh: f64,
    pub land_price_per_m2: f64,
    #[serde(default)]
    pub carbon_price_per_kg: f64,  // 0 disables carbon costing
}

impl CountryContext {
    pub fn new(land_area_m2: f64, daily_demand_mwh: f64, land_price_per_m2: f64, carbon_price_per_kg: f64) -> Self {
        Self {
            land_area_m2,
            daily_demand_mwh,
            land_price_per_m2,
            carbon_price_per_kg,
        }
    }

    pub fn from_annual_consumption(
        land_area_m2: f64,
        annual_consumption_mwh: f64,
        land_price_per_m2: f64,
        carbon_price_per_kg: f64,
    ) -> Self {
        Self::new(land_area_m2, calc_daily_demand(annual_consumption_mwh), land_price_per_m2, carbon_price_per_kg)
    }

    /// Returns a description of the first field that would make ratios undefined.
    pub fn validate(&self) -> Result<(), String> {
        if self.land_area_m2.is_nan() || self.land_area_m2 <= 0.0 {
            return Err(format!("land area must be positive, got {}", self.land_area_m2));
        }
        if self.daily_demand_mwh.is_nan() || self.daily_demand_mwh <= 0.0 {
            return Err(format!("daily demand must be positive, got {}", self.daily_demand_mwh));
        }
        Ok(())
    }
}

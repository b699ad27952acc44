use std::f64::consts::PI;
use crate::config::constants::*;

/// Solar output per day in MWh: E = A × r × H × PR.
pub fn calc_solar_output(area_m2: f64, irradiance_kwh_m2_day: f64, efficiency: f64, performance_ratio: f64) -> f64 {
    (area_m2 * irradiance_kwh_m2_day * efficiency * performance_ratio) / KWH_PER_MWH
}

/// Wind power in MW: P = 0.5 × ρ × A × v³ × Cp, with A the swept rotor area.
pub fn calc_wind_power(wind_speed: f64, air_density: f64, rotor_radius: f64, power_coefficient: f64) -> f64 {
    let swept_area = PI * rotor_radius.powi(2);
    (0.5 * air_density * swept_area * wind_speed.powi(3) * power_coefficient) / WATTS_PER_MW
}

/// Hydro power in MW: P = η × ρ × g × Q × h.
pub fn calc_hydro_power(efficiency: f64, water_density: f64, gravity: f64, flow_rate: f64, head_height: f64) -> f64 {
    (efficiency * water_density * gravity * flow_rate * head_height) / WATTS_PER_MW
}

// Continuous operation over a full day
pub fn calc_daily_energy(power_mw: f64) -> f64 {
    power_mw * HOURS_PER_DAY
}

pub fn calc_daily_demand(annual_consumption_mwh: f64) -> f64 {
    annual_consumption_mwh / DAYS_PER_YEAR
}

pub fn calc_max_land_area(land_area_m2: f64) -> f64 {
    MAX_LAND_USE_FRACTION * land_area_m2
}

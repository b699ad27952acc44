// Policy Constants
pub const MAX_LAND_USE_FRACTION: f64 = 0.3;        // At most 30% of national land for energy infrastructure

// Time Constants
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const HOURS_PER_DAY: f64 = 24.0;

// Unit Conversions
pub const KWH_PER_MWH: f64 = 1000.0;
pub const WATTS_PER_MW: f64 = 1_000_000.0;

// Physical Constants
pub const AIR_DENSITY: f64 = 1.225;                // kg/m³ at sea level
pub const WATER_DENSITY: f64 = 1000.0;             // kg/m³
pub const GRAVITY: f64 = 9.81;                     // m/s²
pub const DEFAULT_WIND_POWER_COEFFICIENT: f64 = 0.3;

// Reference Solar Panel
pub const PANEL_AREA_M2: f64 = 1.6;
pub const PANEL_EFFICIENCY: f64 = 0.2;
pub const PANEL_PERFORMANCE_RATIO: f64 = 0.8;
pub const REFERENCE_IRRADIANCE_KWH_M2_DAY: f64 = 5.0;

// Reference Wind Turbine
pub const TURBINE_ROTOR_RADIUS_M: f64 = 50.0;
pub const REFERENCE_WIND_SPEED_MS: f64 = 8.0;
pub const TURBINE_LAND_AREA_M2: f64 = 10_000.0;

// Reference Hydro Plant
pub const HYDRO_EFFICIENCY: f64 = 0.9;
pub const HYDRO_FLOW_RATE_M3S: f64 = 50.0;
pub const HYDRO_HEAD_HEIGHT_M: f64 = 30.0;
pub const HYDRO_LAND_AREA_M2: f64 = 2_000_000.0;

// Screening Defaults
pub const DEFAULT_POPULATION_SIZE: usize = 300;
pub const DEFAULT_RANDOM_SEED: u64 = 42;

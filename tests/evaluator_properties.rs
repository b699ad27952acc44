use std::collections::BTreeMap;

use energymix::{
    evaluate, Emissions, EmissionsMode, EnergyCatalog, EnergySource, Evaluation, EvaluationError,
    CountryContext, MixCandidate, SourceRecord,
};

fn source(name: &str, output: f64, land: f64, emissions: Emissions) -> EnergySource {
    EnergySource::new(name.to_string(), 1000.0, 10.0, output, land, emissions).unwrap()
}

fn country(land_area_m2: f64) -> CountryContext {
    CountryContext::new(land_area_m2, 1000.0, 0.5, 0.0)
}

#[test]
fn units_needed_follows_share_over_output() {
    let catalog = EnergyCatalog::from_sources(vec![
        source("solar", 0.004, 1.6, Emissions::PerUnit(0.0)),
        source("wind", 30.0, 10_000.0, Emissions::PerUnit(0.0)),
        source("gas", 9_600.0, 200_000.0, Emissions::PerEnergy(450.0)),
    ]);
    let total = 84_931.5;
    let mix = MixCandidate::new()
        .with_share("solar", 0.13)
        .with_share("wind", 0.27)
        .with_share("gas", 0.6);

    let evaluation = evaluate(total, &mix, &country(1e12), &catalog, 0.0, 0.0);
    let result = evaluation.result().unwrap();

    for (name, share) in mix.active() {
        let expected = total * share / catalog.get(name).unwrap().get_output_per_unit();
        assert_eq!(result.units_needed[name].to_bits(), expected.to_bits());
    }
}

#[test]
fn emissions_modes_are_not_conflated() {
    let country = country(1e9);
    let mix = MixCandidate::new().with_share("coal", 1.0);

    let per_energy = EnergyCatalog::from_sources(vec![source("coal", 120.0, 0.0, Emissions::PerEnergy(0.9))]);
    let per_unit = EnergyCatalog::from_sources(vec![source("coal", 120.0, 0.0, Emissions::PerUnit(0.9))]);

    // 1200 MWh at 120 MWh per unit is 10 units
    let a = evaluate(1200.0, &mix, &country, &per_energy, 0.0, 0.0);
    let b = evaluate(1200.0, &mix, &country, &per_unit, 0.0, 0.0);

    assert!((a.result().unwrap().emissions_total - 1080.0).abs() < 1e-9);
    assert!((b.result().unwrap().emissions_total - 9.0).abs() < 1e-12);
}

#[test]
fn land_cap_boundary_is_inclusive() {
    let country = country(100_000.0);
    let mix = MixCandidate::new().with_share("wind", 1.0);

    // 1000 units at 30 m² each is exactly 30% of the country
    let at_cap = EnergyCatalog::from_sources(vec![source("wind", 1.0, 30.0, Emissions::PerUnit(0.0))]);
    let evaluation = evaluate(1000.0, &mix, &country, &at_cap, 0.0, 0.0);
    let result = evaluation.result().expect("exactly at the cap is feasible");
    assert_eq!(result.total_land_used, 30_000.0);
    assert!(result.constraints.land <= 0.0);

    let over_cap = EnergyCatalog::from_sources(vec![source("wind", 1.0, 30.0000001, Emissions::PerUnit(0.0))]);
    let evaluation = evaluate(1000.0, &mix, &country, &over_cap, 0.0, 0.0);
    assert!(matches!(evaluation, Evaluation::Infeasible(EvaluationError::LandCapExceeded { .. })));
    assert_eq!(evaluation.total_cost(), f64::INFINITY);
}

#[test]
fn land_use_is_monotonic_in_each_share() {
    let catalog = EnergyCatalog::from_sources(vec![
        source("solar", 0.004, 1.6, Emissions::PerUnit(0.0)),
        source("wind", 30.0, 10_000.0, Emissions::PerUnit(0.0)),
        source("hydro", 10.0, 50_000.0, Emissions::PerUnit(0.0)),
    ]);
    let country = country(1e13);

    for varied in ["solar", "wind", "hydro"] {
        let mut previous = 0.0;
        for step in 0..=20 {
            let share = step as f64 / 20.0;
            let mix = MixCandidate::new()
                .with_share("solar", 0.2)
                .with_share("wind", 0.3)
                .with_share("hydro", 0.1)
                .with_share(varied, share);

            let evaluation = evaluate(5000.0, &mix, &country, &catalog, 0.0, 0.0);
            let land = evaluation.result().unwrap().total_land_used;
            assert!(land >= previous, "{} share {} decreased land use", varied, share);
            previous = land;
        }
    }
}

#[test]
fn identical_inputs_give_bit_identical_results() {
    let mut records = BTreeMap::new();
    records.insert("solar".to_string(), SourceRecord::new(500.0, 0.02, 0.00128, 1.6, 0.0, EmissionsMode::PerUnit));
    records.insert("gas".to_string(), SourceRecord::new(8e8, 5e4, 9600.0, 2e5, 450.0, EmissionsMode::PerEnergy));
    records.insert("hydro".to_string(), SourceRecord::new(5e6, 400.0, 317.844, 2e6, 0.0, EmissionsMode::PerUnit));
    let catalog = EnergyCatalog::from_records(&records);
    let country = CountryContext::from_annual_consumption(7.0273e10, 3.1e7, 2.5, 0.085);

    let mix = MixCandidate::new().with_share("solar", 0.31).with_share("gas", 0.52).with_share("hydro", 0.17);
    let reordered = MixCandidate::new().with_share("hydro", 0.17).with_share("gas", 0.52).with_share("solar", 0.31);

    let first = evaluate(84_931.5, &mix, &country, &catalog, 2.5, 0.085);
    let second = evaluate(84_931.5, &reordered, &country, &catalog, 2.5, 0.085);

    let (a, b) = (first.result().unwrap(), second.result().unwrap());
    assert_eq!(a.total_cost.to_bits(), b.total_cost.to_bits());
    assert_eq!(a.land_pressure.to_bits(), b.land_pressure.to_bits());
    assert_eq!(a.emissions_total.to_bits(), b.emissions_total.to_bits());
    assert_eq!(a.constraints.hydro.to_bits(), b.constraints.hydro.to_bits());
    assert_eq!(first, second);
}

#[test]
fn data_errors_collapse_to_infeasible() {
    let mut records = BTreeMap::new();
    let mut oil = SourceRecord::new(6e8, 6e4, 4800.0, 1.5e5, 650.0, EmissionsMode::PerEnergy);
    oil.emissions_mode = Some("per_barrel".to_string());
    records.insert("oil".to_string(), oil);
    records.insert("wind".to_string(), SourceRecord::new(1e6, 120.0, 30.0, 1e4, 0.0, EmissionsMode::PerUnit));
    let catalog = EnergyCatalog::from_records(&records);
    let country = country(1e10);

    let missing = evaluate(100.0, &MixCandidate::new().with_share("nuclear", 0.5), &country, &catalog, 0.0, 0.0);
    assert_eq!(missing.total_cost(), f64::INFINITY);
    assert!(matches!(missing.error(), Some(EvaluationError::MissingOutputData { .. })));

    let bad_mode = evaluate(100.0, &MixCandidate::new().with_share("oil", 0.5), &country, &catalog, 0.0, 0.0);
    assert_eq!(bad_mode.total_cost(), f64::INFINITY);
    assert!(matches!(bad_mode.error(), Some(EvaluationError::UnknownEmissionsMode { .. })));

    let mut tidal = SourceRecord::new(2e6, 300.0, 40.0, 5e3, 0.0, EmissionsMode::PerUnit);
    tidal.land_area = f64::NAN;
    let mut records_with_nan = records.clone();
    records_with_nan.insert("tidal".to_string(), tidal);
    let catalog_with_nan = EnergyCatalog::from_records(&records_with_nan);
    let nan_land = evaluate(100.0, &MixCandidate::new().with_share("tidal", 0.5), &country, &catalog_with_nan, 0.0, 0.0);
    assert!(!nan_land.is_feasible());
    assert_eq!(nan_land.objectives(), [f64::INFINITY, f64::INFINITY]);
    assert!(matches!(nan_land.error(), Some(EvaluationError::InvalidSourceData { field: "land_area", .. })));

    // The broken entry only matters when used
    let unused = evaluate(100.0, &MixCandidate::new().with_share("oil", 0.0).with_share("wind", 1.0), &country, &catalog, 0.0, 0.0);
    assert!(unused.is_feasible());
}

#[test]
fn solar_wind_reference_scenario() {
    let catalog = EnergyCatalog::from_sources(vec![
        EnergySource::new("solar".to_string(), 500.0, 0.0, 0.004, 1.6, Emissions::PerUnit(0.0)).unwrap(),
        EnergySource::new("wind".to_string(), 1_000_000.0, 0.0, 30.0, 10_000.0, Emissions::PerUnit(0.0)).unwrap(),
    ]);
    let country = CountryContext::new(10_000_000.0, 1000.0, 0.0, 0.0);
    let mix = MixCandidate::new().with_share("solar", 0.5).with_share("wind", 0.5);

    let evaluation = evaluate(1000.0, &mix, &country, &catalog, 0.0, 0.0);
    let result = evaluation.result().unwrap();

    assert!((result.units_needed["solar"] - 125_000.0).abs() < 1e-6);
    assert!((result.units_needed["wind"] - 16.67).abs() < 0.01);
    assert!((result.total_land_used - 366_700.0).abs() < 100.0);
    assert!(result.total_land_used < 3_000_000.0);
    assert!((result.land_pressure - 0.0367).abs() < 1e-4);
    assert_eq!(evaluation.objectives(), [result.total_cost, result.land_pressure]);
}

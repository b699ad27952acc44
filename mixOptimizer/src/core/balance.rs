// Unconstrained sizing helpers: how many units each source needs, and what they cost to build and run
use std::collections::BTreeMap;
use crate::core::evaluator::EvaluationError;
use crate::models::catalog::EnergyCatalog;
use crate::models::mix::MixCandidate;

pub fn energy_balance(
    total_energy_required: f64,
    mix: &MixCandidate,
    catalog: &EnergyCatalog,
) -> Result<BTreeMap<String, f64>, EvaluationError> {
    mix.active()
        .map(|(name, share)| {
            let source = catalog.get(name)?;
            let units = (total_energy_required * share) / source.get_output_per_unit();
            Ok((name.to_string(), units))
        })
        .collect()
}

pub fn energy_cost(units_needed: &BTreeMap<String, f64>, catalog: &EnergyCatalog) -> Result<f64, EvaluationError> {
    let mut total_cost = 0.0;
    for (name, units) in units_needed {
        total_cost += units * catalog.get(name)?.get_unit_cost();
    }
    Ok(total_cost)
}

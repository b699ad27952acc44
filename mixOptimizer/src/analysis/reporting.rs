use crate::core::evaluator::{Evaluation, EvaluationResult};
use crate::core::screening::ScreeningOutcome;
use crate::models::mix::MixCandidate;

pub fn print_evaluation(mix: &MixCandidate, evaluation: &Evaluation) {
    println!("\nCandidate Mix");
    println!("----------------------------------------");
    for (source, share) in mix.active() {
        println!("  {}: {:.1}%", source, share * 100.0);
    }

    match evaluation {
        Evaluation::Feasible(result) => print_result(result),
        Evaluation::Infeasible(e) => println!("Infeasible: {}", e),
    }
}

pub fn print_result(result: &EvaluationResult) {
    println!("Units Needed:");
    for (source, units) in &result.units_needed {
        println!("  {}: {:.2}", source, units);
    }
    println!("Total Cost: €{:.2}", result.total_cost);
    println!("Land Used: {:.2} m²", result.total_land_used);
    println!("Land Pressure: {:.4}", result.land_pressure);
    println!("Emissions: {:.2} kg CO2", result.emissions_total);
    println!("Constraints:");
    println!("  Land: {:.4}", result.constraints.land);
    println!("  Hydro: {:.4}", result.constraints.hydro);
}

pub fn print_screening_summary(country_name: &str, outcome: &ScreeningOutcome) {
    println!("\nScreening Summary - {}", country_name);
    println!("----------------------------------------");
    println!("Candidates evaluated: {}", outcome.evaluations.len());
    println!("Feasible (land cap): {}", outcome.feasible_count());
    println!("Non-dominated: {}", outcome.front.len());

    let mut front: Vec<&usize> = outcome.front.iter().collect();
    front.sort_by(|a, b| {
        outcome.evaluations[**a].total_cost()
            .partial_cmp(&outcome.evaluations[**b].total_cost())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for &i in front {
        let evaluation = &outcome.evaluations[i];
        let [cost, pressure] = evaluation.objectives();
        let shares: Vec<String> = outcome.candidates[i]
            .active()
            .map(|(source, share)| format!("{}={:.3}", source, share))
            .collect();
        println!("  #{:<5} cost=€{:.3e} land_pressure={:.5} [{}]", i, cost, pressure, shares.join(", "));
    }
    println!("----------------------------------------");
}

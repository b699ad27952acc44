// Screening module - evaluates batches of candidates and keeps the non-dominated ones
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::scenario_config::ScreeningConfig;
use crate::core::evaluator::{evaluate, Evaluation};
use crate::models::catalog::EnergyCatalog;
use crate::models::country::CountryContext;
use crate::models::mix::MixCandidate;
use crate::utils::logging::{self, OperationCategory};

/// Everything an evaluation reads. Shared by reference across workers and never mutated.
#[derive(Debug, Clone)]
pub struct ScreeningProblem {
    pub catalog: EnergyCatalog,
    pub country: CountryContext,
    pub total_energy_required: f64,
    pub land_price_per_m2: f64,
    pub carbon_price_per_kg: f64,
}

impl ScreeningProblem {
    pub fn evaluate(&self, mix: &MixCandidate) -> Evaluation {
        evaluate(
            self.total_energy_required,
            mix,
            &self.country,
            &self.catalog,
            self.land_price_per_m2,
            self.carbon_price_per_kg,
        )
    }
}

#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    pub candidates: Vec<MixCandidate>,
    pub evaluations: Vec<Evaluation>,
    pub front: Vec<usize>,
}

impl ScreeningOutcome {
    pub fn feasible_count(&self) -> usize {
        self.evaluations.iter().filter(|e| e.is_feasible()).count()
    }
}

/// Uniform samples of the unit box, one share per source.
pub fn sample_candidates(sources: &[String], count: usize, seed: u64) -> Vec<MixCandidate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let values: Vec<f64> = sources.iter().map(|_| rng.gen_range(0.0..=1.0)).collect();
            MixCandidate::from_vector(sources, &values)
        })
        .collect()
}

/// Evaluates every candidate independently. Output order matches input order.
pub fn evaluate_batch(
    problem: &ScreeningProblem,
    candidates: &[MixCandidate],
    parallel: bool,
    progress: Option<&ProgressBar>,
) -> Vec<Evaluation> {
    let _timing = logging::start_timing("evaluate_batch", OperationCategory::Evaluation);

    let evaluate_one = |mix: &MixCandidate| {
        let evaluation = problem.evaluate(mix);
        if let Some(pb) = progress {
            pb.inc(1);
        }
        evaluation
    };

    if parallel {
        candidates.par_iter().map(evaluate_one).collect()
    } else {
        candidates.iter().map(evaluate_one).collect()
    }
}

fn dominates(a: &[f64; 2], b: &[f64; 2]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x <= y) && a.iter().zip(b.iter()).any(|(x, y)| x < y)
}

/// Indices of feasible evaluations not dominated on (cost, land pressure).
pub fn non_dominated(evaluations: &[Evaluation]) -> Vec<usize> {
    let _timing = logging::start_timing("non_dominated", OperationCategory::Screening);

    let feasible: Vec<(usize, [f64; 2])> = evaluations
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_feasible())
        .map(|(i, e)| (i, e.objectives()))
        .collect();

    feasible
        .par_iter()
        .filter(|(i, objectives)| {
            !feasible
                .iter()
                .any(|(j, other)| i != j && dominates(other, objectives))
        })
        .map(|(i, _)| *i)
        .collect()
}

pub fn run_screening(
    problem: &ScreeningProblem,
    config: &ScreeningConfig,
    progress: Option<&ProgressBar>,
) -> ScreeningOutcome {
    let _timing = logging::start_timing("run_screening", OperationCategory::Screening);

    let candidates = sample_candidates(&config.sources, config.samples, config.random_seed);
    let evaluations = evaluate_batch(problem, &candidates, config.parallel, progress);
    let front = non_dominated(&evaluations);

    ScreeningOutcome {
        candidates,
        evaluations,
        front,
    }
}

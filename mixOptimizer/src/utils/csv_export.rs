use std::error::Error;
use std::path::{Path, PathBuf};
use chrono::Local;
use csv::Writer;
use tracing::info;

use crate::core::screening::ScreeningOutcome;
use crate::utils::logging::{self, FileIOType, OperationCategory};

/// Writes screening results into a timestamped directory.
pub struct CsvExporter {
    output_dir: PathBuf,
    timestamp: String,
}

impl CsvExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let full_path = output_dir.as_ref().join(&timestamp);
        std::fs::create_dir_all(&full_path)?;

        Ok(Self {
            output_dir: full_path,
            timestamp,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// One row per candidate (or per front member when `front_only`), shares in `sources` order.
    pub fn export_screening_results(
        &self,
        outcome: &ScreeningOutcome,
        sources: &[String],
        front_only: bool,
    ) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
        let _timing = logging::start_timing("export_screening_results",
            OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

        let file_name = if front_only { "pareto_front.csv" } else { "screening_results.csv" };
        let path = self.output_dir.join(file_name);
        let mut writer = Writer::from_path(&path)?;

        let mut header = vec![
            "Candidate".to_string(),
            "Feasible".to_string(),
            "On Front".to_string(),
            "Total Cost".to_string(),
            "Land Pressure".to_string(),
            "Land Used (m2)".to_string(),
            "Emissions (kg CO2)".to_string(),
            "Land Constraint".to_string(),
            "Hydro Constraint".to_string(),
            "Rejection".to_string(),
        ];
        header.extend(sources.iter().map(|s| format!("Share {}", s)));
        writer.write_record(&header)?;

        let rows: Vec<usize> = if front_only {
            outcome.front.clone()
        } else {
            (0..outcome.evaluations.len()).collect()
        };

        for i in rows {
            let evaluation = &outcome.evaluations[i];
            let [cost, pressure] = evaluation.objectives();
            let [land, hydro] = evaluation.constraint_values();
            let (land_used, emissions) = evaluation
                .result()
                .map(|r| (r.total_land_used, r.emissions_total))
                .unwrap_or((f64::NAN, f64::NAN));

            let mut record = vec![
                i.to_string(),
                evaluation.is_feasible().to_string(),
                outcome.front.contains(&i).to_string(),
                format!("{:.2}", cost),
                format!("{:.6}", pressure),
                format!("{:.2}", land_used),
                format!("{:.2}", emissions),
                format!("{:.6}", land),
                format!("{:.6}", hydro),
                evaluation.error().map(|e| e.to_string()).unwrap_or_default(),
            ];
            record.extend(sources.iter().map(|s| format!("{:.6}", outcome.candidates[i].share(s))));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        info!("Exported screening results to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::{Evaluation, EvaluationError};
    use crate::models::mix::MixCandidate;

    #[test]
    fn test_export_writes_one_row_per_candidate() {
        let outcome = ScreeningOutcome {
            candidates: vec![
                MixCandidate::new().with_share("wind", 0.5),
                MixCandidate::new().with_share("tidal", 0.5),
            ],
            evaluations: vec![
                Evaluation::Infeasible(EvaluationError::MissingOutputData { source: "wind".to_string() }),
                Evaluation::Infeasible(EvaluationError::MissingOutputData { source: "tidal".to_string() }),
            ],
            front: vec![],
        };
        let dir = std::env::temp_dir().join("energymix_csv_test");
        let exporter = CsvExporter::new(&dir).unwrap();
        let sources = vec!["wind".to_string(), "tidal".to_string()];

        let path = exporter.export_screening_results(&outcome, &sources, false).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Share wind,Share tidal"));
        assert!(lines[2].contains("tidal"));
    }
}

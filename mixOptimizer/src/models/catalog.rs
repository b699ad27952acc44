use std::collections::BTreeMap;
use crate::core::evaluator::EvaluationError;
use super::energy_source::{EnergySource, SourceRecord};

/// Read-only set of energy sources keyed by name.
///
/// Records that fail validation stay in the catalog as data errors. They only
/// affect candidates that give the broken source a positive share.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyCatalog {
    entries: BTreeMap<String, Result<EnergySource, EvaluationError>>,
}

impl EnergyCatalog {
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = EnergySource>,
    {
        let entries = sources
            .into_iter()
            .map(|source| (source.get_name().to_string(), Ok(source)))
            .collect();
        Self { entries }
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a SourceRecord)>,
    {
        let entries = records
            .into_iter()
            .map(|(name, record)| (name.clone(), EnergySource::from_record(name, record)))
            .collect();
        Self { entries }
    }

    /// Looks up a usable source. Absent names report `MissingOutputData`.
    pub fn get(&self, name: &str) -> Result<&EnergySource, EvaluationError> {
        match self.entries.get(name) {
            Some(Ok(source)) => Ok(source),
            Some(Err(e)) => Err(e.clone()),
            None => Err(EvaluationError::MissingOutputData { source: name.to_string() }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn valid_sources(&self) -> impl Iterator<Item = &EnergySource> {
        self.entries.values().filter_map(|entry| entry.as_ref().ok())
    }

    pub fn invalid_entries(&self) -> Vec<(&str, &EvaluationError)> {
        self.entries
            .iter()
            .filter_map(|(name, entry)| entry.as_ref().err().map(|e| (name.as_str(), e)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::energy_source::EmissionsMode;

    fn records() -> BTreeMap<String, SourceRecord> {
        let mut records = BTreeMap::new();
        records.insert("solar".to_string(), SourceRecord::new(500.0, 0.0, 0.004, 1.6, 0.0, EmissionsMode::PerUnit));
        let mut broken = SourceRecord::new(1.0, 1.0, 100.0, 1.0, 0.9, EmissionsMode::PerEnergy);
        broken.emissions_mode = Some("yearly".to_string());
        records.insert("coal".to_string(), broken);
        records
    }

    #[test]
    fn test_invalid_entries_are_kept_and_listed() {
        let records = records();
        let catalog = EnergyCatalog::from_records(&records);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("solar").is_ok());
        assert!(matches!(catalog.get("coal"), Err(EvaluationError::UnknownEmissionsMode { .. })));

        let invalid = catalog.invalid_entries();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0, "coal");
        assert_eq!(catalog.valid_sources().count(), 1);
    }

    #[test]
    fn test_absent_source_reports_missing_output() {
        let catalog = EnergyCatalog::default();
        assert_eq!(
            catalog.get("wind").unwrap_err(),
            EvaluationError::MissingOutputData { source: "wind".to_string() }
        );
        assert!(catalog.is_empty());
    }
}

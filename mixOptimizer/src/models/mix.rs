use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Candidate allocation of daily demand across sources.
///
/// Shares are kept sorted by source name so that every evaluation sums in the
/// same order. They need not add up to one, and shares <= 0 mean the source is
/// unused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MixCandidate {
    shares: BTreeMap<String, f64>,
}

impl MixCandidate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_share(mut self, source: &str, share: f64) -> Self {
        self.set_share(source, share);
        self
    }

    pub fn set_share(&mut self, source: &str, share: f64) {
        self.shares.insert(source.to_string(), share);
    }

    /// Maps an optimizer decision vector onto source names, pairwise.
    pub fn from_vector<S: AsRef<str>>(sources: &[S], values: &[f64]) -> Self {
        let shares = sources
            .iter()
            .zip(values.iter())
            .map(|(source, &share)| (source.as_ref().to_string(), share))
            .collect();
        Self { shares }
    }

    pub fn share(&self, source: &str) -> f64 {
        self.shares.get(source).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.shares.iter().map(|(name, &share)| (name.as_str(), share))
    }

    /// Sources that take part in an evaluation.
    pub fn active(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(_, share)| *share > 0.0)
    }

    pub fn total_share(&self) -> f64 {
        self.active().map(|(_, share)| share).sum()
    }
}

impl FromIterator<(String, f64)> for MixCandidate {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self { shares: iter.into_iter().collect() }
    }
}

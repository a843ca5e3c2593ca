use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::aggregate::LocusTable;
use crate::models::{EndLabel, EntropyResult, LocusAggregate};

// widened so that long count sequences can't overflow
fn total(counts: &[u64]) -> u128 {
    counts.iter().fold(0u128, |acc, &c| acc + c as u128)
}

///
/// Normalize a count sequence into a probability distribution.
///
/// A sequence that sums to zero (empty or all zeros) has no distribution and
/// yields an empty vector.
///
pub fn probabilities(counts: &[u64]) -> Vec<f64> {
    let total = total(counts);
    if total == 0 {
        return Vec::new();
    }

    let total = total as f64;
    counts.iter().map(|&c| c as f64 / total).collect()
}

///
/// Shannon entropy (natural log) of the distribution described by `counts`.
///
/// Zero probabilities contribute nothing. A zero-sum sequence has entropy 0.0.
///
pub fn shannon_entropy(counts: &[u64]) -> f64 {
    let mut entropy = 0.0;
    for p in probabilities(counts) {
        if p > 0.0 {
            entropy -= p * p.ln();
        }
    }

    entropy
}

///
/// Compute the 5' and 3' entropy of a single locus.
/// Each side is normalized by its own total.
///
pub fn compute_entropy(locus: &LocusAggregate) -> (f64, f64) {
    let entropy5p = shannon_entropy(locus.counts(EndLabel::FivePrime));
    let entropy3p = shannon_entropy(locus.counts(EndLabel::ThreePrime));
    trace!(
        "{}: 5p n={} H={}, 3p n={} H={}",
        locus.name,
        locus.counts5p.len(),
        entropy5p,
        locus.counts3p.len(),
        entropy3p
    );

    (entropy5p, entropy3p)
}

impl From<&LocusAggregate> for EntropyResult {
    fn from(locus: &LocusAggregate) -> Self {
        let (entropy5p, entropy3p) = compute_entropy(locus);
        EntropyResult {
            name: locus.name.clone(),
            entropy5p,
            entropy3p,
        }
    }
}

///
/// Compute entropies for every locus in the table.
///
pub fn compute_all(table: &LocusTable) -> FxHashMap<String, EntropyResult> {
    let results: FxHashMap<String, EntropyResult> = table
        .iter()
        .map(|locus| (locus.name.clone(), EntropyResult::from(locus)))
        .collect();
    debug!("Computed entropy for {} loci", results.len());

    results
}

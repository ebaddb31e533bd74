//! The ranking operation: map candidates to buckets, then totally order them.

#![forbid(unsafe_code)]

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bucket::RankingBucket;
use crate::candidate::Candidate;
use crate::factors::{FactorSource, RankingFactors, RankingThresholds};

/// One entry of a ranked output list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedResult {
    /// The candidate, unchanged from the input.
    pub candidate: Candidate,
    /// The factors the source derived for this candidate.
    pub factors: RankingFactors,
    /// The priority bucket the factors classified into.
    pub bucket: RankingBucket,
}

/// Rank candidates using the default [`RankingThresholds`].
///
/// The output is a permutation of the input: same length, same candidates,
/// none dropped or duplicated. Ordering is bucket ascending, then average
/// rating descending, then location score descending, then display name
/// ascending (case-insensitive, missing name treated as empty). The sort is
/// stable, so candidates identical in all four keys keep their input order.
///
/// The engine adds no error handling of its own: if `source` panics, the
/// panic propagates unchanged.
///
/// # Examples
///
/// ```
/// use coachrank_core::{Candidate, RankingFactors, rank};
///
/// let ranked = rank(vec![Candidate::new("coach-7f3a2b91", "Ada")], &|_: &Candidate| {
///     RankingFactors::default()
/// });
/// assert_eq!(ranked.len(), 1);
/// ```
#[must_use]
pub fn rank<S>(candidates: Vec<Candidate>, source: &S) -> Vec<RankedResult>
where
    S: FactorSource + ?Sized,
{
    rank_with(candidates, source, RankingThresholds::default())
}

/// Rank candidates against explicit thresholds.
///
/// See [`rank`] for the ordering contract. Rating and location comparisons
/// use [`f32::total_cmp`], so the order stays total and deterministic even if
/// a source produces non-finite values; the engine never sanitises factors.
#[must_use]
pub fn rank_with<S>(
    candidates: Vec<Candidate>,
    source: &S,
    thresholds: RankingThresholds,
) -> Vec<RankedResult>
where
    S: FactorSource + ?Sized,
{
    let mut entries: Vec<(RankedResult, String)> = candidates
        .into_iter()
        .map(|candidate| {
            let factors = source.factors(&candidate);
            let bucket = RankingBucket::classify_with(&factors, thresholds);
            // Folded once up front so comparisons never allocate.
            let name_key = candidate
                .display_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase();
            (
                RankedResult {
                    candidate,
                    factors,
                    bucket,
                },
                name_key,
            )
        })
        .collect();

    entries.sort_by(|(a, a_name), (b, b_name)| compare(a, a_name, b, b_name));
    entries.into_iter().map(|(result, _)| result).collect()
}

fn compare(a: &RankedResult, a_name: &str, b: &RankedResult, b_name: &str) -> Ordering {
    a.bucket
        .cmp(&b.bucket)
        .then_with(|| b.factors.avg_rating.total_cmp(&a.factors.avg_rating))
        .then_with(|| b.factors.location_score.total_cmp(&a.factors.location_score))
        .then_with(|| a_name.cmp(b_name))
}

//! Priority buckets and the classification rule cascade.
//!
//! Buckets express the marketplace's placement policy: paid boosts win among
//! equally qualified candidates, then verification, then rating quality,
//! then proximity. Classification is an ordered decision list in which the
//! first matching rule wins; the rule order is itself part of the policy,
//! not an implementation detail.

#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::factors::{RankingFactors, RankingThresholds};

/// Priority tier assigned to a candidate, tier 1 being the best.
///
/// `Ord` follows tier order, so a smaller bucket compares as less and sorts
/// first in an ascending sort.
///
/// Note the asymmetry: there is no boosted-without-verified tier. A boosted
/// but unverified candidate falls through to the verification, rating, and
/// proximity rules, so a paid boost only takes effect once the candidate is
/// verified. This is intended policy.
///
/// # Examples
/// ```
/// use coachrank_core::{MatchLevel, RankingBucket, RankingFactors};
///
/// let factors = RankingFactors {
///     is_boosted: true,
///     is_verified: true,
///     avg_rating: 4.5,
///     location_score: 80.0,
///     match_level: MatchLevel::SameCity,
/// };
/// let bucket = RankingBucket::classify(&factors);
/// assert_eq!(bucket, RankingBucket::BoostedVerifiedHighRatedClose);
/// assert_eq!(bucket.tier(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum RankingBucket {
    /// Boosted, verified, high-rated, and close.
    BoostedVerifiedHighRatedClose = 1,
    /// Boosted, verified, and high-rated.
    BoostedVerifiedHighRated = 2,
    /// Boosted and verified.
    BoostedVerified = 3,
    /// Verified, high-rated, and close.
    VerifiedHighRatedClose = 4,
    /// Verified and high-rated.
    VerifiedHighRated = 5,
    /// Verified and close.
    VerifiedClose = 6,
    /// High-rated and close.
    HighRatedClose = 7,
    /// No earlier rule matched.
    Standard = 8,
}

impl RankingBucket {
    /// Classify factors using the default [`RankingThresholds`].
    ///
    /// # Examples
    /// ```
    /// use coachrank_core::{RankingBucket, RankingFactors};
    ///
    /// let bucket = RankingBucket::classify(&RankingFactors::default());
    /// assert_eq!(bucket, RankingBucket::Standard);
    /// ```
    #[must_use]
    pub fn classify(factors: &RankingFactors) -> Self {
        Self::classify_with(factors, RankingThresholds::default())
    }

    /// Classify factors against explicit thresholds.
    ///
    /// The function is total: every input maps to exactly one bucket. Rules
    /// are written in policy order and the first match wins; the wildcard
    /// patterns below each cover only the cases no earlier rule consumed.
    #[must_use]
    pub fn classify_with(factors: &RankingFactors, thresholds: RankingThresholds) -> Self {
        let boosted = factors.is_boosted;
        let verified = factors.is_verified;
        let high_rated = factors.avg_rating >= thresholds.high_rating;
        let close = factors.location_score >= thresholds.close_location;

        match (boosted, verified, high_rated, close) {
            (true, true, true, true) => Self::BoostedVerifiedHighRatedClose,
            (true, true, true, _) => Self::BoostedVerifiedHighRated,
            (true, true, _, _) => Self::BoostedVerified,
            (_, true, true, true) => Self::VerifiedHighRatedClose,
            (_, true, true, _) => Self::VerifiedHighRated,
            (_, true, _, true) => Self::VerifiedClose,
            (_, _, true, true) => Self::HighRatedClose,
            _ => Self::Standard,
        }
    }

    /// Return the numeric tier, `1..=8`.
    ///
    /// # Examples
    /// ```
    /// use coachrank_core::RankingBucket;
    ///
    /// assert_eq!(RankingBucket::Standard.tier(), 8);
    /// ```
    #[must_use]
    pub const fn tier(self) -> u8 {
        self as u8
    }
}

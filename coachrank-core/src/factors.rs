//! Per-candidate ranking inputs and the factor-extraction seam.
//!
//! The engine never looks up billing, verification, review, or geographic
//! state itself. Callers derive a [`RankingFactors`] value per candidate
//! (typically from upstream aggregations) and hand the engine a
//! [`FactorSource`] to fetch them.

#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Candidate;

/// The kind of geographic match a candidate achieved.
///
/// Carried for caller bookkeeping only; bucket classification and sorting
/// consult [`RankingFactors::location_score`], never this label.
///
/// # Examples
/// ```
/// use coachrank_core::MatchLevel;
///
/// assert_eq!(MatchLevel::SameRegion.as_str(), "same_region");
/// assert_eq!(MatchLevel::Remote.to_string(), "remote");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchLevel {
    /// Candidate is in the same city as the searcher.
    SameCity,
    /// Candidate is in the same region.
    SameRegion,
    /// Candidate is in the same country.
    SameCountry,
    /// No meaningful geographic match.
    #[default]
    Remote,
}

impl MatchLevel {
    /// Return the match level as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use coachrank_core::MatchLevel;
    ///
    /// assert_eq!(MatchLevel::SameCity.as_str(), "same_city");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameCity => "same_city",
            Self::SameRegion => "same_region",
            Self::SameCountry => "same_country",
            Self::Remote => "remote",
        }
    }
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "same_city" => Ok(Self::SameCity),
            "same_region" => Ok(Self::SameRegion),
            "same_country" => Ok(Self::SameCountry),
            "remote" => Ok(Self::Remote),
            _ => Err(format!("unknown match level '{s}'")),
        }
    }
}

/// Inputs that drive bucket classification and sorting for one candidate.
///
/// # Examples
/// ```
/// use coachrank_core::{MatchLevel, RankingFactors};
///
/// let factors = RankingFactors {
///     is_boosted: true,
///     is_verified: true,
///     avg_rating: 4.5,
///     location_score: 80.0,
///     match_level: MatchLevel::SameCity,
/// };
/// assert!(factors.is_boosted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankingFactors {
    /// Whether the candidate has purchased priority placement.
    pub is_boosted: bool,
    /// Whether the candidate has passed identity/credential verification.
    pub is_verified: bool,
    /// Average review rating, conventionally in `[0, 5]`; `0.0` when the
    /// candidate has no ratings yet.
    pub avg_rating: f32,
    /// Caller-computed proximity metric; higher means closer. The scale is
    /// caller-defined, with `70.0` conventionally meaning "same region".
    pub location_score: f32,
    /// Label describing the kind of location match; informational only.
    pub match_level: MatchLevel,
}

/// Tunable cut-offs used when deriving bucket flags from raw factors.
///
/// The defaults are the marketplace's production values: a candidate counts
/// as high-rated at `4.0` on the 5-point scale and as close at `70.0`, the
/// "same region" location score.
///
/// # Examples
/// ```
/// use coachrank_core::RankingThresholds;
///
/// let thresholds = RankingThresholds::default();
/// assert_eq!(thresholds.high_rating, 4.0);
/// assert_eq!(thresholds.close_location, 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingThresholds {
    /// Minimum average rating for a candidate to count as high-rated.
    pub high_rating: f32,
    /// Minimum location score for a candidate to count as close.
    pub close_location: f32,
}

impl Default for RankingThresholds {
    fn default() -> Self {
        Self {
            high_rating: 4.0_f32,
            close_location: 70.0_f32,
        }
    }
}

/// Derive ranking factors for a candidate.
///
/// This is the engine's only seam to the outside world. Implementations must
/// be infallible and side-effect-free: they must not mutate the candidate,
/// and calling them twice with the same candidate must return the same
/// factors, or the ranked order stops being reproducible. Sources must be
/// thread-safe (`Send + Sync`) so ranking can run from any thread.
///
/// Any `Fn(&Candidate) -> RankingFactors` closure implements the trait.
///
/// # Examples
///
/// ```
/// use coachrank_core::{Candidate, FactorSource, RankingFactors};
///
/// struct Unverified;
///
/// impl FactorSource for Unverified {
///     fn factors(&self, _candidate: &Candidate) -> RankingFactors {
///         RankingFactors::default()
///     }
/// }
///
/// let candidate = Candidate::new("coach-7f3a2b91", "Ada");
/// assert!(!Unverified.factors(&candidate).is_verified);
/// ```
pub trait FactorSource: Send + Sync {
    /// Return the ranking factors for `candidate`.
    fn factors(&self, candidate: &Candidate) -> RankingFactors;
}

impl<F> FactorSource for F
where
    F: Fn(&Candidate) -> RankingFactors + Send + Sync,
{
    fn factors(&self, candidate: &Candidate) -> RankingFactors {
        self(candidate)
    }
}

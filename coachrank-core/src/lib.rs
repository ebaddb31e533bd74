//! Core ranking engine for the coachrank marketplace.
//!
//! The crate turns a finite list of rankable candidates into a single,
//! deterministic display order. Each candidate is classified into one of
//! eight priority buckets from its [`RankingFactors`], then the full list is
//! ordered by bucket, average rating, proximity, and finally display name.
//! The engine is pure: it performs no I/O, never mutates its input, and the
//! same input always produces the same order.
//!
//! Factor extraction stays outside the engine. Callers supply a
//! [`FactorSource`] (any `Fn(&Candidate) -> RankingFactors` closure works),
//! so the engine has no knowledge of how ratings, verification, or location
//! scores are sourced.
//!
//! # Examples
//!
//! ```
//! use coachrank_core::{Candidate, MatchLevel, RankingFactors, rank};
//!
//! let candidates = vec![
//!     Candidate::new("coach-7f3a2b91", "Ada"),
//!     Candidate::new("coach-0c44d1e8", "Grace"),
//! ];
//! let ranked = rank(candidates, &|candidate: &Candidate| RankingFactors {
//!     is_boosted: false,
//!     is_verified: candidate.id == "coach-7f3a2b91",
//!     avg_rating: 4.6,
//!     location_score: 70.0,
//!     match_level: MatchLevel::SameRegion,
//! });
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked.first().map(|r| r.candidate.id.as_str()), Some("coach-7f3a2b91"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bucket;
pub mod candidate;
pub mod diagnostics;
pub mod factors;
pub mod rank;

pub use bucket::RankingBucket;
pub use candidate::Candidate;
pub use diagnostics::{
    CandidateIssue, DiagnosticsMode, MIN_PLAUSIBLE_ID_LEN, audit_candidates, warn_candidate_issues,
};
pub use factors::{FactorSource, MatchLevel, RankingFactors, RankingThresholds};
pub use rank::{RankedResult, rank, rank_with};

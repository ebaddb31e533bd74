//! Facade crate for the coachrank marketplace ranking engine.
//!
//! This crate re-exports the core domain types and ranking operations so
//! applications can depend on a single package. Serde support is forwarded
//! behind the `serde` feature flag.

#![forbid(unsafe_code)]

pub use coachrank_core::{
    Candidate, CandidateIssue, DiagnosticsMode, FactorSource, MIN_PLAUSIBLE_ID_LEN, MatchLevel,
    RankedResult, RankingBucket, RankingFactors, RankingThresholds, audit_candidates, rank,
    rank_with, warn_candidate_issues,
};

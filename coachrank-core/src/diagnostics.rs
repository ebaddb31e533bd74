//! Advisory candidate-list checks.
//!
//! The production ranking path never validates its input. These helpers exist
//! for development and staging: they scan a candidate list for identifier
//! problems and report them, without ever touching the ranked output. The
//! checks never panic and never fail; a broken id is worth a warning, not a
//! broken listing page.

#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::collections::HashSet;

use log::warn;

use crate::Candidate;

/// Shortest identifier length considered plausible.
///
/// Store-issued candidate ids are long opaque strings; anything shorter than
/// this is almost certainly a test stub or a truncated value.
pub const MIN_PLAUSIBLE_ID_LEN: usize = 8;

/// Whether advisory diagnostics are active.
///
/// Passed explicitly rather than read from ambient build state; callers that
/// want debug-only checks can map `cfg(debug_assertions)` onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsMode {
    /// Run the checks and emit warnings.
    Enabled,
    /// Skip the checks entirely.
    Disabled,
}

/// A problem found while auditing a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateIssue {
    /// The same id appears on more than one candidate.
    DuplicateId {
        /// The repeated identifier.
        id: String,
        /// How many candidates carry it.
        occurrences: usize,
    },
    /// A candidate has an empty id.
    EmptyId {
        /// Zero-based position of the candidate in the input list.
        position: usize,
    },
    /// A candidate id is shorter than [`MIN_PLAUSIBLE_ID_LEN`].
    ImplausiblyShortId {
        /// The suspicious identifier.
        id: String,
    },
}

impl std::fmt::Display for CandidateIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { id, occurrences } => {
                write!(f, "candidate id '{id}' appears {occurrences} times")
            }
            Self::EmptyId { position } => {
                write!(f, "candidate at position {position} has an empty id")
            }
            Self::ImplausiblyShortId { id } => {
                write!(f, "candidate id '{id}' is implausibly short")
            }
        }
    }
}

/// Scan a candidate list for duplicate, empty, and implausibly short ids.
///
/// Purely observational: the input is unchanged and issues are returned in a
/// deterministic order (one entry per problem, in input order, with each
/// duplicated id reported once at its first occurrence).
///
/// # Examples
///
/// ```
/// use coachrank_core::{Candidate, CandidateIssue, audit_candidates};
///
/// let candidates = vec![
///     Candidate::new("coach-7f3a2b91", "Ada"),
///     Candidate::new("coach-7f3a2b91", "Grace"),
/// ];
/// let issues = audit_candidates(&candidates);
/// assert_eq!(
///     issues,
///     vec![CandidateIssue::DuplicateId {
///         id: "coach-7f3a2b91".into(),
///         occurrences: 2,
///     }]
/// );
/// ```
#[must_use]
pub fn audit_candidates(candidates: &[Candidate]) -> Vec<CandidateIssue> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for candidate in candidates {
        *counts.entry(candidate.id.as_str()).or_insert(0) += 1;
    }

    let mut reported: HashSet<&str> = HashSet::new();
    let mut issues = Vec::new();
    for (position, candidate) in candidates.iter().enumerate() {
        let id = candidate.id.as_str();
        if id.is_empty() {
            issues.push(CandidateIssue::EmptyId { position });
        } else if id.len() < MIN_PLAUSIBLE_ID_LEN {
            issues.push(CandidateIssue::ImplausiblyShortId { id: id.to_owned() });
        }
        let occurrences = counts.get(id).copied().unwrap_or(0);
        if occurrences > 1 && reported.insert(id) {
            issues.push(CandidateIssue::DuplicateId {
                id: id.to_owned(),
                occurrences,
            });
        }
    }
    issues
}

/// Log every issue found by [`audit_candidates`] at warn level.
///
/// A no-op when `mode` is [`DiagnosticsMode::Disabled`]. Never alters the
/// list, never panics; purely an observability aid.
///
/// # Examples
///
/// ```
/// use coachrank_core::{Candidate, DiagnosticsMode, warn_candidate_issues};
///
/// let candidates = vec![Candidate::new("coach-7f3a2b91", "Ada")];
/// warn_candidate_issues(&candidates, DiagnosticsMode::Enabled);
/// ```
pub fn warn_candidate_issues(candidates: &[Candidate], mode: DiagnosticsMode) {
    if mode == DiagnosticsMode::Disabled {
        return;
    }
    for issue in audit_candidates(candidates) {
        warn!("Candidate audit: {issue}");
    }
}

//! Rankable candidate records.
//!
//! A [`Candidate`] is deliberately opaque: the engine reads its `id` only for
//! diagnostic checks and its `display_name` only as the final tie-break key.
//! Everything that actually drives the order lives in
//! [`RankingFactors`](crate::RankingFactors), computed by the caller.

#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rankable marketplace entity, such as a coach profile.
///
/// # Examples
/// ```
/// use coachrank_core::Candidate;
///
/// let candidate = Candidate::new("coach-7f3a2b91", "Ada");
/// assert_eq!(candidate.id, "coach-7f3a2b91");
/// assert_eq!(candidate.display_name.as_deref(), Some("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    /// Opaque unique identifier issued by the backing store.
    pub id: String,
    /// Human-readable name; used only as the final, case-insensitive
    /// tie-break when bucket, rating, and location score are all equal.
    pub display_name: Option<String>,
}

impl Candidate {
    /// Construct a named candidate.
    ///
    /// # Examples
    /// ```
    /// use coachrank_core::Candidate;
    ///
    /// let candidate = Candidate::new("coach-0c44d1e8", "Grace");
    /// assert_eq!(candidate.display_name.as_deref(), Some("Grace"));
    /// ```
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: Some(display_name.into()),
        }
    }

    /// Construct a candidate without a display name.
    ///
    /// Unnamed candidates sort as if their name were the empty string.
    ///
    /// # Examples
    /// ```
    /// use coachrank_core::Candidate;
    ///
    /// let candidate = Candidate::unnamed("coach-9d12ab34");
    /// assert!(candidate.display_name.is_none());
    /// ```
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }
}

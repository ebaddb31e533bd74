//! Property-based tests for the ranking engine.
//!
//! These tests use `proptest` to assert invariants that must hold for any
//! finite candidate list, complementing the scenario and BDD behavioural
//! tests.
//!
//! # Invariants tested
//!
//! - **Permutation:** the output holds exactly the input candidates.
//! - **Bucket monotonicity:** adjacent buckets never decrease in priority.
//! - **Within-bucket rating order:** equal buckets sort by rating descending.
//! - **Within-rating location order:** equal ratings sort by proximity.
//! - **Alphabetical tie-break:** remaining ties order by folded name.
//! - **Idempotence:** re-ranking ranked output changes nothing.
//! - **Determinism:** identical inputs produce identical orders.

use std::collections::HashMap;

use coachrank_core::{Candidate, MatchLevel, RankingFactors, rank};
use proptest::prelude::*;

fn match_level_strategy() -> impl Strategy<Value = MatchLevel> {
    prop_oneof![
        Just(MatchLevel::SameCity),
        Just(MatchLevel::SameRegion),
        Just(MatchLevel::SameCountry),
        Just(MatchLevel::Remote),
    ]
}

fn factors_strategy() -> impl Strategy<Value = RankingFactors> {
    (
        any::<bool>(),
        any::<bool>(),
        0.0_f32..=5.0_f32,
        0.0_f32..=100.0_f32,
        match_level_strategy(),
    )
        .prop_map(
            |(is_boosted, is_verified, avg_rating, location_score, match_level)| RankingFactors {
                is_boosted,
                is_verified,
                avg_rating,
                location_score,
                match_level,
            },
        )
}

fn roster_strategy() -> impl Strategy<Value = Vec<(Candidate, RankingFactors)>> {
    prop::collection::vec(
        (proptest::option::of("[A-Za-z]{1,8}"), factors_strategy()),
        0..100,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, factors))| {
                let id = format!("coach-{i:08}");
                let candidate = name
                    .map_or_else(|| Candidate::unnamed(&id), |n| Candidate::new(&id, n));
                (candidate, factors)
            })
            .collect()
    })
}

fn split(
    roster: Vec<(Candidate, RankingFactors)>,
) -> (Vec<Candidate>, HashMap<String, RankingFactors>) {
    let table: HashMap<String, RankingFactors> = roster
        .iter()
        .map(|(candidate, factors)| (candidate.id.clone(), *factors))
        .collect();
    let candidates = roster.into_iter().map(|(candidate, _)| candidate).collect();
    (candidates, table)
}

fn folded_name(candidate: &Candidate) -> String {
    candidate
        .display_name
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: output is a permutation of the input, with buckets and
    /// factors attached but no candidate dropped or duplicated.
    #[test]
    fn output_is_a_permutation(roster in roster_strategy()) {
        let (candidates, table) = split(roster);
        let mut input_ids: Vec<String> = candidates.iter().map(|c| c.id.clone()).collect();

        let source = move |c: &Candidate| table.get(&c.id).copied().unwrap_or_default();
        let ranked = rank(candidates, &source);

        prop_assert_eq!(ranked.len(), input_ids.len());
        let mut output_ids: Vec<String> =
            ranked.iter().map(|r| r.candidate.id.clone()).collect();
        input_ids.sort();
        output_ids.sort();
        prop_assert_eq!(input_ids, output_ids);
    }

    /// Property: every adjacent pair respects the composite sort key
    /// (bucket, rating desc, location desc, folded name asc).
    #[test]
    fn adjacent_pairs_are_ordered(roster in roster_strategy()) {
        let (candidates, table) = split(roster);
        let source = move |c: &Candidate| table.get(&c.id).copied().unwrap_or_default();
        let ranked = rank(candidates, &source);

        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.bucket <= second.bucket);
                if first.bucket != second.bucket {
                    continue;
                }
                prop_assert!(first.factors.avg_rating >= second.factors.avg_rating);
                if first.factors.avg_rating != second.factors.avg_rating {
                    continue;
                }
                prop_assert!(
                    first.factors.location_score >= second.factors.location_score
                );
                if first.factors.location_score != second.factors.location_score {
                    continue;
                }
                prop_assert!(folded_name(&first.candidate) <= folded_name(&second.candidate));
            }
        }
    }

    /// Property: ranking the ranked output again yields the same order.
    #[test]
    fn ranking_is_idempotent(roster in roster_strategy()) {
        let (candidates, table) = split(roster);
        let source = move |c: &Candidate| table.get(&c.id).copied().unwrap_or_default();

        let once = rank(candidates, &source);
        let again = rank(once.iter().map(|r| r.candidate.clone()).collect(), &source);

        let first_ids: Vec<&str> = once.iter().map(|r| r.candidate.id.as_str()).collect();
        let second_ids: Vec<&str> = again.iter().map(|r| r.candidate.id.as_str()).collect();
        prop_assert_eq!(first_ids, second_ids);
    }

    /// Property: two calls with identical inputs agree exactly.
    #[test]
    fn ranking_is_deterministic(roster in roster_strategy()) {
        let (candidates, table) = split(roster);
        let source = move |c: &Candidate| table.get(&c.id).copied().unwrap_or_default();

        let first = rank(candidates.clone(), &source);
        let second = rank(candidates, &source);
        prop_assert_eq!(first, second);
    }
}

//! Offline inspection tool for coach ranking decisions.
//!
//! Reads a JSON roster of candidates with pre-computed ranking factors and
//! prints the order the engine would display them in, so placement questions
//! ("why is this coach below that one?") can be answered without a running
//! backend. The engine itself has no CLI; this binary is just another caller.
//!
//! Roster format: a JSON array of `{ "candidate": ..., "factors": ... }`
//! objects matching the core types' serde shape.

#![forbid(unsafe_code)]

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use coachrank_core::{
    Candidate, RankingFactors, RankingThresholds, audit_candidates, rank_with,
};
use serde::Deserialize;

mod error;

use error::CliError;

/// One roster entry: a candidate plus the factors its caller derived.
#[derive(Debug, Deserialize)]
struct RosterEntry {
    candidate: Candidate,
    factors: RankingFactors,
}

/// Rank a roster of coaching candidates and print the resulting order.
#[derive(Debug, Parser)]
#[command(name = "coachrank", version, about)]
struct Args {
    /// Path to the JSON roster file.
    roster: Utf8PathBuf,

    /// Emit the ranked list as JSON instead of a readable table.
    #[arg(long)]
    json: bool,

    /// Report duplicate or malformed candidate ids before ranking.
    #[arg(long)]
    audit: bool,

    /// Minimum average rating for a candidate to count as high-rated.
    #[arg(long, default_value_t = RankingThresholds::default().high_rating)]
    high_rating: f32,

    /// Minimum location score for a candidate to count as close.
    #[arg(long, default_value_t = RankingThresholds::default().close_location)]
    close_location: f32,
}

fn main() {
    if let Err(err) = run(&Args::parse()) {
        eprintln!("coachrank: {err}");
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let roster = load_roster(&args.roster)?;

    let candidates: Vec<Candidate> = roster
        .iter()
        .map(|entry| entry.candidate.clone())
        .collect();

    if args.audit {
        for issue in audit_candidates(&candidates) {
            eprintln!("audit: {issue}");
        }
    }

    let table: HashMap<String, RankingFactors> = roster
        .iter()
        .map(|entry| (entry.candidate.id.clone(), entry.factors))
        .collect();
    let source = move |candidate: &Candidate| table.get(&candidate.id).copied().unwrap_or_default();

    let thresholds = RankingThresholds {
        high_rating: args.high_rating,
        close_location: args.close_location,
    };
    let ranked = rank_with(candidates, &source, thresholds);

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&ranked).map_err(|source| CliError::Serialise { source })?;
        println!("{rendered}");
    } else {
        for (position, result) in ranked.iter().enumerate() {
            let name = result.candidate.display_name.as_deref().unwrap_or("(unnamed)");
            println!(
                "{:>3}. tier {} {:<24} rating {:.1} location {:>5.1} {}",
                position + 1,
                result.bucket.tier(),
                name,
                result.factors.avg_rating,
                result.factors.location_score,
                result.factors.match_level,
            );
        }
    }
    Ok(())
}

fn load_roster(path: &Utf8Path) -> Result<Vec<RosterEntry>, CliError> {
    let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| CliError::ReadRoster {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseRoster {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn write_roster(contents: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("roster.json"))
            .expect("utf-8 temp path");
        let mut file = std::fs::File::create(path.as_std_path()).expect("create roster");
        file.write_all(contents.as_bytes()).expect("write roster");
        (dir, path)
    }

    #[rstest]
    fn parses_a_well_formed_roster() {
        let (_dir, path) = write_roster(
            r#"[
                {
                    "candidate": { "id": "coach-7f3a2b91", "display_name": "Ada" },
                    "factors": {
                        "is_boosted": true,
                        "is_verified": true,
                        "avg_rating": 4.5,
                        "location_score": 80.0,
                        "match_level": "same_region"
                    }
                }
            ]"#,
        );
        let roster = load_roster(&path).expect("load roster");
        assert_eq!(roster.len(), 1);
        let entry = roster.first().expect("one entry");
        assert_eq!(entry.candidate.display_name.as_deref(), Some("Ada"));
        assert!(entry.factors.is_boosted);
    }

    #[rstest]
    fn rejects_malformed_json() {
        let (_dir, path) = write_roster("not json");
        let err = load_roster(&path).expect_err("malformed roster");
        assert!(matches!(err, CliError::ParseRoster { .. }));
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let path = Utf8PathBuf::from("/nonexistent/roster.json");
        let err = load_roster(&path).expect_err("missing roster");
        assert!(matches!(err, CliError::ReadRoster { .. }));
    }

    #[rstest]
    fn run_ranks_a_roster_without_error() {
        let (_dir, path) = write_roster(
            r#"[
                {
                    "candidate": { "id": "coach-7f3a2b91", "display_name": "Ada" },
                    "factors": {
                        "is_boosted": false,
                        "is_verified": true,
                        "avg_rating": 4.5,
                        "location_score": 80.0,
                        "match_level": "same_region"
                    }
                },
                {
                    "candidate": { "id": "coach-0c44d1e8", "display_name": "Grace" },
                    "factors": {
                        "is_boosted": false,
                        "is_verified": false,
                        "avg_rating": 3.0,
                        "location_score": 10.0,
                        "match_level": "remote"
                    }
                }
            ]"#,
        );
        let args = Args {
            roster: path,
            json: true,
            audit: true,
            high_rating: 4.0,
            close_location: 70.0,
        };
        run(&args).expect("run succeeds");
    }
}

//! Engine calls behind each subcommand.
//!
//! Every command takes already-read JSON text and returns the JSON to print,
//! so file handling stays in `main`.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use plyaz_league::{
    Bracket, EngineConfig, MatchRef, PointScheme, TeamId,
    bracket::Entrant,
    fixture::validate_transition_str,
    schedule::{double_round_robin, random_draw, round_robin},
    standings::{MatchResult, aggregate, rank},
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;
use serde_json::Value;

/// One recorded knockout result read from a winners file
#[derive(Debug, Clone, Deserialize)]
pub struct WinnerRecord {
    pub round: u32,
    pub position: usize,
    pub winner: TeamId,
}

/// Check a status change, returning the rejection text on failure
pub fn transition(from: &str, to: &str) -> std::result::Result<(), String> {
    validate_transition_str(from, to).map_err(|e| e.to_string())
}

/// Generate a bracket and apply recorded winners in order
pub fn bracket(config: &EngineConfig, entrants: &str, winners: Option<&str>) -> Result<Value> {
    let entrants: Vec<Entrant> =
        serde_json::from_str(entrants).context("Failed to parse entrants")?;
    let mut bracket = Bracket::generate_with_limit(&entrants, config.max_bracket_entrants)?;
    info!(
        "Generated {}-slot bracket for {} entrants",
        bracket.bracket_size(),
        entrants.len()
    );

    if let Some(winners) = winners {
        let records: Vec<WinnerRecord> =
            serde_json::from_str(winners).context("Failed to parse winners")?;
        for record in records {
            let at = MatchRef::new(record.round, record.position);
            bracket
                .record_winner(at, &record.winner)
                .with_context(|| format!("Failed to record {} at {at}", record.winner))?;
        }
    }

    if let Some(champion) = bracket.champion() {
        info!("Champion: {champion}");
    }
    Ok(serde_json::to_value(&bracket)?)
}

/// Aggregate results into a ranked table
pub fn standings(scheme: &PointScheme, results: &str, teams: Option<&str>) -> Result<Value> {
    let results: Vec<MatchResult> =
        serde_json::from_str(results).context("Failed to parse results")?;
    let teams: Vec<TeamId> = match teams {
        Some(teams) => serde_json::from_str(teams).context("Failed to parse teams")?,
        None => Vec::new(),
    };

    let table = rank(&aggregate(&results, &teams), scheme);
    debug!("Ranked {} teams from {} results", table.len(), results.len());
    Ok(serde_json::to_value(&table)?)
}

/// Round-robin schedule, optionally with a return leg
pub fn fixtures(teams: &str, double: bool) -> Result<Value> {
    let teams: Vec<TeamId> = serde_json::from_str(teams).context("Failed to parse teams")?;
    let schedule = if double {
        double_round_robin(&teams)
    } else {
        round_robin(&teams)
    };
    Ok(serde_json::to_value(&schedule)?)
}

/// Random group draw, reproducible when a seed is given
pub fn draw(teams: &str, groups: usize, seed: Option<u64>) -> Result<Value> {
    if groups == 0 {
        bail!("--groups must be at least 1");
    }
    let teams: Vec<TeamId> = serde_json::from_str(teams).context("Failed to parse teams")?;

    let assignments = match seed {
        Some(seed) => random_draw(&teams, groups, &mut StdRng::seed_from_u64(seed)),
        None => random_draw(&teams, groups, &mut rand::rng()),
    };
    Ok(serde_json::to_value(&assignments)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRANTS: &str = r#"[
        {"id": "red", "seed": 1},
        {"id": "blue", "seed": 2},
        {"id": "green", "seed": 3}
    ]"#;

    #[test]
    fn test_transition() {
        assert!(transition("upcoming", "live").is_ok());
        let err = transition("completed", "live").unwrap_err();
        assert!(err.contains("completed"));
        assert!(transition("live", "halftime").is_err());
    }

    #[test]
    fn test_bracket_with_winners() {
        let winners = r#"[
            {"round": 1, "position": 1, "winner": "blue"},
            {"round": 2, "position": 0, "winner": "red"}
        ]"#;
        let json = bracket(&EngineConfig::default(), ENTRANTS, Some(winners)).unwrap();
        assert_eq!(json["matches"][2]["winner"], "red");
    }

    #[test]
    fn test_bracket_rejects_unknown_winner() {
        let winners = r#"[{"round": 1, "position": 1, "winner": "purple"}]"#;
        assert!(bracket(&EngineConfig::default(), ENTRANTS, Some(winners)).is_err());
    }

    #[test]
    fn test_bracket_respects_limit() {
        let config = EngineConfig {
            max_bracket_entrants: 2,
            ..EngineConfig::default()
        };
        assert!(bracket(&config, ENTRANTS, None).is_err());
    }

    #[test]
    fn test_standings() {
        let results = r#"[{"home": "a", "away": "b", "home_goals": 0, "away_goals": 2}]"#;
        let teams = r#"["a", "b", "c"]"#;
        let json = standings(&PointScheme::default(), results, Some(teams)).unwrap();
        assert_eq!(json[0]["team"], "b");
        assert_eq!(json[0]["points"], 3);
        // unplayed c sits above a on goal difference
        assert_eq!(json[1]["team"], "c");
        assert_eq!(json[2]["team"], "a");
    }

    #[test]
    fn test_fixtures_and_draw() {
        let teams = r#"["a", "b", "c", "d"]"#;
        assert_eq!(fixtures(teams, false).unwrap().as_array().unwrap().len(), 6);
        assert_eq!(fixtures(teams, true).unwrap().as_array().unwrap().len(), 12);

        let first = draw(teams, 2, Some(9)).unwrap();
        assert_eq!(first, draw(teams, 2, Some(9)).unwrap());
        assert!(draw(teams, 0, None).is_err());
    }
}

//! Finished games: outcome, grouping per competition, summary counts.

use crate::model::{CompetitionRef, Game};
use crate::query::QueryKey;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
    /// At least one score is missing.
    Undecided,
}

#[must_use]
pub fn outcome(game: &Game) -> Outcome {
    match (game.home_score, game.away_score) {
        (Some(home), Some(away)) => match home.cmp(&away) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        },
        _ => Outcome::Undecided,
    }
}

#[must_use]
pub fn winner_name(game: &Game) -> Option<&str> {
    match outcome(game) {
        Outcome::HomeWin => Some(&game.home.name),
        Outcome::AwayWin => Some(&game.away.name),
        Outcome::Draw | Outcome::Undecided => None,
    }
}

/// Finished games of one competition, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionGroup<'a> {
    pub competition: &'a CompetitionRef,
    pub games: Vec<&'a Game>,
}

/// Most recent first; games whose date does not parse go last.
fn by_kickoff_desc(a: &Game, b: &Game) -> Ordering {
    match (a.kickoff(), b.kickoff()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Group by competition id in first-seen order.
#[must_use]
pub fn group_by_competition(games: &[Game]) -> Vec<CompetitionGroup<'_>> {
    let mut groups: Vec<CompetitionGroup<'_>> = Vec::new();
    for game in games {
        match groups
            .iter_mut()
            .find(|g| g.competition.id == game.competition.id)
        {
            Some(group) => group.games.push(game),
            None => groups.push(CompetitionGroup {
                competition: &game.competition,
                games: vec![game],
            }),
        }
    }
    for group in &mut groups {
        group.games.sort_by(|a, b| by_kickoff_desc(a, b));
    }
    groups
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsSummary {
    pub total: usize,
    pub decided: usize,
    pub draws: usize,
    pub competitions: usize,
}

#[must_use]
pub fn summarize(games: &[Game]) -> ResultsSummary {
    let mut summary = ResultsSummary {
        total: games.len(),
        ..ResultsSummary::default()
    };
    let mut competitions = HashSet::new();
    for game in games {
        competitions.insert(game.competition.id);
        match outcome(game) {
            Outcome::HomeWin | Outcome::AwayWin => summary.decided += 1,
            Outcome::Draw => summary.draws += 1,
            Outcome::Undecided => {}
        }
    }
    summary.competitions = competitions.len();
    summary
}

/// Cache key of the finished-games list; an empty part means all competitions.
#[must_use]
pub fn finished_games_key(competition_id: Option<i64>) -> QueryKey {
    QueryKey::new(["finished-games"]).with(competition_id.map_or_else(String::new, |id| id.to_string()))
}

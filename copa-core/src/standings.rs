//! Classification view model.
//!
//! The server computes the table; this module only decides what to show and
//! how to decorate each row. Rows keep the server's order.

use crate::error::ApiError;
use crate::model::StandingRow;
use crate::query::{QueryKey, QueryState};
use std::rc::Rc;

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;
pub const LOSS_POINTS: u32 = 0;

/// Decoration in the position column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionMarker {
    Trophy,
    SilverMedal,
    BronzeMedal,
    Numeral(u32),
}

impl PositionMarker {
    #[must_use]
    pub const fn for_position(position: u32) -> Self {
        match position {
            1 => Self::Trophy,
            2 => Self::SilverMedal,
            3 => Self::BronzeMedal,
            n => Self::Numeral(n),
        }
    }

    /// Row highlight class for podium positions.
    #[must_use]
    pub const fn row_class(self) -> Option<&'static str> {
        match self {
            Self::Trophy => Some("standing-gold"),
            Self::SilverMedal => Some("standing-silver"),
            Self::BronzeMedal => Some("standing-bronze"),
            Self::Numeral(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalDifferenceTone {
    Positive,
    Negative,
}

impl GoalDifferenceTone {
    /// Zero counts as positive.
    #[must_use]
    pub const fn of(goal_difference: i32) -> Self {
        if goal_difference >= 0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Explicit plus sign for positive values; zero and negatives as-is.
#[must_use]
pub fn format_goal_difference(goal_difference: i32) -> String {
    if goal_difference > 0 {
        format!("+{goal_difference}")
    } else {
        goal_difference.to_string()
    }
}

#[must_use]
pub fn classification_key(competition_id: i64) -> QueryKey {
    QueryKey::new(["classification"]).with(competition_id)
}

/// What the classification screen renders.
#[derive(Debug, Clone, PartialEq)]
pub enum StandingsView {
    NoSelection,
    Loading,
    Failed(ApiError),
    Empty,
    Table(Rc<Vec<StandingRow>>),
}

#[must_use]
pub fn standings_view(
    selected: Option<i64>,
    query: &QueryState<Vec<StandingRow>>,
) -> StandingsView {
    if selected.is_none() {
        return StandingsView::NoSelection;
    }
    match query {
        QueryState::Idle | QueryState::Loading => StandingsView::Loading,
        QueryState::Failed(err) => StandingsView::Failed(err.clone()),
        QueryState::Success(rows) if rows.is_empty() => StandingsView::Empty,
        QueryState::Success(rows) => StandingsView::Table(Rc::clone(rows)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"[
        {"posicao":1,"time":{"id":1,"nome":"Leões","escola":"EM Centro"},"jogos":2,"vitorias":2,
         "empates":0,"derrotas":0,"golsPro":5,"golsContra":1,"saldoGols":4,"pontos":6},
        {"posicao":2,"time":{"id":2,"nome":"Águias","escola":"EM Norte"},"jogos":2,"vitorias":0,
         "empates":0,"derrotas":2,"golsPro":1,"golsContra":5,"saldoGols":-4,"pontos":0}
    ]"#;

    #[test]
    fn markers_cover_the_podium() {
        assert_eq!(PositionMarker::for_position(1), PositionMarker::Trophy);
        assert_eq!(PositionMarker::for_position(2), PositionMarker::SilverMedal);
        assert_eq!(PositionMarker::for_position(3), PositionMarker::BronzeMedal);
        assert_eq!(PositionMarker::for_position(4), PositionMarker::Numeral(4));
        assert_eq!(PositionMarker::Numeral(9).row_class(), None);
    }

    #[test]
    fn goal_difference_formatting_and_tone() {
        assert_eq!(format_goal_difference(3), "+3");
        assert_eq!(format_goal_difference(0), "0");
        assert_eq!(format_goal_difference(-2), "-2");
        assert_eq!(GoalDifferenceTone::of(0), GoalDifferenceTone::Positive);
        assert_eq!(GoalDifferenceTone::of(-1), GoalDifferenceTone::Negative);
    }

    #[test]
    fn classification_key_carries_the_competition() {
        assert_eq!(classification_key(5), QueryKey::new(["classification", "5"]));
        assert_eq!(
            standings_view(None, &QueryState::Loading),
            StandingsView::NoSelection
        );
    }

    #[test]
    fn view_states_follow_the_query() {
        let rows: Vec<StandingRow> = serde_json::from_str(TABLE).unwrap();
        let rows = Rc::new(rows);
        assert_eq!(
            standings_view(Some(1), &QueryState::Success(Rc::new(Vec::new()))),
            StandingsView::Empty
        );
        assert_eq!(
            standings_view(Some(1), &QueryState::Failed(ApiError::Network("x".into()))),
            StandingsView::Failed(ApiError::Network("x".into()))
        );
        assert_eq!(
            standings_view(Some(1), &QueryState::Success(Rc::clone(&rows))),
            StandingsView::Table(rows)
        );
    }
}

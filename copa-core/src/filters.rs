//! Filter state for the list screens.

use crate::api::GameQuery;
use crate::model::{
    Competition, CompetitionStatus, Gender, GameStatus, Modality, School,
};
use crate::query::QueryKey;

/// Case-insensitive substring match; an empty needle matches everything.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitionFilters {
    pub search: String,
    pub modality: Option<Modality>,
    pub gender: Option<Gender>,
    pub status: Option<CompetitionStatus>,
}

impl CompetitionFilters {
    #[must_use]
    pub fn matches(&self, competition: &Competition) -> bool {
        contains_ci(&competition.title, &self.search)
            && self.modality.is_none_or(|m| m == competition.modality)
            && self.gender.is_none_or(|g| g == competition.gender)
            && self.status.is_none_or(|s| s == competition.status)
    }

    #[must_use]
    pub fn apply<'a>(&self, competitions: &'a [Competition]) -> Vec<&'a Competition> {
        competitions.iter().filter(|c| self.matches(c)).collect()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Summary counts shown above the competition list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompetitionBreakdown {
    pub futsal: usize,
    pub dodgeball: usize,
    pub male: usize,
    pub female: usize,
}

impl CompetitionBreakdown {
    #[must_use]
    pub fn of<'a>(competitions: impl IntoIterator<Item = &'a Competition>) -> Self {
        competitions
            .into_iter()
            .fold(Self::default(), |mut acc, c| {
                match c.modality {
                    Modality::Futsal => acc.futsal += 1,
                    Modality::Dodgeball => acc.dodgeball += 1,
                }
                match c.gender {
                    Gender::Male => acc.male += 1,
                    Gender::Female => acc.female += 1,
                }
                acc
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolFilters {
    pub search: String,
}

impl SchoolFilters {
    #[must_use]
    pub fn apply<'a>(&self, schools: &'a [School]) -> Vec<&'a School> {
        schools
            .iter()
            .filter(|s| contains_ci(&s.name, &self.search))
            .collect()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.search.clear();
    }
}

/// Server-side filters of the games screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameFilters {
    pub competition_id: Option<i64>,
    pub school_id: Option<i64>,
    pub status: Option<GameStatus>,
}

impl GameFilters {
    /// `["games", competicaoId, escolaId, status]` with empty parts for unset filters.
    #[must_use]
    pub fn query_key(&self) -> QueryKey {
        fn part<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }
        QueryKey::new(["games"])
            .with(part(self.competition_id))
            .with(part(self.school_id))
            .with(part(self.status.map(GameStatus::as_wire)))
    }

    #[must_use]
    pub fn to_query(&self) -> GameQuery {
        GameQuery {
            competition_id: self.competition_id,
            school_id: self.school_id,
            status: self.status,
            ..GameQuery::default()
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Competition filter of the results screen; the status is always finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsFilters {
    pub competition_id: Option<i64>,
}

impl ResultsFilters {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.competition_id.is_some()
    }

    #[must_use]
    pub fn to_query(&self) -> GameQuery {
        GameQuery {
            competition_id: self.competition_id,
            status: Some(GameStatus::Finished),
            ..GameQuery::default()
        }
    }
}

/// Parse an optional numeric id coming from a `<select>` value.
#[must_use]
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubCategory;

    fn competition(id: i64, title: &str, modality: Modality, gender: Gender) -> Competition {
        Competition {
            id,
            title: title.into(),
            modality,
            gender,
            sub_category: SubCategory::Sub11,
            status: CompetitionStatus::InProgress,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample() -> Vec<Competition> {
        vec![
            competition(1, "Copa Futsal Masculino", Modality::Futsal, Gender::Male),
            competition(2, "Queimada Feminina", Modality::Dodgeball, Gender::Female),
            competition(3, "Futsal Feminino", Modality::Futsal, Gender::Female),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filters = CompetitionFilters {
            search: "FUTSAL".into(),
            ..CompetitionFilters::default()
        };
        let ids: Vec<_> = filters.apply(&sample()).iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn exact_filters_combine() {
        let filters = CompetitionFilters {
            modality: Some(Modality::Futsal),
            gender: Some(Gender::Female),
            ..CompetitionFilters::default()
        };
        let ids: Vec<_> = filters.apply(&sample()).iter().map(|c| c.id).collect();
        assert_eq!(ids, [3]);
    }

    #[test]
    fn clearing_filters_restores_full_list() {
        let all = sample();
        let mut filters = CompetitionFilters {
            search: "zzz".into(),
            status: Some(CompetitionStatus::Finished),
            ..CompetitionFilters::default()
        };
        assert!(filters.apply(&all).is_empty());
        assert!(filters.is_active());
        filters.clear();
        assert!(!filters.is_active());
        assert_eq!(filters.apply(&all).len(), all.len());
    }

    #[test]
    fn breakdown_counts_modality_and_gender() {
        let all = sample();
        assert_eq!(
            CompetitionBreakdown::of(&all),
            CompetitionBreakdown {
                futsal: 2,
                dodgeball: 1,
                male: 1,
                female: 2,
            }
        );
    }

    #[test]
    fn game_filters_key_and_query() {
        let filters = GameFilters {
            competition_id: Some(2),
            school_id: None,
            status: Some(GameStatus::Scheduled),
        };
        assert_eq!(filters.query_key().parts(), ["games", "2", "", "Agendado"]);
        let query = filters.to_query();
        assert_eq!(query.school_id, None);
        assert_eq!(query.status, Some(GameStatus::Scheduled));
    }

    #[test]
    fn results_always_ask_for_finished_games() {
        assert_eq!(
            ResultsFilters::default().to_query().status,
            Some(GameStatus::Finished)
        );
    }

    #[test]
    fn school_search_and_id_parsing() {
        let schools = vec![
            School {
                id: 1,
                name: "EM Monteiro Lobato".into(),
                created_at: None,
                updated_at: None,
            },
            School {
                id: 2,
                name: "EM Cecília Meireles".into(),
                created_at: None,
                updated_at: None,
            },
        ];
        let filters = SchoolFilters {
            search: "lobato".into(),
        };
        assert_eq!(filters.apply(&schools).len(), 1);
        let mut cleared = filters.clone();
        cleared.clear();
        assert!(filters.is_active());
        assert!(!cleared.is_active());
        assert_eq!(cleared.apply(&schools).len(), 2);
        assert_eq!(parse_id(" 12 "), Some(12));
        assert_eq!(parse_id(""), None);
    }
}

use crate::components::daisy_ui::{Badge, DaisyColor};
use crate::i18n::t;
use copa_core::model::{AppealStatus, CompetitionStatus, GameStatus};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Competition(CompetitionStatus),
    Game(GameStatus),
    Appeal(AppealStatus),
}

impl StatusKind {
    #[must_use]
    pub const fn color(self) -> DaisyColor {
        match self {
            Self::Competition(CompetitionStatus::Planned) | Self::Game(GameStatus::Scheduled) => {
                DaisyColor::Info
            }
            Self::Competition(CompetitionStatus::InProgress) | Self::Game(GameStatus::InProgress) => {
                DaisyColor::Warning
            }
            Self::Competition(CompetitionStatus::Finished) | Self::Game(GameStatus::Finished) => {
                DaisyColor::Success
            }
            Self::Appeal(AppealStatus::Open) => DaisyColor::Info,
            Self::Appeal(AppealStatus::UnderReview) => DaisyColor::Warning,
            Self::Appeal(AppealStatus::Granted) => DaisyColor::Success,
            Self::Appeal(AppealStatus::Denied) => DaisyColor::Error,
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Competition(CompetitionStatus::Planned) => "status.competition.planned",
            Self::Competition(CompetitionStatus::InProgress) => "status.competition.in_progress",
            Self::Competition(CompetitionStatus::Finished) => "status.competition.finished",
            Self::Game(GameStatus::Scheduled) => "status.game.scheduled",
            Self::Game(GameStatus::InProgress) => "status.game.in_progress",
            Self::Game(GameStatus::Finished) => "status.game.finished",
            Self::Appeal(AppealStatus::Open) => "status.appeal.open",
            Self::Appeal(AppealStatus::UnderReview) => "status.appeal.under_review",
            Self::Appeal(AppealStatus::Granted) => "status.appeal.granted",
            Self::Appeal(AppealStatus::Denied) => "status.appeal.denied",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBadgeProps {
    pub status: StatusKind,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <Badge label={t(props.status.label_key())} color={Some(props.status.color())} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_states_share_the_success_color() {
        assert_eq!(
            StatusKind::Competition(CompetitionStatus::Finished).color(),
            DaisyColor::Success
        );
        assert_eq!(StatusKind::Game(GameStatus::Finished).color(), DaisyColor::Success);
        assert_eq!(StatusKind::Appeal(AppealStatus::Denied).color(), DaisyColor::Error);
    }

    #[test]
    fn every_status_has_a_translation() {
        crate::i18n::set_lang("pt");
        let kinds = CompetitionStatus::ALL
            .iter()
            .map(|s| StatusKind::Competition(*s))
            .chain(GameStatus::ALL.iter().map(|s| StatusKind::Game(*s)))
            .chain(AppealStatus::ALL.iter().map(|s| StatusKind::Appeal(*s)));
        for kind in kinds {
            assert_ne!(t(kind.label_key()), kind.label_key(), "{kind:?}");
        }
    }
}

use copa_core::model::{
    Competition, CompetitionRef, CompetitionStatus, Game, GameStatus, Gender, Modality,
    StandingRow, SubCategory, Team,
};
use yew::prelude::*;
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

#[derive(Properties, PartialEq)]
pub struct HarnessProps {
    pub content: Html,
}

/// Mounts `content` inside an in-memory router so links resolve.
#[function_component(Harness)]
pub fn harness(props: &HarnessProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router {history}>
            { props.content.clone() }
        </Router>
    }
}

pub fn render(content: Html) -> String {
    futures::executor::block_on(
        yew::LocalServerRenderer::<Harness>::with_props(HarnessProps { content }).render(),
    )
}

pub fn competition(id: i64, title: &str, modality: Modality, gender: Gender) -> Competition {
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

fn team(id: i64, name: &str, school: &str) -> Team {
    Team {
        id,
        name: name.into(),
        school: school.into(),
    }
}

pub fn game(id: i64, competition: (i64, &str), when: &str, score: (Option<u32>, Option<u32>)) -> Game {
    Game {
        id,
        competition: CompetitionRef {
            id: competition.0,
            title: competition.1.into(),
        },
        round: 1,
        scheduled_at: when.into(),
        venue: "Ginásio Municipal".into(),
        home: team(1, "Leões", "EM Rui Barbosa"),
        away: team(2, "Tigres", "EM Anísio Teixeira"),
        status: GameStatus::Finished,
        home_score: score.0,
        away_score: score.1,
    }
}

pub fn standing(position: u32, name: &str, goal_difference: i32, points: u32) -> StandingRow {
    StandingRow {
        position,
        team: team(i64::from(position), name, "EM Centro"),
        played: 3,
        wins: points / 3,
        draws: points % 3,
        losses: 0,
        goals_for: 5,
        goals_against: 2,
        goal_difference,
        points,
    }
}

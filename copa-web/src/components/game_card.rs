use crate::components::status_badge::{StatusBadge, StatusKind};
use crate::i18n::tr;
use copa_core::display::format_game_datetime;
use copa_core::model::Game;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameCardProps {
    pub game: Rc<Game>,
    /// Extra controls rendered under the teams, e.g. teacher actions.
    #[prop_or_default]
    pub children: Children,
}

fn score(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let game = &props.game;
    let round = game.round.to_string();
    let mut args = BTreeMap::new();
    args.insert("round", round.as_str());
    let scoreline = if game.is_finished() {
        format!("{} x {}", score(game.home_score), score(game.away_score))
    } else {
        "x".to_string()
    };
    html! {
        <article class="card bg-base-100 shadow game-card" data-game-id={game.id.to_string()}>
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <span class="text-sm opacity-70">
                        { format!("{} · {}", game.competition.title, tr("games.round", Some(&args))) }
                    </span>
                    <StatusBadge status={StatusKind::Game(game.status)} />
                </div>
                <div class="grid grid-cols-3 items-center text-center">
                    <div>
                        <p class="font-bold">{ &game.home.name }</p>
                        <p class="text-xs opacity-70">{ &game.home.school }</p>
                    </div>
                    <p class="text-2xl font-bold scoreline">{ scoreline }</p>
                    <div>
                        <p class="font-bold">{ &game.away.name }</p>
                        <p class="text-xs opacity-70">{ &game.away.school }</p>
                    </div>
                </div>
                <p class="text-sm">{ format!("{} · {}", format_game_datetime(&game.scheduled_at), game.venue) }</p>
                { for props.children.iter() }
            </div>
        </article>
    }
}

use crate::components::daisy_ui::{Stat, StatItem};
use crate::components::{EmptyState, query_html};
use crate::hooks::use_query;
use crate::i18n::{t, tr, tr_count};
use crate::pages::games::competition_options;
use crate::pages::{PageHeader, id_select};
use copa_core::display::format_game_date;
use copa_core::filters::ResultsFilters;
use copa_core::model::{Game, Team};
use copa_core::query::{QueryState, keys};
use copa_core::results::{Outcome, finished_games_key, group_by_competition, outcome, summarize, winner_name};
use std::collections::BTreeMap;
use yew::prelude::*;

fn score(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn team_cell(team: &Team, winner: bool) -> Html {
    html! {
        <span class={classes!("team", winner.then_some("font-bold"))}>
            { &team.name }
            <span class="block text-xs opacity-70">{ &team.school }</span>
        </span>
    }
}

fn outcome_label(game: &Game) -> String {
    match outcome(game) {
        Outcome::Draw => t("results.draw"),
        Outcome::Undecided => t("results.undecided"),
        Outcome::HomeWin | Outcome::AwayWin => {
            let mut args = BTreeMap::new();
            args.insert("team", winner_name(game).unwrap_or_default());
            tr("results.winner", Some(&args))
        }
    }
}

fn result_row(game: &Game) -> Html {
    let decided = outcome(game);
    html! {
        <li class="result-row grid grid-cols-5 items-center gap-2 py-2" key={game.id}>
            <span class="text-sm">{ format_game_date(&game.scheduled_at) }</span>
            { team_cell(&game.home, decided == Outcome::HomeWin) }
            <span class="text-center font-bold">{ format!("{} x {}", score(game.home_score), score(game.away_score)) }</span>
            { team_cell(&game.away, decided == Outcome::AwayWin) }
            <span class={classes!("badge", (decided == Outcome::Draw).then_some("badge-warning"))}>{ outcome_label(game) }</span>
        </li>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsViewProps {
    pub games: QueryState<Vec<Game>>,
    pub competitions: Vec<(i64, String)>,
    pub filters: ResultsFilters,
    pub on_filters: Callback<ResultsFilters>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ResultsView)]
pub fn results_view(props: &ResultsViewProps) -> Html {
    let on_competition = {
        let cb = props.on_filters.clone();
        Callback::from(move |competition_id| cb.emit(ResultsFilters { competition_id }))
    };
    let on_clear = {
        let cb = props.on_filters.clone();
        Callback::from(move |_: MouseEvent| cb.emit(ResultsFilters::default()))
    };
    html! {
        <section class="results-page">
            <PageHeader title={t("results.title")} subtitle={t("results.subtitle")} />
            <div class="flex flex-wrap gap-4 items-end mb-4 filters">
                { id_select(&t("games.competition"), &props.competitions, props.filters.competition_id, on_competition, &t("filters.all")) }
                if props.filters.is_active() {
                    <button type="button" class="btn btn-ghost btn-sm" onclick={on_clear}>{ t("filters.clear") }</button>
                }
            </div>
            { query_html(&props.games, "results.error", props.on_retry.clone(), |games| {
                if games.is_empty() {
                    return html! { <EmptyState title={t("results.none")} /> };
                }
                let summary = summarize(games);
                let stats = vec![
                    StatItem::new(t("results.total"), summary.total),
                    StatItem::new(t("results.decided"), summary.decided),
                    StatItem::new(t("results.draws"), summary.draws),
                    StatItem::new(t("results.competitions"), summary.competitions),
                ];
                html! {
                    <>
                        <Stat items={stats} class="mb-6" />
                        { for group_by_competition(games).into_iter().map(|group| html! {
                            <section class="card bg-base-100 shadow mb-4 result-group" key={group.competition.id}>
                                <div class="card-body">
                                    <h2 class="card-title">{ &group.competition.title }</h2>
                                    <p class="text-sm opacity-70">{ tr_count("results.games_count", group.games.len()) }</p>
                                    <ul class="divide-y">
                                        { for group.games.iter().map(|game| result_row(game)) }
                                    </ul>
                                </div>
                            </section>
                        }) }
                    </>
                }
            }) }
        </section>
    }
}

#[function_component(ResultsPage)]
pub fn results_page() -> Html {
    let filters = use_state(ResultsFilters::default);
    let current = *filters;
    let games = use_query(Some(finished_games_key(current.competition_id)), move |api| async move {
        api.games(&current.to_query()).await
    });
    let competitions = use_query(Some(keys::competitions()), |api| async move {
        api.competitions().await
    });
    let on_filters = {
        let filters = filters.clone();
        Callback::from(move |next| filters.set(next))
    };
    html! {
        <ResultsView
            games={games.state}
            competitions={competition_options(&competitions.state)}
            filters={current}
            {on_filters}
            on_retry={Some(games.reload)}
        />
    }
}

use crate::components::{EmptyState, GameCard, query_html};
use crate::hooks::use_query;
use crate::i18n::{t, tr_count};
use crate::pages::{PageHeader, id_select, wire_select};
use copa_core::filters::GameFilters;
use copa_core::model::{Competition, Game, GameStatus, School};
use copa_core::query::{QueryState, keys};
use std::rc::Rc;
use yew::prelude::*;

/// `(id, label)` pairs for the filter selects, empty until loaded.
pub fn competition_options(state: &QueryState<Vec<Competition>>) -> Vec<(i64, String)> {
    state
        .data()
        .map(|list| list.iter().map(|c| (c.id, c.title.clone())).collect())
        .unwrap_or_default()
}

pub fn school_options(state: &QueryState<Vec<School>>) -> Vec<(i64, String)> {
    state
        .data()
        .map(|list| list.iter().map(|s| (s.id, s.name.clone())).collect())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq, Clone)]
pub struct GamesViewProps {
    pub games: QueryState<Vec<Game>>,
    pub competitions: Vec<(i64, String)>,
    pub schools: Vec<(i64, String)>,
    pub filters: GameFilters,
    pub on_filters: Callback<GameFilters>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(GamesView)]
pub fn games_view(props: &GamesViewProps) -> Html {
    let filters = props.filters;
    let on_competition = {
        let cb = props.on_filters.clone();
        Callback::from(move |id| cb.emit(GameFilters { competition_id: id, ..filters }))
    };
    let on_school = {
        let cb = props.on_filters.clone();
        Callback::from(move |id| cb.emit(GameFilters { school_id: id, ..filters }))
    };
    let on_status = {
        let cb = props.on_filters.clone();
        Callback::from(move |status| cb.emit(GameFilters { status, ..filters }))
    };
    let on_clear = {
        let cb = props.on_filters.clone();
        Callback::from(move |_: MouseEvent| cb.emit(GameFilters::default()))
    };
    html! {
        <section class="games-page">
            <PageHeader title={t("games.title")} subtitle={t("games.subtitle")} />
            <div class="flex flex-wrap gap-4 items-end mb-4 filters">
                { id_select(&t("games.competition"), &props.competitions, filters.competition_id, on_competition, &t("filters.all")) }
                { id_select(&t("games.school"), &props.schools, filters.school_id, on_school, &t("filters.all")) }
                { wire_select(&t("games.status"), GameStatus::ALL, GameStatus::as_wire, filters.status, on_status) }
                if filters.is_active() {
                    <button type="button" class="btn btn-ghost btn-sm" onclick={on_clear}>{ t("filters.clear") }</button>
                }
            </div>
            { query_html(&props.games, "games.error", props.on_retry.clone(), |games| {
                if games.is_empty() {
                    html! { <EmptyState title={t("games.none")} message={filters.is_active().then(|| t("filters.try_other"))} /> }
                } else {
                    html! {
                        <>
                            <p class="mb-2 result-count">{ tr_count("results.games_count", games.len()) }</p>
                            <div class="grid gap-4 md:grid-cols-2">
                                { for games.iter().map(|game| html! { <GameCard game={Rc::new(game.clone())} /> }) }
                            </div>
                        </>
                    }
                }
            }) }
        </section>
    }
}

#[function_component(GamesPage)]
pub fn games_page() -> Html {
    let filters = use_state(GameFilters::default);
    let current = *filters;
    let games = use_query(Some(current.query_key()), move |api| async move {
        api.games(&current.to_query()).await
    });
    let competitions = use_query(Some(keys::competitions()), |api| async move {
        api.competitions().await
    });
    let schools = use_query(Some(keys::schools()), |api| async move { api.schools().await });
    let on_filters = {
        let filters = filters.clone();
        Callback::from(move |next| filters.set(next))
    };
    html! {
        <GamesView
            games={games.state}
            competitions={competition_options(&competitions.state)}
            schools={school_options(&schools.state)}
            filters={current}
            {on_filters}
            on_retry={Some(games.reload)}
        />
    }
}

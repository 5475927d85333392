use crate::app::state::use_app_context;
use crate::components::daisy_ui::{Stat, StatItem};
use crate::components::{EmptyState, GameCard, query_html};
use crate::hooks::use_query;
use crate::i18n::{t, tr};
use crate::pages::PageHeader;
use crate::router::Route;
use copa_core::api::GameQuery;
use copa_core::model::{Competition, Game, School};
use copa_core::query::{QueryState, keys};
use copa_core::session::Identity;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

pub const RECENT_GAMES: u32 = 5;

fn welcome(identity: &Identity) -> String {
    match identity {
        Identity::Anonymous | Identity::Visitor => t("home.welcome_visitor"),
        Identity::Admin(_) => t("home.welcome_admin"),
        Identity::Teacher(user) => {
            let name = user.display_name().unwrap_or_default();
            let mut args = BTreeMap::new();
            args.insert("name", name);
            tr("home.welcome_teacher", Some(&args))
        }
    }
}

fn count<T>(state: &QueryState<Vec<T>>) -> String {
    state
        .data()
        .map_or_else(|| "…".to_string(), |items| items.len().to_string())
}

#[derive(Properties, PartialEq, Clone)]
pub struct HomeViewProps {
    pub identity: Identity,
    pub competitions: QueryState<Vec<Competition>>,
    pub schools: QueryState<Vec<School>>,
    pub recent: QueryState<Vec<Game>>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let stats = vec![
        StatItem::new(t("home.competitions_count"), count(&props.competitions)),
        StatItem::new(t("home.schools_count"), count(&props.schools)),
    ];
    let links = [
        (Route::Competitions, "nav.competitions"),
        (Route::Games, "nav.games"),
        (Route::Results, "nav.results"),
        (Route::Classification, "nav.classification"),
    ];
    html! {
        <section class="home-page">
            <PageHeader title={welcome(&props.identity)} subtitle={t("home.subtitle")} />
            <Stat items={stats} class="mb-6" />
            <div class="flex flex-wrap gap-2 mb-6 quick-links">
                { for links.iter().map(|(route, key)| html! {
                    <Link<Route> to={*route} classes="btn btn-outline btn-sm">{ t(key) }</Link<Route>>
                }) }
            </div>
            <h2 class="text-xl font-bold mb-2">{ t("home.recent_games") }</h2>
            { query_html(&props.recent, "home.games_error", props.on_retry.clone(), |games| {
                if games.is_empty() {
                    html! { <EmptyState title={t("home.no_games")} /> }
                } else {
                    html! {
                        <div class="grid gap-4 md:grid-cols-2">
                            { for games.iter().map(|game| html! { <GameCard game={Rc::new(game.clone())} /> }) }
                        </div>
                    }
                }
            }) }
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ctx = use_app_context();
    let competitions = use_query(Some(keys::competitions()), |api| async move {
        api.competitions().await
    });
    let schools = use_query(Some(keys::schools()), |api| async move { api.schools().await });
    let recent = use_query(Some(keys::recent_games(RECENT_GAMES)), |api| async move {
        let query = GameQuery {
            limit: Some(RECENT_GAMES),
            ..GameQuery::default()
        };
        api.games(&query).await
    });
    html! {
        <HomeView
            identity={ctx.session.identity()}
            competitions={competitions.state}
            schools={schools.state}
            recent={recent.state}
            on_retry={Some(recent.reload)}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copa_core::role::Role;
    use copa_core::session::UserProfile;

    #[test]
    fn teacher_welcome_uses_the_name() {
        crate::i18n::set_lang("pt");
        let user = UserProfile {
            username: Some("ana.souza".into()),
            role: Role::Teacher,
            ..UserProfile::visitor()
        };
        assert!(welcome(&Identity::Teacher(user)).contains("ana.souza"));
        assert_ne!(welcome(&Identity::Visitor), welcome(&Identity::Admin(UserProfile::visitor())));
    }
}

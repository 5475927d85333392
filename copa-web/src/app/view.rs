use crate::app::routing::{RouteOutcome, route_outcome};
use crate::components::Navbar;
use crate::components::daisy_ui::Loading;
use crate::i18n::t;
use crate::pages::{
    AdminPage, ClassificationPage, CompetitionsPage, GamesPage, HomePage, LoginPage, MyGamesPage,
    MyTeamsPage, NotFound, ResultsPage, SchoolsPage,
};
use crate::router::Route;
use copa_core::session::SessionState;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    #[prop_or_default]
    pub children: Children,
}

/// Navigation bar, main landmark and footer around a signed-in screen.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <a href="#main" class="sr-only focus:not-sr-only">{ t("a11y.skip_to_content") }</a>
            <Navbar />
            <main id="main" class="container mx-auto flex-1 p-4" tabindex="-1">
                { for props.children.iter() }
            </main>
            <footer class="footer footer-center p-4 text-sm opacity-70">{ t("footer.text") }</footer>
        </div>
    }
}

fn page(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Home => html! { <HomePage /> },
        Route::Competitions => html! { <CompetitionsPage /> },
        Route::Games => html! { <GamesPage /> },
        Route::Results => html! { <ResultsPage /> },
        Route::Classification => html! { <ClassificationPage /> },
        Route::Schools => html! { <SchoolsPage /> },
        Route::MyTeams => html! { <MyTeamsPage /> },
        Route::MyGames => html! { <MyGamesPage /> },
        Route::Admin | Route::AdminSection => html! { <AdminPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Render `route` for the current session, applying its access rule.
pub fn render_route(route: Route, session: &SessionState) -> Html {
    match route_outcome(route, session) {
        RouteOutcome::Wait => html! {
            <div class="min-h-screen flex items-center justify-center">
                <Loading label={t("app.restoring")} />
            </div>
        },
        RouteOutcome::Redirect(target) => {
            log::debug!("redirecting {route:?} to {target:?}");
            html! { <Redirect<Route> to={target} /> }
        }
        RouteOutcome::Render if route == Route::Login => page(route),
        RouteOutcome::Render => html! { <Shell>{ page(route) }</Shell> },
    }
}

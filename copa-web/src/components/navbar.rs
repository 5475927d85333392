use crate::app::state::use_app_context;
use crate::i18n::{locales, t};
use crate::router::{Access, Route};
use copa_core::guard::is_allowed;
use copa_core::session::{AuthSession, Identity};
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ROUTES: &[(Route, &str)] = &[
    (Route::Home, "nav.home"),
    (Route::Competitions, "nav.competitions"),
    (Route::Games, "nav.games"),
    (Route::Results, "nav.results"),
    (Route::Classification, "nav.classification"),
    (Route::Schools, "nav.schools"),
    (Route::MyTeams, "nav.my_teams"),
    (Route::MyGames, "nav.my_games"),
    (Route::Admin, "nav.admin"),
];

/// Menu entries the session may open, in display order.
#[must_use]
pub fn nav_items(session: Option<&AuthSession>) -> Vec<(Route, &'static str)> {
    NAV_ROUTES
        .iter()
        .copied()
        .filter(|(route, _)| match route.access() {
            Access::Roles(required) => is_allowed(session, required),
            Access::Anonymous | Access::Fallback => false,
        })
        .collect()
}

fn identity_label(identity: &Identity) -> String {
    match identity {
        Identity::Anonymous => String::new(),
        Identity::Visitor => t("nav.visitor"),
        Identity::Teacher(user) | Identity::Admin(user) => user
            .display_name()
            .map_or_else(|| t("nav.signed_in"), str::to_string),
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let ctx = use_app_context();
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let session = ctx.session.session.as_ref();

    let on_logout = {
        let api = ctx.api();
        let cache = ctx.cache();
        Callback::from(move |_: MouseEvent| {
            let api = Rc::clone(&api);
            let cache = Rc::clone(&cache);
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                copa_core::auth::logout(&api).await;
                cache.clear();
                if let Some(nav) = navigator {
                    nav.push(&Route::Login);
                }
            });
        })
    };

    let on_lang = {
        let on_lang_change = ctx.on_lang_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_lang_change.emit(select.value());
        })
    };

    html! {
        <nav class="navbar bg-primary text-primary-content" aria-label={t("nav.label")}>
            <div class="flex-1 flex-wrap gap-1">
                <span class="font-bold text-lg px-2">{ t("app.title") }</span>
                { for nav_items(session).into_iter().map(|(route, key)| {
                    let active = current == Some(route);
                    html! {
                        <Link<Route> to={route} classes={classes!("btn", "btn-ghost", "btn-sm", active.then_some("btn-active"))}>
                            { t(key) }
                        </Link<Route>>
                    }
                }) }
            </div>
            <div class="flex-none gap-2">
                <select class="select select-sm text-base-content" aria-label={t("nav.language")} onchange={on_lang}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={ctx.lang.as_str() == meta.code}>{ meta.name }</option>
                    }) }
                </select>
                if session.is_some() {
                    <>
                    <span class="text-sm identity">{ identity_label(&ctx.session.identity()) }</span>
                    <button type="button" class="btn btn-sm" onclick={on_logout}>{ t("nav.logout") }</button>
                    </>
                }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copa_core::role::Role;
    use copa_core::session::UserProfile;

    fn session(role: Role) -> AuthSession {
        AuthSession {
            token: "t".into(),
            user: UserProfile {
                role,
                ..UserProfile::visitor()
            },
        }
    }

    #[test]
    fn menu_follows_the_role() {
        let visitor: Vec<_> = nav_items(Some(&session(Role::Visitor)))
            .into_iter()
            .map(|(r, _)| r)
            .collect();
        assert!(visitor.contains(&Route::Classification));
        assert!(!visitor.contains(&Route::MyTeams));
        assert!(!visitor.contains(&Route::Admin));

        let teacher = nav_items(Some(&session(Role::Teacher)));
        assert!(teacher.iter().any(|(r, _)| *r == Route::MyGames));
        assert!(!teacher.iter().any(|(r, _)| *r == Route::Admin));

        let admin = nav_items(Some(&session(Role::Admin)));
        assert!(admin.iter().any(|(r, _)| *r == Route::Admin));
        assert!(!admin.iter().any(|(r, _)| *r == Route::MyTeams));
    }

    #[test]
    fn signed_out_has_no_menu() {
        assert!(nav_items(None).is_empty());
    }
}

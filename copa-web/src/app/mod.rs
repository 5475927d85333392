#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use state::{AppContext, use_app_context};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod routing;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |()| state::Services::browser());
    let session = state::use_session_snapshot(&services.session);
    let lang = use_state(crate::i18n::current_lang);
    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| {
            crate::i18n::set_lang(&code);
            lang.set(crate::i18n::current_lang());
        })
    };
    let context = AppContext {
        services: (*services).clone(),
        session: (*session).clone(),
        lang: AttrValue::from((*lang).clone()),
        on_lang_change,
    };
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <ContextProvider<AppContext> {context}>
            <BrowserRouter basename={router_base}>
                <AppInner />
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let ctx = use_app_context();
    let navigator = use_navigator();
    {
        let services = ctx.services.clone();
        use_effect_with((), move |()| {
            bootstrap::install_unauthorized_handler(&services, move || {
                if let Some(nav) = &navigator {
                    nav.push(&bootstrap::FORCED_LOGOUT_ROUTE);
                }
            });
            || ()
        });
    }
    bootstrap::use_bootstrap(&ctx.services);

    let session = ctx.session.clone();
    html! {
        <Switch<Route> render={move |route| view::render_route(route, &session)} />
    }
}

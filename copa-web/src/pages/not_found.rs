use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shown for a moment before unknown paths are sent home.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="hero min-h-[40vh] not-found" aria-live="assertive">
            <div class="hero-content text-center flex-col">
                <h1 class="text-3xl font-bold">{ crate::i18n::t("not_found.title") }</h1>
                <p>{ crate::i18n::t("not_found.message") }</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    { crate::i18n::t("not_found.back") }
                </Link<Route>>
            </div>
        </section>
    }
}

use crate::app::state::Services;
use crate::router::Route;
use copa_core::session::RestoreOutcome;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Read the persisted session, then confirm a restored account with the
/// server. Anything but a 401 keeps the restored session.
pub async fn bootstrap_session(services: Services) -> RestoreOutcome {
    let outcome = services.session.restore();
    if matches!(outcome, RestoreOutcome::Restored(_)) {
        if let Err(err) = copa_core::auth::refresh_profile(&services.api).await {
            log::warn!("profile refresh failed: {err}");
        }
    }
    outcome
}

/// Neutral landing after a forced logout; the guard takes it from there.
pub const FORCED_LOGOUT_ROUTE: Route = Route::Home;

/// Forced-logout consequence: drop cached data and go to the landing route.
pub fn install_unauthorized_handler(services: &Services, redirect: impl Fn() + 'static) {
    let cache = std::rc::Rc::clone(&services.cache);
    services.api.set_unauthorized_handler(move || {
        cache.clear();
        redirect();
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(services: &Services) {
    let services = services.clone();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = bootstrap_session(services).await;
            log::debug!("bootstrap finished: {outcome:?}");
        });
        || {}
    });
}

use copa_core::api::ApiClient;
use copa_core::config::ClientConfig;
use copa_core::query::QueryCache;
use copa_core::session::{SessionState, SessionStore};
use copa_core::storage::KeyValueStorage;
use copa_core::transport::Transport;
use std::rc::Rc;
use yew::prelude::*;

pub type DynTransport = Rc<dyn Transport>;
pub type DynStorage = Rc<dyn KeyValueStorage>;
pub type Api = ApiClient<DynTransport, DynStorage>;
pub type Session = SessionStore<DynStorage>;

/// Long-lived client objects, created once per page load.
#[derive(Clone)]
pub struct Services {
    pub session: Rc<Session>,
    pub api: Rc<Api>,
    pub cache: Rc<QueryCache>,
}

impl Services {
    #[must_use]
    pub fn new(transport: DynTransport, storage: DynStorage, config: &ClientConfig) -> Self {
        let session = Rc::new(SessionStore::new(storage));
        let api = Rc::new(ApiClient::new(transport, Rc::clone(&session), config));
        Self {
            session,
            api,
            cache: Rc::new(QueryCache::new(config)),
        }
    }

    /// Services talking to the real API through `fetch` and `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        let config = ClientConfig::default().with_api_base(crate::paths::api_base());
        Self::new(
            Rc::new(crate::transport::FetchTransport),
            Rc::new(crate::storage::WebStorage),
            &config,
        )
    }
}

/// What every screen can reach through the context.
#[derive(Clone)]
pub struct AppContext {
    pub services: Services,
    /// Snapshot of the session store, refreshed on every transition.
    pub session: SessionState,
    /// Active locale; changing it re-renders every consumer.
    pub lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

impl AppContext {
    #[must_use]
    pub fn api(&self) -> Rc<Api> {
        Rc::clone(&self.services.api)
    }

    #[must_use]
    pub fn cache(&self) -> Rc<QueryCache> {
        Rc::clone(&self.services.cache)
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.services.session, &other.services.session)
            && self.session == other.session
            && self.lang == other.lang
    }
}

/// Mirror the session store into component state.
#[hook]
pub fn use_session_snapshot(session: &Rc<Session>) -> UseStateHandle<SessionState> {
    let snapshot = {
        let session = Rc::clone(session);
        use_state(move || session.snapshot())
    };
    {
        let snapshot = snapshot.clone();
        let session = Rc::clone(session);
        use_effect_with((), move |()| {
            let id = session.subscribe(move |state| snapshot.set(state.clone()));
            move || session.unsubscribe(id)
        });
    }
    snapshot
}

/// Access the application context.
///
/// Falls back to a detached context only when no provider is mounted, so
/// components stay renderable in isolation.
#[hook]
pub fn use_app_context() -> AppContext {
    let ctx = use_context::<AppContext>();
    let detached = use_memo((), |()| {
        let services = Services::new(
            Rc::new(crate::transport::FetchTransport),
            Rc::new(copa_core::storage::MemoryStorage::new()),
            &ClientConfig::default(),
        );
        let session = services.session.snapshot();
        AppContext {
            services,
            session,
            lang: crate::i18n::current_lang().into(),
            on_lang_change: Callback::from(|lang: String| crate::i18n::set_lang(&lang)),
        }
    });
    ctx.unwrap_or_else(|| (*detached).clone())
}

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use copa_core::guard::{GuardDecision, decide};
use copa_core::{
    ApiClient, ApiError, ClientConfig, Credentials, Identity, KeyValueStorage, LoginKind,
    MemoryStorage, QueryCache, Role, SessionStore, Transport, TransportError, login, logout,
};
use copa_core::session::{TOKEN_KEY, USER_KEY};
use copa_core::transport::{HttpRequest, HttpResponse};
use futures::executor::block_on;

#[derive(Clone, Default)]
struct FakeServer {
    replies: Rc<RefCell<VecDeque<(u16, String)>>>,
    log: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeServer {
    fn queue(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back((status, body.to_string()));
    }
}

#[async_trait(?Send)]
impl Transport for FakeServer {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.log.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .map(|(status, body)| HttpResponse { status, body })
            .ok_or_else(|| TransportError::Network("connection refused".into()))
    }
}

fn assert_identity_matches_token(store: &SessionStore<MemoryStorage>) {
    let state = store.snapshot();
    assert_eq!(state.identity() == Identity::Anonymous, state.token().is_none());
}

#[test]
fn admin_session_survives_reload_until_the_server_rejects_it() {
    let storage = MemoryStorage::new();
    let server = FakeServer::default();
    let session = Rc::new(SessionStore::new(storage.clone()));
    session.restore();
    let api = ApiClient::new(server.clone(), Rc::clone(&session), &ClientConfig::default());

    server.queue(
        200,
        r#"{"token":"adm-1","usuario":{"id":1,"username":"root","nome":"Coordenação","role":"ADM"}}"#,
    );
    let creds = Credentials::new("root", "secret");
    block_on(login(&api, LoginKind::Admin, Some(&creds))).unwrap();
    assert_identity_matches_token(&session);
    assert_eq!(decide(&session.snapshot(), &[Role::Admin]), GuardDecision::Render);

    // Reload: a new store over the same storage picks the session back up.
    let reloaded = Rc::new(SessionStore::new(storage.clone()));
    assert_eq!(decide(&reloaded.snapshot(), &[Role::Admin]), GuardDecision::Wait);
    reloaded.restore();
    assert!(reloaded.is_admin());
    let api = ApiClient::new(server.clone(), Rc::clone(&reloaded), &ClientConfig::default());

    let redirects = Rc::new(Cell::new(0));
    let counter = Rc::clone(&redirects);
    api.set_unauthorized_handler(move || counter.set(counter.get() + 1));
    server.queue(401, r#"{"erro":"Token inválido"}"#);
    let err = block_on(api.admin_appeals()).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(redirects.get(), 1);
    assert_identity_matches_token(&reloaded);
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
    assert_eq!(
        decide(&reloaded.snapshot(), &[Role::Admin]),
        GuardDecision::RedirectLogin
    );
}

#[test]
fn teacher_flow_reads_lists_through_the_cache_and_logs_out() {
    let storage = MemoryStorage::new();
    let server = FakeServer::default();
    let session = Rc::new(SessionStore::new(storage.clone()));
    session.restore();
    let api = Rc::new(ApiClient::new(
        server.clone(),
        Rc::clone(&session),
        &ClientConfig::default(),
    ));
    let cache = QueryCache::new(&ClientConfig::default());

    server.queue(
        200,
        r#"{"token":"prof-1","usuario":{"id":9,"username":"ana","role":"PROFESSOR"}}"#,
    );
    block_on(login(&api, LoginKind::Teacher, Some(&Credentials::new("ana", "pw")))).unwrap();
    assert_eq!(
        decide(&session.snapshot(), &[Role::Admin]),
        GuardDecision::RedirectHome
    );

    server.queue(200, r#"[{"id":3,"nome":"Leões","atletas":[{"numeroCamisa":10}]}]"#);
    for _ in 0..2 {
        let fetch_api = Rc::clone(&api);
        let teams = block_on(cache.fetch(copa_core::query::keys::my_teams(), move || {
            let api = Rc::clone(&fetch_api);
            async move { api.my_teams().await }
        }))
        .unwrap();
        assert_eq!(teams[0].athletes[0].shirt_number, 10);
    }

    server.queue(200, "{}");
    block_on(logout(&api));
    assert!(storage.is_empty());
    assert_identity_matches_token(&session);

    let sent = server.log.borrow();
    let paths: Vec<_> = sent.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(paths, ["/api/auth/login", "/api/meus-times", "/api/auth/logout"]);
    assert_eq!(sent[1].authorization().as_deref(), Some("Bearer prof-1"));
    assert_eq!(sent[2].authorization().as_deref(), Some("Bearer prof-1"));
}

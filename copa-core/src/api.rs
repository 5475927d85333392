//! Gateway to the league API.
//!
//! Every call carries the current bearer token when there is one. A 401 on an
//! authenticated call clears the session and fires the unauthorized handler
//! once for that call; all other failures are handed back to the caller.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{
    Appeal, AppealDecision, Competition, CompetitionDetail, CompetitionDraft, Game, GameDetail,
    GameDraft, GameStatus, GeneratedGames, OwnedTeam, PasswordReset, School, SchoolDraft,
    StandingRow, TeacherAccount, TeacherDraft, TeamDraft,
};
use crate::session::{SessionStore, UserProfile};
use crate::storage::KeyValueStorage;
use crate::transport::{HttpRequest, Method, Transport};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Body of a successful `/auth/login` or `/auth/visitante` call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: UserProfile,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    tipo: &'a str,
}

#[derive(Serialize)]
struct ParticipationRequest<'a> {
    numeros: &'a [u32],
}

#[derive(Serialize)]
struct AppealRequest<'a> {
    motivo: &'a str,
}

#[derive(Serialize)]
struct GenerateGamesRequest {
    #[serde(rename = "competicaoId")]
    competition_id: i64,
}

#[derive(Deserialize)]
struct ErrorBody {
    erro: Option<String>,
}

/// Optional filters of `GET /jogos`; unset fields are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameQuery {
    pub competition_id: Option<i64>,
    pub school_id: Option<i64>,
    pub round: Option<u32>,
    pub status: Option<GameStatus>,
    pub limit: Option<u32>,
}

impl GameQuery {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.competition_id {
            pairs.push(("competicaoId", id.to_string()));
        }
        if let Some(id) = self.school_id {
            pairs.push(("escolaId", id.to_string()));
        }
        if let Some(round) = self.round {
            pairs.push(("rodada", round.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_wire().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

type UnauthorizedHandler = Rc<dyn Fn()>;

pub struct ApiClient<T, S> {
    transport: T,
    session: Rc<SessionStore<S>>,
    base: String,
    on_unauthorized: RefCell<Option<UnauthorizedHandler>>,
}

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub fn new(transport: T, session: Rc<SessionStore<S>>, config: &ClientConfig) -> Self {
        Self {
            transport,
            session,
            base: config.api_base.trim_end_matches('/').to_string(),
            on_unauthorized: RefCell::new(None),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Rc<SessionStore<S>> {
        &self.session
    }

    /// Callback run after a forced logout, typically a redirect to the landing route.
    pub fn set_unauthorized_handler(&self, handler: impl Fn() + 'static) {
        self.on_unauthorized.replace(Some(Rc::new(handler)));
    }

    #[must_use]
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{path}", self.base);
        if !query.is_empty() {
            let mut serializer = url::form_urlencoded::Serializer::new(String::new());
            for (key, value) in query {
                serializer.append_pair(key, value);
            }
            url.push('?');
            url.push_str(&serializer.finish());
        }
        url
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let bearer = self.session.token();
        let authenticated = bearer.is_some();
        let request = HttpRequest {
            method,
            url: self.url(path, query),
            bearer,
            body,
        };
        let response = self.transport.send(request).await.map_err(|err| {
            log::warn!("{} {path} failed: {err}", method.as_str());
            ApiError::from(err)
        })?;

        if response.status == 401 && authenticated {
            log::warn!("{} {path} rejected the session; signing out", method.as_str());
            self.session.clear();
            let handler = self.on_unauthorized.borrow().clone();
            if let Some(handler) = handler {
                handler();
            }
            return Err(ApiError::Unauthorized);
        }
        // Anonymous 401s (bad credentials) stay ordinary failures with the server's message.
        if !response.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|b| b.erro);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }
        Ok(response.body)
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let body = self.execute(Method::Get, path, query, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_string(payload)?;
        let text = self.execute(method, path, &[], Some(body)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn send_discarding<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<(), ApiError> {
        let body = payload.map(serde_json::to_string).transpose()?;
        self.execute(method, path, &[], body).await.map(|_| ())
    }

    // Auth

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure; the caller maps it to an `AuthError`.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        tipo: &str,
    ) -> Result<LoginResponse, ApiError> {
        let payload = LoginRequest {
            username,
            password,
            tipo,
        };
        self.send(Method::Post, "/auth/login", &payload).await
    }

    /// `POST /auth/visitante`, no body.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn visitor_login(&self) -> Result<LoginResponse, ApiError> {
        let text = self
            .execute(Method::Post, "/auth/visitante", &[], None)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_discarding::<()>(Method::Post, "/auth/logout", None)
            .await
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get("/auth/me", &[]).await
    }

    // Public surface

    /// `GET /competicoes`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn competitions(&self) -> Result<Vec<Competition>, ApiError> {
        self.get("/competicoes", &[]).await
    }

    /// `GET /competicoes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn competition(&self, id: i64) -> Result<CompetitionDetail, ApiError> {
        self.get(&format!("/competicoes/{id}"), &[]).await
    }

    /// `GET /jogos` with optional filters.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn games(&self, query: &GameQuery) -> Result<Vec<Game>, ApiError> {
        self.get("/jogos", &query.pairs()).await
    }

    /// `GET /jogos/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn game(&self, id: i64) -> Result<GameDetail, ApiError> {
        self.get(&format!("/jogos/{id}"), &[]).await
    }

    /// `GET /classificacao?competicaoId=`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn classification(&self, competition_id: i64) -> Result<Vec<StandingRow>, ApiError> {
        self.get(
            "/classificacao",
            &[("competicaoId", competition_id.to_string())],
        )
        .await
    }

    /// `GET /escolas`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn schools(&self) -> Result<Vec<School>, ApiError> {
        self.get("/escolas", &[]).await
    }

    // Teacher surface

    /// `GET /meus-times`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn my_teams(&self) -> Result<Vec<OwnedTeam>, ApiError> {
        self.get("/meus-times", &[]).await
    }

    /// `POST /times`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn create_team(&self, draft: &TeamDraft) -> Result<OwnedTeam, ApiError> {
        self.send(Method::Post, "/times", draft).await
    }

    /// `PATCH /times/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn update_team(&self, id: i64, draft: &TeamDraft) -> Result<OwnedTeam, ApiError> {
        self.send(Method::Patch, &format!("/times/{id}"), draft)
            .await
    }

    /// `GET /meus-jogos`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn my_games(&self) -> Result<Vec<Game>, ApiError> {
        self.get("/meus-jogos", &[]).await
    }

    /// `POST /jogos/{id}/participacao` with the shirt numbers that played.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn record_participation(&self, game_id: i64, numbers: &[u32]) -> Result<(), ApiError> {
        let payload = ParticipationRequest { numeros: numbers };
        self.send_discarding(
            Method::Post,
            &format!("/jogos/{game_id}/participacao"),
            Some(&payload),
        )
        .await
    }

    /// `POST /jogos/{id}/recursos`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn file_appeal(&self, game_id: i64, reason: &str) -> Result<(), ApiError> {
        let payload = AppealRequest { motivo: reason };
        self.send_discarding(
            Method::Post,
            &format!("/jogos/{game_id}/recursos"),
            Some(&payload),
        )
        .await
    }

    // Admin surface

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_create_competition(
        &self,
        draft: &CompetitionDraft,
    ) -> Result<Competition, ApiError> {
        self.send(Method::Post, "/admin/competicoes", draft).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_update_competition(
        &self,
        id: i64,
        draft: &CompetitionDraft,
    ) -> Result<Competition, ApiError> {
        self.send(Method::Patch, &format!("/admin/competicoes/{id}"), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_delete_competition(&self, id: i64) -> Result<(), ApiError> {
        self.send_discarding::<()>(Method::Delete, &format!("/admin/competicoes/{id}"), None)
            .await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_create_school(&self, draft: &SchoolDraft) -> Result<School, ApiError> {
        self.send(Method::Post, "/admin/escolas", draft).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_update_school(
        &self,
        id: i64,
        draft: &SchoolDraft,
    ) -> Result<School, ApiError> {
        self.send(Method::Patch, &format!("/admin/escolas/{id}"), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_delete_school(&self, id: i64) -> Result<(), ApiError> {
        self.send_discarding::<()>(Method::Delete, &format!("/admin/escolas/{id}"), None)
            .await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_teachers(&self) -> Result<Vec<TeacherAccount>, ApiError> {
        self.get("/admin/professores", &[]).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_create_teacher(
        &self,
        draft: &TeacherDraft,
    ) -> Result<TeacherAccount, ApiError> {
        self.send(Method::Post, "/admin/professores", draft).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_update_teacher(
        &self,
        id: i64,
        draft: &TeacherDraft,
    ) -> Result<TeacherAccount, ApiError> {
        self.send(Method::Patch, &format!("/admin/professores/{id}"), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_delete_teacher(&self, id: i64) -> Result<(), ApiError> {
        self.send_discarding::<()>(Method::Delete, &format!("/admin/professores/{id}"), None)
            .await
    }

    /// `POST /admin/professores/{id}/reset-password`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_reset_teacher_password(&self, id: i64) -> Result<PasswordReset, ApiError> {
        let text = self
            .execute(
                Method::Post,
                &format!("/admin/professores/{id}/reset-password"),
                &[],
                None,
            )
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_teams(&self) -> Result<Vec<OwnedTeam>, ApiError> {
        self.get("/admin/times", &[]).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_create_team(&self, draft: &TeamDraft) -> Result<OwnedTeam, ApiError> {
        self.send(Method::Post, "/admin/times", draft).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_update_team(
        &self,
        id: i64,
        draft: &TeamDraft,
    ) -> Result<OwnedTeam, ApiError> {
        self.send(Method::Patch, &format!("/admin/times/{id}"), draft)
            .await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_delete_team(&self, id: i64) -> Result<(), ApiError> {
        self.send_discarding::<()>(Method::Delete, &format!("/admin/times/{id}"), None)
            .await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_games(&self) -> Result<Vec<Game>, ApiError> {
        self.get("/admin/jogos", &[]).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_create_game(&self, draft: &GameDraft) -> Result<Game, ApiError> {
        self.send(Method::Post, "/admin/jogos", draft).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_update_game(&self, id: i64, draft: &GameDraft) -> Result<Game, ApiError> {
        self.send(Method::Patch, &format!("/admin/jogos/{id}"), draft)
            .await
    }

    /// Bulk-create the fixtures of a competition: `POST /admin/jogos/gerar`.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_generate_games(
        &self,
        competition_id: i64,
    ) -> Result<GeneratedGames, ApiError> {
        let payload = GenerateGamesRequest { competition_id };
        self.send(Method::Post, "/admin/jogos/gerar", &payload)
            .await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_appeals(&self) -> Result<Vec<Appeal>, ApiError> {
        self.get("/admin/recursos", &[]).await
    }

    /// # Errors
    ///
    /// Returns the gateway failure.
    pub async fn admin_decide_appeal(
        &self,
        id: i64,
        decision: &AppealDecision,
    ) -> Result<Appeal, ApiError> {
        self.send(Method::Patch, &format!("/admin/recursos/{id}"), decision)
            .await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::error::TransportError;
    use crate::transport::{HttpRequest, HttpResponse, Transport};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Replays queued responses and records every request it was handed.
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        pub responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
        pub requests: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl ScriptedTransport {
        pub fn reply(&self, status: u16, body: &str) -> &Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(&self, reason: &str) -> &Self {
            self.responses
                .borrow_mut()
                .push_back(Err(TransportError::Network(reason.to_string())));
            self
        }

        pub fn sent(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;
    use crate::role::Role;
    use crate::session::AuthSession;
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn client() -> (
        ApiClient<ScriptedTransport, MemoryStorage>,
        ScriptedTransport,
        MemoryStorage,
    ) {
        let transport = ScriptedTransport::default();
        let storage = MemoryStorage::new();
        let session = Rc::new(SessionStore::new(storage.clone()));
        let api = ApiClient::new(transport.clone(), session, &ClientConfig::default());
        (api, transport, storage)
    }

    fn sign_in(api: &ApiClient<ScriptedTransport, MemoryStorage>) {
        api.session()
            .establish(AuthSession {
                token: "secret".into(),
                user: UserProfile {
                    role: Role::Teacher,
                    ..UserProfile::visitor()
                },
            })
            .unwrap();
    }

    #[test]
    fn attaches_bearer_token_when_signed_in() {
        let (api, transport, _) = client();
        transport.reply(200, "[]").reply(200, "[]");
        block_on(api.schools()).unwrap();
        sign_in(&api);
        block_on(api.schools()).unwrap();
        let sent = transport.sent();
        assert_eq!(sent[0].bearer, None);
        assert_eq!(sent[1].authorization().as_deref(), Some("Bearer secret"));
        assert_eq!(sent[1].url, "/api/escolas");
    }

    #[test]
    fn game_query_encodes_only_set_filters() {
        let (api, transport, _) = client();
        transport.reply(200, "[]");
        let query = GameQuery {
            competition_id: Some(2),
            status: Some(GameStatus::InProgress),
            ..GameQuery::default()
        };
        block_on(api.games(&query)).unwrap();
        assert_eq!(
            transport.sent()[0].url,
            "/api/jogos?competicaoId=2&status=Em+andamento"
        );
    }

    #[test]
    fn unauthorized_clears_session_and_fires_handler_once() {
        let (api, transport, storage) = client();
        sign_in(&api);
        let redirects = Rc::new(Cell::new(0));
        let counter = Rc::clone(&redirects);
        api.set_unauthorized_handler(move || counter.set(counter.get() + 1));
        transport.reply(401, r#"{"erro":"Token expirado"}"#);

        let err = block_on(api.my_teams()).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(redirects.get(), 1);
        assert_eq!(transport.sent().len(), 1);
        assert!(storage.is_empty());
        assert_eq!(api.session().session(), None);
    }

    #[test]
    fn anonymous_401_does_not_trigger_forced_logout() {
        let (api, transport, _) = client();
        let redirects = Rc::new(Cell::new(0));
        let counter = Rc::clone(&redirects);
        api.set_unauthorized_handler(move || counter.set(counter.get() + 1));
        transport.reply(401, r#"{"erro":"Credenciais inválidas"}"#);
        let err = block_on(api.login("ana", "x", "professor")).unwrap_err();
        assert!(!err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Credenciais inválidas"));
        assert_eq!(redirects.get(), 0);
    }

    #[test]
    fn other_statuses_keep_the_session_and_carry_server_message() {
        let (api, transport, _) = client();
        sign_in(&api);
        transport.reply(500, r#"{"erro":"Erro interno do servidor"}"#);
        let err = block_on(api.competitions()).unwrap_err();
        assert_eq!(err.server_message(), Some("Erro interno do servidor"));
        assert!(api.session().session().is_some());
    }

    #[test]
    fn login_posts_tipo_and_decodes_profile() {
        let (api, transport, _) = client();
        transport.reply(
            200,
            r#"{"token":"abc","usuario":{"id":1,"username":"adm","role":"ADM"}}"#,
        );
        let resp = block_on(api.login("adm", "pw", "admin")).unwrap();
        assert_eq!(resp.user.role, Role::Admin);
        let sent = transport.sent();
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["tipo"], "admin");
        assert_eq!(sent[0].url, "/api/auth/login");
    }

    #[test]
    fn participation_and_generation_payloads_use_wire_names() {
        let (api, transport, _) = client();
        sign_in(&api);
        transport.reply(201, "{}").reply(200, r#"{"jogos":[]}"#);
        block_on(api.record_participation(9, &[4, 10])).unwrap();
        let generated = block_on(api.admin_generate_games(3)).unwrap();
        assert!(generated.games.is_empty());
        let sent = transport.sent();
        assert_eq!(sent[0].url, "/api/jogos/9/participacao");
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"numeros":[4,10]}"#));
        assert_eq!(sent[1].body.as_deref(), Some(r#"{"competicaoId":3}"#));
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let (api, transport, _) = client();
        transport.reply(200, "<html>");
        assert!(matches!(
            block_on(api.schools()),
            Err(ApiError::Decode(_))
        ));
    }
}

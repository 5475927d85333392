//! Sign-in and sign-out flows on top of the gateway and the session store.

use crate::api::ApiClient;
use crate::error::{ApiError, AuthError};
use crate::role::{LoginKind, Role};
use crate::session::AuthSession;
use crate::storage::KeyValueStorage;
use crate::transport::Transport;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

/// Authenticate and adopt the returned session.
///
/// Visitors need no credentials; teachers and admins must supply both fields.
///
/// # Errors
///
/// [`AuthError::MissingCredentials`] before any request when a field is empty,
/// otherwise [`AuthError::Rejected`] carrying the server message or the
/// generic fallback.
pub async fn login<T: Transport, S: KeyValueStorage>(
    api: &ApiClient<T, S>,
    kind: LoginKind,
    credentials: Option<&Credentials>,
) -> Result<AuthSession, AuthError> {
    let response = match kind.tipo() {
        None => api.visitor_login().await,
        Some(tipo) => {
            let creds = credentials
                .filter(|c| c.is_complete())
                .ok_or(AuthError::MissingCredentials)?;
            api.login(creds.username.trim(), &creds.password, tipo)
                .await
        }
    }
    .map_err(|err| {
        log::warn!("login as {kind:?} failed: {err}");
        AuthError::from_api(&err)
    })?;

    let session = AuthSession {
        token: response.token,
        user: response.user,
    };
    if let Err(err) = api.session().establish(session.clone()) {
        log::warn!("session will not survive a reload: {err}");
    }
    log::info!("signed in as {}", session.role());
    Ok(session)
}

/// End the session. The server is told when a token exists, but the local
/// session is cleared no matter how that call ends.
pub async fn logout<T: Transport, S: KeyValueStorage>(api: &ApiClient<T, S>) {
    if api.session().token().is_some() {
        if let Err(err) = api.logout().await {
            log::warn!("server logout failed: {err}");
        }
    }
    api.session().clear();
}

/// Re-read the signed-in profile from `GET /auth/me` after a reload.
///
/// Visitors are skipped; their tokens carry no profile. A rejected token ends
/// the session through the gateway's forced-logout path.
///
/// # Errors
///
/// Returns the gateway failure; the restored session is kept for anything
/// other than a 401. A profile that arrives after the session ended or was
/// replaced is discarded.
pub async fn refresh_profile<T: Transport, S: KeyValueStorage>(
    api: &ApiClient<T, S>,
) -> Result<(), ApiError> {
    let Some(session) = api.session().session() else {
        return Ok(());
    };
    if session.role() == Role::Visitor {
        return Ok(());
    }
    let user = api.current_user().await?;
    if api.session().token().as_deref() != Some(session.token.as_str()) {
        log::debug!("session changed while the profile was loading; dropping it");
        return Ok(());
    }
    if user.role != session.role() {
        log::warn!("role changed from {} to {}", session.role(), user.role);
    }
    if let Err(err) = api.session().establish(AuthSession {
        token: session.token,
        user,
    }) {
        log::warn!("refreshed profile not persisted: {err}");
    }
    Ok(())
}

/// First screen shown after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Home,
    MyTeams,
    AdminDashboard,
}

#[must_use]
pub const fn landing_for(role: Role) -> Landing {
    match role {
        Role::Admin => Landing::AdminDashboard,
        Role::Teacher => Landing::MyTeams,
        Role::Visitor => Landing::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::config::ClientConfig;
    use crate::error::LOGIN_FALLBACK_MESSAGE;
    use crate::session::{SessionStore, TOKEN_KEY};
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;
    use std::rc::Rc;

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

    #[test]
    fn teacher_login_persists_session() {
        let (api, transport, storage) = client();
        transport.reply(
            200,
            r#"{"token":"t1","usuario":{"id":4,"username":"ana","role":"PROFESSOR"}}"#,
        );
        let creds = Credentials::new(" ana ", "pw");
        let session = block_on(login(&api, LoginKind::Teacher, Some(&creds))).unwrap();
        assert_eq!(session.role(), Role::Teacher);
        assert!(api.session().is_teacher());
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("t1"));
        let body = transport.sent()[0].body.clone().unwrap();
        assert!(body.contains(r#""username":"ana""#));
    }

    #[test]
    fn missing_credentials_never_reach_the_server() {
        let (api, transport, _) = client();
        let empty = Credentials::new("", "pw");
        assert_eq!(
            block_on(login(&api, LoginKind::Admin, Some(&empty))),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            block_on(login(&api, LoginKind::Teacher, None)),
            Err(AuthError::MissingCredentials)
        );
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn rejection_surfaces_server_message_or_fallback() {
        let (api, transport, _) = client();
        transport
            .reply(401, r#"{"erro":"Credenciais inválidas"}"#)
            .fail("offline");
        let creds = Credentials::new("ana", "bad");
        assert_eq!(
            block_on(login(&api, LoginKind::Teacher, Some(&creds))),
            Err(AuthError::Rejected("Credenciais inválidas".into()))
        );
        assert_eq!(
            block_on(login(&api, LoginKind::Teacher, Some(&creds))),
            Err(AuthError::Rejected(LOGIN_FALLBACK_MESSAGE.into()))
        );
        assert_eq!(api.session().session(), None);
    }

    #[test]
    fn visitor_login_sends_no_credentials() {
        let (api, transport, _) = client();
        transport.reply(200, r#"{"token":"v","usuario":{"role":"VISITANTE"}}"#);
        let session = block_on(login(&api, LoginKind::Visitor, None)).unwrap();
        assert_eq!(session.role(), Role::Visitor);
        let sent = transport.sent();
        assert_eq!(sent[0].url, "/api/auth/visitante");
        assert_eq!(sent[0].body, None);
    }

    #[test]
    fn logout_clears_even_when_server_fails() {
        let (api, transport, storage) = client();
        transport
            .reply(200, r#"{"token":"t","usuario":{"role":"ADM"}}"#)
            .fail("offline");
        let creds = Credentials::new("root", "pw");
        block_on(login(&api, LoginKind::Admin, Some(&creds))).unwrap();
        block_on(logout(&api));
        assert_eq!(api.session().session(), None);
        assert!(storage.is_empty());
        assert_eq!(transport.sent().len(), 2);
    }

    #[test]
    fn logout_without_session_skips_the_server() {
        let (api, transport, _) = client();
        block_on(logout(&api));
        assert!(transport.sent().is_empty());
        assert!(!api.session().is_loading());
    }

    #[test]
    fn refresh_profile_updates_stored_user_and_skips_visitors() {
        let (api, transport, storage) = client();
        transport
            .reply(200, r#"{"token":"t","usuario":{"username":"ana","role":"PROFESSOR"}}"#)
            .reply(200, r#"{"username":"ana","nome":"Ana Lima","role":"PROFESSOR"}"#);
        let creds = Credentials::new("ana", "pw");
        block_on(login(&api, LoginKind::Teacher, Some(&creds))).unwrap();
        block_on(refresh_profile(&api)).unwrap();
        let session = api.session().session().unwrap();
        assert_eq!(session.user.display_name(), Some("Ana Lima"));
        assert_eq!(session.token, "t");
        assert!(storage.get(crate::session::USER_KEY).unwrap().unwrap().contains("Ana Lima"));
        assert_eq!(transport.sent()[1].url, "/api/auth/me");

        let (api, transport, _) = client();
        transport.reply(200, r#"{"token":"v","usuario":{"role":"VISITANTE"}}"#);
        block_on(login(&api, LoginKind::Visitor, None)).unwrap();
        block_on(refresh_profile(&api)).unwrap();
        assert_eq!(transport.sent().len(), 1);
    }

    /// Answers `/auth/me` only after a few polls; everything else at once.
    #[derive(Clone, Default)]
    struct SlowProfile(ScriptedTransport);

    struct YieldTimes(u8);

    impl std::future::Future for YieldTimes {
        type Output = ();

        fn poll(
            mut self: std::pin::Pin<&mut Self>,
            cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<()> {
            if self.0 == 0 {
                return std::task::Poll::Ready(());
            }
            self.0 -= 1;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for SlowProfile {
        async fn send(
            &self,
            request: crate::transport::HttpRequest,
        ) -> Result<crate::transport::HttpResponse, crate::error::TransportError> {
            if request.url.ends_with("/auth/me") {
                YieldTimes(5).await;
                return Ok(crate::transport::HttpResponse {
                    status: 200,
                    body: r#"{"username":"ana","role":"PROFESSOR"}"#.into(),
                });
            }
            self.0.send(request).await
        }
    }

    #[test]
    fn logout_during_profile_refresh_stays_logged_out() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage
            .set(crate::session::USER_KEY, r#"{"username":"ana","role":"PROFESSOR"}"#)
            .unwrap();
        let transport = SlowProfile::default();
        transport.0.reply(200, "{}");
        let session = Rc::new(SessionStore::new(storage.clone()));
        session.restore();
        let api = ApiClient::new(transport, session, &ClientConfig::default());

        let (refreshed, ()) =
            block_on(async { futures::join!(refresh_profile(&api), logout(&api)) });
        assert!(refreshed.is_ok());
        assert_eq!(api.session().session(), None);
        assert_eq!(api.session().token(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn landing_depends_on_role() {
        assert_eq!(landing_for(Role::Admin), Landing::AdminDashboard);
        assert_eq!(landing_for(Role::Teacher), Landing::MyTeams);
        assert_eq!(landing_for(Role::Visitor), Landing::Home);
    }
}

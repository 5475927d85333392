//! Session store: who is signed in, persisted across reloads.
//!
//! The token and the serialized profile live under two storage keys that are
//! always written together and cleared together. In memory the pair is a
//! single `Option<AuthSession>`, so "no identity" and "no token" cannot
//! disagree.

use crate::error::StorageError;
use crate::role::Role;
use crate::storage::KeyValueStorage;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Profile returned by the API as `usuario`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

impl UserProfile {
    #[must_use]
    pub fn visitor() -> Self {
        Self {
            id: None,
            username: None,
            name: None,
            email: None,
            role: Role::Visitor,
        }
    }

    /// Name if known, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.username.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// Who the current user is, derived from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Visitor,
    Teacher(UserProfile),
    Admin(UserProfile),
}

impl AuthSession {
    #[must_use]
    pub fn identity(&self) -> Identity {
        match self.user.role {
            Role::Visitor => Identity::Visitor,
            Role::Teacher => Identity::Teacher(self.user.clone()),
            Role::Admin => Identity::Admin(self.user.clone()),
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub loading: bool,
    pub session: Option<AuthSession>,
}

impl SessionState {
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.session
            .as_ref()
            .map_or(Identity::Anonymous, AuthSession::identity)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.session.as_ref().is_some_and(|s| s.user.role == role)
    }

    #[must_use]
    pub fn is_visitor(&self) -> bool {
        self.has_role(Role::Visitor)
    }

    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.has_role(Role::Teacher)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// What happened when the store looked at persisted data on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored(Role),
    Absent,
    /// Stored data was unusable and has been removed.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&SessionState)>;

pub struct SessionStore<S> {
    storage: S,
    state: RefCell<SessionState>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// A store that has not looked at storage yet: `loading` is true.
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            state: RefCell::new(SessionState {
                loading: true,
                session: None,
            }),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn session(&self) -> Option<AuthSession> {
        self.state.borrow().session.clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_string)
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.state.borrow().has_role(role)
    }

    #[must_use]
    pub fn is_visitor(&self) -> bool {
        self.has_role(Role::Visitor)
    }

    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.has_role(Role::Teacher)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Load the persisted session, ending the loading phase whatever happens.
    pub fn restore(&self) -> RestoreOutcome {
        let (session, outcome) = self.read_persisted();
        {
            let mut state = self.state.borrow_mut();
            state.loading = false;
            state.session = session;
        }
        match outcome {
            RestoreOutcome::Restored(role) => log::info!("session restored for role {role}"),
            RestoreOutcome::Discarded => log::warn!("discarded unusable stored session"),
            RestoreOutcome::Absent => log::debug!("no stored session"),
        }
        self.notify();
        outcome
    }

    fn read_persisted(&self) -> (Option<AuthSession>, RestoreOutcome) {
        let token = self.read_key(TOKEN_KEY);
        let user = self.read_key(USER_KEY);
        match (token, user) {
            (None, None) => (None, RestoreOutcome::Absent),
            (Some(token), Some(user)) if !token.is_empty() => {
                match serde_json::from_str::<UserProfile>(&user) {
                    Ok(user) => {
                        let role = user.role;
                        (Some(AuthSession { token, user }), RestoreOutcome::Restored(role))
                    }
                    Err(err) => {
                        log::warn!("stored user profile is corrupt: {err}");
                        self.remove_persisted();
                        (None, RestoreOutcome::Discarded)
                    }
                }
            }
            _ => {
                self.remove_persisted();
                (None, RestoreOutcome::Discarded)
            }
        }
    }

    fn read_key(&self, key: &str) -> Option<String> {
        self.storage.get(key).unwrap_or_else(|err| {
            log::warn!("cannot read {key} from storage: {err}");
            None
        })
    }

    /// Adopt a freshly issued session and persist it.
    ///
    /// The in-memory session is set even when persisting fails; storage is
    /// then left empty so the two keys never disagree.
    ///
    /// # Errors
    ///
    /// Returns the storage failure, if any, for the caller to log.
    pub fn establish(&self, session: AuthSession) -> Result<(), StorageError> {
        let persisted = self.persist(&session);
        if persisted.is_err() {
            self.remove_persisted();
        }
        {
            let mut state = self.state.borrow_mut();
            state.loading = false;
            state.session = Some(session);
        }
        self.notify();
        persisted
    }

    fn persist(&self, session: &AuthSession) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user).map_err(|err| StorageError::Write {
            key: USER_KEY.to_string(),
            reason: err.to_string(),
        })?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user)
    }

    /// Drop the session from memory and storage.
    pub fn clear(&self) {
        self.remove_persisted();
        {
            let mut state = self.state.borrow_mut();
            state.loading = false;
            state.session = None;
        }
        self.notify();
    }

    fn remove_persisted(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.storage.remove(key) {
                log::warn!("cannot remove {key} from storage: {err}");
            }
        }
    }

    /// Register a callback run after every state transition.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Listeners may subscribe or read the store re-entrantly.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

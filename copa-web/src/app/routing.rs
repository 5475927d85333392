use crate::router::{Access, Route};
use copa_core::guard::{GuardDecision, decide, decide_anonymous};
use copa_core::session::SessionState;

/// Outcome of matching a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Wait,
    Render,
    Redirect(Route),
}

impl From<GuardDecision> for RouteOutcome {
    fn from(decision: GuardDecision) -> Self {
        match decision {
            GuardDecision::Wait => Self::Wait,
            GuardDecision::Render => Self::Render,
            GuardDecision::RedirectLogin => Self::Redirect(Route::Login),
            GuardDecision::RedirectHome => Self::Redirect(Route::Home),
        }
    }
}

#[must_use]
pub fn route_outcome(route: Route, state: &SessionState) -> RouteOutcome {
    match route.access() {
        Access::Anonymous => decide_anonymous(state).into(),
        Access::Roles(required) => decide(state, required).into(),
        Access::Fallback => RouteOutcome::Redirect(Route::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copa_core::role::Role;
    use copa_core::session::{AuthSession, UserProfile};

    fn signed_in(role: Role) -> SessionState {
        SessionState {
            loading: false,
            session: Some(AuthSession {
                token: "t".into(),
                user: UserProfile {
                    role,
                    ..UserProfile::visitor()
                },
            }),
        }
    }

    const SIGNED_OUT: SessionState = SessionState {
        loading: false,
        session: None,
    };

    #[test]
    fn teacher_cannot_open_admin() {
        assert_eq!(
            route_outcome(Route::Admin, &signed_in(Role::Teacher)),
            RouteOutcome::Redirect(Route::Home)
        );
        assert_eq!(
            route_outcome(Route::MyGames, &signed_in(Role::Teacher)),
            RouteOutcome::Render
        );
    }

    #[test]
    fn signed_out_users_are_sent_to_login() {
        assert_eq!(
            route_outcome(Route::Classification, &SIGNED_OUT),
            RouteOutcome::Redirect(Route::Login)
        );
        assert_eq!(route_outcome(Route::Login, &SIGNED_OUT), RouteOutcome::Render);
    }

    #[test]
    fn loading_waits_on_guarded_routes() {
        let loading = SessionState {
            loading: true,
            session: None,
        };
        assert_eq!(route_outcome(Route::Home, &loading), RouteOutcome::Wait);
        assert_eq!(route_outcome(Route::Login, &loading), RouteOutcome::Wait);
        assert_eq!(
            route_outcome(Route::NotFound, &loading),
            RouteOutcome::Redirect(Route::Home)
        );
    }

    #[test]
    fn signed_in_users_skip_login() {
        assert_eq!(
            route_outcome(Route::Login, &signed_in(Role::Visitor)),
            RouteOutcome::Redirect(Route::Home)
        );
        assert_eq!(
            route_outcome(Route::Results, &signed_in(Role::Visitor)),
            RouteOutcome::Render
        );
    }
}

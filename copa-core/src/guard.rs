//! Access decisions shared by the router and the navigation menu.

use crate::role::Role;
use crate::session::{AuthSession, SessionState};

/// What the shell should do with a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restoration has not finished; show a neutral waiting state.
    Wait,
    Render,
    RedirectLogin,
    RedirectHome,
}

/// Whether `session` may see a target requiring `required` roles.
///
/// An empty role set admits any signed-in identity, visitors included.
#[must_use]
pub fn is_allowed(session: Option<&AuthSession>, required: &[Role]) -> bool {
    session.is_some_and(|s| required.is_empty() || required.contains(&s.user.role))
}

/// Decide a protected target.
#[must_use]
pub fn decide(state: &SessionState, required: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    match state.session.as_ref() {
        None => GuardDecision::RedirectLogin,
        Some(session) if is_allowed(Some(session), required) => GuardDecision::Render,
        Some(_) => GuardDecision::RedirectHome,
    }
}

/// Decide a target only meant for signed-out users, such as the login form.
#[must_use]
pub const fn decide_anonymous(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Wait
    } else if state.session.is_some() {
        GuardDecision::RedirectHome
    } else {
        GuardDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserProfile;

    fn state(loading: bool, role: Option<Role>) -> SessionState {
        SessionState {
            loading,
            session: role.map(|role| AuthSession {
                token: "t".into(),
                user: UserProfile {
                    role,
                    ..UserProfile::visitor()
                },
            }),
        }
    }

    #[test]
    fn teacher_is_sent_home_from_admin_area() {
        assert_eq!(
            decide(&state(false, Some(Role::Teacher)), &[Role::Admin]),
            GuardDecision::RedirectHome
        );
    }

    #[test]
    fn loading_always_waits() {
        let role_sets: [&[Role]; 3] = [&[], &[Role::Admin], &[Role::Teacher, Role::Visitor]];
        for role in [None, Some(Role::Visitor), Some(Role::Teacher), Some(Role::Admin)] {
            for required in role_sets {
                assert_eq!(decide(&state(true, role), required), GuardDecision::Wait);
            }
            assert_eq!(decide_anonymous(&state(true, role)), GuardDecision::Wait);
        }
    }

    #[test]
    fn missing_session_goes_to_login() {
        assert_eq!(decide(&state(false, None), &[]), GuardDecision::RedirectLogin);
        assert_eq!(
            decide(&state(false, None), &[Role::Teacher]),
            GuardDecision::RedirectLogin
        );
    }

    #[test]
    fn empty_role_set_admits_visitors() {
        assert_eq!(
            decide(&state(false, Some(Role::Visitor)), &[]),
            GuardDecision::Render
        );
        assert_eq!(
            decide(&state(false, Some(Role::Admin)), &[Role::Admin]),
            GuardDecision::Render
        );
        assert!(!is_allowed(None, &[]));
    }

    #[test]
    fn login_page_is_for_signed_out_users() {
        assert_eq!(decide_anonymous(&state(false, None)), GuardDecision::Render);
        assert_eq!(
            decide_anonymous(&state(false, Some(Role::Visitor))),
            GuardDecision::RedirectHome
        );
    }
}

use copa_core::auth::Landing;
use copa_core::role::Role;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/competicoes")]
    Competitions,
    #[at("/jogos")]
    Games,
    #[at("/resultados")]
    Results,
    #[at("/classificacao")]
    Classification,
    #[at("/escolas")]
    Schools,
    #[at("/meus-times")]
    MyTeams,
    #[at("/meus-jogos")]
    MyGames,
    #[at("/admin")]
    Admin,
    #[at("/admin/*")]
    AdminSection,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Only without a session (the login form).
    Anonymous,
    /// Any session whose role is in the set; an empty set admits every role.
    Roles(&'static [Role]),
    /// Not a real screen; always sent home.
    Fallback,
}

impl Route {
    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Self::Login => Access::Anonymous,
            Self::Home
            | Self::Competitions
            | Self::Games
            | Self::Results
            | Self::Classification
            | Self::Schools => Access::Roles(&[]),
            Self::MyTeams | Self::MyGames => Access::Roles(&[Role::Teacher]),
            Self::Admin | Self::AdminSection => Access::Roles(&[Role::Admin]),
            Self::NotFound => Access::Fallback,
        }
    }

    #[must_use]
    pub const fn landing(landing: Landing) -> Self {
        match landing {
            Landing::Home => Self::Home,
            Landing::MyTeams => Self::MyTeams,
            Landing::AdminDashboard => Self::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_the_public_urls() {
        assert_eq!(Route::recognize("/competicoes"), Some(Route::Competitions));
        assert_eq!(Route::recognize("/meus-jogos"), Some(Route::MyGames));
        assert_eq!(Route::recognize("/admin/escolas"), Some(Route::AdminSection));
        assert_eq!(Route::Classification.to_path(), "/classificacao");
    }

    #[test]
    fn access_rules_per_area() {
        assert_eq!(Route::Login.access(), Access::Anonymous);
        assert_eq!(Route::Schools.access(), Access::Roles(&[]));
        assert_eq!(Route::MyTeams.access(), Access::Roles(&[Role::Teacher]));
        assert_eq!(Route::AdminSection.access(), Access::Roles(&[Role::Admin]));
        assert_eq!(Route::NotFound.access(), Access::Fallback);
    }

    #[test]
    fn landing_routes() {
        assert_eq!(Route::landing(Landing::AdminDashboard), Route::Admin);
        assert_eq!(Route::landing(Landing::MyTeams), Route::MyTeams);
        assert_eq!(Route::landing(Landing::Home), Route::Home);
    }
}

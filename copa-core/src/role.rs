use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of identities the league API issues tokens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "VISITANTE")]
    Visitor,
    #[serde(rename = "PROFESSOR")]
    Teacher,
    #[serde(rename = "ADM")]
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Visitor, Self::Teacher, Self::Admin];

    /// Wire code used by the API and in persisted profiles.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Visitor => "VISITANTE",
            Self::Teacher => "PROFESSOR",
            Self::Admin => "ADM",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which login flow the user picked on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginKind {
    Visitor,
    Teacher,
    Admin,
}

impl LoginKind {
    /// Value of the `tipo` field for credential logins; visitors have none.
    #[must_use]
    pub const fn tipo(self) -> Option<&'static str> {
        match self {
            Self::Visitor => None,
            Self::Teacher => Some("professor"),
            Self::Admin => Some("admin"),
        }
    }

    #[must_use]
    pub const fn requires_credentials(self) -> bool {
        !matches!(self, Self::Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_codes_round_trip_through_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.code()));
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("ROOT"), None);
    }

    #[test]
    fn login_kind_tipo_matches_api_contract() {
        assert_eq!(LoginKind::Teacher.tipo(), Some("professor"));
        assert_eq!(LoginKind::Admin.tipo(), Some("admin"));
        assert_eq!(LoginKind::Visitor.tipo(), None);
        assert!(!LoginKind::Visitor.requires_credentials());
    }
}

//! Copa Escolar Client Core
//!
//! Platform-agnostic client logic for the municipal school sports league.
//! This crate provides the session store, access rules, request cache, API
//! gateway and view models without UI or platform-specific dependencies.

pub mod api;
pub mod auth;
pub mod config;
pub mod display;
pub mod error;
pub mod filters;
pub mod guard;
pub mod model;
pub mod query;
pub mod results;
pub mod role;
pub mod session;
pub mod standings;
pub mod storage;
pub mod teacher;
pub mod transport;

// Re-export commonly used types
pub use api::{ApiClient, GameQuery, LoginResponse};
pub use auth::{Credentials, Landing, landing_for, login, logout, refresh_profile};
pub use config::ClientConfig;
pub use display::{format_game_date, format_game_datetime, parse_datetime};
pub use error::{ApiError, AuthError, StorageError, TransportError};
pub use filters::{CompetitionBreakdown, CompetitionFilters, GameFilters, ResultsFilters, SchoolFilters};
pub use guard::{GuardDecision, decide, decide_anonymous, is_allowed};
pub use model::{
    Appeal, AppealDecision, AppealStatus, Competition, CompetitionDetail, CompetitionRef,
    CompetitionStatus, Game, GameDetail, GameStatus, Gender, Modality, OwnedTeam, School,
    StandingRow, SubCategory, Team,
};
pub use query::{QueryCache, QueryKey, QueryState};
pub use results::{CompetitionGroup, Outcome, ResultsSummary, group_by_competition, outcome};
pub use role::{LoginKind, Role};
pub use session::{AuthSession, Identity, RestoreOutcome, SessionState, SessionStore, UserProfile};
pub use standings::{PositionMarker, StandingsView, format_goal_difference, standings_view};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

pub mod daisy_ui;
pub mod empty_state;
pub mod game_card;
pub mod navbar;
pub mod query_view;
pub mod standings_table;
pub mod status_badge;

pub use empty_state::EmptyState;
pub use game_card::GameCard;
pub use navbar::Navbar;
pub use query_view::query_html;
pub use standings_table::StandingsTable;
pub use status_badge::{StatusBadge, StatusKind};

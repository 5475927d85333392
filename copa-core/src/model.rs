//! Snapshots returned by the league API.
//!
//! Field names follow the server's Portuguese JSON; the Rust side uses
//! English names. Nothing here is mutated locally.

use crate::display::parse_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Declares a closed enum whose serde form is the server's label.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            #[must_use]
            pub fn from_wire(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_wire() == value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_wire())
            }
        }
    };
}

wire_enum!(Modality {
    Futsal => "Futsal",
    Dodgeball => "Queimada",
});

wire_enum!(Gender {
    Male => "Masculino",
    Female => "Feminino",
});

wire_enum!(SubCategory {
    Sub09 => "SUB-09",
    Sub11 => "SUB-11",
});

wire_enum!(CompetitionStatus {
    Planned => "Planejada",
    InProgress => "Em andamento",
    Finished => "Encerrada",
});

wire_enum!(GameStatus {
    Scheduled => "Agendado",
    InProgress => "Em andamento",
    Finished => "Encerrado",
});

wire_enum!(
    /// Moderation state of a teacher's appeal.
    AppealStatus {
        Open => "Aberto",
        UnderReview => "Em análise (ADM)",
        Granted => "Deferido",
        Denied => "Indeferido",
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "modalidade")]
    pub modality: Modality,
    #[serde(rename = "genero")]
    pub gender: Gender,
    #[serde(rename = "subCategoria")]
    pub sub_category: SubCategory,
    pub status: CompetitionStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

/// `GET /competicoes/{id}` adds the enrolled teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionDetail {
    #[serde(flatten)]
    pub competition: Competition,
    #[serde(rename = "times", default)]
    pub teams: Vec<EnrolledTeam>,
}

/// Competition reference embedded in games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionRef {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolRef {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Team as embedded in games and standings: the school is just its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "escola")]
    pub school: String,
}

/// Team with its school as a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledTeam {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "escola")]
    pub school: SchoolRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    #[serde(rename = "competicao")]
    pub competition: CompetitionRef,
    #[serde(rename = "rodada")]
    pub round: u32,
    #[serde(rename = "dataHora")]
    pub scheduled_at: String,
    #[serde(rename = "local")]
    pub venue: String,
    #[serde(rename = "timeCasa")]
    pub home: Team,
    #[serde(rename = "timeFora")]
    pub away: Team,
    pub status: GameStatus,
    #[serde(rename = "placarCasa", default)]
    pub home_score: Option<u32>,
    #[serde(rename = "placarFora", default)]
    pub away_score: Option<u32>,
}

impl Game {
    /// Kick-off time, when the server's timestamp parses.
    #[must_use]
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        parse_datetime(&self.scheduled_at)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}

/// `GET /jogos/{id}`: same game with richer competition and school data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: i64,
    #[serde(rename = "competicao")]
    pub competition: CompetitionSummary,
    #[serde(rename = "rodada")]
    pub round: u32,
    #[serde(rename = "dataHora")]
    pub scheduled_at: String,
    #[serde(rename = "local")]
    pub venue: String,
    #[serde(rename = "timeCasa")]
    pub home: EnrolledTeam,
    #[serde(rename = "timeFora")]
    pub away: EnrolledTeam,
    pub status: GameStatus,
    #[serde(rename = "placarCasa", default)]
    pub home_score: Option<u32>,
    #[serde(rename = "placarFora", default)]
    pub away_score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionSummary {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "modalidade")]
    pub modality: Modality,
    #[serde(rename = "genero")]
    pub gender: Gender,
    #[serde(rename = "subCategoria")]
    pub sub_category: SubCategory,
}

/// One precomputed row of a competition's classification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    #[serde(rename = "posicao")]
    pub position: u32,
    #[serde(rename = "time")]
    pub team: Team,
    #[serde(rename = "jogos")]
    pub played: u32,
    #[serde(rename = "vitorias")]
    pub wins: u32,
    #[serde(rename = "empates")]
    pub draws: u32,
    #[serde(rename = "derrotas")]
    pub losses: u32,
    #[serde(rename = "golsPro")]
    pub goals_for: u32,
    #[serde(rename = "golsContra")]
    pub goals_against: u32,
    #[serde(rename = "saldoGols")]
    pub goal_difference: i32,
    #[serde(rename = "pontos")]
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "numeroCamisa")]
    pub shirt_number: u32,
    #[serde(rename = "nomeOpcional", default)]
    pub name: Option<String>,
}

/// Team owned by a teacher, as listed by `/meus-times` and `/admin/times`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedTeam {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "escola", default)]
    pub school: Option<SchoolRef>,
    #[serde(rename = "competicao", default)]
    pub competition: Option<CompetitionRef>,
    #[serde(rename = "atletas", default)]
    pub athletes: Vec<Athlete>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "escolaId")]
    pub school_id: i64,
    #[serde(rename = "competicaoId")]
    pub competition_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionDraft {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "modalidade")]
    pub modality: Modality,
    #[serde(rename = "genero")]
    pub gender: Gender,
    #[serde(rename = "subCategoria")]
    pub sub_category: SubCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompetitionStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolDraft {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherAccount {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "ativo", default = "active_by_default")]
    pub active: bool,
    #[serde(rename = "escolas", default)]
    pub schools: Vec<SchoolRef>,
}

const fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherDraft {
    #[serde(rename = "nome")]
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "escolaIds", default, skip_serializing_if = "Vec::is_empty")]
    pub school_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    #[serde(rename = "novaSenha", default)]
    pub new_password: Option<String>,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDraft {
    #[serde(rename = "competicaoId")]
    pub competition_id: i64,
    #[serde(rename = "rodada")]
    pub round: u32,
    #[serde(rename = "dataHora")]
    pub scheduled_at: String,
    #[serde(rename = "local")]
    pub venue: String,
    #[serde(rename = "timeCasaId")]
    pub home_team_id: i64,
    #[serde(rename = "timeForaId")]
    pub away_team_id: i64,
    #[serde(rename = "placarCasa", skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(rename = "placarFora", skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GameStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedGames {
    #[serde(rename = "jogos", default)]
    pub games: Vec<Game>,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
}

/// A teacher's formal dispute of a game, moderated by the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appeal {
    pub id: i64,
    #[serde(rename = "jogoId", default)]
    pub game_id: Option<i64>,
    #[serde(rename = "motivo")]
    pub reason: String,
    pub status: AppealStatus,
    #[serde(rename = "resposta", default)]
    pub response: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppealDecision {
    pub status: AppealStatus,
    #[serde(rename = "resposta", skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

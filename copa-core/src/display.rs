//! Text formatting shared by the views.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a server timestamp. Offsets are dropped; the league runs in one zone.
#[must_use]
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `dd/MM/yyyy às HH:mm`, or the raw text when it does not parse.
#[must_use]
pub fn format_game_datetime(raw: &str) -> String {
    parse_datetime(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format("%d/%m/%Y às %H:%M").to_string(),
    )
}

/// `dd/MM/yyyy`, or the raw text when it does not parse.
#[must_use]
pub fn format_game_date(raw: &str) -> String {
    parse_datetime(raw).map_or_else(|| raw.to_string(), |dt| dt.format("%d/%m/%Y").to_string())
}

#[must_use]
pub fn format_ordinal(position: u32) -> String {
    format!("{position}º")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_timestamp_variants() {
        assert!(parse_datetime("2024-05-10T14:30:00").is_some());
        assert!(parse_datetime("2024-05-10T14:30:00.123456").is_some());
        assert!(parse_datetime("2024-05-10T14:30:00-03:00").is_some());
        assert!(parse_datetime("2024-05-10").is_some());
        assert!(parse_datetime("amanhã").is_none());
    }

    #[test]
    fn formats_dates_in_brazilian_style() {
        assert_eq!(
            format_game_datetime("2024-05-10T14:30:00"),
            "10/05/2024 às 14:30"
        );
        assert_eq!(format_game_date("2024-05-10T14:30:00"), "10/05/2024");
        assert_eq!(format_game_datetime("a definir"), "a definir");
        assert_eq!(format_ordinal(2), "2º");
    }
}

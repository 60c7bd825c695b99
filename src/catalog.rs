//! Read-only catalog of historical periods.
//!
//! The catalog ships inside the binary as JSON and is parsed and checked
//! once, on first access.

use crate::error::CatalogError;
use crate::i18n::Language;
use once_cell::sync::OnceCell;
use serde::Deserialize;

const PERIODS_JSON: &str = include_str!("../data/periods.json");

static PERIODS: OnceCell<Vec<Period>> = OnceCell::new();

/// One historical period. Years before the common era are negative.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub id: String,
    pub title: String,
    pub start_year: i32,
    pub end_year: i32,
    pub summary: String,
    pub key_events: Vec<String>,
    /// Card colour as `#rrggbb`.
    pub accent: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Returns every period in chronological order.
pub fn periods() -> Result<&'static [Period], CatalogError> {
    PERIODS
        .get_or_try_init(|| parse(PERIODS_JSON))
        .map(Vec::as_slice)
}

/// Looks up a period by its id.
pub fn find(id: &str) -> Result<Option<&'static Period>, CatalogError> {
    Ok(periods()?.iter().find(|p| p.id == id))
}

/// Parses and checks a catalog: non-empty, no inverted spans, `#rrggbb`
/// accents, sorted by start year.
pub fn parse(json: &str) -> Result<Vec<Period>, CatalogError> {
    let periods: Vec<Period> = serde_json::from_str(json)?;
    if periods.is_empty() {
        return Err(CatalogError::Empty);
    }
    for period in &periods {
        if period.end_year < period.start_year {
            return Err(CatalogError::InvertedSpan {
                id: period.id.clone(),
                start: period.start_year,
                end: period.end_year,
            });
        }
        if !is_hex_color(&period.accent) {
            return Err(CatalogError::BadAccent {
                id: period.id.clone(),
                accent: period.accent.clone(),
            });
        }
    }
    for pair in periods.windows(2) {
        if pair[1].start_year < pair[0].start_year {
            return Err(CatalogError::Unordered {
                previous: pair[0].id.clone(),
                next: pair[1].id.clone(),
            });
        }
    }
    tracing::debug!(count = periods.len(), "period catalog loaded");
    Ok(periods)
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Formats a year for display, e.g. `3300 av. J.-C.` or `1492`.
pub fn format_year(year: i32, language: Language) -> String {
    if year >= 0 {
        return year.to_string();
    }
    let magnitude = group_thousands(year.unsigned_abs(), language);
    let suffix = match language {
        Language::Fr => "av. J.-C.",
        Language::En => "BC",
        Language::Es => "a. C.",
    };
    format!("{} {}", magnitude, suffix)
}

fn group_thousands(value: u32, language: Language) -> String {
    let separator = match language {
        Language::Fr => '\u{202f}',
        Language::En => ',',
        Language::Es => '.',
    };
    let digits = value.to_string();
    if digits.len() <= 4 {
        return digits;
    }
    let mut result = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let periods = periods().unwrap();
        assert_eq!(periods.len(), 5);
        assert_eq!(periods[0].id, "prehistoire");
        assert_eq!(periods.last().unwrap().id, "epoque-contemporaine");
        assert!(periods.iter().all(|p| !p.key_events.is_empty()));
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("moyen-age").unwrap().map(|p| p.title.as_str()), Some("Moyen Âge"));
        assert!(find("futur").unwrap().is_none());
    }

    #[test]
    fn test_rejects_malformed_accent() {
        for accent in ["#aéé1", "4f46e5", "#4f46e", "#zzzzzz"] {
            let json = format!(
                r#"[{{"id": "x", "title": "X", "startYear": 1, "endYear": 2, "summary": "", "keyEvents": [], "accent": "{}"}}]"#,
                accent
            );
            assert!(
                matches!(parse(&json), Err(CatalogError::BadAccent { .. })),
                "accent {}",
                accent
            );
        }
    }

    #[test]
    fn test_rejects_unordered_catalog() {
        let json = r##"[
            {"id": "b", "title": "B", "startYear": 10, "endYear": 20, "summary": "", "keyEvents": [], "accent": "#000000"},
            {"id": "a", "title": "A", "startYear": 0, "endYear": 10, "summary": "", "keyEvents": [], "accent": "#000000"}
        ]"##;
        assert!(matches!(parse(json), Err(CatalogError::Unordered { .. })));
    }

    #[test]
    fn test_rejects_inverted_and_empty() {
        let json = r##"[{"id": "x", "title": "X", "startYear": 5, "endYear": 1, "summary": "", "keyEvents": [], "accent": "#000000"}]"##;
        assert!(matches!(parse(json), Err(CatalogError::InvertedSpan { .. })));
        assert!(matches!(parse("[]"), Err(CatalogError::Empty)));
        assert!(matches!(parse("{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(1789, Language::Fr), "1789");
        assert_eq!(format_year(-3300, Language::Fr), "3300 av. J.-C.");
        assert_eq!(format_year(-3300, Language::En), "3300 BC");
        assert_eq!(format_year(-3_000_000, Language::En), "3,000,000 BC");
        assert_eq!(format_year(-3_000_000, Language::Es), "3.000.000 a. C.");
    }
}

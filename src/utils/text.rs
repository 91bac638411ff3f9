//! Small helpers shared by the CLI, the forms and the chat UI.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail pattern compiles")
});

/// Accepts `local@domain.tld`: one `@`, no whitespace, and a dot after the
/// `@` with text on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// `dd/mm/yyyy`, as used throughout the Brazilian UI.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format an ISO date (`2024-03-09`) or RFC 3339 timestamp as `dd/mm/yyyy`.
pub fn format_date(input: &str) -> Option<String> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(format_date_br(date));
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| format_date_br(dt.date_naive()))
}

/// Case-insensitive substring match used by the live search filter. An empty
/// term matches everything.
pub fn matches_search(item: &str, term: &str) -> bool {
    item.to_lowercase().contains(&term.to_lowercase())
}

pub fn filter_items<'a, I>(items: I, term: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let term = term.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.to_lowercase().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_follows_simple_pattern() {
        assert!(is_valid_email("ana@clinica.com.br"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("ana@clinica"));
        assert!(!is_valid_email("ana clinica@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ana@@x.com"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana@x."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_domain_may_hold_extra_dots() {
        assert!(is_valid_email("a@b.c."));
        assert!(is_valid_email("ana@consultorio.psi.br"));
        assert!(is_valid_email("ana.souza@x.y"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.b"));
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_date("2024-03-09").as_deref(), Some("09/03/2024"));
        assert_eq!(
            format_date("2024-12-31T23:00:00-03:00").as_deref(),
            Some("31/12/2024")
        );
        assert_eq!(format_date("amanhã"), None);
    }

    #[test]
    fn search_is_case_insensitive() {
        let items = ["Maria Souza", "JOÃO Lima", "Ana Maria"];
        assert_eq!(filter_items(items, "maria"), vec!["Maria Souza", "Ana Maria"]);
        assert_eq!(filter_items(items, "joão"), vec!["JOÃO Lima"]);
        assert_eq!(filter_items(items, "").len(), 3);
        assert!(matches_search("Agenda de Sessões", "SESSÕES"));
    }
}

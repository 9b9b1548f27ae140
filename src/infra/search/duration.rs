use regex::Regex;
use std::sync::LazyLock;

static HOURS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*hr").expect("invalid hours regex"));
static MINUTES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*min").expect("invalid minutes regex"));

/// Total minutes encoded in a free-text duration such as `"1 hr 30 min"`.
///
/// Absent or empty input is unknown (`None`). The hour and minute patterns
/// are scanned independently; a missing term contributes zero, and a
/// non-empty string matching neither pattern comes out as `Some(0)`, which
/// makes it indistinguishable from a zero-duration recipe.
pub fn parse_duration_minutes(raw: Option<&str>) -> Option<u32> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    let hours = capture_number(&HOURS_REGEX, raw);
    let minutes = capture_number(&MINUTES_REGEX, raw);
    Some(hours.saturating_mul(60).saturating_add(minutes))
}

fn capture_number(pattern: &Regex, raw: &str) -> u32 {
    pattern
        .captures(raw)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_combined_hours_and_minutes() {
        assert_eq!(parse_duration_minutes(Some("1 hr 30 min")), Some(90));
    }

    #[test]
    fn test_parses_minutes_only() {
        assert_eq!(parse_duration_minutes(Some("45 min")), Some(45));
    }

    #[test]
    fn test_parses_hours_only() {
        assert_eq!(parse_duration_minutes(Some("2 hr")), Some(120));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(parse_duration_minutes(Some("1 HR 5 MIN")), Some(65));
    }

    #[test]
    fn test_absent_or_empty_is_unknown() {
        assert_eq!(parse_duration_minutes(None), None);
        assert_eq!(parse_duration_minutes(Some("")), None);
    }

    #[test]
    fn test_unrecognized_text_counts_as_zero() {
        assert_eq!(parse_duration_minutes(Some("banana")), Some(0));
    }
}

use timekit::constants::{DEFAULT_DATETIME_FORMAT, DEFAULT_DATETIME_PATTERN, UI_TIME_FORMAT};
use timekit::{DateTimeError, FormatItem, FormatSet, FormatSpec};

#[test]
fn test_pattern_round_trip_matches_token_built_spec() {
    let from_pattern = FormatSpec::from_pattern(DEFAULT_DATETIME_PATTERN).unwrap();
    assert_eq!(from_pattern, *DEFAULT_DATETIME_FORMAT);
}

#[test]
fn test_unsupported_specifier_fails_at_construction() {
    assert!(matches!(
        FormatSpec::from_pattern("%Y-%q"),
        Err(DateTimeError::UnsupportedToken(t)) if t == "%q"
    ));
    assert!(matches!(
        FormatSpec::from_pattern("%-d-%b-%Y"),
        Err(DateTimeError::UnsupportedToken(t)) if t == "%-d"
    ));
    // dangling percent at end of pattern
    assert!(FormatSpec::from_pattern("%Y-%m-%d %").is_err());
}

#[test]
fn test_literal_percent() {
    let spec = FormatSpec::from_pattern("%d%%").unwrap();
    let dt = chrono::NaiveDate::from_ymd_opt(2023, 6, 23)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(spec.render(dt), "23%");

    let built = FormatSpec::new(vec![FormatItem::Literal("100%".to_string())]);
    assert_eq!(built.pattern(), "100%%");
    assert_eq!(built.render(dt), "100%");
}

#[test]
fn test_parse_requires_exact_match() {
    let spec = FormatSpec::from_pattern(DEFAULT_DATETIME_PATTERN).unwrap();
    assert!(spec.parse("2023-06-23 02:25:37").is_ok());
    // trailing garbage
    assert!(spec.parse("2023-06-23 02:25:37xyz").is_err());
    // missing time component
    assert!(spec.parse("2023-06-23").is_err());
}

#[test]
fn test_parse_rejects_invalid_calendar_values() {
    let spec = FormatSpec::from_pattern(DEFAULT_DATETIME_PATTERN).unwrap();
    assert!(spec.parse("2023-06-32 00:00:00").is_err());
    assert!(spec.parse("2023-06-23 25:00:00").is_err());
}

#[test]
fn test_date_only_spec_cannot_parse_to_datetime() {
    let spec = FormatSpec::from_pattern("%d-%b-%Y").unwrap();
    assert!(matches!(
        spec.parse("23-Jun-2023"),
        Err(DateTimeError::Parse { .. })
    ));
}

#[test]
fn test_twelve_hour_rendering() {
    let dt = chrono::NaiveDate::from_ymd_opt(2023, 6, 23)
        .unwrap()
        .and_hms_opt(14, 5, 0)
        .unwrap();
    assert_eq!(UI_TIME_FORMAT.render(dt), "2:05 PM");

    let midnight = dt.date().and_hms_opt(0, 5, 0).unwrap();
    assert_eq!(UI_TIME_FORMAT.render(midnight), "12:05 AM");

    let noon = dt.date().and_hms_opt(12, 0, 0).unwrap();
    assert_eq!(UI_TIME_FORMAT.render(noon), "12:00 PM");
}

#[test]
fn test_default_format_set() {
    let set = FormatSet::default();
    assert_eq!(set.storage.pattern(), "%Y-%m-%d %H:%M:%S");
    assert_eq!(set.ui_datetime.pattern(), "%d-%b-%Y %-I:%M %p");
    assert_eq!(set.ui_date.pattern(), "%d-%b-%Y");
    assert_eq!(set.ui_time.pattern(), "%-I:%M %p");
}

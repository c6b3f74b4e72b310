use zeller::{
    compute_weekday, weekday_for_date_str, DateStrError, Field, WeekdayError, WeekdayQuery,
};

#[test]
fn missing_parameters_in_declaration_order() {
    let cases: &[(WeekdayQuery, Field)] = &[
        (WeekdayQuery::new(), Field::DayOfMonth),
        (WeekdayQuery::new().with_day_of_month(5), Field::Month),
        (
            WeekdayQuery::new().with_day_of_month(5).with_month(7),
            Field::Year,
        ),
    ];
    for (query, expected) in cases {
        let err = compute_weekday(query).unwrap_err();
        assert_eq!(
            err,
            WeekdayError::MissingParameter { field: *expected },
            "query {query:?} should be missing {expected:?}"
        );
    }
}

#[test]
fn invalid_month_values() {
    for month in [77, -2, 0, 13] {
        let err = compute_weekday(&WeekdayQuery::for_date(5, month, 2010)).unwrap_err();
        assert!(
            matches!(
                err,
                WeekdayError::InvalidParameter {
                    field: Field::Month,
                    ..
                }
            ),
            "month {month} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn invalid_day_of_month_values() {
    for day in [-5, 0, 55] {
        let err = compute_weekday(&WeekdayQuery::for_date(day, 7, 2010)).unwrap_err();
        assert!(
            matches!(
                err,
                WeekdayError::InvalidParameter {
                    field: Field::DayOfMonth,
                    ..
                }
            ),
            "day {day} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn day_31_rejected_in_thirty_day_months() {
    for month in [4, 6, 9, 11] {
        let err = compute_weekday(&WeekdayQuery::for_date(31, month, 2010)).unwrap_err();
        assert_eq!(err.field(), Field::DayOfMonth, "month {month}");
    }
    // The 31-day months keep day 31.
    for month in [1, 3, 5, 7, 8, 10, 12] {
        assert!(
            compute_weekday(&WeekdayQuery::for_date(31, month, 2010)).is_ok(),
            "month {month} has 31 days"
        );
    }
}

#[test]
fn february_length_by_gregorian_rule() {
    // Non-leap 2010: Feb 28 ok, Feb 29 rejected.
    assert!(compute_weekday(&WeekdayQuery::for_date(28, 2, 2010)).is_ok());
    let err = compute_weekday(&WeekdayQuery::for_date(29, 2, 2010)).unwrap_err();
    assert_eq!(err.field(), Field::DayOfMonth);

    // Leap 2008: Feb 29 ok, Feb 30 rejected.
    assert!(compute_weekday(&WeekdayQuery::for_date(29, 2, 2008)).is_ok());
    let err = compute_weekday(&WeekdayQuery::for_date(30, 2, 2008)).unwrap_err();
    assert_eq!(err.field(), Field::DayOfMonth);
}

#[test]
fn century_years_follow_gregorian_exception() {
    // 1900 is not a Gregorian leap year; 2000 is.
    let err = compute_weekday(&WeekdayQuery::for_date(29, 2, 1900)).unwrap_err();
    assert_eq!(err.field(), Field::DayOfMonth);
    assert!(compute_weekday(&WeekdayQuery::for_date(29, 2, 2000)).is_ok());
}

#[test]
fn gregorian_february_rule_applies_to_julian_queries() {
    // The Julian calendar would make 1900 a leap year; February length
    // validation deliberately uses the Gregorian rule for both calendars.
    let query = WeekdayQuery::for_date(29, 2, 1900).with_calendar("julian");
    let err = compute_weekday(&query).unwrap_err();
    assert_eq!(err.field(), Field::DayOfMonth);
}

#[test]
fn unknown_calendar_rejected() {
    let query = WeekdayQuery::for_date(5, 7, 2010).with_calendar("trevorian");
    let err = compute_weekday(&query).unwrap_err();
    assert_eq!(
        err,
        WeekdayError::InvalidParameter {
            field: Field::Calendar,
            reason: "unknown calendar type \"trevorian\" (must be \"gregorian\" or \"julian\", \
                     case-insensitive)"
                .to_string(),
        }
    );
}

#[test]
fn day_name_table_length_checked() {
    for len in [0usize, 6, 8] {
        let names = vec!["x".to_string(); len];
        let query = WeekdayQuery::for_date(5, 7, 2010).with_day_names(names);
        let err = compute_weekday(&query).unwrap_err();
        match err {
            WeekdayError::InvalidParameter { field, reason } => {
                assert_eq!(field, Field::DayNames);
                assert!(
                    reason.contains(&format!("got {len}")),
                    "length {len} should appear in the message, got: {reason}"
                );
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}

#[test]
fn earlier_checks_mask_later_ones() {
    // Missing day of month beats every invalid field.
    let query = WeekdayQuery::new()
        .with_month(77)
        .with_year(2010)
        .with_calendar("trevorian");
    assert_eq!(
        compute_weekday(&query).unwrap_err(),
        WeekdayError::MissingParameter {
            field: Field::DayOfMonth,
        }
    );

    // Invalid month beats invalid day.
    let err = compute_weekday(&WeekdayQuery::for_date(55, 77, 2010)).unwrap_err();
    assert_eq!(err.field(), Field::Month);

    // Invalid day beats invalid calendar.
    let query = WeekdayQuery::for_date(55, 7, 2010).with_calendar("trevorian");
    let err = compute_weekday(&query).unwrap_err();
    assert_eq!(err.field(), Field::DayOfMonth);

    // Invalid calendar beats a malformed day-name table.
    let query = WeekdayQuery::for_date(5, 7, 2010)
        .with_calendar("trevorian")
        .with_day_names(Vec::<String>::new());
    let err = compute_weekday(&query).unwrap_err();
    assert_eq!(err.field(), Field::Calendar);
}

#[test]
fn no_partial_results_on_failure() {
    // Every failing query yields an Err, never a defaulted value.
    let failing = [
        WeekdayQuery::new(),
        WeekdayQuery::for_date(31, 4, 2010),
        WeekdayQuery::for_date(29, 2, 2010),
        WeekdayQuery::for_date(5, 7, 2010).with_calendar("trevorian"),
        WeekdayQuery::for_date(5, 7, 2010).with_day_names(["Mon"]),
    ];
    for query in &failing {
        assert!(
            compute_weekday(query).is_err(),
            "query {query:?} should fail"
        );
    }
}

#[test]
fn adapter_parse_failures() {
    for input in ["next tuesday", "2010-13-05", "2010/07/05", ""] {
        let err = weekday_for_date_str(input, &WeekdayQuery::new()).unwrap_err();
        assert!(
            matches!(err, DateStrError::Parse(_)),
            "input {input:?} should fail to parse, got {err:?}"
        );
    }
}

#[test]
fn adapter_forwards_core_errors() {
    let options = WeekdayQuery::new().with_day_names(["only", "six", "entries", "in", "this", "table"]);
    let err = weekday_for_date_str("2010-07-05", &options).unwrap_err();
    match err {
        DateStrError::Weekday(inner) => assert_eq!(inner.field(), Field::DayNames),
        DateStrError::Parse(_) => panic!("expected a forwarded core error"),
    }
}

#[test]
fn error_messages_name_the_offense() {
    let err = compute_weekday(&WeekdayQuery::for_date(5, 77, 2010)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid parameter: month 77 is out of range (must be 1..=12)"
    );

    let err = compute_weekday(&WeekdayQuery::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing parameter: day of month (day_of_month, month, and year are required)"
    );
}

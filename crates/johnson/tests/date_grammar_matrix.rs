use johnson::{
    format_json_rpc_date, format_short_date, parse_json_rpc_date, parse_short_date, JohnsonError,
};

#[test]
fn lenient_widths_parse_to_the_same_instant() {
    let canonical = parse_json_rpc_date("date{2000-01-01}").unwrap();
    for text in [
        "date{2000-01-1}",
        "date{2000-1-01}",
        "date{2000-1-1}",
        "date{2000-1-1-0-0-0-0}",
        "date{2000-01-01-00-00-00-000}",
    ] {
        assert_eq!(parse_json_rpc_date(text).unwrap(), canonical, "{text}");
    }
}

#[test]
fn cross_grammar_equivalence() {
    // ISO input must land on the same instant as a long-form round trip.
    let fixtures = [
        ("2015-08-15T17:23:30.803Z", "date{2015-08-15-17-23-30-803}"),
        ("2015-08-22T16:28:02.507Z", "date{2015-08-22-16-28-02-507}"),
        ("1980-10-03T04:00:00.000Z", "date{1980-10-03-04-00-00-000}"),
        ("2014-09-10T05:00:00.000Z", "date{2014-09-10-05-00-00-000}"),
    ];
    for (iso, long) in fixtures {
        let dt = parse_json_rpc_date(iso).unwrap();
        assert_eq!(format_json_rpc_date(dt), long);
        assert_eq!(parse_json_rpc_date(long).unwrap(), dt);
    }
}

#[test]
fn canonical_form_is_zero_padded() {
    let dt = parse_json_rpc_date("date{2000-1-2-3-4-5-6}").unwrap();
    assert_eq!(format_json_rpc_date(dt), "date{2000-01-02-03-04-05-006}");
    assert_eq!(format_short_date(dt), "2000-01-02");
}

#[test]
fn rejects_carry_the_offending_text() {
    match parse_json_rpc_date("date{not-a-date}") {
        Err(JohnsonError::NotAJsonRpcDate(text)) => assert_eq!(text, "date{not-a-date}"),
        other => panic!("expected NotAJsonRpcDate, got {other:?}"),
    }
    assert!(parse_short_date("01-01-2008").is_err());
    assert!(parse_short_date("2008-01-01T00:00:00.000Z").is_err());
}

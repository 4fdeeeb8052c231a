use johnson::{decode, encode, parse_json_rpc_date, JohnsonError, RpcValue};

fn smap(entries: &[(&str, RpcValue)]) -> RpcValue {
    RpcValue::Map(
        entries
            .iter()
            .map(|(k, v)| (RpcValue::Str((*k).to_string()), v.clone()))
            .collect(),
    )
}

#[test]
fn encode_matrix() {
    let cases: Vec<(RpcValue, &str)> = vec![
        (RpcValue::Null, "null"),
        (RpcValue::Bool(true), "true"),
        (RpcValue::Bool(false), "false"),
        (RpcValue::Integer(0), "0"),
        (RpcValue::Integer(-20), "-20"),
        (RpcValue::Float(3.5), "3.5"),
        (RpcValue::Float(2.4e16), "2.4E16"),
        (RpcValue::Float(3.6e-19), "3.6E-19"),
        (RpcValue::Float(2.56122757695612e-15), "2.56122757695612E-15"),
        (RpcValue::Str("".into()), "\"\""),
        (RpcValue::Str("a".into()), "\"a\""),
        (RpcValue::Str("say \"hi\"".into()), r#""say \"hi\"""#),
        (RpcValue::Array(vec![]), "[]"),
        (
            RpcValue::Array(vec![
                RpcValue::Str("a".into()),
                RpcValue::Integer(1),
                RpcValue::Bool(true),
            ]),
            "[\"a\",1,true]",
        ),
        (RpcValue::Map(vec![]), "{}"),
        (
            smap(&[("stdError", RpcValue::Float(3.14e20))]),
            "{\"stdError\":3.14E20}",
        ),
        (
            smap(&[
                ("a", RpcValue::Integer(1)),
                (
                    "b",
                    smap(&[
                        ("a", RpcValue::Integer(1)),
                        (
                            "b",
                            RpcValue::Array(vec![
                                RpcValue::Str("a".into()),
                                RpcValue::Integer(1),
                                RpcValue::Bool(true),
                            ]),
                        ),
                    ]),
                ),
            ]),
            "{\"a\":1,\"b\":{\"a\":1,\"b\":[\"a\",1,true]}}",
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(encode(&value).unwrap(), expected, "encoding {value:?}");
    }
}

#[test]
fn decode_encode_round_trip() {
    let values = vec![
        RpcValue::Null,
        RpcValue::Integer(i64::MAX),
        RpcValue::Integer(i64::MIN),
        RpcValue::Float(0.1),
        RpcValue::Float(-123.123),
        RpcValue::Str("asdf asfd 😱 asdf asdf 👀 as".into()),
        RpcValue::DateTime(parse_json_rpc_date("date{2014-08-08-15-49-44-112}").unwrap()),
        RpcValue::Array(vec![
            RpcValue::Integer(1),
            RpcValue::Str("a".into()),
            RpcValue::Integer(-2),
        ]),
        smap(&[
            ("foo", RpcValue::Str("bar".into())),
            ("baz", RpcValue::Integer(123)),
        ]),
        RpcValue::Map(vec![
            (RpcValue::Bool(true), RpcValue::Integer(1)),
            (RpcValue::Null, RpcValue::Null),
            (RpcValue::Integer(10), RpcValue::Float(10.0)),
            (RpcValue::Float(1.5), RpcValue::Str("x".into())),
            (
                smap(&[("a", RpcValue::Integer(1))]),
                RpcValue::Integer(1234),
            ),
        ]),
    ];
    for value in values {
        let text = encode(&value).unwrap();
        let back = decode(&text).unwrap_or_else(|e| panic!("decode failed for {text}: {e}"));
        assert_eq!(back, value);
    }
}

#[test]
fn decode_accepts_standard_whitespace() {
    let v = decode(" { \"a\" : [ 1 , true ] } ").unwrap();
    assert_eq!(
        v,
        smap(&[(
            "a",
            RpcValue::Array(vec![RpcValue::Integer(1), RpcValue::Bool(true)]),
        )])
    );
}

#[test]
fn malformed_documents_rejected() {
    let cases = [
        "",
        "{",
        "[",
        "[1,]",
        "[1 2]",
        "{\"a\":1",
        "{\"a\" 1}",
        "{\"a\":1 \"b\":2}",
        "{:1}",
        "tru",
        "nul",
        "\"unterminated",
        "01a",
        "1 2",
        "[}",
    ];
    for text in cases {
        assert!(
            matches!(decode(text), Err(JohnsonError::MalformedJson(_))),
            "{text:?} should be malformed"
        );
    }
}

#[test]
fn quoted_date_like_keys_stay_text() {
    // Only string values are reinterpreted as dates; a quoted key keeps
    // its text form, so the decoded document re-encodes cleanly.
    let v = decode("{\"date{2000-1-1}\":1}").unwrap();
    assert_eq!(v, smap(&[("date{2000-1-1}", RpcValue::Integer(1))]));
    assert_eq!(encode(&v).unwrap(), "{\"date{2000-1-1}\":1}");

    let v = decode("{\"2015-08-15T17:23:30.803Z\":true}").unwrap();
    assert_eq!(
        v,
        smap(&[("2015-08-15T17:23:30.803Z", RpcValue::Bool(true))])
    );
    assert!(encode(&v).is_ok());
}

#[test]
fn date_like_text_is_never_text() {
    match decode("\"date{2000-1-1}\"").unwrap() {
        RpcValue::DateTime(dt) => {
            assert_eq!(encode(&RpcValue::DateTime(dt)).unwrap(), "\"date{2000-01-01-00-00-00-000}\"");
        }
        other => panic!("expected DateTime, got {other:?}"),
    }
    // A failed date grammar falls back to plain text.
    assert_eq!(
        decode("\"date{not-a-date}\"").unwrap(),
        RpcValue::Str("date{not-a-date}".into())
    );
}

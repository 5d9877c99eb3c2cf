// crates/assessnorm-core/tests/ndjson_batch.rs

use std::io::Cursor;

use assessnorm_core::census::AnswerCensus;
use assessnorm_core::error::NormError;
use assessnorm_core::ndjson::{read_legacy_records, transform, write_normalized};
use assessnorm_core::{normalize, CaveatPolicy, Normalizer, NormalizedRecord};

const S3_LINE: &str = r#"{"assessment_answer": "Yes (with caveats)", "notes": "Limited to v2 endpoint.", "platform": "AWS", "api_name": "S3", "api_domain_name": "s3.amazonaws.com", "criterion_category": "Encryption", "criterion_name": "At-rest encryption"}"#;

#[test]
fn s3_scenario_produces_expected_line() {
    let mut out = Vec::new();
    let stats = transform(Cursor::new(S3_LINE), &mut out, &Normalizer::default()).expect("transform");
    assert_eq!(stats.records_in, 1);
    assert_eq!(stats.records_out, 1);

    let text = String::from_utf8(out).expect("utf8");
    let expected = concat!(
        r#"{"api_name":"S3","api_domain_name":"s3.amazonaws.com","platform":"aws","is_endorsed":false,"#,
        r#""criterion_category":"Encryption","criterion_name":"At-rest encryption","is_supported":true,"#,
        r#""caveats":"Supported with limitations. Refer to notes for details: Limited to v2 endpoint.","#,
        r#""notes":"Limited to v2 endpoint."}"#,
        "\n"
    );
    assert_eq!(text, expected);
}

#[test]
fn output_order_matches_input_order() {
    let input: String = (0..25)
        .map(|i| format!("{{\"api_name\":\"api-{i}\",\"assessment_answer\":\"Yes\"}}\n"))
        .collect();

    let mut out = Vec::new();
    transform(Cursor::new(input), &mut out, &Normalizer::default()).expect("transform");

    let names: Vec<String> = String::from_utf8(out)
        .expect("utf8")
        .lines()
        .map(|l| {
            let r: NormalizedRecord = serde_json::from_str(l).expect("decode");
            r.api_name.expect("api_name")
        })
        .collect();
    let expected: Vec<String> = (0..25).map(|i| format!("api-{i}")).collect();
    assert_eq!(names, expected);
}

#[test]
fn malformed_line_aborts_with_line_number_and_writes_nothing() {
    let input = "{\"assessment_answer\":\"Yes\"}\n\n{not json\n{\"assessment_answer\":\"No\"}\n";
    let mut out = Vec::new();
    let err = transform(Cursor::new(input), &mut out, &Normalizer::default()).unwrap_err();
    match err {
        NormError::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn wrong_field_type_is_malformed() {
    let err = read_legacy_records(Cursor::new("{\"is_endorsed\":\"yes\"}\n")).unwrap_err();
    assert!(format!("{err}").contains("line 1"));
}

#[test]
fn crlf_endings_and_final_newline_are_accepted() {
    let input = "{\"assessment_answer\":\"No\"}\r\n{\"assessment_answer\":\"N/A\"}\r\n";
    let recs = read_legacy_records(Cursor::new(input)).expect("read");
    assert_eq!(recs.len(), 2);
}

#[test]
fn interior_blank_line_aborts_the_batch() {
    for input in [
        "{\"assessment_answer\":\"Yes\"}\n\n{\"assessment_answer\":\"No\"}\n",
        "{\"assessment_answer\":\"Yes\"}\n   \n{\"assessment_answer\":\"No\"}\n",
    ] {
        let mut out = Vec::new();
        let err = transform(Cursor::new(input), &mut out, &Normalizer::default()).unwrap_err();
        match err {
            NormError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(out.is_empty());
    }
}

#[test]
fn non_object_lines_are_malformed() {
    for bad in [
        r#"["S3","s3.amazonaws.com","AWS","Enc","At-rest","Yes",null,null]"#,
        r#""Yes""#,
        "null",
        "42",
        "true",
    ] {
        let input = format!("{{\"assessment_answer\":\"Yes\"}}\n{bad}\n");
        let err = read_legacy_records(Cursor::new(input)).unwrap_err();
        match err {
            NormError::Parse { line, source } => {
                assert_eq!(line, 2, "input={bad}");
                assert!(source.to_string().contains("expected a JSON object"), "input={bad}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn null_fields_read_as_absent() {
    let input = r#"{"assessment_answer":null,"notes":null,"platform":null,"is_endorsed":null}"#;
    let recs = read_legacy_records(Cursor::new(input)).expect("read");
    let out = normalize(&recs[0]);
    assert_eq!(out.caveats, "Not supported.");
    assert_eq!(out.platform, "");
    assert_eq!(out.notes, "");
}

#[test]
fn absent_identity_fields_serialize_as_null() {
    let mut out = Vec::new();
    write_normalized(&mut out, &[normalize(&Default::default())]).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.starts_with(r#"{"api_name":null,"api_domain_name":null,"platform":"","#));
    assert!(text.ends_with('\n'));
}

#[test]
fn stats_count_supported_and_unknown() {
    let input = [
        r#"{"assessment_answer":"Yes"}"#,
        r#"{"assessment_answer":"Maybe"}"#,
        r#"{"assessment_answer":"partially"}"#,
        r#"{}"#,
    ]
    .join("\n");
    let stats = transform(
        Cursor::new(input),
        std::io::sink(),
        &Normalizer::new(CaveatPolicy::Legacy),
    )
    .expect("transform");
    assert_eq!(stats.records_in, 4);
    assert_eq!(stats.supported, 2);
    assert_eq!(stats.unknown_answers, 1);
    assert_eq!(stats.unknown_distinct, vec!["Maybe".to_string()]);
}

#[test]
fn unknown_distinct_keeps_raw_values_once_each() {
    let input = [
        r#"{"assessment_answer":"Maybe"}"#,
        r#"{"assessment_answer":" Maybe"}"#,
        r#"{"assessment_answer":"Maybe"}"#,
        r#"{"assessment_answer":"Yes"}"#,
    ]
    .join("\n");
    let stats = transform(Cursor::new(input), std::io::sink(), &Normalizer::default())
        .expect("transform");
    assert_eq!(stats.unknown_answers, 3);
    assert_eq!(
        stats.unknown_distinct,
        vec![" Maybe".to_string(), "Maybe".to_string()]
    );
}

#[test]
fn census_counts_raw_values_and_flags_unknown() {
    let input = [
        r#"{"assessment_answer":"Yes"}"#,
        r#"{"assessment_answer":"yes"}"#,
        r#"{"assessment_answer":"Yes"}"#,
        r#"{"assessment_answer":"Maybe"}"#,
        r#"{}"#,
    ]
    .join("\n");
    let recs = read_legacy_records(Cursor::new(input)).expect("read");
    let census = AnswerCensus::from_records(&recs);

    assert_eq!(census.total(), 5);
    assert_eq!(census.distinct(), 4);

    let entries = census.entries();
    assert_eq!(entries[0].raw, None);
    assert_eq!(entries[0].answer.label(), "No");

    let yes = entries.iter().find(|e| e.raw.as_deref() == Some("Yes")).expect("Yes");
    assert_eq!(yes.count, 2);

    let unknown = census.unknown();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].raw.as_deref(), Some("Maybe"));
}

use asn_labels::*;

fn raw<'a>(start: &'a str, end: &'a str, columns: &'a str, rows: &'a str) -> RawInputs<'a> {
    RawInputs {
        start,
        end,
        columns,
        rows,
    }
}

#[test]
fn test_valid_inputs() {
    let params = parse_and_validate_inputs(&raw("1", "100", "3", " 8 ")).unwrap();
    assert_eq!(params.range.start(), 1);
    assert_eq!(params.range.end(), 100);
    assert_eq!(params.grid.columns(), 3);
    assert_eq!(params.grid.rows(), 8);
    assert_eq!(params.grid.labels_per_sheet(), 24);
}

#[test]
fn test_non_integer_input() {
    let result = parse_and_validate_inputs(&raw("abc", "10", "2", "2"));
    match result {
        Err(ValidationError::NotAnInteger { field, input }) => {
            assert_eq!(field, Field::Start);
            assert_eq!(input, "abc");
        }
        other => panic!("Expected NotAnInteger error, got {other:?}"),
    }

    assert!(matches!(
        parse_and_validate_inputs(&raw("1", "10", "2.5", "2")),
        Err(ValidationError::NotAnInteger {
            field: Field::Columns,
            ..
        })
    ));
}

#[test]
fn test_start_after_end() {
    let result = parse_and_validate_inputs(&raw("10", "5", "2", "2"));
    assert_eq!(
        result,
        Err(ValidationError::InvalidRange { start: 10, end: 5 })
    );
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Starting number must be smaller than ending number"));
}

#[test]
fn test_equal_bounds_are_valid() {
    let params = parse_and_validate_inputs(&raw("7", "7", "1", "1")).unwrap();
    assert_eq!(params.range.len(), 1);
}

#[test]
fn test_non_positive_grid() {
    for (columns, rows) in [("0", "2"), ("2", "0"), ("-1", "3")] {
        let result = parse_and_validate_inputs(&raw("1", "2", columns, rows));
        assert!(
            matches!(result, Err(ValidationError::InvalidGrid { .. })),
            "{columns}x{rows} should be rejected"
        );
    }
}

#[test]
fn test_range_checked_before_grid() {
    // Both are wrong; the prompt order reports the range first
    let result = parse_and_validate_inputs(&raw("9", "1", "0", "0"));
    assert!(matches!(result, Err(ValidationError::InvalidRange { .. })));
}

#[test]
fn test_output_filename() {
    let params = ValidatedParams::new(1, 500, 3, 8).unwrap();
    assert_eq!(
        params.output_filename(),
        "ASNLabels_1to500_3x8_bracodes.pdf"
    );
}

#[test]
fn test_session_happy_path() {
    let mut session = InputSession::new();
    assert_eq!(session.step(), SessionStep::Ask(Field::Start));
    assert_eq!(session.submit("1"), SessionStep::Ask(Field::End));
    assert_eq!(session.submit("4"), SessionStep::Ask(Field::Columns));
    assert_eq!(session.submit("2"), SessionStep::Ask(Field::Rows));
    assert_eq!(
        session.submit("2"),
        SessionStep::Done(ValidatedParams::new(1, 4, 2, 2).unwrap())
    );
}

#[test]
fn test_session_reprompts_same_field_on_garbage() {
    let mut session = InputSession::new();
    match session.submit("abc") {
        SessionStep::Retry { error, next } => {
            assert!(matches!(error, ValidationError::NotAnInteger { .. }));
            assert_eq!(next, Field::Start);
        }
        other => panic!("Expected Retry, got {other:?}"),
    }
    assert_eq!(session.next_field(), Some(Field::Start));
}

#[test]
fn test_session_range_error_reprompts_both_bounds() {
    let mut session = InputSession::new();
    session.submit("10");
    match session.submit("5") {
        SessionStep::Retry { error, next } => {
            assert_eq!(error, ValidationError::InvalidRange { start: 10, end: 5 });
            assert_eq!(next, Field::Start);
        }
        other => panic!("Expected Retry, got {other:?}"),
    }

    assert_eq!(session.submit("5"), SessionStep::Ask(Field::End));
    assert_eq!(session.submit("10"), SessionStep::Ask(Field::Columns));
}

#[test]
fn test_session_grid_error_restarts_from_start() {
    let mut session = InputSession::new();
    session.submit("1");
    session.submit("2");
    session.submit("0");
    match session.submit("3") {
        SessionStep::Retry { error, next } => {
            assert_eq!(error, ValidationError::InvalidGrid { columns: 0, rows: 3 });
            assert_eq!(next, Field::Start);
        }
        other => panic!("Expected Retry, got {other:?}"),
    }
}

#[test]
fn test_session_keeps_presets() {
    let mut session = InputSession::with_presets(None, None, Some(3), Some(8)).unwrap();
    assert_eq!(session.step(), SessionStep::Ask(Field::Start));

    session.submit("20");
    match session.submit("10") {
        SessionStep::Retry { next, .. } => assert_eq!(next, Field::Start),
        other => panic!("Expected Retry, got {other:?}"),
    }

    session.submit("10");
    assert_eq!(
        session.submit("20"),
        SessionStep::Done(ValidatedParams::new(10, 20, 3, 8).unwrap())
    );
}

#[test]
fn test_session_all_presets_done_immediately() {
    let session = InputSession::with_presets(Some(1), Some(5), Some(2), Some(2)).unwrap();
    assert_eq!(session.next_field(), None);
    assert_eq!(
        session.step(),
        SessionStep::Done(ValidatedParams::new(1, 5, 2, 2).unwrap())
    );
}

#[test]
fn test_contradicting_presets_rejected() {
    assert!(matches!(
        InputSession::with_presets(Some(5), Some(1), None, None),
        Err(ValidationError::InvalidRange { .. })
    ));
    assert!(matches!(
        InputSession::with_presets(None, None, Some(0), None),
        Err(ValidationError::NotPositive { .. })
    ));
}

#[test]
fn test_single_bad_grid_preset_names_its_field() {
    let error = InputSession::with_presets(None, None, Some(0), None).unwrap_err();
    assert_eq!(
        error,
        ValidationError::NotPositive {
            field: Field::Columns,
            value: 0
        }
    );
    assert!(error.to_string().contains("columns"));
    assert!(!error.to_string().contains("0x0"));

    let error = InputSession::with_presets(None, None, None, Some(-2)).unwrap_err();
    assert_eq!(
        error,
        ValidationError::NotPositive {
            field: Field::Rows,
            value: -2
        }
    );
}

use ecotree_core::errors::{EcoTreeError, ExError, ExErrorKind};

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::MissingField, "ERR_MISSING_FIELD"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_serialization_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: EcoTreeError = json_err.into();
    assert!(matches!(err, EcoTreeError::Serialization { .. }));

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::Serialization);
    assert!(!ex.message().is_empty());
}

#[test]
fn test_builders_populate_context() {
    let err = ExError::new(ExErrorKind::InvalidInput)
        .with_op("read_records")
        .with_entity_id("c.tsv")
        .with_message("missing column 'pgn'");

    assert_eq!(err.op(), Some("read_records"));
    assert_eq!(err.entity_id(), Some("c.tsv"));
    assert_eq!(err.message(), "missing column 'pgn'");
    assert_eq!(err.code(), "ERR_INVALID_INPUT");
}

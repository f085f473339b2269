use liberty_triage::{normalize_severity, Severity};

#[test]
fn known_codes_map_to_canonical_levels() {
    let table = [
        ("A", "INFO"), ("AUDIT", "INFO"), ("I", "INFO"), ("INFO", "INFO"),
        ("O", "INFO"), ("NOTICE", "INFO"),
        ("C", "WARN"), ("CONFIG", "WARN"), ("W", "WARN"), ("WARN", "WARN"), ("WARNING", "WARN"),
        ("D", "DEBUG"), ("DEBUG", "DEBUG"),
        ("R", "ERROR"), ("S", "ERROR"), ("SEVERE", "ERROR"), ("E", "ERROR"),
        ("ERR", "ERROR"), ("ERROR", "ERROR"),
        ("F", "FATAL"), ("FATAL", "FATAL"),
        ("T", "TRACE"), ("TRACE", "TRACE"),
    ];
    for (code, expected) in table {
        assert_eq!(normalize_severity(code).as_str(), expected, "code {code}");
    }
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(normalize_severity("warning"), Severity::Warn);
    assert_eq!(normalize_severity("Severe"), Severity::Error);
    assert_eq!(normalize_severity("e"), Severity::Error);
}

#[test]
fn unknown_codes_pass_through_uppercased() {
    assert_eq!(normalize_severity("x"), Severity::Other("X".into()));
    assert_eq!(normalize_severity("Verbose").as_str(), "VERBOSE");
    assert!(!normalize_severity("crit").is_error());
}

#[test]
fn only_error_and_fatal_count_as_errors() {
    assert!(Severity::Error.is_error());
    assert!(Severity::Fatal.is_error());
    for s in [Severity::Trace, Severity::Debug, Severity::Info, Severity::Warn] {
        assert!(!s.is_error());
    }
}

#[test]
fn serializes_as_plain_string() {
    assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), "\"WARN\"");
    assert_eq!(serde_json::to_string(&Severity::Other("X".into())).unwrap(), "\"X\"");
    let back: Severity = serde_json::from_str("\"FATAL\"").unwrap();
    assert_eq!(back, Severity::Fatal);
}

#[test]
fn display_respects_padding() {
    assert_eq!(format!("[{:<6}]", Severity::Info), "[INFO  ]");
}

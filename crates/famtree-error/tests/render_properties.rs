use famtree_error::{
    DbError, DbException, EngineDowngrade, EngineDowngradeRequired, EngineUpgradeRequired,
    EnvironmentError, InterpreterDowngrade, InterpreterUpgradeRequired, Render,
    SchemaUpgradeRequired, Templated, TransactionCancel, Untranslated, VersionError, WriteFailure,
    template::placeholders_in,
};

fn all_kinds() -> Vec<DbError> {
    vec![
        DbException::new("generic failure").into(),
        WriteFailure::with_detail("write failed", "disk full").into(),
        TransactionCancel::new("cancelled by user").into(),
        VersionError::new(5, 1, 3).into(),
        EngineDowngrade::new("4.8", "4.7").into(),
        EngineDowngradeRequired::new("5.3.28", "5.3.21").into(),
        EngineUpgradeRequired::new(2, 5).into(),
        EnvironmentError::new("env failure").into(),
        SchemaUpgradeRequired::new(17, 18).into(),
        InterpreterDowngrade::new(3, 2).into(),
        InterpreterUpgradeRequired::new(2, 3).into(),
    ]
}

#[test]
fn rendering_is_deterministic() {
    for err in all_kinds() {
        assert_eq!(err.render(&Untranslated), err.render(&Untranslated));
        assert_eq!(err.to_string(), err.to_string());
    }
}

#[test]
fn version_skew_renders_every_field_value() {
    let skew: Vec<DbError> = all_kinds()
        .into_iter()
        .filter(DbError::is_version_mismatch)
        .collect();
    assert_eq!(skew.len(), 7);
    for err in skew {
        let text = err.render(&Untranslated);
        for (name, value) in err.field_values() {
            assert!(text.contains(&value), "{name}={value} missing from {text}");
        }
    }
}

/// Each value lands right after the literal text that precedes its placeholder.
fn assert_values_in_their_slots<T: Templated + Render>(value: &T) {
    let template = T::TEMPLATE.text();
    let text = value.render(&Untranslated);
    for (name, arg) in value.args() {
        let at = template
            .find(&format!("{{{name}}}"))
            .unwrap_or_else(|| panic!("{{{name}}} not in template"));
        let lead = &template[..at];
        let lead = &lead[lead.rfind('}').map_or(0, |p| p + 1)..];
        let mut tail: Vec<char> = lead.chars().rev().take(24).collect();
        tail.reverse();
        let expected: String = tail.into_iter().chain(arg.chars()).collect();
        assert!(text.contains(&expected), "expected {expected:?} in {text}");
    }
}

#[test]
fn field_values_sit_in_their_own_slots() {
    assert_values_in_their_slots(&VersionError::new(5, 1, 3));
    assert_values_in_their_slots(&EngineDowngrade::new("4.8", "4.7"));
    assert_values_in_their_slots(&EngineDowngradeRequired::new("5.3.28", "5.3.21"));
    assert_values_in_their_slots(&EngineUpgradeRequired::new(2, 5));
    assert_values_in_their_slots(&SchemaUpgradeRequired::new(17, 18));
    assert_values_in_their_slots(&InterpreterDowngrade::new(3, 2));
    assert_values_in_their_slots(&InterpreterUpgradeRequired::new(2, 3));

    let text = EngineDowngradeRequired::new("5.3.28", "5.3.21").render_default();
    assert!(text.contains("Bsddb version 5.3.28 format"));
    assert!(text.contains("uses Bsddb version 5.3.21."));
}

#[test]
fn write_failure_messages_round_trip() {
    let err = WriteFailure::with_detail("Could not commit transaction", "Database locked");
    assert_eq!(
        err.messages(),
        ("Could not commit transaction", "Database locked")
    );
    assert_eq!(err.render_default(), "Could not commit transaction");

    let db: DbError = err.into();
    assert_eq!(db.to_string(), "Could not commit transaction");
    assert_eq!(
        db.messages(),
        Some(("Could not commit transaction", "Database locked"))
    );
}

#[test]
fn version_error_contains_every_field() {
    let text = VersionError::new(5, 1, 3).render_default();
    for needle in ["5", "1", "3"] {
        assert!(text.contains(needle), "missing {needle} in {text}");
    }
    assert!(!text.contains('{'), "unsubstituted placeholder in {text}");
}

#[test]
fn engine_upgrade_required_end_to_end() {
    let err: DbError = EngineUpgradeRequired::new(2, 5).into();
    let text = err.render(&Untranslated);
    assert!(text.contains('2'));
    assert!(text.contains('5'));
    assert!(text.contains("Bsddb version 2 format"));
    assert!(text.contains("Bsddb version 5."));
}

#[test]
fn distinct_instances_render_their_own_fields() {
    let a = SchemaUpgradeRequired::new(11, 12);
    let b = SchemaUpgradeRequired::new(21, 22);
    let text_b = b.render_default();
    let text_a = a.render_default();
    assert!(text_a.contains("version 11 format") && text_a.contains("version 12."));
    assert!(text_b.contains("version 21 format") && text_b.contains("version 22."));
    assert!(!text_a.contains("21") && !text_b.contains("11"));
}

#[test]
fn clones_do_not_alias() {
    let original = WriteFailure::with_detail("first", "second");
    let mut copy: DbError = original.clone().into();
    assert_eq!(DbError::from(original.clone()), copy);

    copy = WriteFailure::new("replaced").into();
    assert_eq!(original.messages(), ("first", "second"));
    assert_eq!(copy.messages(), Some(("replaced", "")));
}

#[test]
fn templates_declare_exactly_their_placeholders() {
    fn check<T: Templated>(value: &T) {
        let template = T::TEMPLATE;
        let mut declared = template.placeholders().to_vec();
        let mut found = placeholders_in(template.text());
        let mut args: Vec<&str> = value.args().iter().map(|(k, _)| *k).collect();
        declared.sort_unstable();
        found.sort_unstable();
        args.sort_unstable();
        assert_eq!(declared, found, "{}", template.text());
        assert_eq!(declared, args, "{}", template.text());
    }

    check(&VersionError::new(1, 2, 3));
    check(&EngineDowngrade::new(1, 2));
    check(&EngineDowngradeRequired::new(1, 2));
    check(&EngineUpgradeRequired::new(1, 2));
    check(&SchemaUpgradeRequired::new(1, 2));
    check(&InterpreterDowngrade::new(1, 2));
    check(&InterpreterUpgradeRequired::new(1, 2));
    assert!(EnvironmentError::EXPLANATION.placeholders().is_empty());
    assert!(placeholders_in(EnvironmentError::EXPLANATION.text()).is_empty());
}

#[test]
fn rendering_from_many_threads() {
    let errors = all_kinds();
    let expected: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                assert_eq!(rendered, expected);
            });
        }
    });
}

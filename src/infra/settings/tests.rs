use super::*;

#[test]
fn defaults_carry_the_current_schema_version() {
    let settings = AppSettings::default();
    assert_eq!(settings.schema_version, SCHEMA_VERSION);
    assert!(settings.tray_enabled);
    assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
    assert_eq!(settings.window_height, DEFAULT_WINDOW_HEIGHT);
}

#[test]
fn parsing_detects_a_missing_schema_version() {
    let (settings, schema_version_present) = parse_settings_json("{}").expect("parse empty object");
    assert!(!schema_version_present);
    assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);

    let (_, schema_version_present) =
        parse_settings_json(r#"{"schema_version": 1}"#).expect("parse with version");
    assert!(schema_version_present);
}

#[test]
fn parsing_fills_missing_fields_per_field() {
    let (settings, _) =
        parse_settings_json(r#"{"tray_enabled": false}"#).expect("parse partial settings");
    assert!(!settings.tray_enabled);
    assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
    assert_eq!(settings.window_height, DEFAULT_WINDOW_HEIGHT);
}

#[test]
fn parsing_rejects_malformed_json() {
    assert!(parse_settings_json("not json").is_err());
}

#[test]
fn window_size_migration_stamps_the_schema_version() {
    let mut settings = AppSettings {
        schema_version: 1,
        ..AppSettings::default()
    };

    assert!(migrate_add_window_size(&mut settings, true));
    assert_eq!(settings.schema_version, SCHEMA_VERSION);
}

#[test]
fn window_size_migration_is_idempotent() {
    let mut settings = AppSettings::default();
    assert!(!migrate_add_window_size(&mut settings, true));

    // A file without schema_version is stamped and written back exactly once.
    let mut settings = AppSettings::default();
    assert!(migrate_add_window_size(&mut settings, false));
    assert!(!migrate_add_window_size(&mut settings, true));
}

#[test]
fn sanitizer_clamps_window_size_into_range() {
    let mut settings = AppSettings {
        window_width: 10,
        window_height: 100_000,
        ..AppSettings::default()
    };

    assert!(sanitize_window_size(&mut settings));
    assert_eq!(settings.window_width, MIN_WINDOW_WIDTH);
    assert_eq!(settings.window_height, MAX_WINDOW_HEIGHT);

    assert!(!sanitize_window_size(&mut settings));
}

#[test]
fn validation_rejects_out_of_range_window_sizes() {
    let mut settings = AppSettings::default();
    assert!(validate(&settings).is_ok());

    settings.window_width = MIN_WINDOW_WIDTH - 1;
    assert!(validate(&settings).is_err());

    settings.window_width = DEFAULT_WINDOW_WIDTH;
    settings.window_height = MAX_WINDOW_HEIGHT + 1;
    assert!(validate(&settings).is_err());
}

#[test]
fn settings_round_trip_through_json() {
    let settings = AppSettings {
        schema_version: SCHEMA_VERSION,
        tray_enabled: false,
        window_width: 1024,
        window_height: 768,
    };

    let json = serde_json::to_string(&settings).expect("serialize settings");
    let (parsed, schema_version_present) = parse_settings_json(&json).expect("parse settings");
    assert!(schema_version_present);
    assert!(!parsed.tray_enabled);
    assert_eq!(parsed.window_width, 1024);
    assert_eq!(parsed.window_height, 768);
}

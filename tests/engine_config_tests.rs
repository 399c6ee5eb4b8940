use chrono::{NaiveDate, Weekday};
use daterange_rs::api::{CalendarEngine, CalendarEngineConfig, PresetSource};
use daterange_rs::error::CalendarError;
use daterange_rs::interaction::SelectionType;
use daterange_rs::render::NullRenderer;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[test]
fn defaults_match_the_documented_contract() {
    let config = CalendarEngineConfig::new(SelectionType::Double);

    assert!(config.required);
    assert!(!config.same_day_range);
    assert_eq!(config.input_format, "%B %-d, %Y");
    assert_eq!(config.preset_format, "%b %-d, %Y");
    assert_eq!(config.jump_month_format, "%B");
    assert_eq!(config.jump_year_format, "%Y");
    assert_eq!(config.week_start, Weekday::Sun);
    assert_eq!(config.presets, PresetSource::BuiltIn);
    assert_eq!(config.earliest_date, None);
    assert_eq!(config.latest_date, None);
}

#[test]
fn config_round_trips_through_json() {
    let config = CalendarEngineConfig::new(SelectionType::Double)
        .with_bounds(d(2020, 1, 1), d(2020, 12, 31))
        .with_start_date(d(2020, 6, 1))
        .with_end_date(d(2020, 6, 20))
        .with_same_day_range(true)
        .with_placeholder("pick a range");

    let json = config.to_json_pretty().expect("serialize");
    let restored = CalendarEngineConfig::from_json_str(&json).expect("deserialize");

    assert_eq!(config, restored);
}

#[test]
fn minimal_json_applies_field_defaults() {
    let restored =
        CalendarEngineConfig::from_json_str(r#"{ "selection_type": "double" }"#).expect("config");

    assert!(restored.required);
    assert_eq!(restored.input_format, "%B %-d, %Y");
    assert_eq!(restored.presets, PresetSource::BuiltIn);
}

#[test]
fn inverted_bounds_are_rejected_at_construction() {
    let config = CalendarEngineConfig::new(SelectionType::Double)
        .with_bounds(d(2020, 12, 31), d(2020, 1, 1));

    let err = CalendarEngine::new(NullRenderer::default(), config)
        .err()
        .expect("construction must fail");
    assert!(matches!(err, CalendarError::InvalidBounds { .. }));
}

#[test]
fn malformed_patterns_are_rejected_at_construction() {
    let config = CalendarEngineConfig::new(SelectionType::Double).with_input_format("%Q");

    let err = CalendarEngine::new(NullRenderer::default(), config)
        .err()
        .expect("construction must fail");
    assert!(matches!(
        err,
        CalendarError::InvalidFormat { field: "input", .. }
    ));
}

#[test]
fn default_bounds_span_1900_to_2900() {
    let config = CalendarEngineConfig::new(SelectionType::Double)
        .with_start_date(d(2020, 6, 1))
        .with_end_date(d(2020, 6, 20));
    let engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.bounds().earliest(), d(1900, 1, 1));
    assert_eq!(engine.bounds().latest(), d(2900, 12, 31));
}

#[test]
fn double_defaults_to_a_one_month_window_ending_today() {
    let config = CalendarEngineConfig::new(SelectionType::Double);
    let engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    let start = engine.start_date().expect("default start");
    let end = engine.end_date().expect("default end");
    assert!(start < end);
    assert!(engine.bounds().contains(start));
    assert!(engine.bounds().contains(end));
}

#[test]
fn initial_dates_are_clamped_into_bounds() {
    let config = CalendarEngineConfig::new(SelectionType::Double)
        .with_bounds(d(2020, 1, 1), d(2020, 12, 31))
        .with_start_date(d(2019, 6, 1))
        .with_end_date(d(2021, 6, 1));
    let engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.start_date(), Some(d(2020, 1, 1)));
    assert_eq!(engine.end_date(), Some(d(2020, 12, 31)));
}

#[test]
fn wrong_weekday_label_count_falls_back_to_defaults() {
    let config = CalendarEngineConfig::new(SelectionType::Double)
        .with_start_date(d(2020, 6, 1))
        .with_end_date(d(2020, 6, 20))
        .with_weekday_labels(vec!["a".into(), "b".into()]);
    let engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    let frame = engine.frame();
    assert_eq!(frame.weekday_labels.len(), 7);
    assert_eq!(frame.weekday_labels[0], "Su");
}

#[test]
fn week_start_rotates_the_weekday_labels() {
    let config = CalendarEngineConfig::new(SelectionType::Double)
        .with_start_date(d(2020, 6, 1))
        .with_end_date(d(2020, 6, 20))
        .with_week_start(Weekday::Mon);
    let engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    let labels = engine.frame().weekday_labels;
    assert_eq!(labels[0], "Mo");
    assert_eq!(labels[6], "Su");
}

#[test]
fn single_type_forces_presets_off() {
    let config = CalendarEngineConfig::new(SelectionType::Single)
        .with_current_date(d(2020, 6, 10))
        .with_presets(PresetSource::BuiltIn);
    let engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    assert!(engine.resolved_presets().is_empty());
    assert!(engine.frame().presets.is_empty());
}

#[test]
fn placeholder_defaults_to_the_input_pattern() {
    let config = CalendarEngineConfig::new(SelectionType::Single);
    let engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.frame().placeholder, "%B %-d, %Y");
}

#[test]
fn single_field_starts_empty_without_an_explicit_current_date() {
    let config = CalendarEngineConfig::new(SelectionType::Single);
    let engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    assert!(engine.frame().current_text.is_empty());
    assert!(engine.current_date().is_some());
}

#[test]
fn render_through_the_null_renderer_records_frame_stats() {
    let config = CalendarEngineConfig::new(SelectionType::Double)
        .with_bounds(d(2020, 1, 1), d(2020, 12, 31))
        .with_start_date(d(2020, 6, 1))
        .with_end_date(d(2020, 6, 20));
    let mut engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.open(daterange_rs::interaction::ActiveField::Start);
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_cell_count, 42);
}

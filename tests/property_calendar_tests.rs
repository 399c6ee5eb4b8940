use chrono::{NaiveDate, Weekday};
use daterange_rs::api::{CalendarEngine, CalendarEngineConfig};
use daterange_rs::core::{
    DateBounds, GRID_CELLS, build_month_grid, date_math, default_presets, resolve_presets,
};
use daterange_rs::interaction::{ActiveField, SelectionType};
use daterange_rs::render::NullRenderer;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2900, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid generated date")
    })
}

fn bounds_strategy() -> impl Strategy<Value = DateBounds> {
    (date_strategy(), 0u32..3650).prop_map(|(earliest, span_days)| {
        let latest = date_math::add(earliest, span_days, daterange_rs::core::DateUnit::Day);
        DateBounds::new(earliest, latest).expect("valid generated bounds")
    })
}

proptest! {
    #[test]
    fn clamp_always_lands_inside_bounds(date in date_strategy(), bounds in bounds_strategy()) {
        let clamped = bounds.clamp(date);
        prop_assert!(bounds.contains(clamped));
        prop_assert_eq!(bounds.clamp(clamped), clamped);
    }

    #[test]
    fn grid_is_always_42_consecutive_cells(
        reference in date_strategy(),
        bounds in bounds_strategy()
    ) {
        let cells = build_month_grid(reference, None, None, None, bounds, Weekday::Sun);

        prop_assert_eq!(cells.len(), GRID_CELLS);
        for window in cells.windows(2) {
            prop_assert_eq!(
                window[1].date,
                window[0].date.succ_opt().expect("next day")
            );
        }
        for cell in &cells {
            prop_assert_eq!(cell.is_outside_bounds, !bounds.contains(cell.date));
        }
    }

    #[test]
    fn resolved_presets_never_leave_bounds(anchor in date_strategy(), bounds in bounds_strategy()) {
        let resolved = resolve_presets(
            &default_presets(anchor, bounds),
            bounds,
            "%b %-d, %Y",
        );

        for preset in &resolved {
            prop_assert!(bounds.contains(preset.start), "{} start", preset.label);
            prop_assert!(bounds.contains(preset.end), "{} end", preset.label);
        }
    }

    #[test]
    fn format_parse_round_trip(date in date_strategy()) {
        for pattern in ["%B %-d, %Y", "%Y-%m-%d"] {
            let text = date_math::format(date, pattern);
            let parsed = date_math::parse(&text, pattern).expect("round trip parse");
            prop_assert_eq!(parsed, date);
            prop_assert_eq!(date_math::format(parsed, pattern), text);
        }
    }

    #[test]
    fn check_dates_is_idempotent_for_arbitrary_typed_input(
        typed in date_strategy(),
        start_offset in 0u32..200,
    ) {
        let earliest = NaiveDate::from_ymd_opt(2020, 1, 1).expect("date");
        let latest = NaiveDate::from_ymd_opt(2020, 12, 31).expect("date");

        let config = CalendarEngineConfig::new(SelectionType::Double)
            .with_bounds(earliest, latest)
            .with_start_date(date_math::add(
                earliest,
                start_offset,
                daterange_rs::core::DateUnit::Day,
            ))
            .with_end_date(date_math::add(
                earliest,
                start_offset + 10,
                daterange_rs::core::DateUnit::Day,
            ));
        let mut engine =
            CalendarEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.set_reference_today(NaiveDate::from_ymd_opt(2020, 6, 15).expect("date"));

        engine.open(ActiveField::Start);
        engine.set_field_text(ActiveField::Start, typed.format("%Y-%m-%d").to_string());

        engine.check_dates();
        let first = (engine.start_date(), engine.end_date(), engine.current_date());

        engine.check_dates();
        let second = (engine.start_date(), engine.end_date(), engine.current_date());

        prop_assert_eq!(first, second);

        // Whatever the repair did, the committed range is ordered and bounded.
        if let (Some(start), Some(end)) = (engine.start_date(), engine.end_date()) {
            prop_assert!(start <= end);
            prop_assert!(engine.bounds().contains(start));
            prop_assert!(engine.bounds().contains(end));
        }
    }
}

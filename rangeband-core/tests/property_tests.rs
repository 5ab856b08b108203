//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Scale mapping round-trips and stays monotone on both scales
//! 2. Percent extrapolation — out-of-range percents map past the bounds
//! 3. Snapping always lands on a marker and is idempotent
//! 4. The ordering gate never produces an inverted selection
//! 5. Rejected updates leave the selection untouched
//! 6. Accepted updates report exactly the stored selection
//! 7. Currency formatting keeps whole thousands and plain amounts lossless

use proptest::prelude::*;
use rangeband_core::{
    apply_update, compact_currency, Bounds, Markers, Scale, Selection, SliderConfig, SliderState,
    Thumb, UpdateOutcome,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_scale() -> impl Strategy<Value = Scale> {
    prop_oneof![Just(Scale::Linear), Just(Scale::Log)]
}

/// Positive bounds with a healthy span, valid for both scales.
fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (1.0..100_000.0_f64, 10.0..10_000.0_f64).prop_map(|(min, factor)| Bounds::new(min, min * factor))
}

/// Strictly ascending marker values, at least two of them.
fn arb_marker_values() -> impl Strategy<Value = Vec<f64>> {
    (
        1.0..100_000.0_f64,
        prop::collection::vec(1.0..1_000_000.0_f64, 1..12),
    )
        .prop_map(|(start, deltas)| {
            let mut values = vec![start];
            let mut acc = start;
            for delta in deltas {
                acc += delta;
                values.push(acc);
            }
            values
        })
}

// ── 1. Scale round-trip and monotonicity ─────────────────────────────

proptest! {
    /// value_at(percent_of(v)) returns to v on both scales.
    #[test]
    fn scale_roundtrip(scale in arb_scale(), bounds in arb_bounds(), t in 0.0..=1.0_f64) {
        let v = bounds.min + bounds.span() * t;
        let percent = scale.percent_of(bounds, v);
        prop_assert!(percent >= -1e-9 && percent <= 100.0 + 1e-9,
            "in-bounds value mapped outside the track: {percent}");

        let back = scale.value_at(bounds, percent);
        prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0),
            "round-trip drifted: {v} -> {percent} -> {back}");
    }

    /// Separated values keep their order after mapping to percent.
    #[test]
    fn percent_is_monotone(
        scale in arb_scale(),
        bounds in arb_bounds(),
        t1 in 0.0..0.98_f64,
        gap in 0.02..1.0_f64,
    ) {
        let t2 = (t1 + gap).min(1.0);
        let v1 = bounds.min + bounds.span() * t1;
        let v2 = bounds.min + bounds.span() * t2;
        prop_assert!(
            scale.percent_of(bounds, v1) < scale.percent_of(bounds, v2),
            "percent ordering flipped for {v1} < {v2}"
        );
    }
}

// ── 2. Extrapolation past the track ──────────────────────────────────

proptest! {
    /// Percents beyond 100 map past max instead of being clipped. Callers
    /// clamp or snap afterwards; the mapping itself stays exact.
    #[test]
    fn percent_past_track_extrapolates(scale in arb_scale(), bounds in arb_bounds(), over in 101.0..300.0_f64) {
        prop_assert!(scale.value_at(bounds, over) > bounds.max);
        prop_assert!(scale.value_at(bounds, -(over - 100.0)) < bounds.min);
    }
}

// ── 3. Snapping ──────────────────────────────────────────────────────

proptest! {
    /// The snapped value is always one of the markers, and snapping a
    /// marker returns it unchanged.
    #[test]
    fn snap_lands_on_a_marker(values in arb_marker_values(), raw in -1e6..1e7_f64) {
        let markers = Markers::new(values.clone()).unwrap();
        let snapped = markers.snap(raw);
        prop_assert!(values.contains(&snapped), "{snapped} is not a marker");
        prop_assert_eq!(markers.snap(snapped), snapped, "snap is not idempotent");
    }
}

// ── 4–6. The ordering gate ───────────────────────────────────────────

proptest! {
    /// The pure gate: accepted updates keep low < high, rejected ones
    /// change nothing.
    #[test]
    fn gate_never_inverts(
        low in 0.0..50.0_f64,
        high in 50.0..100.0_f64,
        to_low in prop::bool::ANY,
        candidate in -100.0..200.0_f64,
    ) {
        let current = Selection::new(low, high);
        let thumb = if to_low { Thumb::Low } else { Thumb::High };
        match apply_update(current, thumb, candidate) {
            UpdateOutcome::Accepted(next) => prop_assert!(next.low < next.high),
            UpdateOutcome::Rejected => {
                // The only rejections are sibling crossings.
                match thumb {
                    Thumb::Low => prop_assert!(candidate >= current.high),
                    Thumb::High => prop_assert!(candidate <= current.low),
                }
            }
        }
    }

    /// A marked slider driven by arbitrary entries: the selection is
    /// always two distinct markers in order, every accepted update
    /// reports the stored selection and every rejection leaves it alone.
    #[test]
    fn marked_slider_stays_ordered(
        values in arb_marker_values(),
        ops in prop::collection::vec((prop::bool::ANY, 0usize..32, -1e6..1e7_f64), 1..40),
    ) {
        let bounds = Bounds::new(values[0], *values.last().unwrap());
        let initial = Selection::new(values[0], *values.last().unwrap());
        let config = SliderConfig::new("Deck", bounds, Scale::Log, Some(values.clone()), initial)
            .unwrap();
        let mut state = SliderState::new(config);

        for (to_low, pick, raw) in ops {
            let wanted = if to_low { Thumb::Low } else { Thumb::High };
            if state.active_thumb() != wanted {
                state.toggle_thumb();
            }
            // Half the entries aim at a marker, half are raw values.
            let entry = if pick % 2 == 0 { values[pick % values.len()] } else { raw };

            let before = state.selection();
            match state.set_active_value(entry) {
                Some(next) => prop_assert_eq!(next, state.selection()),
                None => prop_assert_eq!(before, state.selection()),
            }

            let sel = state.selection();
            prop_assert!(sel.low < sel.high);
            prop_assert!(values.contains(&sel.low), "low {} left the marker set", sel.low);
            prop_assert!(values.contains(&sel.high), "high {} left the marker set", sel.high);
        }
    }

    /// A plain slider clamps instead of snapping but obeys the same
    /// ordering rules.
    #[test]
    fn plain_slider_stays_ordered(
        ops in prop::collection::vec((prop::bool::ANY, -50.0..150.0_f64), 1..40),
    ) {
        let config = SliderConfig::new(
            "Plain",
            Bounds::new(0.0, 100.0),
            Scale::Linear,
            None,
            Selection::new(25.0, 75.0),
        )
        .unwrap();
        let mut state = SliderState::new(config);

        for (to_low, raw) in ops {
            let wanted = if to_low { Thumb::Low } else { Thumb::High };
            if state.active_thumb() != wanted {
                state.toggle_thumb();
            }
            let _ = state.set_active_value(raw);

            let sel = state.selection();
            prop_assert!(sel.low < sel.high);
            prop_assert!(sel.low >= 0.0 && sel.high <= 100.0);
        }
    }
}

// ── 7. Formatting ────────────────────────────────────────────────────

proptest! {
    /// Whole thousands below a million render as `<symbol><n>K` exactly.
    #[test]
    fn whole_thousands_are_lossless(n in 1..1000_i64) {
        let rendered = compact_currency("€", (n * 1000) as f64);
        prop_assert_eq!(rendered, format!("€{n}K"));
    }

    /// Non-round amounts keep all their digits, just grouped.
    #[test]
    fn plain_amounts_keep_their_digits(n in 1000..1_000_000_i64) {
        prop_assume!(n % 1000 != 0);
        let rendered = compact_currency("€", n as f64);
        prop_assert!(!rendered.ends_with('K') && !rendered.ends_with('M'));
        let digits: String = rendered.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(digits, n.to_string());
    }

    /// Millions always collapse to the M suffix.
    #[test]
    fn millions_use_the_m_suffix(v in 1_000_000.0..100_000_000.0_f64) {
        let rendered = compact_currency("€", v);
        prop_assert!(rendered.starts_with('€'));
        prop_assert!(rendered.ends_with('M'));
    }
}

use proptest::prelude::*;
use sealkit_designer::{
    circular_span, layout_circular_text, layout_elliptical_arc, layout_elliptical_text, TextBand,
};

fn band() -> impl Strategy<Value = TextBand> {
    prop_oneof![Just(TextBand::Top), Just(TextBand::Bottom)]
}

proptest! {
    #[test]
    fn circular_one_placement_per_char(text in "\\PC{0,30}", r in 1.0f64..500.0, band in band()) {
        let glyphs = layout_circular_text(&text, 0.0, 0.0, r, band);
        prop_assert_eq!(glyphs.len(), text.chars().count());
        for (g, c) in glyphs.iter().zip(text.chars()) {
            prop_assert_eq!(g.character, c);
        }
    }

    #[test]
    fn circular_angles_increase(text in "[a-z0-9]{2,30}", band in band()) {
        let glyphs = layout_circular_text(&text, 150.0, 150.0, 100.0, band);
        for pair in glyphs.windows(2) {
            prop_assert!(pair[1].arc_angle_degrees > pair[0].arc_angle_degrees);
        }
        let span = circular_span(glyphs.len());
        let first = glyphs[0].arc_angle_degrees;
        let last = glyphs[glyphs.len() - 1].arc_angle_degrees;
        prop_assert!(last - first < span);
    }

    #[test]
    fn circular_odd_middle_on_center(half in 0usize..15, band in band()) {
        let text = "字".repeat(2 * half + 1);
        let glyphs = layout_circular_text(&text, 0.0, 0.0, 80.0, band);
        prop_assert_eq!(glyphs[half].arc_angle_degrees, band.center_degrees());
    }

    #[test]
    fn circular_glyphs_on_circle(text in "[A-Z]{1,20}", r in 1.0f64..500.0) {
        for g in layout_circular_text(&text, 10.0, -20.0, r, TextBand::Top) {
            let d = (g.position.x - 10.0).hypot(g.position.y + 20.0);
            prop_assert!((d - r).abs() <= 1e-9 * r.max(1.0));
        }
    }

    #[test]
    fn elliptical_equal_axes_match_circle(text in "[A-Z]{1,12}", r in 10.0f64..500.0) {
        let span = circular_span(text.chars().count());
        let circle = layout_circular_text(&text, 0.0, 0.0, r, TextBand::Top);
        let oval = layout_elliptical_arc(&text, 0.0, 0.0, r, r, span).unwrap();
        for (c, o) in circle.iter().zip(&oval) {
            prop_assert!((c.position.x - o.position.x).abs() <= 1e-9 * r);
            prop_assert!((c.position.y - o.position.y).abs() <= 1e-9 * r);
        }
    }

    #[test]
    fn elliptical_stays_on_upper_arc(text in "[A-Z]{1,20}", rx in 10.0f64..500.0, ry in 10.0f64..500.0) {
        let glyphs = layout_elliptical_text(&text, 0.0, 0.0, rx, ry).unwrap();
        prop_assert_eq!(glyphs.len(), text.len());
        for g in glyphs {
            prop_assert!(g.position.y < 0.0);
            prop_assert!(g.rotation_degrees.abs() < 90.0);
        }
    }
}

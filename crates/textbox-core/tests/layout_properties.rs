//! Property tests for box sizing and text placement

use proptest::prelude::*;
use textbox_core::{
    error::MetricsError,
    layout::{compute_layout, layout_from_metrics},
    types::{Align, Alignment, BoxSizeMode, FontStyle, VerticalAlign},
    FontDescriptor, MetricsProvider, TextMetrics,
};

/// Mock metrics: fixed width per character
struct PerCharMetrics {
    advance: f32,
}

impl MetricsProvider for PerCharMetrics {
    fn name(&self) -> &'static str {
        "per-char"
    }

    fn measure(&self, _font: &str, text: &str) -> Result<TextMetrics, MetricsError> {
        Ok(TextMetrics {
            width: text.chars().count() as f32 * self.advance,
            height: 0.0,
        })
    }
}

fn alignment() -> impl Strategy<Value = Alignment> {
    (
        prop_oneof![Just(Align::Left), Just(Align::Center), Just(Align::Right)],
        prop_oneof![
            Just(VerticalAlign::Top),
            Just(VerticalAlign::Middle),
            Just(VerticalAlign::Bottom)
        ],
    )
        .prop_map(|(h, v)| Alignment::new(h, v))
}

fn measured() -> impl Strategy<Value = TextMetrics> {
    (0.0f32..500.0, 0u32..96).prop_map(|(width, height)| TextMetrics {
        width,
        height: height as f32,
    })
}

// Property: Auto boxes are the measured text plus padding
proptest! {
    #[test]
    fn prop_auto_box_is_text_plus_padding(
        text in measured(),
        padding in 0.0f32..64.0,
        align in alignment(),
    ) {
        let layout = layout_from_metrics(text, BoxSizeMode::Auto, BoxSizeMode::Auto, padding, align);
        prop_assert_eq!(layout.box_width, text.width + padding);
        prop_assert_eq!(layout.box_height, text.height + padding);
    }
}

// Property: Fixed boxes ignore the text entirely
proptest! {
    #[test]
    fn prop_fixed_box_ignores_text(
        text in measured(),
        width in 0.0f32..400.0,
        height in 0.0f32..400.0,
        padding in 0.0f32..64.0,
        align in alignment(),
    ) {
        let layout = layout_from_metrics(
            text,
            BoxSizeMode::Fixed(width),
            BoxSizeMode::Fixed(height),
            padding,
            align,
        );
        prop_assert_eq!(layout.box_width, width + padding);
        prop_assert_eq!(layout.box_height, height + padding);
    }
}

// Property: Nothing is clipped while both axes follow the text
proptest! {
    #[test]
    fn prop_auto_never_clips(text in measured(), padding in 0.0f32..64.0, align in alignment()) {
        let layout = layout_from_metrics(text, BoxSizeMode::Auto, BoxSizeMode::Auto, padding, align);
        prop_assert!(!layout.should_clip);
    }
}

// Property: A fixed width narrower than the text always clips
proptest! {
    #[test]
    fn prop_narrow_fixed_width_clips(
        text_width in 1.0f32..500.0,
        shortfall in 0.01f32..1.0,
        padding in 0.0f32..64.0,
    ) {
        let text = TextMetrics { width: text_width, height: 12.0 };
        let layout = layout_from_metrics(
            text,
            BoxSizeMode::Fixed(text_width * (1.0 - shortfall) - 0.001),
            BoxSizeMode::Auto,
            padding,
            Alignment::default(),
        );
        prop_assert!(layout.should_clip);
    }
}

// Property: Re-laying out identical inputs is bit-identical
proptest! {
    #[test]
    fn prop_layout_is_deterministic(
        text in "[ -~]{0,40}",
        size in 1u32..72,
        padding in 0.0f32..32.0,
        align in alignment(),
    ) {
        let metrics = PerCharMetrics { advance: 7.25 };
        let font = FontDescriptor::new(FontStyle::Normal, size as f32, "Calibri");
        let run = || {
            compute_layout(
                &metrics,
                &text,
                &font,
                BoxSizeMode::Auto,
                BoxSizeMode::Fixed(40.0),
                padding,
                align,
            )
            .unwrap()
        };
        let (a, b) = (run(), run());
        prop_assert_eq!(a.dx.to_bits(), b.dx.to_bits());
        prop_assert_eq!(a.dy.to_bits(), b.dy.to_bits());
        prop_assert_eq!(a, b);
    }
}

// Property: Text height is always the whole-point font size
proptest! {
    #[test]
    fn prop_height_is_truncated_font_size(size in 0.0f32..200.0) {
        let metrics = PerCharMetrics { advance: 5.0 };
        let font = FontDescriptor::new(FontStyle::Bold, size, "Calibri");
        let layout = compute_layout(
            &metrics,
            "abc",
            &font,
            BoxSizeMode::Auto,
            BoxSizeMode::Auto,
            0.0,
            Alignment::default(),
        )
        .unwrap();
        prop_assert_eq!(layout.text_height, size.trunc());
    }
}

#[test]
fn test_scenario_left_top_auto() {
    let layout = layout_from_metrics(
        TextMetrics {
            width: 10.0,
            height: 12.0,
        },
        BoxSizeMode::Auto,
        BoxSizeMode::Auto,
        0.0,
        Alignment::new(Align::Left, VerticalAlign::Top),
    );

    assert_eq!(layout.box_width, 10.0);
    assert_eq!(layout.box_height, 12.0);
    assert_eq!(layout.dx, 0.0);
    assert_eq!(layout.dy, 6.0);
    assert!(!layout.should_clip);
}

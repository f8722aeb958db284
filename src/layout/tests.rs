use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

const SCREEN: Size = Size::new(320.0, 568.0);

/// Measurer that reports a fixed height for any text
struct FixedMeasurer(f64);

impl TextMeasurer for FixedMeasurer {
    fn measure_height(&self, _text: &str, _font: &Font, _max_width: f64) -> f64 {
        self.0
    }
}

fn font() -> Font {
    Font::regular("HelveticaNeue", 15.0)
}

fn content<'a>(
    title: Option<&'a str>,
    message: Option<&'a str>,
    font: &'a Font,
    button_count: usize,
) -> LayoutContent<'a> {
    LayoutContent {
        title,
        message,
        message_font: font,
        button_count,
        button_height: 44.0,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_empty_alert_is_two_paddings_tall() {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(None, None, &font, 0),
        &FixedMeasurer(0.0),
    );

    assert!(approx(layout.panel.height(), PADDING * 2.0));
    assert!(layout.title.is_none());
    assert!(layout.message.is_none());
    assert!(layout.buttons.is_empty());
}

#[test]
fn test_title_and_one_button() {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(Some("Alert"), None, &font, 1),
        &FixedMeasurer(0.0),
    );

    assert!(approx(layout.panel.height(), 109.0));
    assert_eq!(layout.title, Some(Region::new(15.0, 15.0, 240.0, 20.0)));
    assert_eq!(layout.buttons, vec![Region::new(15.0, 50.0, 240.0, 44.0)]);
}

#[test]
fn test_empty_strings_omit_regions() {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(Some(""), Some(""), &font, 0),
        &FixedMeasurer(40.0),
    );

    assert!(layout.title.is_none());
    assert!(layout.message.is_none());
    assert!(approx(layout.panel.height(), 30.0));
}

#[test]
fn test_message_height_is_rounded_up() {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(None, Some("Hello"), &font, 0),
        &FixedMeasurer(36.2),
    );

    assert_eq!(layout.message, Some(Region::new(15.0, 15.0, 240.0, 37.0)));
    assert!(approx(layout.panel.height(), 15.0 + 37.0 + 15.0 + 15.0));
}

#[test]
fn test_regions_follow_registration_order() {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(Some("Title"), Some("Body"), &font, 3),
        &FixedMeasurer(18.0),
    );

    let title = layout.title.unwrap_or_default();
    let message = layout.message.unwrap_or_default();
    assert!(title.max_y() < message.y());
    assert!(message.max_y() < layout.buttons[0].y());
    for pair in layout.buttons.windows(2) {
        assert!(approx(pair[1].y() - pair[0].max_y(), BUTTON_MARGIN));
    }
}

#[test]
fn test_panel_is_centered() {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(Some("Alert"), None, &font, 1),
        &FixedMeasurer(0.0),
    );

    assert!(approx(layout.panel.x(), 25.0));
    assert!(approx(layout.panel.y(), (568.0 - 109.0) / 2.0));
    assert_eq!(layout.panel.center(), layout.overlay.center());
}

#[test]
fn test_fixed_bounds_landscape_lays_out_on_swapped_bounds() {
    let font = font();
    let screen = Screen::fixed_bounds(SCREEN, Orientation::LandscapeLeft);
    let layout = compute(&screen, &content(Some("Alert"), None, &font, 1), &FixedMeasurer(0.0));

    assert_eq!(layout.overlay.size, Size::new(568.0, 320.0));
    assert!(approx(layout.panel.x(), (568.0 - 270.0) / 2.0));
}

#[test]
fn test_overflow_shrinks_only_the_message() {
    let font = font();
    let screen = Screen::new(Size::new(320.0, 200.0));
    let layout = compute(
        &screen,
        &content(Some("Title"), Some("Long"), &font, 1),
        &FixedMeasurer(300.0),
    );

    assert!(approx(layout.panel.height(), 200.0));
    assert!(approx(layout.message_content_height, 300.0));
    let message = layout.message.unwrap_or_default();
    assert!(approx(layout.message_overflow(), 300.0 - message.height()));
    assert!(approx(layout.buttons[0].height(), 44.0));
    assert!(approx(layout.panel.y(), 0.0));
}

#[test]
fn test_fitting_message_has_no_overflow() {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(None, Some("Short"), &font, 1),
        &FixedMeasurer(18.0),
    );
    assert!(approx(layout.message_overflow(), 0.0));
}

#[test]
fn test_button_at_uses_overlay_coordinates() {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(None, None, &font, 2),
        &FixedMeasurer(0.0),
    );

    let second = layout.absolute(layout.buttons[1]);
    assert_eq!(layout.button_at(second.center()), Some(1));
    assert_eq!(layout.button_at(layout.panel.origin), None);
}

#[rstest]
#[case(false, false, 0, 30.0)]
#[case(true, false, 0, 65.0)]
#[case(false, false, 1, 74.0)]
#[case(false, false, 2, 128.0)]
#[case(true, true, 2, 15.0 + 35.0 + 33.0 + 44.0 + 10.0 + 44.0 + 15.0)]
fn test_panel_height_table(
    #[case] has_title: bool,
    #[case] has_message: bool,
    #[case] buttons: usize,
    #[case] expected: f64,
) {
    let font = font();
    let layout = compute(
        &Screen::new(SCREEN),
        &content(
            has_title.then_some("Title"),
            has_message.then_some("Message"),
            &font,
            buttons,
        ),
        &FixedMeasurer(18.0),
    );
    assert!(
        approx(layout.panel.height(), expected),
        "height {} != {expected}",
        layout.panel.height()
    );
}

proptest! {
    #[test]
    fn prop_panel_height_matches_formula(
        has_title in any::<bool>(),
        has_message in any::<bool>(),
        message_height in 0u32..200,
        buttons in 0usize..8,
        button_height in 20u32..80,
    ) {
        let font = font();
        let content = LayoutContent {
            title: has_title.then_some("Title"),
            message: has_message.then_some("Message"),
            message_font: &font,
            button_count: buttons,
            button_height: f64::from(button_height),
        };
        let screen = Screen::new(Size::new(320.0, 10_000.0));
        let layout = compute(&screen, &content, &FixedMeasurer(f64::from(message_height)));

        let mut expected = PADDING * 2.0;
        if has_title {
            expected += TITLE_HEIGHT + PADDING;
        }
        if has_message {
            expected += f64::from(message_height) + PADDING;
        }
        if buttons > 0 {
            let count = f64::from(u32::try_from(buttons).unwrap_or(0));
            expected += count * f64::from(button_height) + (count - 1.0) * BUTTON_MARGIN;
        }

        prop_assert!(approx(layout.panel.height(), expected));
        prop_assert!(approx(layout.panel.width(), PANEL_WIDTH));
        prop_assert_eq!(layout.buttons.len(), buttons);
    }
}

//! Integration tests for the alert lifecycle through the public API
//!
//! Drives alerts the way a host does: register actions, present, feed
//! elapsed time, lay out for a screen and route input.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use modal_alert::animation::AnimationTiming;
use modal_alert::controller::{IgnoreReason, LifecycleEvent};
use modal_alert::layout::{Orientation, Screen, Size};
use modal_alert::{
    ActionStyle, AlertAction, AlertController, AlertError, AlertStyle, App, Config,
    ControllerStyle, Phase, Rgba, TapOutcome, image_from_color,
};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use rstest::rstest;
use tempfile::TempDir;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn logging_action(title: &str, style: ActionStyle, log: &Rc<RefCell<Vec<String>>>) -> AlertAction {
    let log = Rc::clone(log);
    AlertAction::new(title, style)
        .with_handler(move |action| log.borrow_mut().push(action.title().to_string()))
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_full_lifecycle_runs_one_handler() -> Result<(), AlertError> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut alert = AlertController::new(
        Some("Discard draft?"),
        Some("The draft has not been saved."),
        ControllerStyle::Alert,
    );
    alert.add_action(logging_action("Discard", ActionStyle::Destructive, &log))?;
    alert.add_action(logging_action("Keep", ActionStyle::Cancel, &log))?;
    assert_eq!(
        alert.add_action(logging_action("Back", ActionStyle::Cancel, &log)),
        Err(AlertError::DuplicateCancelAction { existing: 1 })
    );

    alert.present()?;
    let screen = Screen::new(Size::new(375.0, 667.0));
    assert!(alert.layout(&screen).is_some());

    // Frames at roughly 60 Hz until the appearance completes
    let frame = Duration::from_millis(16);
    let mut frames = 0;
    while alert.tick(frame) != Some(LifecycleEvent::BecameVisible) {
        assert_eq!(
            alert.tap(0)?,
            TapOutcome::Ignored(IgnoreReason::NotVisible(Phase::Appearing))
        );
        frames += 1;
        assert!(frames < 100);
    }
    assert!(approx(alert.visual().panel_scale, 1.0));
    assert!(approx(alert.visual().view_alpha, 1.0));

    assert_eq!(alert.tap(0)?, TapOutcome::Dismissing { index: 0 });
    assert_eq!(alert.tap(1)?, TapOutcome::Ignored(IgnoreReason::NotVisible(Phase::Dismissing)));

    let mut disposed = false;
    for _ in 0..100 {
        if alert.tick(frame) == Some(LifecycleEvent::Disposed) {
            disposed = true;
            break;
        }
    }
    assert!(disposed);
    assert_eq!(alert.phase(), Phase::Disposed);
    assert_eq!(*log.borrow(), vec!["Discard".to_string()]);
    assert!(alert.buttons().is_empty());
    Ok(())
}

#[test]
fn test_app_routes_keys_to_taps() -> Result<(), AlertError> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let style = AlertStyle {
        animation: AnimationTiming::instant(),
        ..AlertStyle::default()
    };
    let mut alert =
        AlertController::new(Some("Continue?"), None, ControllerStyle::Alert).with_style(style);
    alert.add_action(logging_action("Yes", ActionStyle::Default, &log))?;
    alert.add_action(logging_action("No", ActionStyle::Cancel, &log))?;

    let mut app = App::new(alert, &Config::default());
    app.present()?;
    app.tick(Duration::ZERO);
    app.resize(Rect::new(0, 0, 80, 24));

    app.handle_key(KeyCode::Tab, KeyModifiers::NONE)?;
    app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE)?;
    assert_eq!(app.chosen_title(), Some("No"));

    app.tick(Duration::ZERO);
    assert!(app.should_quit);
    assert_eq!(*log.borrow(), vec!["No".to_string()]);
    Ok(())
}

// =============================================================================
// Layout
// =============================================================================

#[rstest]
#[case::empty(None, 0, 30.0)]
#[case::title_only(Some("Alert"), 0, 65.0)]
#[case::title_and_button(Some("Alert"), 1, 109.0)]
#[case::two_buttons(None, 2, 128.0)]
fn test_panel_height_without_message(
    #[case] title: Option<&str>,
    #[case] buttons: usize,
    #[case] expected: f64,
) -> Result<(), AlertError> {
    let mut alert = AlertController::new(title, None, ControllerStyle::Alert);
    for i in 0..buttons {
        alert.add_action(AlertAction::new(format!("Button {i}"), ActionStyle::Default))?;
    }
    let height = alert
        .layout(&Screen::new(Size::new(320.0, 568.0)))
        .map_or(0.0, |layout| layout.panel.height());
    assert!(approx(height, expected), "height {height} != {expected}");
    Ok(())
}

#[test]
fn test_legacy_landscape_screen_swaps_bounds() {
    let mut alert = AlertController::new(Some("Alert"), None, ControllerStyle::Alert);
    let screen = Screen::fixed_bounds(Size::new(320.0, 568.0), Orientation::LandscapeLeft);

    let layout = alert.layout(&screen).cloned();
    let overlay = layout.as_ref().map(|layout| layout.overlay);
    assert!(overlay.is_some_and(|o| approx(o.width(), 568.0) && approx(o.height(), 320.0)));

    let panel = layout.map(|layout| layout.panel);
    assert!(panel.is_some_and(|p| approx(p.x(), (568.0 - 270.0) / 2.0)));
}

#[test]
fn test_overflowing_message_shrinks_to_fit() -> Result<(), AlertError> {
    let message = "A very long message that keeps going. ".repeat(60);
    let mut alert = AlertController::new(Some("Terms"), Some(&message), ControllerStyle::Alert);
    alert.add_action(AlertAction::new("Accept", ActionStyle::Default))?;
    alert.add_action(AlertAction::new("Decline", ActionStyle::Cancel))?;

    let layout = alert
        .layout(&Screen::new(Size::new(320.0, 480.0)))
        .cloned()
        .ok_or(AlertError::NotVisible)?;

    assert!(approx(layout.panel.height(), 480.0));
    assert!(approx(layout.panel.y(), 0.0));
    assert!(layout.message_overflow() > 0.0);
    assert_eq!(layout.buttons.len(), 2);
    assert!(layout.buttons.iter().all(|b| approx(b.height(), 44.0)));
    Ok(())
}

// =============================================================================
// Styling
// =============================================================================

#[test]
fn test_image_from_color_is_single_pixel() {
    let color = Rgba::rgba(12, 34, 56, 78);
    let image = image_from_color(color);
    assert_eq!((image.width(), image.height()), (1, 1));
    assert_eq!(image.pixel(0, 0), Some(color));
    assert_eq!(image.pixel(1, 0), None);
}

#[test]
fn test_config_style_reaches_buttons() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r##"{"style": {"button_height": 30, "buttons": {"destructive": {"normal": "#112233", "highlighted": "#445566"}}}}"##,
    )?;
    let config = Config::load_from(&path)?;

    let mut alert =
        AlertController::new(None, None, ControllerStyle::Alert).with_style(config.style);
    alert.add_action(AlertAction::new("Erase", ActionStyle::Destructive))?;
    alert.present()?;

    assert_eq!(alert.buttons()[0].fill(false), Rgba::rgb(0x11, 0x22, 0x33));
    assert_eq!(alert.buttons()[0].fill(true), Rgba::rgb(0x44, 0x55, 0x66));
    let height = alert
        .layout(&Screen::new(Size::new(320.0, 568.0)))
        .map_or(0.0, |layout| layout.panel.height());
    assert!(approx(height, 60.0));
    Ok(())
}

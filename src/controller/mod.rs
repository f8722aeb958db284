//! The alert presenter
//!
//! An [`AlertController`] is built with a title and message, populated with
//! actions and then presented once. From there it moves through a fixed
//! sequence of phases:
//!
//! ```text
//! Unpresented --present--> Appearing --(grow, settle)--> Visible
//!                                                          |
//!                                                   tap / dismiss
//!                                                          v
//!                              Disposed <--(fade out)-- Dismissing
//! ```
//!
//! Buttons only react in `Visible`; taps in any other phase are ignored.

mod button;

pub use button::AlertButton;

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::action::{ActionStyle, AlertAction};
use crate::animation::{AnimationEvent, Animator, VisualState};
use crate::config::AlertStyle;
use crate::error::AlertError;
use crate::layout::{self, AlertLayout, LayoutContent, MonospaceMeasurer, Point, Screen, TextMeasurer};

/// Presentation style requested at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerStyle {
    /// Centered alert panel
    #[default]
    Alert,
}

/// Lifecycle phase of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Built and configurable, not yet shown
    #[default]
    Unpresented,
    /// Appearance animation running
    Appearing,
    /// Fully shown; buttons accept taps
    Visible,
    /// Fade-out running
    Dismissing,
    /// Detached from the host; children released
    Disposed,
}

/// Completion reported by [`AlertController::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The appearance animation finished
    BecameVisible,
    /// The dismissal finished; the host should drop the alert
    Disposed,
}

/// Why a tap did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The alert was not in [`Phase::Visible`]
    NotVisible(Phase),
    /// The button's action is disabled
    Disabled,
    /// No cancel-style action is registered
    NoCancelAction,
}

/// Result of a tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The handler ran and dismissal started
    Dismissing {
        /// Index of the tapped action
        index: usize,
    },
    /// Nothing happened
    Ignored(IgnoreReason),
}

/// How the host should present the alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPresentation {
    /// Cover the current content, leaving it visible behind the overlay
    OverCurrentContext,
}

/// Transition the host should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTransition {
    /// Slide up from the bottom edge
    CoverVertical,
}

/// Hints for the host's modal presentation machinery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationHints {
    /// Presentation style
    pub presentation: ModalPresentation,
    /// Transition style
    pub transition: ModalTransition,
    /// Whether the alert defines the presentation context for its own children
    pub defines_context: bool,
    /// Whether the alert provides its own transition style
    pub provides_transition_style: bool,
}

/// Configuration for a text input row.
///
/// Text input is not supported; see [`AlertController::add_text_field`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// Placeholder shown while empty
    pub placeholder: String,
    /// Current text
    pub text: String,
    /// Whether input is masked
    pub secure: bool,
}

/// A modal alert with a title, message and action buttons
pub struct AlertController {
    title: Option<String>,
    message: Option<String>,
    preferred_style: ControllerStyle,
    style: AlertStyle,
    actions: Vec<AlertAction>,
    buttons: Vec<AlertButton>,
    measurer: Box<dyn TextMeasurer>,
    layout: Option<AlertLayout>,
    animator: Animator,
    phase: Phase,
}

impl AlertController {
    /// Create an alert with the default style
    #[must_use]
    pub fn new(title: Option<&str>, message: Option<&str>, preferred_style: ControllerStyle) -> Self {
        let style = AlertStyle::default();
        Self {
            title: title.map(str::to_string),
            message: message.map(str::to_string),
            preferred_style,
            animator: Animator::new(style.animation),
            style,
            actions: Vec::new(),
            buttons: Vec::new(),
            measurer: Box::new(MonospaceMeasurer::default()),
            layout: None,
            phase: Phase::Unpresented,
        }
    }

    /// Replace the style.
    ///
    /// Ignored once the alert has been presented; see [`AlertController::set_style`].
    #[must_use]
    pub fn with_style(mut self, style: AlertStyle) -> Self {
        if self.set_style(style).is_err() {
            warn!(phase = ?self.phase, "Ignoring style replacement after present");
        }
        self
    }

    /// Replace the style before presentation
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::AlreadyPresented`] once `present` has been called
    pub fn set_style(&mut self, style: AlertStyle) -> Result<(), AlertError> {
        if self.phase != Phase::Unpresented {
            return Err(AlertError::AlreadyPresented);
        }
        self.style = style;
        self.restyle_buttons();
        Ok(())
    }

    /// Replace the text measurer used by layout passes
    #[must_use]
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Title text, if any
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Message text, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Presentation style requested at construction
    #[must_use]
    pub const fn preferred_style(&self) -> ControllerStyle {
        self.preferred_style
    }

    /// Current style
    #[must_use]
    pub const fn style(&self) -> &AlertStyle {
        &self.style
    }

    /// Edit the style before presentation
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::AlreadyPresented`] once `present` has been called
    pub fn style_mut(&mut self) -> Result<&mut AlertStyle, AlertError> {
        if self.phase != Phase::Unpresented {
            return Err(AlertError::AlreadyPresented);
        }
        Ok(&mut self.style)
    }

    /// Registered actions, in display order
    #[must_use]
    pub fn actions(&self) -> &[AlertAction] {
        &self.actions
    }

    /// Buttons, one per registered action
    #[must_use]
    pub fn buttons(&self) -> &[AlertButton] {
        &self.buttons
    }

    /// Index of the cancel-style action, if registered
    #[must_use]
    pub fn cancel_index(&self) -> Option<usize> {
        self.actions
            .iter()
            .position(|action| action.style() == ActionStyle::Cancel)
    }

    /// Register an action and add its button below the existing ones
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::DuplicateCancelAction`] if `action` has the cancel
    /// style and a cancel action is already registered, or
    /// [`AlertError::AlreadyPresented`] after `present`. The alert is left
    /// unchanged in both cases.
    pub fn add_action(&mut self, action: AlertAction) -> Result<(), AlertError> {
        if self.phase != Phase::Unpresented {
            return Err(AlertError::AlreadyPresented);
        }
        if action.style() == ActionStyle::Cancel
            && let Some(existing) = self.cancel_index()
        {
            warn!(
                title = action.title(),
                existing, "Rejected second cancel action"
            );
            return Err(AlertError::DuplicateCancelAction { existing });
        }

        let index = self.actions.len();
        self.buttons
            .push(AlertButton::for_action(index, &action, &self.style.buttons));
        debug!(
            index,
            title = action.title(),
            style = %action.style(),
            enabled = action.is_enabled(),
            "Registered action"
        );
        self.actions.push(action);
        Ok(())
    }

    /// Text input is not supported; the configuration handler is never called.
    pub fn add_text_field(&mut self, _configure: impl FnOnce(&mut TextField)) {
        warn!("Text fields are not supported; ignoring add_text_field");
    }

    /// Hints for the host's modal presentation
    #[must_use]
    pub const fn presentation_hints(&self) -> PresentationHints {
        PresentationHints {
            presentation: ModalPresentation::OverCurrentContext,
            transition: ModalTransition::CoverVertical,
            defines_context: true,
            provides_transition_style: true,
        }
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether buttons currently accept taps
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self.phase, Phase::Visible)
    }

    /// Current scale and opacity
    #[must_use]
    pub const fn visual(&self) -> VisualState {
        self.animator.visual()
    }

    /// Begin presentation: freeze configuration and start the appearance animation
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::AlreadyPresented`] if called more than once
    pub fn present(&mut self) -> Result<(), AlertError> {
        if self.phase != Phase::Unpresented {
            return Err(AlertError::AlreadyPresented);
        }

        self.restyle_buttons();
        self.animator = Animator::new(self.style.animation);
        self.animator.start_appearing();
        self.phase = Phase::Appearing;
        info!(
            title = self.title.as_deref().unwrap_or_default(),
            buttons = self.buttons.len(),
            "Presenting alert"
        );
        Ok(())
    }

    /// Run a layout pass for `screen` and cache the result.
    ///
    /// Returns `None` once the alert has been disposed.
    pub fn layout(&mut self, screen: &Screen) -> Option<&AlertLayout> {
        if self.phase == Phase::Disposed {
            return None;
        }

        let content = LayoutContent {
            title: self.title.as_deref(),
            message: self.message.as_deref(),
            message_font: &self.style.message_font,
            button_count: self.buttons.len(),
            button_height: self.style.button_height,
        };
        let computed = layout::compute(screen, &content, self.measurer.as_ref());
        debug!(
            width = computed.panel.width(),
            height = computed.panel.height(),
            overflow = computed.message_overflow(),
            "Laid out alert"
        );
        self.layout = Some(computed);
        self.layout.as_ref()
    }

    /// Result of the most recent layout pass
    #[must_use]
    pub const fn current_layout(&self) -> Option<&AlertLayout> {
        self.layout.as_ref()
    }

    /// Index of the button under `point` (overlay coordinates) in the last layout
    #[must_use]
    pub fn button_at(&self, point: Point) -> Option<usize> {
        self.layout.as_ref()?.button_at(point)
    }

    /// Advance animations by `dt`.
    ///
    /// Completions fire here, on the caller's thread.
    pub fn tick(&mut self, dt: Duration) -> Option<LifecycleEvent> {
        match self.animator.advance(dt)? {
            AnimationEvent::AppearFinished => {
                self.phase = Phase::Visible;
                debug!("Alert visible");
                Some(LifecycleEvent::BecameVisible)
            }
            AnimationEvent::DismissFinished => {
                self.dispose();
                Some(LifecycleEvent::Disposed)
            }
        }
    }

    /// Tap the button at `index`.
    ///
    /// In [`Phase::Visible`] this runs the action's handler, then starts the
    /// dismissal. Taps in any other phase, or on a disabled button, are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::ButtonOutOfRange`] if `index` is not a button
    pub fn tap(&mut self, index: usize) -> Result<TapOutcome, AlertError> {
        if self.phase != Phase::Visible {
            debug!(index, phase = ?self.phase, "Ignoring tap");
            return Ok(TapOutcome::Ignored(IgnoreReason::NotVisible(self.phase)));
        }
        let Some(button) = self.buttons.get(index) else {
            return Err(AlertError::ButtonOutOfRange {
                index,
                count: self.buttons.len(),
            });
        };
        if !button.is_enabled() {
            return Ok(TapOutcome::Ignored(IgnoreReason::Disabled));
        }

        let action_index = button.action_index();
        if let Some(action) = self.actions.get(action_index) {
            info!(index = action_index, title = action.title(), "Action tapped");
            action.invoke();
        }
        self.begin_dismissal();
        Ok(TapOutcome::Dismissing {
            index: action_index,
        })
    }

    /// Tap the cancel-style action, if there is one
    ///
    /// # Errors
    ///
    /// Propagates errors from [`AlertController::tap`]
    pub fn cancel(&mut self) -> Result<TapOutcome, AlertError> {
        match self.cancel_index() {
            Some(index) => self.tap(index),
            None => Ok(TapOutcome::Ignored(IgnoreReason::NoCancelAction)),
        }
    }

    /// Dismiss without running any handler
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::NotVisible`] unless the alert is visible
    pub fn dismiss(&mut self) -> Result<(), AlertError> {
        if self.phase != Phase::Visible {
            return Err(AlertError::NotVisible);
        }
        self.begin_dismissal();
        Ok(())
    }

    fn begin_dismissal(&mut self) {
        self.animator.start_dismissing();
        self.phase = Phase::Dismissing;
    }

    fn dispose(&mut self) {
        self.phase = Phase::Disposed;
        self.buttons.clear();
        self.layout = None;
        info!("Alert dismissed");
    }

    fn restyle_buttons(&mut self) {
        for button in &mut self.buttons {
            button.restyle(&self.style.buttons);
        }
    }
}

impl fmt::Debug for AlertController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertController")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("preferred_style", &self.preferred_style)
            .field("actions", &self.actions)
            .field("phase", &self.phase)
            .field("visual", &self.animator.visual())
            .finish_non_exhaustive()
    }
}

//! Alert actions
//!
//! An [`AlertAction`] describes one button: its label, its visual style, an
//! optional handler and whether it can be tapped. Actions are plain values;
//! cloning one yields an independent copy that shares the same handler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Visual style of an action's button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    /// Regular action
    #[default]
    Default,
    /// Dismisses the alert without doing anything; at most one per alert
    Cancel,
    /// Action that destroys or discards data
    Destructive,
}

impl ActionStyle {
    /// All styles, in palette order.
    pub const ALL: &'static [Self] = &[Self::Default, Self::Cancel, Self::Destructive];

    /// Lowercase label used by the CLI and config files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Cancel => "cancel",
            Self::Destructive => "destructive",
        }
    }
}

impl fmt::Display for ActionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown action style {s:?} (expected default, cancel or destructive)"))
    }
}

/// Callback run when an action's button is tapped
pub type ActionHandler = Rc<dyn Fn(&AlertAction)>;

/// One button's worth of alert configuration
#[derive(Clone)]
pub struct AlertAction {
    title: String,
    style: ActionStyle,
    handler: Option<ActionHandler>,
    enabled: bool,
}

impl AlertAction {
    /// Create an enabled action without a handler
    #[must_use]
    pub fn new(title: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            title: title.into(),
            style,
            handler: None,
            enabled: true,
        }
    }

    /// Attach the handler invoked when the button is tapped
    #[must_use]
    pub fn with_handler(mut self, handler: impl Fn(&Self) + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    /// Set whether the button accepts taps
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Button label
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Button style
    #[must_use]
    pub const fn style(&self) -> ActionStyle {
        self.style
    }

    /// Whether the button accepts taps
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a handler is attached
    #[must_use]
    pub const fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub(crate) fn invoke(&self) {
        if let Some(handler) = &self.handler {
            handler(self);
        }
    }
}

/// Parses `LABEL[:STYLE[:disabled]]`, e.g. `Delete:destructive` or
/// `Save:default:disabled`. The label may not be empty.
impl FromStr for AlertAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let title = parts.next().unwrap_or_default().trim();
        if title.is_empty() {
            return Err(format!("action {s:?} has an empty label"));
        }
        let style = match parts.next() {
            Some(style) if !style.trim().is_empty() => style.parse()?,
            _ => ActionStyle::Default,
        };
        let enabled = match parts.next().map(str::trim) {
            None | Some("" | "enabled") => true,
            Some("disabled") => false,
            Some(other) => {
                return Err(format!(
                    "unknown action flag {other:?} (expected enabled or disabled)"
                ));
            }
        };
        Ok(Self::new(title, style).with_enabled(enabled))
    }
}

impl fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("has_handler", &self.handler.is_some())
            .field("enabled", &self.enabled)
            .finish()
    }
}

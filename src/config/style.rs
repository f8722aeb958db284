//! Alert appearance: colors, fonts, button palette and animation timing

use crate::action::ActionStyle;
use crate::animation::AnimationTiming;
use crate::color::Rgba;
use crate::layout::Font;
use serde::{Deserialize, Serialize};

/// Button colors for the two interaction states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateColors {
    /// Resting background
    pub normal: Rgba,
    /// Background while focused or pressed
    pub highlighted: Rgba,
}

impl StateColors {
    /// Create a pair of state colors
    #[must_use]
    pub const fn new(normal: Rgba, highlighted: Rgba) -> Self {
        Self {
            normal,
            highlighted,
        }
    }
}

/// Button background colors keyed by [`ActionStyle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonPalette {
    /// Colors for [`ActionStyle::Default`]
    pub default: StateColors,
    /// Colors for [`ActionStyle::Cancel`]
    pub cancel: StateColors,
    /// Colors for [`ActionStyle::Destructive`]
    pub destructive: StateColors,
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self {
            default: StateColors::new(Rgba::rgb(52, 152, 219), Rgba::rgb(93, 173, 226)),
            cancel: StateColors::new(Rgba::rgb(128, 128, 128), Rgba::rgb(145, 145, 145)),
            destructive: StateColors::new(Rgba::rgb(231, 76, 70), Rgba::rgb(236, 112, 99)),
        }
    }
}

impl ButtonPalette {
    /// Colors for `style`
    #[must_use]
    pub const fn colors(&self, style: ActionStyle) -> StateColors {
        match style {
            ActionStyle::Default => self.default,
            ActionStyle::Cancel => self.cancel,
            ActionStyle::Destructive => self.destructive,
        }
    }

    /// Replace the colors for `style`
    #[must_use]
    pub const fn with(mut self, style: ActionStyle, colors: StateColors) -> Self {
        match style {
            ActionStyle::Default => self.default = colors,
            ActionStyle::Cancel => self.cancel = colors,
            ActionStyle::Destructive => self.destructive = colors,
        }
        self
    }
}

/// Everything that controls how an alert looks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertStyle {
    /// Color laid over the whole screen behind the panel
    pub overlay_color: Rgba,
    /// Panel background
    pub panel_background: Rgba,
    /// Title font
    pub title_font: Font,
    /// Title text color
    pub title_color: Rgba,
    /// Message font (also used to measure the message)
    pub message_font: Font,
    /// Message text color
    pub message_color: Rgba,
    /// Button label font
    pub button_font: Font,
    /// Label color of enabled buttons
    pub button_text_color: Rgba,
    /// Label color of disabled buttons
    pub button_disabled_text_color: Rgba,
    /// Height of every button in points
    pub button_height: f64,
    /// Button backgrounds per action style
    pub buttons: ButtonPalette,
    /// Appearance and dismissal timing
    pub animation: AnimationTiming,
}

impl Default for AlertStyle {
    fn default() -> Self {
        Self {
            overlay_color: Rgba::rgba(0, 0, 0, 179),
            panel_background: Rgba::rgb(239, 240, 242),
            title_font: Font::bold("HelveticaNeue-Bold", 18.0),
            title_color: Rgba::rgb(77, 77, 77),
            message_font: Font::regular("HelveticaNeue", 15.0),
            message_color: Rgba::rgb(77, 77, 77),
            button_font: Font::bold("HelveticaNeue-Bold", 16.0),
            button_text_color: Rgba::WHITE,
            button_disabled_text_color: Rgba::rgb(200, 200, 200),
            button_height: 44.0,
            buttons: ButtonPalette::default(),
            animation: AnimationTiming::default(),
        }
    }
}

//! Buttons synthesized from registered actions

use crate::action::{ActionStyle, AlertAction};
use crate::color::{FillImage, Rgba, image_from_color};
use crate::config::ButtonPalette;

/// The button shown for one registered action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertButton {
    action_index: usize,
    title: String,
    style: ActionStyle,
    enabled: bool,
    background: FillImage,
    highlighted_background: FillImage,
}

impl AlertButton {
    pub(crate) fn for_action(
        action_index: usize,
        action: &AlertAction,
        palette: &ButtonPalette,
    ) -> Self {
        let colors = palette.colors(action.style());
        Self {
            action_index,
            title: action.title().to_string(),
            style: action.style(),
            enabled: action.is_enabled(),
            background: image_from_color(colors.normal),
            highlighted_background: image_from_color(colors.highlighted),
        }
    }

    pub(crate) fn restyle(&mut self, palette: &ButtonPalette) {
        let colors = palette.colors(self.style);
        self.background = image_from_color(colors.normal);
        self.highlighted_background = image_from_color(colors.highlighted);
    }

    /// Index of the action this button triggers
    #[must_use]
    pub const fn action_index(&self) -> usize {
        self.action_index
    }

    /// Label
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Style of the bound action
    #[must_use]
    pub const fn style(&self) -> ActionStyle {
        self.style
    }

    /// Whether the button accepts taps
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Background image for the resting state
    #[must_use]
    pub const fn background(&self) -> &FillImage {
        &self.background
    }

    /// Background image while highlighted
    #[must_use]
    pub const fn highlighted_background(&self) -> &FillImage {
        &self.highlighted_background
    }

    /// Background color for the given state
    #[must_use]
    pub fn fill(&self, highlighted: bool) -> Rgba {
        if highlighted {
            self.highlighted_background.fill()
        } else {
            self.background.fill()
        }
    }
}

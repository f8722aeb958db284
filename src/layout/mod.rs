//! Alert layout
//!
//! Layout works in points. The panel has a fixed width; its height is the sum
//! of the rows it has to show:
//!
//! ```text
//! padding
//! title row (20)            + padding   if a title is set
//! wrapped message           + padding   if a message is set
//! button (button_height)    + margin    for every button
//! padding                               (the last margin is not counted)
//! ```
//!
//! The panel is centered in the overlay, which covers the whole screen.

mod geometry;
mod text;

pub use geometry::{Orientation, Point, Region, Screen, Size};
pub use text::{Font, MonospaceMeasurer, TextMeasurer, wrap_lines};

/// Width of the alert panel
pub const PANEL_WIDTH: f64 = 270.0;
/// Padding on every edge of the panel and between content rows
pub const PADDING: f64 = 15.0;
/// Height of the title row
pub const TITLE_HEIGHT: f64 = 20.0;
/// Vertical gap between buttons
pub const BUTTON_MARGIN: f64 = 10.0;

/// Width available to content inside the panel
pub const INNER_WIDTH: f64 = PANEL_WIDTH - PADDING * 2.0;

/// What the layout pass needs to know about the alert's content
#[derive(Debug, Clone, Copy)]
pub struct LayoutContent<'a> {
    /// Title text; `None` or empty omits the title row
    pub title: Option<&'a str>,
    /// Message text; `None` or empty omits the message region
    pub message: Option<&'a str>,
    /// Font the message is measured with
    pub message_font: &'a Font,
    /// Number of buttons, in registration order
    pub button_count: usize,
    /// Height of every button
    pub button_height: f64,
}

/// Result of a layout pass.
///
/// `title`, `message` and `buttons` are relative to the panel's origin; use
/// [`AlertLayout::absolute`] to place them on the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertLayout {
    /// Overlay bounds (the whole screen)
    pub overlay: Region,
    /// Panel bounds on the overlay
    pub panel: Region,
    /// Title row
    pub title: Option<Region>,
    /// Visible message region
    pub message: Option<Region>,
    /// One region per button
    pub buttons: Vec<Region>,
    /// Height the message needs to be shown without scrolling
    pub message_content_height: f64,
}

impl AlertLayout {
    /// Map a panel-relative region to overlay coordinates
    #[must_use]
    pub fn absolute(&self, region: Region) -> Region {
        region.offset(self.panel.x(), self.panel.y())
    }

    /// How much of the message is hidden because the panel did not fit
    #[must_use]
    pub fn message_overflow(&self) -> f64 {
        self.message.map_or(0.0, |region| {
            (self.message_content_height - region.height()).max(0.0)
        })
    }

    /// Index of the button under `point` (overlay coordinates)
    #[must_use]
    pub fn button_at(&self, point: Point) -> Option<usize> {
        self.buttons
            .iter()
            .position(|&button| self.absolute(button).contains(point))
    }
}

struct Stack {
    height: f64,
    title: Option<Region>,
    message: Option<Region>,
    buttons: Vec<Region>,
}

fn stack(title_height: f64, message_height: Option<f64>, content: &LayoutContent<'_>) -> Stack {
    let mut y = PADDING;

    let title = (title_height > 0.0).then(|| {
        let region = Region::new(PADDING, y, INNER_WIDTH, title_height);
        y += title_height + PADDING;
        region
    });

    let message = message_height.map(|height| {
        let region = Region::new(PADDING, y, INNER_WIDTH, height);
        y += height + PADDING;
        region
    });

    let mut buttons = Vec::with_capacity(content.button_count);
    for _ in 0..content.button_count {
        buttons.push(Region::new(PADDING, y, INNER_WIDTH, content.button_height));
        y += content.button_height + BUTTON_MARGIN;
    }

    let trailing_margin = if buttons.is_empty() { 0.0 } else { BUTTON_MARGIN };
    Stack {
        height: y - trailing_margin + PADDING,
        title,
        message,
        buttons,
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

/// Lay out an alert on `screen`.
///
/// When the panel would be taller than the overlay, only the message region
/// gives up height (down to zero); the hidden part becomes scrollable.
#[must_use]
pub fn compute(
    screen: &Screen,
    content: &LayoutContent<'_>,
    measurer: &dyn TextMeasurer,
) -> AlertLayout {
    let overlay_size = screen.overlay_size();
    let overlay = Region::new(0.0, 0.0, overlay_size.width, overlay_size.height);

    let title_height = if non_empty(content.title).is_some() {
        TITLE_HEIGHT
    } else {
        0.0
    };
    let message_content_height = non_empty(content.message).map_or(0.0, |message| {
        measurer
            .measure_height(message, content.message_font, INNER_WIDTH)
            .ceil()
    });
    let message_height = non_empty(content.message).map(|_| message_content_height);

    let mut layout = stack(title_height, message_height, content);
    let excess = layout.height - overlay_size.height;
    if excess > 0.0
        && let Some(full) = message_height
    {
        layout = stack(title_height, Some((full - excess).max(0.0)), content);
    }

    let panel = Region::new(
        (overlay_size.width - PANEL_WIDTH) / 2.0,
        (overlay_size.height - layout.height) / 2.0,
        PANEL_WIDTH,
        layout.height,
    );

    AlertLayout {
        overlay,
        panel,
        title: layout.title,
        message: layout.message,
        buttons: layout.buttons,
        message_content_height,
    }
}

#[cfg(test)]
mod tests;

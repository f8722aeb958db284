//! Alert panel widget
//!
//! Draws an [`AlertController`] from its most recent layout pass: the overlay
//! tints whatever was rendered underneath, the panel is scaled about its
//! center and every color is faded by the view's opacity.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::color::Rgba;
use crate::controller::AlertController;
use crate::layout::{AlertLayout, Region, wrap_lines};
use crate::ui::CellScale;

/// Widget for drawing an alert over existing content
#[derive(Debug, Clone, Copy)]
pub struct Widget<'a> {
    alert: &'a AlertController,
    focused: Option<usize>,
    scroll: usize,
    scale: CellScale,
}

impl<'a> Widget<'a> {
    /// Create a widget for `alert` with no focused button
    #[must_use]
    pub fn new(alert: &'a AlertController) -> Self {
        Self {
            alert,
            focused: None,
            scroll: 0,
            scale: CellScale::default(),
        }
    }

    /// Draw the button at `index` in its highlighted state
    #[must_use]
    pub const fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    /// Skip the first `rows` lines of the message
    #[must_use]
    pub const fn scroll(mut self, rows: usize) -> Self {
        self.scroll = rows;
        self
    }

    /// Use a different point-to-cell mapping
    #[must_use]
    pub const fn scale(mut self, scale: CellScale) -> Self {
        self.scale = scale;
        self
    }

    /// Cells the message occupies when drawn into `area`
    #[must_use]
    pub fn message_rect(&self, area: Rect) -> Option<Rect> {
        let layout = self.alert.current_layout()?;
        let region = layout.message?;
        Some(self.place(layout, layout.absolute(region), area))
    }

    /// Wrapped message lines at the width the message is drawn with
    #[must_use]
    pub fn message_lines(&self, area: Rect) -> Vec<String> {
        match (self.alert.message(), self.message_rect(area)) {
            (Some(message), Some(rect)) => wrap_lines(message, usize::from(rect.width)),
            _ => Vec::new(),
        }
    }

    /// Largest useful scroll offset for the message
    #[must_use]
    pub fn max_scroll(&self, area: Rect) -> usize {
        let visible = self
            .message_rect(area)
            .map_or(0, |rect| usize::from(rect.height));
        self.message_lines(area).len().saturating_sub(visible)
    }

    fn place(&self, layout: &AlertLayout, region: Region, area: Rect) -> Rect {
        let factor = self.alert.visual().panel_scale;
        let scaled = region.scaled_about(layout.panel.center(), factor);
        self.scale.project(scaled, area)
    }
}

impl ratatui::widgets::Widget for Widget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = self.alert.current_layout() else {
            return;
        };
        let alpha = self.alert.visual().view_alpha;
        if alpha <= 0.0 {
            return;
        }
        let style = self.alert.style();

        tint(buf, area, style.overlay_color.with_alpha_factor(alpha));

        let panel = self.place(layout, layout.panel, area);
        fill(buf, panel, style.panel_background.with_alpha_factor(alpha));

        if let (Some(title), Some(region)) = (self.alert.title(), layout.title) {
            let rect = self.place(layout, layout.absolute(region), area);
            draw_centered(
                buf,
                rect,
                &[title.to_string()],
                style.title_color.with_alpha_factor(alpha),
                style.title_font.bold,
            );
        }

        if let Some(rect) = self.message_rect(area) {
            let lines: Vec<String> = self
                .message_lines(area)
                .into_iter()
                .skip(self.scroll)
                .collect();
            draw_centered(
                buf,
                rect,
                &lines,
                style.message_color.with_alpha_factor(alpha),
                style.message_font.bold,
            );
        }

        for (index, (button, region)) in self
            .alert
            .buttons()
            .iter()
            .zip(&layout.buttons)
            .enumerate()
        {
            let rect = self.place(layout, layout.absolute(*region), area);
            let highlighted = self.focused == Some(index) && button.is_enabled();
            fill(buf, rect, button.fill(highlighted).with_alpha_factor(alpha));

            let text_color = if button.is_enabled() {
                style.button_text_color
            } else {
                style.button_disabled_text_color
            };
            let label = Rect {
                y: rect.y + rect.height / 2,
                height: rect.height.min(1),
                ..rect
            };
            draw_centered(
                buf,
                label,
                &[button.title().to_string()],
                text_color.with_alpha_factor(alpha),
                style.button_font.bold,
            );
        }
    }
}

fn backdrop(color: ratatui::style::Color) -> Rgba {
    Rgba::from_color(color).unwrap_or(Rgba::BLACK)
}

/// Blend `color` over every cell, keeping the content
fn tint(buf: &mut Buffer, area: Rect, color: Rgba) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            let bg = color.over(backdrop(cell.bg));
            cell.set_bg(bg.to_color());
            if let Some(fg) = Rgba::from_color(cell.fg) {
                cell.set_fg(color.over(fg).to_color());
            }
        }
    }
}

/// Blend `color` over every cell, clearing the content
fn fill(buf: &mut Buffer, area: Rect, color: Rgba) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            let bg = color.over(backdrop(cell.bg));
            cell.reset();
            cell.set_bg(bg.to_color());
        }
    }
}

/// Write one line per row, centered and clipped to `area`
fn draw_centered(buf: &mut Buffer, area: Rect, lines: &[String], color: Rgba, bold: bool) {
    let area = area.intersection(buf.area);
    for (y, line) in (area.top()..area.bottom()).zip(lines) {
        let width = u16::try_from(line.width())
            .unwrap_or(u16::MAX)
            .min(area.width);
        let x = area.x + (area.width - width) / 2;
        let (end, _) = buf.set_stringn(x, y, line, usize::from(width), Style::default());

        for column in x..end {
            let cell = &mut buf[(column, y)];
            cell.set_fg(color.over(backdrop(cell.bg)).to_color());
            if bold {
                cell.modifier.insert(Modifier::BOLD);
            }
        }
    }
}

//! Terminal host for a single alert
//!
//! [`App`] owns the presented alert and translates terminal input into
//! controller operations: key bindings move focus between enabled buttons and
//! tap them, digits tap a button directly and a left click taps whatever
//! button is under the pointer.

pub mod event;

pub use event::{Event, Handler};

use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::debug;

use crate::config::{Command, Config, KeyBindings};
use crate::controller::{AlertController, LifecycleEvent, TapOutcome};
use crate::error::AlertError;
use crate::ui::{AlertViewWidget, CellScale};

/// Host state for one alert
#[derive(Debug)]
pub struct App {
    /// The alert being shown
    pub alert: AlertController,
    /// Key bindings
    pub keys: KeyBindings,
    /// Point-to-cell mapping
    pub scale: CellScale,
    /// Set when the host should exit
    pub should_quit: bool,
    focus: Option<usize>,
    scroll: usize,
    area: Rect,
    chosen: Option<usize>,
}

impl App {
    /// Wrap `alert` with the bindings from `config`
    #[must_use]
    pub fn new(alert: AlertController, config: &Config) -> Self {
        let mut app = Self {
            alert,
            keys: config.keys.clone(),
            scale: CellScale::default(),
            should_quit: false,
            focus: None,
            scroll: 0,
            area: Rect::default(),
            chosen: None,
        };
        let focus = app.enabled_buttons().next();
        app.focus = focus;
        app
    }

    /// Present the alert
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::AlreadyPresented`] if it was presented before
    pub fn present(&mut self) -> Result<(), AlertError> {
        self.alert.present()
    }

    /// Index of the focused button
    #[must_use]
    pub const fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Message lines scrolled past
    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Index of the action that was tapped, once one has been
    #[must_use]
    pub const fn chosen(&self) -> Option<usize> {
        self.chosen
    }

    /// Title of the chosen action
    #[must_use]
    pub fn chosen_title(&self) -> Option<&str> {
        self.chosen
            .and_then(|index| self.alert.actions().get(index))
            .map(|action| action.title())
    }

    /// Area the alert was last laid out in
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Lay the alert out for a new drawing area
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        let screen = self.scale.screen_for(area);
        self.alert.layout(&screen);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Widget that draws the alert in its current state
    #[must_use]
    pub fn widget(&self) -> AlertViewWidget<'_> {
        AlertViewWidget::new(&self.alert)
            .focused(self.focus)
            .scroll(self.scroll)
            .scale(self.scale)
    }

    /// Advance animations; quits once the alert has been disposed
    pub fn tick(&mut self, dt: Duration) -> Option<LifecycleEvent> {
        let event = self.alert.tick(dt);
        if event == Some(LifecycleEvent::Disposed) {
            self.should_quit = true;
        }
        event
    }

    /// Handle a key press
    ///
    /// # Errors
    ///
    /// Propagates errors from tapping a button
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<(), AlertError> {
        if let KeyCode::Char(c) = code
            && let Some(digit @ 1..=9) = c.to_digit(10)
            && modifiers.difference(KeyModifiers::SHIFT).is_empty()
        {
            if let Ok(index) = usize::try_from(digit - 1)
                && index < self.alert.buttons().len()
            {
                self.tap(index)?;
            }
            return Ok(());
        }

        let Some(command) = self.keys.get_command(code, modifiers) else {
            return Ok(());
        };
        debug!(?command, "Key command");
        match command {
            Command::FocusNext => self.focus_next(),
            Command::FocusPrev => self.focus_prev(),
            Command::Activate => {
                if let Some(index) = self.focus {
                    self.tap(index)?;
                }
            }
            Command::Cancel => {
                let outcome = self.alert.cancel()?;
                self.record(outcome);
            }
            Command::ScrollUp => self.scroll_by(-self.page()),
            Command::ScrollDown => self.scroll_by(self.page()),
            Command::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Handle mouse input
    ///
    /// # Errors
    ///
    /// Propagates errors from tapping a button
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), AlertError> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let point = self.scale.point_for_cell(mouse.column, mouse.row, self.area);
                if let Some(index) = self.alert.button_at(point) {
                    self.focus = Some(index);
                    self.tap(index)?;
                }
            }
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            _ => {}
        }
        Ok(())
    }

    /// Move focus to the next enabled button, wrapping around
    pub fn focus_next(&mut self) {
        let enabled: Vec<usize> = self.enabled_buttons().collect();
        self.focus = match self.focus {
            Some(current) => enabled
                .iter()
                .copied()
                .find(|&index| index > current)
                .or_else(|| enabled.first().copied()),
            None => enabled.first().copied(),
        };
    }

    /// Move focus to the previous enabled button, wrapping around
    pub fn focus_prev(&mut self) {
        let enabled: Vec<usize> = self.enabled_buttons().collect();
        self.focus = match self.focus {
            Some(current) => enabled
                .iter()
                .rev()
                .copied()
                .find(|&index| index < current)
                .or_else(|| enabled.last().copied()),
            None => enabled.last().copied(),
        };
    }

    fn tap(&mut self, index: usize) -> Result<(), AlertError> {
        let outcome = self.alert.tap(index)?;
        self.record(outcome);
        Ok(())
    }

    fn record(&mut self, outcome: TapOutcome) {
        if let TapOutcome::Dismissing { index } = outcome {
            self.chosen = Some(index);
        }
    }

    fn enabled_buttons(&self) -> impl Iterator<Item = usize> + '_ {
        self.alert
            .buttons()
            .iter()
            .enumerate()
            .filter(|(_, button)| button.is_enabled())
            .map(|(index, _)| index)
    }

    fn max_scroll(&self) -> usize {
        self.widget().max_scroll(self.area)
    }

    fn page(&self) -> isize {
        let rows = self
            .widget()
            .message_rect(self.area)
            .map_or(1, |rect| rect.height.saturating_sub(1).max(1));
        isize::try_from(rows).unwrap_or(1)
    }

    fn scroll_by(&mut self, rows: isize) {
        self.scroll = self.scroll.saturating_add_signed(rows).min(self.max_scroll());
    }
}

//! Modal Alert - an animated modal alert presenter
//!
//! An [`AlertController`] shows a centered panel with an optional title, an
//! optional message and a stack of action buttons over a dimming overlay.
//! Tapping a button runs its action's handler and fades the alert out.
//!
//! The controller is renderer independent: it computes layout in points and
//! exposes animation state through an explicit clock. [`ui::AlertViewWidget`]
//! draws it with ratatui and [`App`] hosts it in a terminal.

pub mod action;
pub mod animation;
pub mod app;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod paths;
pub mod ui;

pub use action::{ActionStyle, AlertAction};
pub use app::App;
pub use color::{FillImage, Rgba, image_from_color};
pub use config::{AlertStyle, Config};
pub use controller::{AlertController, ControllerStyle, Phase, TapOutcome};
pub use error::AlertError;

//! Terminal rendering for alerts
//!
//! Layout happens in points; [`CellScale`] maps it onto terminal cells and
//! [`AlertViewWidget`] draws the result.

mod components;
mod projection;

pub use components::alert_view::Widget as AlertViewWidget;
pub use projection::CellScale;

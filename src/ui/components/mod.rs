//! UI components

pub mod alert_view;

//! Error types for alert construction and interaction

use thiserror::Error;

/// Errors returned by [`crate::AlertController`] operations.
///
/// A call that returns an error leaves the controller exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlertError {
    /// A second action with [`crate::ActionStyle::Cancel`] was registered
    #[error(
        "an alert can only have one action with the cancel style (already registered at index {existing})"
    )]
    DuplicateCancelAction {
        /// Index of the cancel action that is already registered
        existing: usize,
    },
    /// Configuration or registration was attempted after `present`
    #[error("the alert has already been presented and can no longer be configured")]
    AlreadyPresented,
    /// A tap referenced a button that does not exist
    #[error("no button at index {index} (alert has {count} buttons)")]
    ButtonOutOfRange {
        /// Requested button index
        index: usize,
        /// Number of buttons on the alert
        count: usize,
    },
    /// The operation needs the alert to be fully visible
    #[error("the alert is not visible")]
    NotVisible,
}

//! Shared UI components.

pub mod status_indicator;
pub mod toast;

pub use status_indicator::StatusIndicator;
pub use toast::ToastStack;

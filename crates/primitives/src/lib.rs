//! Core value types for boot popup sequencing: popup kinds, alert flags,
//! action completion, marketing payloads, reading streaks, and log events.

/// One-shot user action identifiers.
pub mod action;
/// Persisted alert and preference flags.
pub mod alerts;
/// Parse errors for string forms of primitives.
pub mod error;
/// Analytics log events emitted by popups.
pub mod log;
/// Marketing call-to-action payloads.
pub mod marketing;
/// Popup and modal kinds.
pub mod popup;
/// Reading streak state.
pub mod streak;
/// Signed-in user summary.
pub mod user;

pub use action::ActionType;
pub use alerts::{Alerts, AlertsUpdate};
pub use error::ParseError;
pub use log::{LogEvent, LogEventName, TargetType};
pub use marketing::{MarketingCta, MarketingCtaFlags, MarketingCtaVariant};
pub use popup::{LazyModal, PopupKind};
pub use streak::ReadingStreak;
pub use user::User;

#[cfg(test)]
mod tests;

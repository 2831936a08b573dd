//! Boot popup sequencing.
//!
//! Several independent [rules](rules) decide that a popup should be shown when
//! the application starts. Each rule registers at most one candidate per
//! [`PopupKind`] into the [`PopupRegistry`]; the [`BootPopups`] reconciler
//! presents exactly one candidate once preferences are loaded and the daily
//! popup budget is available, then clears the registry.
//!
//! A separate [small popup channel](small_popup) carries at most one non-modal
//! interactive popup that is presented alongside, never instead of, the boot
//! modal.
//!
//! Every upstream data source is injected through the traits in
//! [`collaborators`], so the whole sequence runs without a UI framework.

pub mod boot;
pub mod collaborators;
pub mod config;
pub mod descriptor;
pub mod driver;
mod effects;
pub mod memory;
pub mod registry;
pub mod rules;
pub mod small_popup;
pub mod snapshot;

pub use boot::{BootPopups, TickReport};
pub use collaborators::{ActionTracker, AlertStore, Collaborators, EventLogger, MarketingSource, PresentationSink, SessionSource, StreakSource};
pub use config::{BootPopupConfig, ConfigError};
pub use descriptor::{ButtonVariant, InteractivePopup, InteractivePopupPosition, PopupDescriptor, PopupEffect, PopupEffects, PopupProps};
pub use herald_primitives::PopupKind;
pub use registry::{Drained, PopupRegistry, SelectionPolicy};
pub use rules::{BootRule, RuleId};
pub use snapshot::{ActionSnapshot, BootSnapshot};

//! Collaborator seams.
//!
//! Upstream data sources own their state and only hand out snapshots. Write
//! operations go back through the same traits. Implementations use interior
//! mutability; every method takes `&self`.

use std::sync::Arc;

use herald_primitives::{ActionType, Alerts, AlertsUpdate, LogEvent, MarketingCta, MarketingCtaVariant, ReadingStreak, User};

use crate::descriptor::{InteractivePopup, PopupDescriptor};

/// Persisted alert and preference flags.
pub trait AlertStore: Send + Sync {
	/// Returns true once the alert flags have been fetched.
	fn is_loaded(&self) -> bool;
	/// Current alert flags. Meaningless until [`Self::is_loaded`] is true.
	fn alerts(&self) -> Alerts;
	/// Records that today's boot popup has been shown.
	fn update_last_boot_popup(&self);
	/// Applies a partial alert update.
	fn update_alerts(&self, update: AlertsUpdate);
}

/// One-shot user action completion.
pub trait ActionTracker: Send + Sync {
	fn is_actions_fetched(&self) -> bool;
	/// `None` while the completion state is unknown.
	fn check_has_completed(&self, action: ActionType) -> Option<bool>;
	fn complete_action(&self, action: ActionType);
}

/// Marketing call-to-action payloads from the boot data.
pub trait MarketingSource: Send + Sync {
	fn marketing_cta(&self, variant: MarketingCtaVariant) -> Option<MarketingCta>;
}

/// Reading streak state.
pub trait StreakSource: Send + Sync {
	fn streak(&self) -> Option<ReadingStreak>;
	/// True when the streak migration promotion should be shown.
	fn should_show_popup(&self) -> bool;
	fn is_streaks_enabled(&self) -> bool;
}

/// Signed-in user.
pub trait SessionSource: Send + Sync {
	fn user(&self) -> Option<User>;
}

/// Analytics sink.
pub trait EventLogger: Send + Sync {
	fn log_event(&self, event: LogEvent);
}

/// Modal presentation layer.
pub trait PresentationSink: Send + Sync {
	/// Opens the boot modal described by `descriptor`.
	fn open_modal(&self, descriptor: &PopupDescriptor);
	/// Replaces the small interactive popup. `None` unmounts it.
	fn set_interactive_popup(&self, popup: Option<&InteractivePopup>);
}

/// Bundle of injected collaborators owned by one [`BootPopups`](crate::BootPopups).
#[derive(Clone)]
pub struct Collaborators {
	pub alerts: Arc<dyn AlertStore>,
	pub actions: Arc<dyn ActionTracker>,
	pub marketing: Arc<dyn MarketingSource>,
	pub streaks: Arc<dyn StreakSource>,
	pub session: Arc<dyn SessionSource>,
	pub logger: Arc<dyn EventLogger>,
	pub presentation: Arc<dyn PresentationSink>,
}

impl Collaborators {
	/// Uses one backend for every seam.
	pub fn from_backend<B>(backend: Arc<B>) -> Self
	where
		B: AlertStore + ActionTracker + MarketingSource + StreakSource + SessionSource + EventLogger + PresentationSink + 'static,
	{
		Self {
			alerts: backend.clone(),
			actions: backend.clone(),
			marketing: backend.clone(),
			streaks: backend.clone(),
			session: backend.clone(),
			logger: backend.clone(),
			presentation: backend,
		}
	}
}

impl std::fmt::Debug for Collaborators {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Collaborators").finish_non_exhaustive()
	}
}

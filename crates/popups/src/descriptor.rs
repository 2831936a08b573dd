//! Popup descriptors handed to the presentation layer.

use herald_primitives::{ActionType, AlertsUpdate, LazyModal, LogEvent, MarketingCta, PopupKind, User};
use serde::Serialize;
use serde_json::{Map, Value, json};
use smallvec::SmallVec;

/// Side effect attached to a popup lifecycle hook.
///
/// Effects are data; [`BootPopups`](crate::BootPopups) applies them through the
/// collaborators when the presentation layer reports that the modal opened or
/// closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEffect {
	/// Consume today's boot popup budget.
	MarkBootPopupShown,
	UpdateAlerts(AlertsUpdate),
	CompleteAction(ActionType),
	LogEvent(LogEvent),
}

pub type PopupEffects = SmallVec<[PopupEffect; 2]>;

/// Typed properties for each boot modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "modal", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum PopupProps {
	ReputationPrivileges,
	MarketingCta { marketing_cta: MarketingCta },
	GenericReferral,
	NewStreak { current_streak: u32, max_streak: u32 },
	RecoverStreak { user: User },
}

impl PopupProps {
	/// Free-form record consumed by the presentation layer.
	pub fn to_record(&self) -> Map<String, Value> {
		match serde_json::to_value(self) {
			Ok(Value::Object(mut record)) => {
				record.remove("modal");
				record
			}
			_ => Map::new(),
		}
	}
}

/// A registered boot popup candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupDescriptor {
	pub kind: PopupKind,
	pub props: PopupProps,
	/// Keep the modal open across route changes.
	pub persist_on_route_change: bool,
	pub on_open: PopupEffects,
	pub on_close: PopupEffects,
}

impl PopupDescriptor {
	pub fn new(kind: PopupKind, props: PopupProps) -> Self {
		Self {
			kind,
			props,
			persist_on_route_change: false,
			on_open: PopupEffects::new(),
			on_close: PopupEffects::new(),
		}
	}

	#[must_use]
	pub fn persist_on_route_change(mut self) -> Self {
		self.persist_on_route_change = true;
		self
	}

	#[must_use]
	pub fn on_open(mut self, effect: PopupEffect) -> Self {
		self.on_open.push(effect);
		self
	}

	#[must_use]
	pub fn on_close(mut self, effect: PopupEffect) -> Self {
		self.on_close.push(effect);
		self
	}

	pub fn modal(&self) -> LazyModal {
		self.kind.modal()
	}

	/// Returns true if opening or closing the popup consumes the daily budget.
	pub fn marks_shown(&self) -> bool {
		self.on_open.iter().chain(&self.on_close).any(|e| matches!(e, PopupEffect::MarkBootPopupShown))
	}

	/// JSON form `{ type, kind, persistOnRouteChange, props }` for the presentation layer.
	pub fn to_json(&self) -> Value {
		json!({
			"type": self.modal(),
			"kind": self.kind,
			"persistOnRouteChange": self.persist_on_route_change,
			"props": self.props.to_record(),
		})
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractivePopupPosition {
	#[default]
	Center,
	LeftStart,
	LeftEnd,
	RightStart,
	RightEnd,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
	#[default]
	Primary,
	Secondary,
	Tertiary,
}

/// Non-modal popup shown next to the boot modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractivePopup {
	pub kind: PopupKind,
	pub position: InteractivePopupPosition,
	/// Render as a bottom drawer on small screens.
	pub is_drawer_on_mobile: bool,
	pub disable_overlay: bool,
	pub close_button: ButtonVariant,
	pub marketing_cta: MarketingCta,
}

impl InteractivePopup {
	/// Small marketing popover anchored to the right edge.
	pub fn marketing(marketing_cta: MarketingCta) -> Self {
		Self {
			kind: PopupKind::SmallMarketingCta,
			position: InteractivePopupPosition::RightEnd,
			is_drawer_on_mobile: true,
			disable_overlay: true,
			close_button: ButtonVariant::Primary,
			marketing_cta,
		}
	}
}

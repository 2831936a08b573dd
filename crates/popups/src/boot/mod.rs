//! Boot popup orchestrator.
//!
//! [`BootPopups`] owns the candidate registry. The host calls [`BootPopups::tick`]
//! whenever upstream data may have changed; each tick runs three phases:
//!
//! 1. Rules whose watched inputs changed are re-evaluated and their
//!    candidates registered.
//! 2. The small popup channel is re-synced with its source.
//! 3. If alerts are loaded, today's budget is unused, and the registry is
//!    non-empty, the winning candidate is opened and the registry cleared.
//!
//! The presented popup stays *active* until the host reports it closed; its
//! `on_open` and `on_close` effects run when the host reports those
//! transitions. No drain happens while a popup is active: later candidates
//! stay registered until it closes.

use herald_primitives::PopupKind;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::collaborators::Collaborators;
use crate::config::BootPopupConfig;
use crate::descriptor::{InteractivePopup, PopupDescriptor, PopupEffects};
use crate::effects;
use crate::registry::PopupRegistry;
use crate::rules::{self, BootRule, RuleId};
use crate::small_popup::SmallPopupChannel;
use crate::snapshot::BootSnapshot;

/// What one tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
	/// Rules re-evaluated because their inputs changed.
	pub evaluated: SmallVec<[RuleId; 6]>,
	/// Kinds registered this tick, in registration order.
	pub registered: SmallVec<[PopupKind; 4]>,
	/// Kind handed to the presentation layer.
	pub presented: Option<PopupKind>,
	/// Kinds dropped by the drain.
	pub discarded: Vec<PopupKind>,
	pub small_popup_changed: bool,
}

#[derive(Debug)]
struct ActiveModal {
	kind: PopupKind,
	on_open: PopupEffects,
	on_close: PopupEffects,
	opened: bool,
}

impl From<PopupDescriptor> for ActiveModal {
	fn from(descriptor: PopupDescriptor) -> Self {
		Self {
			kind: descriptor.kind,
			on_open: descriptor.on_open,
			on_close: descriptor.on_close,
			opened: false,
		}
	}
}

pub struct BootPopups {
	collaborators: Collaborators,
	config: BootPopupConfig,
	rules: Vec<Box<dyn BootRule>>,
	fingerprints: FxHashMap<RuleId, u64>,
	registry: PopupRegistry,
	small_popup: SmallPopupChannel,
	active: Option<ActiveModal>,
}

impl BootPopups {
	/// Mounts an orchestrator with the built-in rules.
	pub fn new(collaborators: Collaborators, config: BootPopupConfig) -> Self {
		let rules = rules::builtin_rules(&config);
		Self::with_rules(collaborators, config, rules)
	}

	/// Mounts an orchestrator with an explicit rule set, evaluated in order.
	pub fn with_rules(collaborators: Collaborators, config: BootPopupConfig, rules: Vec<Box<dyn BootRule>>) -> Self {
		debug!(rules = rules.len(), "mounting boot popups");
		Self {
			collaborators,
			config,
			rules,
			fingerprints: FxHashMap::default(),
			registry: PopupRegistry::new(),
			small_popup: SmallPopupChannel::new(),
			active: None,
		}
	}

	pub fn config(&self) -> &BootPopupConfig {
		&self.config
	}

	/// Pending candidates.
	pub fn registry(&self) -> &PopupRegistry {
		&self.registry
	}

	pub fn small_popup(&self) -> Option<&InteractivePopup> {
		self.small_popup.current()
	}

	/// Kind of the presented modal, until the host reports it closed.
	pub fn active_modal(&self) -> Option<PopupKind> {
		self.active.as_ref().map(|active| active.kind)
	}

	/// Registers a candidate directly, outside the rule set.
	///
	/// It competes in the next drain like any rule-produced candidate.
	pub fn register(&mut self, descriptor: PopupDescriptor) -> bool {
		let kind = descriptor.kind;
		let replaced = self.registry.register(descriptor);
		debug!(%kind, replaced, "registered boot popup candidate");
		replaced
	}

	/// Runs one evaluation and reconciliation cycle.
	pub fn tick(&mut self) -> TickReport {
		let snapshot = BootSnapshot::capture(&self.collaborators);
		let mut report = TickReport::default();

		self.evaluate_rules(&snapshot, &mut report);

		if self.small_popup.sync(snapshot.marketing_popover_small.as_ref()) {
			debug!(present = self.small_popup.current().is_some(), "small popup changed");
			self.collaborators.presentation.set_interactive_popup(self.small_popup.current());
			report.small_popup_changed = true;
		}

		self.reconcile(&snapshot, &mut report);
		report
	}

	fn evaluate_rules(&mut self, snapshot: &BootSnapshot, report: &mut TickReport) {
		for rule in &self.rules {
			let id = rule.id();
			let fingerprint = rules::fingerprint(rule.as_ref(), snapshot);
			if self.fingerprints.insert(id, fingerprint) == Some(fingerprint) {
				continue;
			}
			report.evaluated.push(id);

			let Some(descriptor) = rule.evaluate(snapshot) else {
				trace!(rule = %id, "rule not eligible");
				continue;
			};
			let kind = descriptor.kind;
			let replaced = self.registry.register(descriptor);
			debug!(rule = %id, %kind, replaced, "registered boot popup candidate");
			report.registered.push(kind);
		}
	}

	fn reconcile(&mut self, snapshot: &BootSnapshot, report: &mut TickReport) {
		if self.registry.is_empty() {
			return;
		}
		if let Some(active) = &self.active {
			trace!(active = %active.kind, pending = self.registry.len(), "boot popup active, holding drain");
			return;
		}
		if !snapshot.is_ready() {
			trace!(
				pending = self.registry.len(),
				alerts_loaded = snapshot.alerts_loaded,
				boot_popup = snapshot.alerts.boot_popup,
				"boot popups waiting for readiness"
			);
			return;
		}
		let Some(drained) = self.registry.drain(&self.config.selection) else {
			return;
		};

		let kind = drained.winner.kind;
		if !drained.discarded.is_empty() {
			debug!(discarded = ?drained.discarded, "discarding boot popup candidates");
		}
		info!(%kind, modal = %drained.winner.modal(), "presenting boot popup");

		self.collaborators.presentation.open_modal(&drained.winner);
		self.active = Some(ActiveModal::from(drained.winner));
		report.presented = Some(kind);
		report.discarded = drained.discarded;
	}

	/// Host reports the active modal finished opening. Runs its `on_open` effects once.
	pub fn on_modal_opened(&mut self) -> Option<PopupKind> {
		let active = self.active.as_mut()?;
		if active.opened {
			return None;
		}
		active.opened = true;
		effects::apply_all(&active.on_open, &self.collaborators);
		Some(active.kind)
	}

	/// Host reports the active modal closed. Runs its `on_close` effects.
	pub fn on_modal_closed(&mut self) -> Option<PopupKind> {
		let active = self.active.take()?;
		effects::apply_all(&active.on_close, &self.collaborators);
		debug!(kind = %active.kind, "boot popup closed");
		Some(active.kind)
	}

	/// Tears down the orchestrator. Pending candidates are dropped without
	/// presenting anything or running any effect.
	pub fn unmount(mut self) -> usize {
		let discarded = self.registry.clear();
		debug!(discarded, "unmounting boot popups");
		discarded
	}
}

impl std::fmt::Debug for BootPopups {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BootPopups")
			.field("config", &self.config)
			.field("pending", &self.registry.len())
			.field("active", &self.active_modal())
			.finish_non_exhaustive()
	}
}

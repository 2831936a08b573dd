//! Applies popup lifecycle effects through the collaborators.

use tracing::trace;

use crate::collaborators::Collaborators;
use crate::descriptor::PopupEffect;

pub(crate) fn apply_all(effects: &[PopupEffect], collaborators: &Collaborators) {
	for effect in effects {
		apply(effect, collaborators);
	}
}

fn apply(effect: &PopupEffect, collaborators: &Collaborators) {
	trace!(?effect, "applying popup effect");
	match effect {
		PopupEffect::MarkBootPopupShown => collaborators.alerts.update_last_boot_popup(),
		PopupEffect::UpdateAlerts(update) => collaborators.alerts.update_alerts(*update),
		PopupEffect::CompleteAction(action) => collaborators.actions.complete_action(*action),
		PopupEffect::LogEvent(event) => collaborators.logger.log_event(event.clone()),
	}
}

//! Change-driven tick loop.
//!
//! Ticks once on start, then once per change notification from the
//! collaborators and once per modal acknowledgement from the host. Cancelling
//! the token unmounts the orchestrator: whatever is still pending is discarded
//! without being presented.

use herald_primitives::PopupKind;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::boot::BootPopups;

/// Lifecycle transitions of the presented modal, reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
	Opened,
	Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverExit {
	Cancelled,
	/// The change source was dropped.
	SourceClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverReport {
	pub ticks: usize,
	/// Presented kinds in order.
	pub presented: Vec<PopupKind>,
	/// Candidates dropped at unmount.
	pub discarded: usize,
	pub exit: DriverExit,
}

/// Drives `popups` until cancelled or until `changes` closes.
///
/// Dropping the sender of `modal_events` only stops acknowledgements; the loop
/// keeps following `changes`.
pub async fn run(
	mut popups: BootPopups,
	mut changes: watch::Receiver<u64>,
	mut modal_events: mpsc::Receiver<ModalEvent>,
	cancel: CancellationToken,
) -> DriverReport {
	let mut ticks = 0;
	let mut presented = Vec::new();
	let mut acknowledging = true;

	changes.borrow_and_update();
	let exit = loop {
		if cancel.is_cancelled() {
			break DriverExit::Cancelled;
		}
		ticks += 1;
		presented.extend(popups.tick().presented);

		tokio::select! {
			biased;
			() = cancel.cancelled() => break DriverExit::Cancelled,
			event = modal_events.recv(), if acknowledging => match event {
				Some(ModalEvent::Opened) => {
					popups.on_modal_opened();
				}
				Some(ModalEvent::Closed) => {
					popups.on_modal_closed();
				}
				None => {
					debug!("modal event source closed");
					acknowledging = false;
				}
			},
			changed = changes.changed() => {
				if changed.is_err() {
					break DriverExit::SourceClosed;
				}
				changes.borrow_and_update();
			}
		}
	};

	let discarded = popups.unmount();
	debug!(ticks, ?exit, discarded, "boot popup driver stopped");
	DriverReport {
		ticks,
		presented,
		discarded,
		exit,
	}
}

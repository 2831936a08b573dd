//! Kind-keyed candidate registry.
//!
//! Holds at most one [`PopupDescriptor`] per [`PopupKind`] in insertion order.
//! Re-registering a kind replaces its descriptor but keeps the position of the
//! first registration.

use herald_primitives::PopupKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::descriptor::PopupDescriptor;

/// How the winning candidate is chosen at drain time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
	/// Earliest registered kind wins.
	#[default]
	FirstRegistered,
	/// Best-ranked kind wins. Unranked kinds follow, in registration order.
	Ranked(Vec<PopupKind>),
}

impl SelectionPolicy {
	fn rank(&self, kind: PopupKind) -> usize {
		match self {
			Self::FirstRegistered => 0,
			Self::Ranked(order) => order.iter().position(|k| *k == kind).unwrap_or(order.len()),
		}
	}
}

/// Result of draining the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drained {
	pub winner: PopupDescriptor,
	/// Losing kinds in registration order.
	pub discarded: Vec<PopupKind>,
}

#[derive(Debug, Default)]
pub struct PopupRegistry {
	entries: IndexMap<PopupKind, PopupDescriptor>,
}

impl PopupRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces the candidate for `descriptor.kind`.
	///
	/// Returns true when an earlier candidate of the same kind was replaced.
	pub fn register(&mut self, descriptor: PopupDescriptor) -> bool {
		self.entries.insert(descriptor.kind, descriptor).is_some()
	}

	pub fn get(&self, kind: PopupKind) -> Option<&PopupDescriptor> {
		self.entries.get(&kind)
	}

	/// Registered kinds in queue order.
	pub fn kinds(&self) -> impl Iterator<Item = PopupKind> + '_ {
		self.entries.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Drops every pending candidate and returns how many there were.
	pub fn clear(&mut self) -> usize {
		let count = self.entries.len();
		self.entries.clear();
		count
	}

	/// Removes the winner under `policy` and discards everything else.
	///
	/// The registry is empty afterwards. Returns `None` when nothing is queued.
	pub fn drain(&mut self, policy: &SelectionPolicy) -> Option<Drained> {
		let index = self.select(policy)?;
		let mut entries = std::mem::take(&mut self.entries);
		let (_, winner) = entries.shift_remove_index(index)?;
		Some(Drained {
			winner,
			discarded: entries.into_keys().collect(),
		})
	}

	fn select(&self, policy: &SelectionPolicy) -> Option<usize> {
		self.entries
			.keys()
			.enumerate()
			.min_by_key(|(index, kind)| (policy.rank(**kind), *index))
			.map(|(index, _)| index)
	}
}

#[cfg(test)]
mod tests;

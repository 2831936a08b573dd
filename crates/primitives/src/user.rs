use serde::{Deserialize, Serialize};

/// Summary of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
	pub id: String,
	pub username: String,
	pub reputation: i64,
}

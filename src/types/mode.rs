//! Definition for the [`WorkMode`] type, implemented by an enum.

use serde::{Deserialize, Serialize};

/// Represents how an employee is expected to attend work.
///
/// Only [`WorkMode::Remote`] bypasses geofencing. Hybrid employees are
/// checked against the registered sites exactly like regular ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkMode {
    Regular,
    Hybrid,
    Remote,
}

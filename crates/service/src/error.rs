// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use resolveit_persistence::PersistenceError;

/// Errors surfaced by the complaint lifecycle manager.
///
/// Notification failures have no variant here: delivery is best-effort and
/// swallowed inside the Notifier, never surfaced as a failure of the
/// primary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A mutating operation was given an ID with no matching complaint.
    /// The operation aborts before any write.
    ComplaintNotFound(i64),
    /// The store reported a failure.
    Persistence(PersistenceError),
    /// A timestamp could not be formatted.
    Time(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ComplaintNotFound(id) => write!(f, "Complaint {id} not found"),
            Self::Persistence(err) => write!(f, "Persistence error: {err}"),
            Self::Time(msg) => write!(f, "Failed to format timestamp: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::ComplaintNotFound(_) | Self::Time(_) => None,
        }
    }
}

impl From<PersistenceError> for ServiceError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}

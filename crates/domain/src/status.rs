// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint status tracking.
//!
//! This module defines the complaint lifecycle states. There is no
//! transition legality matrix: any status may follow any other status.
//! The only automatic transition in the system is Submitted → `InProgress`
//! on assignment, applied by the lifecycle manager.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    /// Complaint has been filed and not yet picked up
    #[default]
    Submitted,
    /// A staff member is working the complaint
    InProgress,
    /// Work is done and awaiting review
    UnderReview,
    /// Complaint resolved to the filer's satisfaction
    Resolved,
    /// Complaint closed (resolved or abandoned)
    Closed,
    /// Complaint escalated to a higher tier
    Escalated,
}

impl ComplaintStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::InProgress => "in_progress",
            Self::UnderReview => "under_review",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Escalated => "escalated",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "submitted" => Ok(Self::Submitted),
            "in_progress" => Ok(Self::InProgress),
            "under_review" => Ok(Self::UnderReview),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            "escalated" => Ok(Self::Escalated),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status stamps the resolution timestamp.
    ///
    /// Transitions into `Resolved` or `Closed` set `resolved_at`, overwriting
    /// any earlier value. Repeated transitions re-stamp it.
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl FromStr for ComplaintStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            ComplaintStatus::Submitted,
            ComplaintStatus::InProgress,
            ComplaintStatus::UnderReview,
            ComplaintStatus::Resolved,
            ComplaintStatus::Closed,
            ComplaintStatus::Escalated,
        ];

        for status in statuses {
            let s = status.as_str();
            match ComplaintStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = ComplaintStatus::parse_str("reopened");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_submitted() {
        assert_eq!(ComplaintStatus::default(), ComplaintStatus::Submitted);
    }

    #[test]
    fn test_resolution_statuses() {
        assert!(ComplaintStatus::Resolved.is_resolution());
        assert!(ComplaintStatus::Closed.is_resolution());
        assert!(!ComplaintStatus::Submitted.is_resolution());
        assert!(!ComplaintStatus::InProgress.is_resolution());
        assert!(!ComplaintStatus::UnderReview.is_resolution());
        assert!(!ComplaintStatus::Escalated.is_resolution());
    }
}

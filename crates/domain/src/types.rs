// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::ComplaintStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Classification of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Billing,
    Service,
    General,
    Urgent,
}

impl Category {
    /// Returns the string representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::Service => "service",
            Self::General => "general",
            Self::Urgent => "urgent",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(Self::Technical),
            "billing" => Ok(Self::Billing),
            "service" => Ok(Self::Service),
            "general" => Ok(Self::General),
            "urgent" => Ok(Self::Urgent),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of a complaint. Defaults to `Medium` when the filer does not
/// pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Returns the string representation of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidPriority(s.to_string())),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role of a user account.
///
/// Roles are informational for this core: they drive collaborator lookups
/// (e.g. which accounts can appear as assignees at the boundary), never
/// authorization inside the lifecycle manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A regular account that files complaints
    #[default]
    User,
    /// A staff account that works complaints
    Staff,
    /// An administrative account
    Admin,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An actor in the system: a filer, an assignee, or staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The canonical identifier assigned by the store.
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Returns the user's full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A user-filed issue. The aggregate root: status history entries and
/// internal notes belong to their complaint and share its deletion
/// lifecycle.
///
/// Child records reference the complaint by id only; there are no live
/// back-references between entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    /// The canonical identifier assigned by the store.
    pub complaint_id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: ComplaintStatus,
    /// The filing user.
    pub user_id: i64,
    /// The assigned staff user, if any.
    pub assigned_to: Option<i64>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last mutation timestamp (ISO 8601), monotonically non-decreasing.
    pub updated_at: String,
    /// Set only on transition into `Resolved` or `Closed` (ISO 8601).
    /// Overwritten if the complaint is resolved again.
    pub resolved_at: Option<String>,
    /// Free-text resolution summary.
    pub resolution: Option<String>,
}

/// The caller-supplied portion of a new complaint.
///
/// Any status carried here is ignored by design: creation always forces
/// `Submitted`, so the draft does not have a status field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

/// An immutable audit entry recording a status-affecting operation.
///
/// Exactly one entry is appended for every creation, transition, and
/// assignment, in call order. Entries are never mutated; they are removed
/// only when their complaint is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistory {
    /// The canonical identifier assigned by the store.
    pub history_id: i64,
    pub complaint_id: i64,
    /// The complaint's status at the time of the entry.
    pub status: ComplaintStatus,
    /// The user who caused the change.
    pub changed_by: i64,
    /// Free text describing the change.
    pub notes: String,
    /// Entry timestamp (ISO 8601).
    pub created_at: String,
}

/// A staff annotation on a complaint.
///
/// Public notes are shown to (and trigger a notification for) the filing
/// user; internal notes stay within staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalNote {
    /// The canonical identifier assigned by the store.
    pub note_id: i64,
    pub complaint_id: i64,
    pub note: String,
    pub created_by: i64,
    /// Entry timestamp (ISO 8601).
    pub created_at: String,
    pub is_public: bool,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Complaint title is blank or too long.
    InvalidTitle(String),
    /// Complaint description is blank or too long.
    InvalidDescription(String),
    /// Note text is blank or too long.
    InvalidNote(String),
    /// Resolution text is too long.
    InvalidResolution(String),
    /// Status string is not one of the enumerated values.
    InvalidStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Category string is not one of the enumerated values.
    InvalidCategory(String),
    /// Priority string is not one of the enumerated values.
    InvalidPriority(String),
    /// Role string is not one of the enumerated values.
    InvalidRole(String),
    /// User name is empty or invalid.
    InvalidName(String),
    /// User email is empty or malformed.
    InvalidEmail(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::InvalidNote(msg) => write!(f, "Invalid note: {msg}"),
            Self::InvalidResolution(msg) => write!(f, "Invalid resolution: {msg}"),
            Self::InvalidStatus { status } => write!(f, "Invalid complaint status: '{status}'"),
            Self::InvalidCategory(msg) => write!(f, "Invalid category: '{msg}'"),
            Self::InvalidPriority(msg) => write!(f, "Invalid priority: '{msg}'"),
            Self::InvalidRole(msg) => write!(f, "Invalid role: '{msg}'"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

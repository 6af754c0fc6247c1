// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ComplaintDraft, User};

/// Maximum length of a complaint title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a complaint description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Maximum length of an internal note.
pub const MAX_NOTE_LEN: usize = 1000;

/// Maximum length of a resolution summary.
pub const MAX_RESOLUTION_LEN: usize = 1000;

/// Validates a complaint draft's field constraints.
///
/// This function checks the boundary rules for caller-supplied text. It is
/// pure and has no side effects; uniqueness and existence checks require
/// context and live elsewhere.
///
/// # Arguments
///
/// * `draft` - The draft to validate
///
/// # Errors
///
/// Returns an error if:
/// - The title is blank or longer than [`MAX_TITLE_LEN`]
/// - The description is blank or longer than [`MAX_DESCRIPTION_LEN`]
pub fn validate_complaint_draft(draft: &ComplaintDraft) -> Result<(), DomainError> {
    // Rule: title must not be blank
    if draft.title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be blank",
        )));
    }

    if draft.title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::InvalidTitle(format!(
            "Title cannot be longer than {MAX_TITLE_LEN} characters"
        )));
    }

    // Rule: description must not be blank
    if draft.description.trim().is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "Description cannot be blank",
        )));
    }

    if draft.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::InvalidDescription(format!(
            "Description cannot be longer than {MAX_DESCRIPTION_LEN} characters"
        )));
    }

    Ok(())
}

/// Validates note text for an internal note.
///
/// # Errors
///
/// Returns an error if the text is blank or longer than [`MAX_NOTE_LEN`].
pub fn validate_note_text(text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidNote(String::from(
            "Note cannot be blank",
        )));
    }

    if text.chars().count() > MAX_NOTE_LEN {
        return Err(DomainError::InvalidNote(format!(
            "Note cannot be longer than {MAX_NOTE_LEN} characters"
        )));
    }

    Ok(())
}

/// Validates a resolution summary.
///
/// The resolution is optional; blank is permitted (treated as absent by the
/// boundary layer), only the length cap is enforced here.
///
/// # Errors
///
/// Returns an error if the text is longer than [`MAX_RESOLUTION_LEN`].
pub fn validate_resolution_text(text: &str) -> Result<(), DomainError> {
    if text.chars().count() > MAX_RESOLUTION_LEN {
        return Err(DomainError::InvalidResolution(format!(
            "Resolution cannot be longer than {MAX_RESOLUTION_LEN} characters"
        )));
    }

    Ok(())
}

/// Validates a user's basic field constraints.
///
/// # Errors
///
/// Returns an error if:
/// - The first or last name is empty
/// - The email is empty or has no '@'
pub fn validate_user_fields(user: &User) -> Result<(), DomainError> {
    if user.first_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "First name cannot be empty",
        )));
    }

    if user.last_name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Last name cannot be empty",
        )));
    }

    // Minimal shape check; real address verification happens at delivery time
    if user.email.trim().is_empty() || !user.email.contains('@') {
        return Err(DomainError::InvalidEmail(format!(
            "'{}' is not a valid email address",
            user.email
        )));
    }

    Ok(())
}

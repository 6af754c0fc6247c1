// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Message composition.
//!
//! Each builder returns a `(subject, body)` pair ready for a
//! [`crate::Notifier`]. Complaint identifiers render as `#{id}` so filers
//! can quote them back to support.

use resolveit_domain::{Complaint, ComplaintStatus, User};

/// Confirmation sent to the filer after a complaint is created.
#[must_use]
pub fn submission_confirmation(complaint: &Complaint, filer: &User) -> (String, String) {
    let subject = format!(
        "Complaint Submitted Successfully - #{}",
        complaint.complaint_id
    );
    let body = format!(
        "Dear {},\n\n\
         Your complaint has been submitted successfully.\n\n\
         Complaint ID: #{}\n\
         Title: {}\n\
         Status: {}\n\
         Priority: {}\n\n\
         You can track your complaint status using the complaint ID.\n\n\
         Thank you for contacting us.\n\n\
         Best regards,\n\
         ResolveIt Support Team",
        filer.first_name,
        complaint.complaint_id,
        complaint.title,
        complaint.status,
        complaint.priority,
    );
    (subject, body)
}

/// Update sent to the filer when a complaint changes status.
#[must_use]
pub fn status_update(
    complaint: &Complaint,
    filer: &User,
    old_status: ComplaintStatus,
    new_status: ComplaintStatus,
) -> (String, String) {
    let subject = format!("Complaint Status Updated - #{}", complaint.complaint_id);
    let body = format!(
        "Dear {},\n\n\
         Your complaint status has been updated.\n\n\
         Complaint ID: #{}\n\
         Title: {}\n\
         Previous Status: {old_status}\n\
         Current Status: {new_status}\n\n\
         You can view more details by logging into your account.\n\n\
         Thank you for your patience.\n\n\
         Best regards,\n\
         ResolveIt Support Team",
        filer.first_name, complaint.complaint_id, complaint.title,
    );
    (subject, body)
}

/// Notice sent to the staff member a complaint was assigned to.
#[must_use]
pub fn assignment(complaint: &Complaint, filer: &User, assignee: &User) -> (String, String) {
    let subject = format!("New Complaint Assigned - #{}", complaint.complaint_id);
    let body = format!(
        "Dear {},\n\n\
         A new complaint has been assigned to you.\n\n\
         Complaint ID: #{}\n\
         Title: {}\n\
         Category: {}\n\
         Priority: {}\n\
         Submitted by: {}\n\n\
         Please log in to the admin panel to view and manage this complaint.\n\n\
         Best regards,\n\
         ResolveIt System",
        assignee.first_name,
        complaint.complaint_id,
        complaint.title,
        complaint.category,
        complaint.priority,
        filer.full_name(),
    );
    (subject, body)
}

/// Update sent to the filer when staff posts a public note.
#[must_use]
pub fn public_note(complaint: &Complaint, filer: &User, note_text: &str) -> (String, String) {
    let subject = format!("Update on Your Complaint - #{}", complaint.complaint_id);
    let body = format!(
        "Dear {},\n\n\
         There's an update on your complaint.\n\n\
         Complaint ID: #{}\n\
         Title: {}\n\n\
         Update:\n{note_text}\n\n\
         You can view more details by logging into your account.\n\n\
         Best regards,\n\
         ResolveIt Support Team",
        filer.first_name, complaint.complaint_id, complaint.title,
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolveit_domain::{Category, Priority, Role};

    fn sample_complaint() -> Complaint {
        Complaint {
            complaint_id: 17,
            title: String::from("Router drops connection"),
            description: String::from("Drops every few minutes."),
            category: Category::Technical,
            priority: Priority::High,
            status: ComplaintStatus::Submitted,
            user_id: 1,
            assigned_to: None,
            created_at: String::from("2026-08-07T10:00:00.000000000Z"),
            updated_at: String::from("2026-08-07T10:00:00.000000000Z"),
            resolved_at: None,
            resolution: None,
        }
    }

    fn sample_user(first: &str, last: &str) -> User {
        User {
            user_id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            role: Role::User,
        }
    }

    #[test]
    fn test_submission_confirmation_mentions_id_and_title() {
        let complaint = sample_complaint();
        let filer = sample_user("Alice", "Nguyen");

        let (subject, body) = submission_confirmation(&complaint, &filer);

        assert_eq!(subject, "Complaint Submitted Successfully - #17");
        assert!(body.starts_with("Dear Alice,"));
        assert!(body.contains("Complaint ID: #17"));
        assert!(body.contains("Title: Router drops connection"));
        assert!(body.contains("Status: submitted"));
        assert!(body.contains("Priority: high"));
    }

    #[test]
    fn test_status_update_carries_both_statuses() {
        let complaint = sample_complaint();
        let filer = sample_user("Alice", "Nguyen");

        let (subject, body) = status_update(
            &complaint,
            &filer,
            ComplaintStatus::Submitted,
            ComplaintStatus::Resolved,
        );

        assert_eq!(subject, "Complaint Status Updated - #17");
        assert!(body.contains("Previous Status: submitted"));
        assert!(body.contains("Current Status: resolved"));
    }

    #[test]
    fn test_assignment_addresses_assignee_and_names_filer() {
        let complaint = sample_complaint();
        let filer = sample_user("Alice", "Nguyen");
        let assignee = sample_user("Sam", "Ortiz");

        let (subject, body) = assignment(&complaint, &filer, &assignee);

        assert_eq!(subject, "New Complaint Assigned - #17");
        assert!(body.starts_with("Dear Sam,"));
        assert!(body.contains("Submitted by: Alice Nguyen"));
        assert!(body.contains("Category: technical"));
    }

    #[test]
    fn test_public_note_embeds_note_text() {
        let complaint = sample_complaint();
        let filer = sample_user("Alice", "Nguyen");

        let (subject, body) = public_note(&complaint, &filer, "A technician is on the way.");

        assert_eq!(subject, "Update on Your Complaint - #17");
        assert!(body.contains("Update:\nA technician is on the way."));
    }
}

//! Notes pure logic functions — no RSX, no signals

use chrono::{DateTime, Utc};
use shared_types::Note;

/// Case-insensitive substring match against title OR content. An empty query
/// matches every note; a note with empty title and content matches no
/// non-empty query.
pub fn matches_query(note: &Note, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    note.title.to_lowercase().contains(&query) || note.content.to_lowercase().contains(&query)
}

/// Filter the loaded collection for display. Purely local, recomputed per
/// render; never touches the network.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    notes
        .iter()
        .filter(|note| matches_query(note, query))
        .cloned()
        .collect()
}

/// Merge the draft fields into an edit target for a PUT payload. Identity,
/// organization, and creation timestamp stay untouched.
pub fn merge_draft(target: &Note, title: &str, content: &str) -> Note {
    Note {
        title: title.to_string(),
        content: content.to_string(),
        ..target.clone()
    }
}

/// Required-field check backing form submission. Whitespace-only input does
/// not count.
pub fn draft_is_valid(title: &str, content: &str) -> bool {
    !title.trim().is_empty() && !content.trim().is_empty()
}

/// A list response is applied only while its generation is still the latest
/// one dispatched; stale responses from rapid organization switching are
/// dropped.
pub fn load_is_current(dispatched: u64, current: u64) -> bool {
    dispatched == current
}

/// "Aug 7, 2026"-style label; empty when the server never set a timestamp.
pub fn format_created_date(created_at: Option<&DateTime<Utc>>) -> String {
    match created_at {
        Some(timestamp) => timestamp.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}

pub fn form_heading(editing: bool) -> &'static str {
    if editing {
        "Edit Note"
    } else {
        "Create New Note"
    }
}

pub fn submit_label(saving: bool, editing: bool) -> &'static str {
    if saving {
        "Saving..."
    } else if editing {
        "Update Note"
    } else {
        "Create Note"
    }
}

pub fn empty_state_heading(query: &str, org_id: &str) -> String {
    if query.is_empty() {
        format!("No notes yet for {org_id}")
    } else {
        "No notes found".to_string()
    }
}

pub fn empty_state_hint(query: &str) -> &'static str {
    if query.is_empty() {
        "Create your first note to get started"
    } else {
        "Try adjusting your search terms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn note(title: &str, content: &str) -> Note {
        Note {
            id: 1,
            title: title.to_string(),
            content: content.to_string(),
            organization_id: "ORG-001".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn search_is_case_insensitive_over_title_or_content() {
        let kickoff = note("Kickoff", "Agenda items");
        assert!(matches_query(&kickoff, "AGENDA"));
        assert!(matches_query(&kickoff, "kick"));
        assert!(matches_query(&kickoff, "agenda"));
        assert!(!matches_query(&kickoff, "zzz"));
    }

    #[test]
    fn empty_query_matches_every_note() {
        let notes = vec![note("a", "b"), note("", "")];
        assert_eq!(filter_notes(&notes, "").len(), 2);
    }

    #[test]
    fn blank_note_matches_no_non_empty_query() {
        let blank = note("", "");
        assert!(!matches_query(&blank, "anything"));
        assert!(matches_query(&blank, ""));
    }

    #[test]
    fn merge_draft_keeps_identity_and_server_fields() {
        let target = Note {
            id: 9,
            title: "old".to_string(),
            content: "old body".to_string(),
            organization_id: "ORG-002".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()),
        };
        let merged = merge_draft(&target, "new", "new body");
        assert_eq!(merged.id, 9);
        assert_eq!(merged.organization_id, "ORG-002");
        assert_eq!(merged.created_at, target.created_at);
        assert_eq!(merged.title, "new");
        assert_eq!(merged.content, "new body");
    }

    #[test]
    fn whitespace_only_drafts_are_invalid() {
        assert!(!draft_is_valid("  ", "body"));
        assert!(!draft_is_valid("title", "\n"));
        assert!(draft_is_valid("title", "body"));
    }

    #[test]
    fn stale_load_generations_are_dropped() {
        assert!(load_is_current(3, 3));
        assert!(!load_is_current(2, 3));
    }

    #[test]
    fn created_date_label_is_compact_and_absence_safe() {
        let stamp = Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap();
        assert_eq!(format_created_date(Some(&stamp)), "Aug 7, 2026");
        assert_eq!(format_created_date(None), "");
    }

    #[test]
    fn empty_state_copy_depends_on_active_query() {
        assert_eq!(empty_state_heading("", "ORG-001"), "No notes yet for ORG-001");
        assert_eq!(empty_state_heading("zzz", "ORG-001"), "No notes found");
        assert_eq!(empty_state_hint(""), "Create your first note to get started");
        assert_eq!(empty_state_hint("zzz"), "Try adjusting your search terms");
    }

    #[test]
    fn form_labels_track_mode_and_saving_flag() {
        assert_eq!(form_heading(true), "Edit Note");
        assert_eq!(form_heading(false), "Create New Note");
        assert_eq!(submit_label(true, true), "Saving...");
        assert_eq!(submit_label(false, true), "Update Note");
        assert_eq!(submit_label(false, false), "Create Note");
    }
}

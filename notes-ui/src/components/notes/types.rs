//! Notes view state types

use shared_types::Note;

/// What the note form is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Form hidden
    Hidden,
    /// Form visible with no edit target
    Creating,
    /// Form visible, seeded from an existing note
    Editing,
}

/// Derive the form mode from the visibility flag and the edit target.
///
/// An edit target without a visible form still counts as hidden; the form is
/// the only surface that reads the target.
pub fn form_mode(show_form: bool, editing: Option<&Note>) -> FormMode {
    if !show_form {
        FormMode::Hidden
    } else if editing.is_some() {
        FormMode::Editing
    } else {
        FormMode::Creating
    }
}

/// Dialog state for destructive operations
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    None,
    ConfirmDelete { id: i64, title: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(id: i64) -> Note {
        Note {
            id,
            title: format!("note-{id}"),
            content: String::new(),
            organization_id: "ORG-001".to_string(),
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn hidden_form_wins_over_edit_target() {
        let target = note(1);
        assert_eq!(form_mode(false, None), FormMode::Hidden);
        assert_eq!(form_mode(false, Some(&target)), FormMode::Hidden);
    }

    #[test]
    fn visible_form_splits_on_edit_target() {
        let target = note(1);
        assert_eq!(form_mode(true, None), FormMode::Creating);
        assert_eq!(form_mode(true, Some(&target)), FormMode::Editing);
    }
}

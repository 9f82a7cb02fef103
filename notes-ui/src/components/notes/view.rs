//! Main NotesView component

use dioxus::prelude::*;
use shared_types::Note;

use crate::api::{create_note, delete_note, fetch_notes, update_note};

use super::logic::*;
use super::styles::NOTES_STYLES;
use super::types::*;

#[component]
pub fn NotesView(#[props(default = "ORG-001".to_string())] initial_org_id: String) -> Element {
    let mut notes = use_signal(Vec::<Note>::new);
    let mut org_id = use_signal(|| initial_org_id.clone());
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut editing_note = use_signal(|| None::<Note>);
    let mut loading = use_signal(|| false);
    let mut search_query = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut load_generation = use_signal(|| 0u64);
    let mut dialog = use_signal(|| DialogState::None);

    // Fetch the full list for one organization. Stale responses (an older
    // generation than the latest dispatch) are dropped instead of applied.
    let load_notes = use_callback(move |org: String| {
        spawn(async move {
            let generation = load_generation() + 1;
            load_generation.set(generation);
            loading.set(true);
            error.set(None);
            match fetch_notes(&org).await {
                Ok(list) => {
                    if load_is_current(generation, load_generation()) {
                        notes.set(list);
                    }
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to fetch notes: {e}");
                    if load_is_current(generation, load_generation()) {
                        error.set(Some(e));
                    }
                }
            }
            if load_is_current(generation, load_generation()) {
                loading.set(false);
            }
        });
    });

    // Initial load, re-run whenever the organization id changes.
    use_effect(move || {
        let org = org_id();
        load_notes.call(org);
    });

    // One update call with an edit target, one create call without. Success
    // resets the form and reloads the list; failure keeps the form open with
    // whatever was typed.
    let submit = use_callback(move |_| {
        let draft_title = title();
        let draft_content = content();
        if !draft_is_valid(&draft_title, &draft_content) {
            return;
        }

        let org = org_id();
        let target = editing_note();
        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = match target.as_ref() {
                Some(target) => update_note(&merge_draft(target, &draft_title, &draft_content))
                    .await
                    .map(|_| ()),
                None => create_note(&draft_title, &draft_content, &org)
                    .await
                    .map(|_| ()),
            };

            match result {
                Ok(()) => {
                    editing_note.set(None);
                    title.set(String::new());
                    content.set(String::new());
                    show_form.set(false);
                    loading.set(false);
                    load_notes.call(org);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to save note: {e}");
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    });

    // "New Note" toggles the form and always resets it to create mode.
    let toggle_form = move |_| {
        let visible = show_form();
        editing_note.set(None);
        title.set(String::new());
        content.set(String::new());
        show_form.set(!visible);
    };

    let open_form = move |_| {
        editing_note.set(None);
        title.set(String::new());
        content.set(String::new());
        show_form.set(true);
    };

    let mut begin_edit = move |note: Note| {
        title.set(note.title.clone());
        content.set(note.content.clone());
        editing_note.set(Some(note));
        show_form.set(true);
    };

    let cancel_edit = move |_| {
        editing_note.set(None);
        title.set(String::new());
        content.set(String::new());
        show_form.set(false);
    };

    let mut request_delete = move |note: Note| {
        dialog.set(DialogState::ConfirmDelete {
            id: note.id,
            title: note.title,
        });
    };

    let confirm_delete = use_callback(move |id: i64| {
        dialog.set(DialogState::None);
        let org = org_id();
        loading.set(true);
        error.set(None);
        spawn(async move {
            match delete_note(id).await {
                Ok(()) => {
                    loading.set(false);
                    load_notes.call(org);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to delete note: {e}");
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    });

    let cancel_dialog = move |_| {
        dialog.set(DialogState::None);
    };

    let filtered = filter_notes(&notes.read(), &search_query.read());
    let mode = form_mode(show_form(), editing_note.read().as_ref());
    let is_editing = mode == FormMode::Editing;
    let heading = form_heading(is_editing);
    let submit_text = submit_label(loading(), is_editing);

    rsx! {
        style { {NOTES_STYLES} }

        div {
            class: "app-container",

            // Header
            div {
                class: "header",
                div {
                    class: "header-content",
                    div {
                        class: "header-left",
                        div {
                            class: "logo",
                            span { class: "logo-icon", "📒" }
                            div {
                                class: "logo-text",
                                h1 { "NotesApp" }
                                p { "B2B Knowledge Management" }
                            }
                        }
                    }

                    div {
                        class: "header-right",
                        div {
                            class: "org-switcher",
                            span { class: "org-icon", "🏢" }
                            input {
                                r#type: "text",
                                value: "{org_id}",
                                placeholder: "Organization ID",
                                oninput: move |e: FormEvent| org_id.set(e.value()),
                            }
                        }

                        button {
                            class: "btn-primary",
                            onclick: toggle_form,
                            span { class: "btn-icon", "➕" }
                            "New Note"
                        }
                    }
                }
            }

            div {
                class: "main-content",

                // Search bar
                div {
                    class: "search-section",
                    div {
                        class: "search-bar",
                        span { class: "search-icon", "🔍" }
                        input {
                            r#type: "text",
                            placeholder: "Search notes...",
                            value: "{search_query}",
                            oninput: move |e: FormEvent| search_query.set(e.value()),
                        }
                    }
                }

                // Operation error banner
                if let Some(err) = error() {
                    div {
                        class: "error-banner",
                        span { "Error: {err}" }
                        button {
                            onclick: move |_| error.set(None),
                            "Dismiss"
                        }
                    }
                }

                // Note form
                if mode != FormMode::Hidden {
                    div {
                        class: "note-form-container",
                        div {
                            class: "form-header",
                            h2 { "{heading}" }
                        }

                        form {
                            class: "note-form",
                            onsubmit: move |e: FormEvent| {
                                e.prevent_default();
                                submit.call(());
                            },
                            div {
                                class: "form-group",
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    placeholder: "Enter note title...",
                                    value: "{title}",
                                    required: true,
                                    oninput: move |e: FormEvent| title.set(e.value()),
                                }
                            }
                            div {
                                class: "form-group",
                                textarea {
                                    class: "form-textarea",
                                    placeholder: "Write your note content...",
                                    value: "{content}",
                                    required: true,
                                    rows: "4",
                                    oninput: move |e: FormEvent| content.set(e.value()),
                                }
                            }
                            div {
                                class: "form-actions",
                                button {
                                    class: "btn-primary",
                                    r#type: "submit",
                                    disabled: loading(),
                                    "{submit_text}"
                                }
                                button {
                                    class: "btn-secondary",
                                    r#type: "button",
                                    onclick: cancel_edit,
                                    "Cancel"
                                }
                            }
                        }
                    }
                }

                // Spinner only while loading an empty collection
                if loading() && notes.read().is_empty() {
                    div {
                        class: "loading-container",
                        div { class: "spinner" }
                    }
                }

                // Notes grid
                if !loading() || !notes.read().is_empty() {
                    div {
                        class: "notes-grid",
                        for note in filtered.iter().cloned() {
                            NoteCard {
                                key: "{note.id}",
                                note: note.clone(),
                                current_org: org_id(),
                                on_edit: move |n: Note| begin_edit(n),
                                on_delete: move |n: Note| request_delete(n),
                            }
                        }
                    }
                }

                // Empty state
                if filtered.is_empty() && !loading() {
                    div {
                        class: "empty-state",
                        div { class: "empty-icon", "📄" }
                        h3 { {empty_state_heading(&search_query.read(), &org_id.read())} }
                        p { {empty_state_hint(&search_query.read())} }
                        if search_query.read().is_empty() {
                            button {
                                class: "btn-primary",
                                onclick: open_form,
                                "Create First Note"
                            }
                        }
                    }
                }
            }

            // Delete confirmation
            match dialog() {
                DialogState::None => rsx! {},
                DialogState::ConfirmDelete { id, title: note_title } => rsx! {
                    ConfirmDialog {
                        title: "Delete Note",
                        message: if note_title.is_empty() {
                            "Are you sure you want to delete this note?".to_string()
                        } else {
                            format!("Are you sure you want to delete '{}'?", note_title)
                        },
                        on_confirm: move |_| confirm_delete.call(id),
                        on_cancel: cancel_dialog,
                        confirm_text: "Delete",
                    }
                },
            }
        }
    }
}

/// One card in the notes grid
#[component]
fn NoteCard(
    note: Note,
    current_org: String,
    on_edit: Callback<Note>,
    on_delete: Callback<Note>,
) -> Element {
    let date_label = format_created_date(note.created_at.as_ref());
    let org_label = if note.organization_id.is_empty() {
        current_org
    } else {
        note.organization_id.clone()
    };

    rsx! {
        div {
            class: "note-card",
            div {
                class: "note-header",
                h3 { class: "note-title", "{note.title}" }
                div {
                    class: "note-actions",
                    button {
                        class: "action-btn edit-btn",
                        title: "Edit",
                        onclick: {
                            let note = note.clone();
                            move |_| on_edit.call(note.clone())
                        },
                        "✏️"
                    }
                    button {
                        class: "action-btn delete-btn",
                        title: "Delete",
                        onclick: {
                            let note = note.clone();
                            move |_| on_delete.call(note.clone())
                        },
                        "🗑️"
                    }
                }
            }

            p { class: "note-content", "{note.content}" }

            div {
                class: "note-footer",
                span { class: "note-date", "🕒 {date_label}" }
                span { class: "note-org", "{org_label}" }
            }
        }
    }
}

/// Confirmation dialog for destructive actions
#[component]
fn ConfirmDialog(
    title: String,
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    confirm_text: String,
) -> Element {
    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog-box",
                onclick: move |e| e.stop_propagation(),
                h3 { "{title}" }
                p { "{message}" }
                div {
                    class: "dialog-actions",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}

//! The view-state controller: all client-visible state and the rules for
//! transitioning it in response to user intents.

use crate::{Note, NoteStore, NotesError};

/// Title given to a freshly created note before the user names it.
pub const PLACEHOLDER_TITLE: &str = "Untitled Note";

/// Message surfaced when a save is attempted with a blank title.
pub const EMPTY_TITLE_MESSAGE: &str = "Title cannot be empty.";

/// Yes/no gate asked before a note is deleted.
///
/// Injected so the UI can put up its own prompt and tests can answer
/// programmatically. Closures `Fn(&str) -> bool` (given the note title)
/// implement it directly.
pub trait DeletePrompt {
    fn confirm_delete(&self, title: &str) -> bool;
}

impl<F: Fn(&str) -> bool> DeletePrompt for F {
    fn confirm_delete(&self, title: &str) -> bool {
        self(title)
    }
}

/// The working copy of a note's title and content while it is being edited.
///
/// Written back to the store only on an explicit save; cancel discards it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    fn of(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

/// An open notes session over a [`NoteStore`].
///
/// `Session` is the primary interface for all state transitions: it owns the
/// loaded note list, the selection, the edit draft, and the search text, and
/// mediates every user intent to the store. Store failures never escape; each
/// is converted to a single user-visible message in the error slot, which the
/// next intent clears.
pub struct Session<S> {
    store: S,
    notes: Vec<Note>,
    active_note_id: Option<String>,
    draft: Draft,
    is_editing: bool,
    search_text: String,
    loading: bool,
    error_message: Option<String>,
}

impl<S: NoteStore> Session<S> {
    /// Creates a session with no notes loaded; call [`Session::refresh`] to
    /// populate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            notes: Vec::new(),
            active_note_id: None,
            draft: Draft::default(),
            is_editing: false,
            search_text: String::new(),
            loading: false,
            error_message: None,
        }
    }

    // ── read accessors ───────────────────────────────────────────────────────

    /// The full loaded note list, most recently updated first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The notes matching the current search text, in list order.
    ///
    /// Recomputed from `notes` and `search_text` on every call; the filtered
    /// view is never stored, so it cannot drift from its sources.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        let query = self.search_text.trim().to_lowercase();
        self.notes.iter().filter(|n| n.matches(&query)).collect()
    }

    pub fn active_note_id(&self) -> Option<&str> {
        self.active_note_id.as_deref()
    }

    /// The stored note the selection points at, if it still exists.
    pub fn active_note(&self) -> Option<&Note> {
        let id = self.active_note_id.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    // ── user intents ─────────────────────────────────────────────────────────

    /// Fetches the full note list from the store and replaces `notes`.
    ///
    /// On failure the previously loaded list is kept as-is and the fetch
    /// message is surfaced; a failed refresh must not clear existing data.
    /// On success the selection is re-resolved against the new list, so the
    /// draft tracks the stored values and a vanished note deselects.
    pub fn refresh(&mut self) {
        self.error_message = None;
        self.loading = true;
        match self.store.list_notes() {
            Ok(notes) => {
                self.notes = notes;
                if let Some(id) = self.active_note_id.clone() {
                    self.select_note(&id);
                }
            }
            Err(e) => self.fail(e),
        }
        self.loading = false;
    }

    /// Creates a placeholder-titled note, prepends it to the list, selects
    /// it, and enters edit mode so the user can name and fill it.
    ///
    /// Prepending preserves the most-recently-updated-first order without a
    /// full refetch: the new row carries the newest timestamp.
    pub fn create(&mut self) {
        self.error_message = None;
        match self.store.create_note(PLACEHOLDER_TITLE) {
            Ok(note) => {
                self.draft = Draft::of(&note);
                self.active_note_id = Some(note.id.clone());
                self.notes.insert(0, note);
                self.is_editing = true;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Saves the draft over the active note.
    ///
    /// A blank (after trimming) draft title fails locally with no store call
    /// and no state change: the session stays in edit mode with the draft
    /// intact. On success the stored result replaces the matching list entry
    /// in place, the draft is reloaded from it, and edit mode exits. A failed
    /// update likewise leaves list, draft, and edit mode untouched.
    pub fn save(&mut self) {
        self.error_message = None;
        let Some(id) = self.active_note_id.clone() else {
            return;
        };
        if self.draft.title.trim().is_empty() {
            self.fail(NotesError::Validation(EMPTY_TITLE_MESSAGE.to_string()));
            return;
        }
        // The title is sent as typed; trimming is for validation only.
        match self
            .store
            .update_note(&id, &self.draft.title, &self.draft.content)
        {
            Ok(updated) => {
                if let Some(slot) = self.notes.iter_mut().find(|n| n.id == id) {
                    *slot = updated.clone();
                }
                self.draft = Draft::of(&updated);
                self.is_editing = false;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Deletes the active note after `prompt` answers yes.
    ///
    /// A declined prompt is a silent no-op. On success the note is removed
    /// from the list and the selection cleared; on failure everything stays
    /// as it was.
    pub fn delete_active(&mut self, prompt: &dyn DeletePrompt) {
        let Some(id) = self.active_note_id.clone() else {
            return;
        };
        let title = self.active_note().map(|n| n.title.clone()).unwrap_or_default();
        if !prompt.confirm_delete(&title) {
            return;
        }
        self.error_message = None;
        match self.store.delete_note(&id) {
            Ok(()) => {
                self.notes.retain(|n| n.id != id);
                self.active_note_id = None;
                self.draft = Draft::default();
                self.is_editing = false;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Updates the search text; the filtered view follows on the next read.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Selects a note, loading its stored title and content into the draft
    /// and forcing read-only mode.
    ///
    /// The selection is a weak reference: an id no longer present in the
    /// list clears the selection instead of leaving a stale draft behind.
    pub fn select_note(&mut self, id: &str) {
        match self.notes.iter().find(|n| n.id == id) {
            Some(note) => {
                self.draft = Draft::of(note);
                self.active_note_id = Some(id.to_string());
                self.is_editing = false;
            }
            None => self.deselect(),
        }
    }

    /// Clears the selection and the draft and exits edit mode.
    pub fn deselect(&mut self) {
        self.active_note_id = None;
        self.draft = Draft::default();
        self.is_editing = false;
    }

    /// Enters edit mode on the current selection.
    pub fn start_editing(&mut self) {
        if self.active_note_id.is_some() {
            self.is_editing = true;
        }
    }

    /// Discards the draft, reverting it to the stored note's values, and
    /// returns to read-only mode.
    pub fn cancel_editing(&mut self) {
        if let Some(note) = self.active_note() {
            self.draft = Draft::of(note);
        }
        self.is_editing = false;
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Records a failure in the single user-visible error slot.
    fn fail(&mut self, error: NotesError) {
        log::warn!("{error}");
        self.error_message = Some(error.user_message());
    }
}

//! The two-pane Minnotes window: note list and search on the left, the
//! selected note (read-only or in its edit form) on the right.

use iced::widget::{
    button, column, container, row, scrollable, text, text_editor, text_input,
};
use iced::{Element, Length, Task, Theme};
use minnotes_core::{Note, RestGateway, Session};

pub struct NotesApp {
    session: Session<RestGateway>,
    /// Editor state for the draft body; mirrored into the session draft on
    /// every edit.
    body: text_editor::Content,
    /// True while the in-pane delete confirmation is showing.
    confirming_delete: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    RefreshPressed,
    NewNotePressed,
    SearchChanged(String),
    NoteSelected(String),
    EditPressed,
    TitleChanged(String),
    BodyEdited(text_editor::Action),
    SavePressed,
    CancelPressed,
    DeletePressed,
    DeleteConfirmed,
    DeleteDismissed,
}

impl NotesApp {
    fn new(mut session: Session<RestGateway>) -> Self {
        session.refresh();
        Self {
            session,
            body: text_editor::Content::new(),
            confirming_delete: false,
        }
    }

    fn title(&self) -> String {
        match self.session.active_note() {
            Some(note) if !note.title.trim().is_empty() => {
                format!("Minnotes — {}", note.title)
            }
            _ => "Minnotes".to_string(),
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::RefreshPressed => {
                self.session.refresh();
                self.confirming_delete = false;
                self.sync_editor();
            }
            Message::NewNotePressed => {
                self.session.create();
                self.confirming_delete = false;
                self.sync_editor();
            }
            Message::SearchChanged(query) => {
                self.session.set_search_text(query);
            }
            Message::NoteSelected(id) => {
                self.session.select_note(&id);
                self.confirming_delete = false;
                self.sync_editor();
            }
            Message::EditPressed => {
                self.session.start_editing();
                self.sync_editor();
            }
            Message::TitleChanged(title) => {
                self.session.set_draft_title(limit_title(title));
            }
            Message::BodyEdited(action) => {
                self.body.perform(action);
                self.session.set_draft_content(editor_text(&self.body));
            }
            Message::SavePressed => {
                self.session.save();
                self.sync_editor();
            }
            Message::CancelPressed => {
                self.session.cancel_editing();
                self.sync_editor();
            }
            Message::DeletePressed => {
                self.confirming_delete = true;
            }
            Message::DeleteConfirmed => {
                // The user just answered the in-pane prompt.
                self.session.delete_active(&|_: &str| true);
                self.confirming_delete = false;
                self.sync_editor();
            }
            Message::DeleteDismissed => {
                self.confirming_delete = false;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut main_area = column![self.detail()]
            .spacing(8)
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill);
        if let Some(message) = self.session.error_message() {
            main_area = main_area.push(text(message).style(text::danger));
        }
        row![self.sidebar(), main_area].into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Reloads the editor widget state from the session draft. Called after
    /// any intent that resets the draft outside the editor.
    fn sync_editor(&mut self) {
        self.body = text_editor::Content::with_text(&self.session.draft().content);
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let controls = column![
            row![
                button(text("+ New Note"))
                    .on_press(Message::NewNotePressed)
                    .width(Length::Fill),
                button(text("Refresh")).on_press(Message::RefreshPressed),
            ]
            .spacing(8),
            text_input("Search notes...", self.session.search_text())
                .on_input(Message::SearchChanged),
        ]
        .spacing(8);

        let mut list = column![].spacing(2);
        if self.session.is_loading() {
            list = list.push(text("Loading…"));
        } else {
            let filtered = self.session.filtered_notes();
            if filtered.is_empty() {
                list = list.push(text("No notes found."));
            }
            for note in filtered {
                list = list.push(self.list_row(note));
            }
        }

        container(column![controls, scrollable(list).height(Length::Fill)].spacing(12))
            .width(Length::Fixed(300.0))
            .padding(12)
            .into()
    }

    fn list_row<'a>(&'a self, note: &'a Note) -> Element<'a, Message> {
        let label = column![
            text(display_title(&note.title)).size(16),
            text(note.snippet(48)).size(12),
        ]
        .spacing(2);

        let is_active = self.session.active_note_id() == Some(note.id.as_str());
        button(label)
            .width(Length::Fill)
            .style(if is_active {
                button::primary
            } else {
                button::text
            })
            .on_press(Message::NoteSelected(note.id.clone()))
            .into()
    }

    fn detail(&self) -> Element<'_, Message> {
        let Some(active) = self.session.active_note() else {
            let placeholder = column![
                text("Select a note or create a new one."),
                button(text("+ New Note")).on_press(Message::NewNotePressed),
            ]
            .spacing(12);
            return container(placeholder).center(Length::Fill).into();
        };

        if self.session.is_editing() {
            self.edit_form()
        } else {
            self.read_view(active)
        }
    }

    fn edit_form(&self) -> Element<'_, Message> {
        let draft = self.session.draft();
        column![
            text_input("Title", &draft.title)
                .on_input(Message::TitleChanged)
                .size(20),
            text_editor(&self.body)
                .placeholder("Type your note...")
                .on_action(Message::BodyEdited)
                .height(Length::Fill),
            row![
                button(text("Save"))
                    .on_press(Message::SavePressed)
                    .style(button::primary),
                button(text("Cancel"))
                    .on_press(Message::CancelPressed)
                    .style(button::secondary),
            ]
            .spacing(8),
        ]
        .spacing(8)
        .into()
    }

    fn read_view<'a>(&'a self, note: &'a Note) -> Element<'a, Message> {
        let body: Element<'_, Message> = if note.content.is_empty() {
            text("(empty)").into()
        } else {
            text(&note.content).into()
        };

        let actions: Element<'_, Message> = if self.confirming_delete {
            row![
                text("Delete this note?"),
                button(text("Delete"))
                    .on_press(Message::DeleteConfirmed)
                    .style(button::danger),
                button(text("Keep")).on_press(Message::DeleteDismissed),
            ]
            .spacing(8)
            .into()
        } else {
            row![
                button(text("Edit"))
                    .on_press(Message::EditPressed)
                    .style(button::primary),
                button(text("Delete"))
                    .on_press(Message::DeletePressed)
                    .style(button::danger),
            ]
            .spacing(8)
            .into()
        };

        column![
            text(display_title(&note.title)).size(24),
            text(note.updated_at.format("Updated %Y-%m-%d %H:%M").to_string()).size(12),
            scrollable(body).height(Length::Fill),
            actions,
        ]
        .spacing(8)
        .into()
    }
}

/// Title shown for a note, with a fallback for blank titles.
fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        "(Untitled)"
    } else {
        title
    }
}

/// Maximum title length accepted by the edit form. Display-side only; the
/// store does not enforce it.
const TITLE_LIMIT: usize = 128;

fn limit_title(title: String) -> String {
    if title.chars().count() <= TITLE_LIMIT {
        title
    } else {
        title.chars().take(TITLE_LIMIT).collect()
    }
}

/// Reads the editor text. `Content::text` always reports a final newline,
/// which would otherwise accumulate through draft round trips.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

pub fn run(session: Session<RestGateway>) -> iced::Result {
    iced::application(NotesApp::title, NotesApp::update, NotesApp::view)
        .theme(NotesApp::theme)
        .run_with(move || (NotesApp::new(session), Task::none()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_for_blank_titles() {
        assert_eq!(display_title("Plans"), "Plans");
        assert_eq!(display_title("   "), "(Untitled)");
        assert_eq!(display_title(""), "(Untitled)");
    }

    #[test]
    fn test_limit_title_caps_at_128_chars() {
        let short = "a normal title".to_string();
        assert_eq!(limit_title(short.clone()), short);

        let long = "x".repeat(200);
        assert_eq!(limit_title(long).chars().count(), TITLE_LIMIT);
    }
}

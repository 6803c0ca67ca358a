use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as the UI sees it.
///
/// The hosted table stores the note text under a `body` column; the UI
/// vocabulary for the same field is `content`. Records are converted through
/// [`Note::from_record`] on the way in and [`NoteWrite::new`] on the way out,
/// and no other code touches the `body` name, so the two can never diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// A row as the remote store returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub body: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// The write payload sent to the remote store on insert and update.
#[derive(Debug, Serialize)]
pub struct NoteWrite<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> NoteWrite<'a> {
    /// Builds the store-facing payload from UI-facing values, writing
    /// `content` under the store's `body` name.
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            body: content,
        }
    }
}

impl Note {
    /// Converts a stored record into the UI shape.
    ///
    /// A row with no `body` value yields an empty `content`, never a missing
    /// one.
    pub fn from_record(record: NoteRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.body.unwrap_or_default(),
            updated_at: record.updated_at,
        }
    }

    /// Returns true when the note matches a search query.
    ///
    /// `query` must already be trimmed and lowercased. The empty query
    /// matches every note; otherwise either the title or the content must
    /// contain it as a substring.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self.title.to_lowercase().contains(query)
            || self.content.to_lowercase().contains(query)
    }

    /// Returns a one-line preview of the content for list rows: newlines
    /// flattened to spaces, truncated to `max` characters with an ellipsis.
    pub fn snippet(&self, max: usize) -> String {
        let flat = self.content.replace('\n', " ");
        let mut out: String = flat.chars().take(max).collect();
        if flat.chars().count() > max {
            out.push('…');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note {
            id: "n1".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_record_maps_body_to_content() {
        let record: NoteRecord = serde_json::from_str(
            r#"{"id":"a1","title":"Groceries","body":"milk","updated_at":"2024-03-01T09:30:00Z"}"#,
        )
        .unwrap();
        let note = Note::from_record(record);
        assert_eq!(note.content, "milk");
        assert_eq!(note.title, "Groceries");
    }

    #[test]
    fn test_from_record_defaults_missing_body_to_empty() {
        let record: NoteRecord = serde_json::from_str(
            r#"{"id":"a2","title":"Blank","body":null,"updated_at":"2024-03-01T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(Note::from_record(record).content, "");
    }

    #[test]
    fn test_write_payload_uses_body_not_content() {
        let json = serde_json::to_value(NoteWrite::new("Title", "some text")).unwrap();
        assert_eq!(json["body"], "some text");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn test_matches_empty_query_matches_everything() {
        assert!(note("anything", "").matches(""));
    }

    #[test]
    fn test_matches_is_case_insensitive_on_both_fields() {
        let n = note("Meeting Notes", "Discuss the Roadmap");
        assert!(n.matches("meeting"));
        assert!(n.matches("roadmap"));
        assert!(!n.matches("budget"));
    }

    #[test]
    fn test_snippet_flattens_and_truncates() {
        let n = note("t", "line one\nline two");
        assert_eq!(n.snippet(48), "line one line two");

        let long = "x".repeat(60);
        let n = note("t", &long);
        assert_eq!(n.snippet(48).chars().count(), 49); // 48 chars + ellipsis
        assert!(n.snippet(48).ends_with('…'));
    }

    #[test]
    fn test_snippet_of_empty_content_is_empty() {
        assert_eq!(note("t", "").snippet(48), "");
    }
}

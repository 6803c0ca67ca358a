//! The remote store gateway: CRUD calls against the hosted notes table.

use crate::{Note, NoteRecord, NoteWrite, NotesError, Result, StoreConfig};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Method;

/// The storage seam the view-state controller talks through.
///
/// [`RestGateway`] is the production implementation; tests substitute
/// in-memory stores.
pub trait NoteStore {
    /// Fetches every note, most recently updated first.
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Inserts a note with the given title and an empty body, returning the
    /// stored row including its server-assigned id.
    fn create_note(&self, title: &str) -> Result<Note>;

    /// Replaces the title and content of the note with the given id.
    fn update_note(&self, id: &str, title: &str, content: &str) -> Result<Note>;

    /// Deletes the note with the given id.
    fn delete_note(&self, id: &str) -> Result<()>;
}

/// Gateway to a PostgREST-compatible hosted table.
///
/// Holds the one configured HTTP client for the process; every inbound row
/// and outbound write passes through the `content`/`body` translation in
/// [`Note::from_record`] and [`NoteWrite::new`]. The gateway itself keeps no
/// mutable state.
pub struct RestGateway {
    client: Client,
    config: StoreConfig,
}

impl RestGateway {
    /// Builds the gateway and its HTTP client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Config`] if the client cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("minnotes/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NotesError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Starts a request with the store's auth headers attached.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// Returns the row filter for one note. Ids are server-assigned UUIDs,
    /// so they are URL-safe as-is.
    fn row_url(&self, id: &str) -> String {
        format!("{}?id=eq.{}", self.config.table_endpoint(), id)
    }
}

impl NoteStore for RestGateway {
    fn list_notes(&self) -> Result<Vec<Note>> {
        let url = format!(
            "{}?select=*&order=updated_at.desc",
            self.config.table_endpoint()
        );
        log::debug!("listing notes from {}", self.config.table);
        let records: Vec<NoteRecord> = self
            .request(Method::GET, &url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| NotesError::Fetch(e.to_string()))?;
        Ok(records.into_iter().map(Note::from_record).collect())
    }

    fn create_note(&self, title: &str) -> Result<Note> {
        let url = format!("{}?select=*", self.config.table_endpoint());
        log::debug!("creating note in {}", self.config.table);
        let mut records: Vec<NoteRecord> = self
            .request(Method::POST, &url)
            .header("Prefer", "return=representation")
            .json(&NoteWrite::new(title, ""))
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| NotesError::Create(e.to_string()))?;
        let record = records
            .pop()
            .ok_or_else(|| NotesError::Create("store returned no record".to_string()))?;
        Ok(Note::from_record(record))
    }

    fn update_note(&self, id: &str, title: &str, content: &str) -> Result<Note> {
        let url = format!("{}&select=*", self.row_url(id));
        log::debug!("updating note {id}");
        let mut records: Vec<NoteRecord> = self
            .request(Method::PATCH, &url)
            .header("Prefer", "return=representation")
            .json(&NoteWrite::new(title, content))
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| NotesError::Update(e.to_string()))?;
        // An unknown id matches no row; the store reports success with an
        // empty result set.
        let record = records
            .pop()
            .ok_or_else(|| NotesError::Update(format!("no note with id {id}")))?;
        Ok(Note::from_record(record))
    }

    fn delete_note(&self, id: &str) -> Result<()> {
        log::debug!("deleting note {id}");
        self.request(Method::DELETE, &self.row_url(id))
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| NotesError::Delete(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> RestGateway {
        RestGateway::new(StoreConfig::new("https://example.supabase.co", "anon-key")).unwrap()
    }

    #[test]
    fn test_row_url_filters_by_id() {
        assert_eq!(
            gateway().row_url("a1b2"),
            "https://example.supabase.co/rest/v1/notes?id=eq.a1b2"
        );
    }

    #[test]
    fn test_request_carries_auth_headers() {
        let g = gateway();
        let req = g
            .request(Method::GET, "https://example.supabase.co/rest/v1/notes")
            .build()
            .unwrap();
        assert_eq!(req.headers()["apikey"], "anon-key");
        assert_eq!(req.headers()["authorization"], "Bearer anon-key");
    }

    #[test]
    fn test_list_response_decodes_and_translates() {
        // The wire shape the list call decodes, including a null body.
        let records: Vec<NoteRecord> = serde_json::from_str(
            r#"[
                {"id":"a1","title":"First","body":"hello","updated_at":"2024-03-02T10:00:00Z"},
                {"id":"a2","title":"Second","body":null,"updated_at":"2024-03-01T10:00:00Z"}
            ]"#,
        )
        .unwrap();
        let notes: Vec<Note> = records.into_iter().map(Note::from_record).collect();
        assert_eq!(notes[0].content, "hello");
        assert_eq!(notes[1].content, "");
    }
}

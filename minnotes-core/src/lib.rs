//! Core library for Minnotes — a two-pane notes client backed by a hosted
//! REST table.
//!
//! The primary entry point is [`Session`], which owns all client-visible
//! state (the loaded note list, the selection, the edit draft, the search
//! text) and mediates every user intent to a [`NoteStore`]. The production
//! store is [`RestGateway`], a thin adapter over a PostgREST-compatible
//! hosted table that translates between the UI-facing `content` field and
//! the store-facing `body` column at a single boundary.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use crate::core::{
    config::{StoreConfig, ENV_STORE_KEY, ENV_STORE_TABLE, ENV_STORE_URL},
    error::{NotesError, Result},
    gateway::{NoteStore, RestGateway},
    note::{Note, NoteRecord, NoteWrite},
    session::{DeletePrompt, Draft, Session, EMPTY_TITLE_MESSAGE, PLACEHOLDER_TITLE},
};

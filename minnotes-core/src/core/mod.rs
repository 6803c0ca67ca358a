//! Internal domain modules for the Minnotes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod config;
pub mod error;
pub mod gateway;
pub mod note;
pub mod session;

#[doc(inline)]
pub use config::StoreConfig;
#[doc(inline)]
pub use error::{NotesError, Result};
#[doc(inline)]
pub use gateway::{NoteStore, RestGateway};
#[doc(inline)]
pub use note::{Note, NoteRecord, NoteWrite};
#[doc(inline)]
pub use session::{DeletePrompt, Draft, Session, EMPTY_TITLE_MESSAGE, PLACEHOLDER_TITLE};

//! doctalk: session-scoped document question answering
//!
//! Uploaded files are normalized to plain text and accumulated into a
//! per-session corpus. Questions select the most relevant document by
//! lexical overlap, the selected text is bounded to a context window, and an
//! external completion service synthesizes the answer.

pub mod config;
pub mod corpus;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod session;
pub mod types;

pub use config::DoctalkConfig;
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use retrieval::{select_context, MAX_CONTEXT_CHARS};
pub use types::{
    document::{Document, FormatTag},
    request::AskRequest,
    response::{AskResponse, AskStatus, UploadResponse},
};

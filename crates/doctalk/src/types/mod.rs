//! Shared types for the document Q&A pipeline

pub mod document;
pub mod request;
pub mod response;

pub use document::{Document, FormatTag};
pub use request::AskRequest;
pub use response::{
    AskResponse, AskStatus, DocumentSummary, SessionDocumentsResponse, SessionResponse,
    UploadError, UploadResponse,
};

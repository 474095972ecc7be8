//! Application state for the Q&A server

use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::DoctalkConfig;
use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::providers::{CompletionProvider, OpenAiClient};
use crate::session::Session;
use crate::types::{DocumentSummary, SessionResponse};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: DoctalkConfig,
    /// Completion provider for answer synthesis
    completion: Arc<dyn CompletionProvider>,
    /// In-memory session registry; sessions never outlive the process
    sessions: DashMap<Uuid, Session>,
}

impl AppState {
    /// Create new application state with the chat-completions client
    pub fn new(config: DoctalkConfig) -> Self {
        let completion = Arc::new(OpenAiClient::new(&config.completion));
        tracing::info!("completion client initialized (model: {})", completion.model());
        Self::with_provider(config, completion)
    }

    /// Create state with an explicit completion provider
    pub fn with_provider(config: DoctalkConfig, completion: Arc<dyn CompletionProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                completion,
                sessions: DashMap::new(),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &DoctalkConfig {
        &self.inner.config
    }

    /// Get the completion provider
    pub fn completion(&self) -> &Arc<dyn CompletionProvider> {
        &self.inner.completion
    }

    /// Create a new session with an empty corpus
    pub fn create_session(&self) -> SessionResponse {
        let session = Session::new();
        let response = SessionResponse {
            session_id: session.id,
            created_at: session.created_at,
            document_count: 0,
        };
        tracing::info!("session {} created", session.id);
        self.inner.sessions.insert(session.id, session);
        response
    }

    /// Get a session overview
    pub fn session_overview(&self, id: &Uuid) -> Result<SessionResponse> {
        let session = self
            .inner
            .sessions
            .get(id)
            .ok_or(Error::SessionNotFound(*id))?;
        Ok(SessionResponse {
            session_id: session.id,
            created_at: session.created_at,
            document_count: session.corpus.len(),
        })
    }

    /// Stored document summaries for a session, in upload order
    pub fn document_summaries(&self, id: &Uuid) -> Result<Vec<DocumentSummary>> {
        let session = self
            .inner
            .sessions
            .get(id)
            .ok_or(Error::SessionNotFound(*id))?;
        Ok(session.uploads.clone())
    }

    /// Clone a session's corpus for retrieval.
    ///
    /// Documents are immutable once stored, so a snapshot observes exactly
    /// the insertion-ordered state at call time.
    pub fn corpus_snapshot(&self, id: &Uuid) -> Result<Corpus> {
        let session = self
            .inner
            .sessions
            .get(id)
            .ok_or(Error::SessionNotFound(*id))?;
        Ok(session.corpus.clone())
    }

    /// Run a closure with mutable access to a session
    pub fn with_session_mut<R>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R> {
        let mut session = self
            .inner
            .sessions
            .get_mut(id)
            .ok_or(Error::SessionNotFound(*id))?;
        Ok(f(session.value_mut()))
    }

    /// Delete a session, destroying its corpus
    pub fn delete_session(&self, id: &Uuid) -> Result<()> {
        self.inner
            .sessions
            .remove(id)
            .ok_or(Error::SessionNotFound(*id))?;
        tracing::info!("session {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Document, FormatTag};

    use async_trait::async_trait;

    struct NullCompletion;

    #[async_trait]
    impl CompletionProvider for NullCompletion {
        async fn complete(&self, _prompt: &str, _credential: &str) -> Result<String> {
            Ok(String::new())
        }

        fn name(&self) -> &str {
            "null"
        }

        fn model(&self) -> &str {
            "null"
        }
    }

    fn state() -> AppState {
        AppState::with_provider(DoctalkConfig::default(), Arc::new(NullCompletion))
    }

    #[test]
    fn sessions_are_isolated() {
        let state = state();
        let first = state.create_session();
        let second = state.create_session();

        state
            .with_session_mut(&first.session_id, |session| {
                session
                    .corpus
                    .append(Document::new(FormatTag::Text, "only in first".to_string()));
            })
            .unwrap();

        assert_eq!(state.corpus_snapshot(&first.session_id).unwrap().len(), 1);
        assert!(state.corpus_snapshot(&second.session_id).unwrap().is_empty());
    }

    #[test]
    fn deleting_a_session_destroys_its_corpus() {
        let state = state();
        let created = state.create_session();

        state.delete_session(&created.session_id).unwrap();

        let err = state.corpus_snapshot(&created.session_id).unwrap_err();
        assert_eq!(err.kind(), "session_not_found");
    }

    #[test]
    fn unknown_session_is_reported() {
        let state = state();
        let err = state.session_overview(&Uuid::new_v4()).unwrap_err();
        assert_eq!(err.kind(), "session_not_found");
    }
}

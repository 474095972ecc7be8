//! Ask endpoint: retrieve context and synthesize an answer

use axum::{
    extract::{Path, State},
    Json,
};
use std::time::Instant;
use uuid::Uuid;

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::providers::CompletionProvider;
use crate::retrieval;
use crate::server::state::AppState;
use crate::types::{AskRequest, AskResponse};

/// POST /api/sessions/:id/ask - Answer a question against the session corpus
pub async fn ask(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let corpus = state.corpus_snapshot(&id)?;
    let response = answer_question(
        state.completion().as_ref(),
        &corpus,
        &request.question,
        &request.api_key,
    )
    .await?;
    Ok(Json(response))
}

/// Run the question pipeline: validate, retrieve, synthesize.
///
/// An empty corpus is a warning outcome and skips synthesis entirely. Zero
/// lexical overlap is informational: synthesis still runs with an empty
/// context. The credential is checked before the completion call is
/// attempted.
async fn answer_question(
    completion: &dyn CompletionProvider,
    corpus: &Corpus,
    question: &str,
    credential: &str,
) -> Result<AskResponse> {
    let start = Instant::now();

    let question = question.trim();
    if question.is_empty() {
        return Err(Error::EmptyQuestion);
    }

    tracing::info!("question: \"{}\"", question);

    if corpus.is_empty() {
        tracing::warn!("question received against an empty corpus");
        return Ok(AskResponse::empty_corpus(start.elapsed().as_millis() as u64));
    }

    let context = retrieval::select_context(question, corpus);
    let context_found = !context.is_empty();
    if !context_found {
        tracing::info!("no document overlaps the question; synthesizing without context");
    }

    if credential.trim().is_empty() {
        return Err(Error::synthesis("no credential provided"));
    }

    let prompt = PromptBuilder::build_qa_prompt(question, &context);
    let answer = completion.complete(&prompt, credential).await?;

    let processing_time_ms = start.elapsed().as_millis() as u64;
    tracing::info!("answer synthesized in {}ms", processing_time_ms);

    let response = if context_found {
        AskResponse::answered(answer, processing_time_ms)
    } else {
        AskResponse::answered_without_context(answer, processing_time_ms)
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AskStatus, Document, FormatTag};

    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Fixed-response completion fake that records its invocations
    struct FakeCompletion {
        reply: &'static str,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl FakeCompletion {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_prompt(&self) -> Option<String> {
            self.last_prompt.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionProvider for FakeCompletion {
        async fn complete(&self, prompt: &str, _credential: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(self.reply.trim().to_string())
        }

        fn name(&self) -> &str {
            "fake"
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    /// Completion fake that always fails
    struct FailingCompletion;

    #[async_trait]
    impl CompletionProvider for FailingCompletion {
        async fn complete(&self, _prompt: &str, _credential: &str) -> Result<String> {
            Err(Error::synthesis("service unavailable"))
        }

        fn name(&self) -> &str {
            "failing"
        }

        fn model(&self) -> &str {
            "failing-model"
        }
    }

    fn corpus_of(texts: &[&str]) -> Corpus {
        let mut corpus = Corpus::new();
        for text in texts {
            corpus.append(Document::new(FormatTag::Text, text.to_string()));
        }
        corpus
    }

    #[tokio::test]
    async fn answers_with_the_selected_context() {
        let fake = FakeCompletion::new("The cat sat on the mat.");
        let corpus = corpus_of(&["The cat sat on the mat"]);

        let response = answer_question(&fake, &corpus, "Where did the cat sit?", "sk-test")
            .await
            .unwrap();

        assert_eq!(response.status, AskStatus::Answered);
        assert_eq!(response.answer.as_deref(), Some("The cat sat on the mat."));
        assert_eq!(fake.call_count(), 1);

        let prompt = fake.last_prompt().unwrap();
        assert!(prompt.contains("The cat sat on the mat"));
        assert!(prompt.contains("Question: Where did the cat sit?"));
    }

    #[tokio::test]
    async fn empty_corpus_skips_synthesis() {
        let fake = FakeCompletion::new("unused");
        let corpus = Corpus::new();

        let response = answer_question(&fake, &corpus, "anything", "sk-test")
            .await
            .unwrap();

        assert_eq!(response.status, AskStatus::EmptyCorpus);
        assert!(response.answer.is_none());
        assert!(response.note.is_some());
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn zero_overlap_still_invokes_synthesis_with_empty_context() {
        let fake = FakeCompletion::new("A generic answer.");
        let corpus = corpus_of(&["xyz123"]);

        let response = answer_question(&fake, &corpus, "completely unrelated words", "sk-test")
            .await
            .unwrap();

        assert_eq!(response.status, AskStatus::AnsweredWithoutContext);
        assert_eq!(response.answer.as_deref(), Some("A generic answer."));
        assert!(response.note.is_some());
        assert_eq!(fake.call_count(), 1);

        let prompt = fake.last_prompt().unwrap();
        assert!(prompt.contains("Context:\n\n"));
    }

    #[tokio::test]
    async fn missing_credential_fails_before_the_provider_call() {
        let fake = FakeCompletion::new("unused");
        let corpus = corpus_of(&["some document text"]);

        let err = answer_question(&fake, &corpus, "some question", "  ")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "synthesis_failed");
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_question_is_rejected_before_retrieval() {
        let fake = FakeCompletion::new("unused");
        let corpus = corpus_of(&["some document text"]);

        let err = answer_question(&fake, &corpus, "   ", "sk-test").await.unwrap_err();

        assert_eq!(err.kind(), "empty_question");
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_synthesis_error() {
        let corpus = corpus_of(&["some document text"]);

        let err = answer_question(&FailingCompletion, &corpus, "some question", "sk-test")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "synthesis_failed");
    }

    #[tokio::test]
    async fn ties_resolve_to_the_earliest_document() {
        let fake = FakeCompletion::new("answer");
        let corpus = corpus_of(&["shared words first", "shared words second"]);

        answer_question(&fake, &corpus, "shared words", "sk-test")
            .await
            .unwrap();

        let prompt = fake.last_prompt().unwrap();
        assert!(prompt.contains("shared words first"));
        assert!(!prompt.contains("shared words second"));
    }
}

//! Lexical-overlap retrieval over the session corpus

use std::collections::HashSet;

use crate::corpus::Corpus;

/// Maximum context length handed to the answer synthesizer, in characters
pub const MAX_CONTEXT_CHARS: usize = 1500;

/// Select the most relevant document text for a question and bound it.
///
/// Scoring is the size of the intersection between the distinct lowercase
/// whitespace-delimited word sets of the question and each document. The
/// corpus is walked in insertion order and the best document is replaced only
/// on a strictly greater score, so the earliest-inserted document wins ties.
/// When no document shares a word with the question the result is the empty
/// string; that is a defined no-context outcome, not an error.
///
/// Retrieval is pure: identical (corpus, question) inputs always produce the
/// same context.
pub fn select_context(question: &str, corpus: &Corpus) -> String {
    let question_words = word_set(question);

    let mut best_score = 0usize;
    let mut best_text = "";

    for document in corpus.all() {
        let document_words = word_set(&document.text);
        let score = question_words.intersection(&document_words).count();
        if score > best_score {
            best_score = score;
            best_text = &document.text;
        }
    }

    truncate_chars(best_text, MAX_CONTEXT_CHARS)
}

/// Distinct lowercase whitespace-delimited words of a text
fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// First `max_chars` characters of a text; may cut mid-word
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

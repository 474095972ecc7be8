//! Prompt template for answer synthesis

/// Prompt builder for document-grounded answers
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the question-answering prompt.
    ///
    /// The context and question are embedded literally; an empty context
    /// still produces a well-formed prompt and degrades to an unguided
    /// answer.
    pub fn build_qa_prompt(question: &str, context: &str) -> String {
        format!(
            r#"You are a helpful assistant that answers questions using the provided document context.

Context:
{context}

Question: {question}
Answer:"#,
            context = context,
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_context_and_question_literally() {
        let prompt =
            PromptBuilder::build_qa_prompt("Where did the cat sit?", "The cat sat on the mat");

        assert!(prompt.contains("Context:\nThe cat sat on the mat"));
        assert!(prompt.contains("Question: Where did the cat sit?"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn empty_context_still_forms_a_prompt() {
        let prompt = PromptBuilder::build_qa_prompt("anything", "");

        assert!(prompt.contains("Context:\n\n"));
        assert!(prompt.contains("Question: anything"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let a = PromptBuilder::build_qa_prompt("q", "c");
        let b = PromptBuilder::build_qa_prompt("q", "c");
        assert_eq!(a, b);
    }
}

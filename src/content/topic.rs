//! Topics: named question pools.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::question::Question;

/// A named pool of questions, as loaded from the topic provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Question pool.
    pub questions: Vec<Arc<Question>>,
}

impl Topic {
    /// Create an empty topic.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Add a question to the pool.
    #[must_use]
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(Arc::new(question));
        self
    }

    /// Add several questions to the pool.
    #[must_use]
    pub fn with_questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.questions.extend(questions.into_iter().map(Arc::new));
        self
    }

    /// Number of questions in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

//! Question data supplied by the topic provider.
//!
//! Questions are immutable once loaded. Tiles hold them behind an `Arc`, so
//! a question reused across several tiles is stored once.

use serde::{Deserialize, Serialize};

/// Curriculum a question belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "WSC")]
    Wsc,
    #[serde(rename = "TAHN")]
    Tahn,
    Grapeseed,
}

/// How the answer is collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFormat {
    /// Free text, checked by the host.
    Text,
    /// Several options, any number of them correct.
    MultipleChoice,
    /// Several options, exactly one correct.
    OneChoice,
}

/// Expected answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Reference answer text.
    Text(String),
    /// Options shown to the team and the indices of the correct ones.
    Choices {
        options: Vec<String>,
        correct: Vec<usize>,
    },
}

/// Kind of attached media.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

/// Media attached to a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Media type.
    pub kind: MediaKind,
    /// Location, resolved by the renderer.
    pub url: String,
}

/// A quiz question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier within the topic.
    pub id: String,
    /// Curriculum.
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Answer format.
    #[serde(rename = "questionType")]
    pub format: QuestionFormat,
    /// Prompt shown to the team.
    pub question_text: String,
    /// Expected answer.
    pub answer: Answer,
    /// Points awarded for a correct answer.
    pub points: u32,
    /// Optional media.
    #[serde(default)]
    pub media: Option<Media>,
}

impl Question {
    /// A free-text question.
    pub fn text(
        id: impl Into<String>,
        prompt: impl Into<String>,
        answer: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::Wsc,
            format: QuestionFormat::Text,
            question_text: prompt.into(),
            answer: Answer::Text(answer.into()),
            points,
            media: None,
        }
    }

    /// A question with exactly one correct option.
    pub fn one_choice<S: Into<String>>(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: usize,
        points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::Wsc,
            format: QuestionFormat::OneChoice,
            question_text: prompt.into(),
            answer: Answer::Choices {
                options: options.into_iter().map(Into::into).collect(),
                correct: vec![correct],
            },
            points,
            media: None,
        }
    }

    /// A question with any number of correct options.
    pub fn multiple_choice<S: Into<String>>(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: impl IntoIterator<Item = usize>,
        points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::Wsc,
            format: QuestionFormat::MultipleChoice,
            question_text: prompt.into(),
            answer: Answer::Choices {
                options: options.into_iter().map(Into::into).collect(),
                correct: correct.into_iter().collect(),
            },
            points,
            media: None,
        }
    }

    /// Set the curriculum.
    #[must_use]
    pub fn with_kind(mut self, kind: QuestionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach media.
    #[must_use]
    pub fn with_media(mut self, kind: MediaKind, url: impl Into<String>) -> Self {
        self.media = Some(Media { kind, url: url.into() });
        self
    }
}

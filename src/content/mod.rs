//! Question content consumed from the topic provider.
//!
//! ## Key Types
//!
//! - `Question`: Prompt, answer, points and optional media
//! - `Topic`: Named question pool, shared with tiles via `Arc`

pub mod question;
pub mod topic;

pub use question::{Answer, Media, MediaKind, Question, QuestionFormat, QuestionKind};
pub use topic::Topic;

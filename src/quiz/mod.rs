//! Quiz content: question records and the generation backends that produce them
//!
//! Generation sits behind the [`QuizSynthesizer`] trait so a real generative
//! backend can replace [`TemplateSynthesizer`] without touching the request
//! pipeline, as long as it keeps the question shape and counts.

mod question;
mod synthesizer;
mod template;

pub use question::{Difficulty, QuestionRecord, OPTIONS_PER_QUESTION};
pub use synthesizer::{
    QuizSynthesizer, SynthesizedQuiz, QUESTIONS_PER_QUIZ, RELATED_TOPICS_PER_QUIZ,
};
pub use template::TemplateSynthesizer;

//! Template quiz backend
//!
//! Produces the same five questions for every article, with the title
//! interpolated into the prompts. The summary is not consulted: generation is
//! title-driven until a real generative backend replaces this one.

use crate::quiz::{Difficulty, QuestionRecord, QuizSynthesizer, SynthesizedQuiz};

/// Deterministic, title-driven quiz backend
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSynthesizer;

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl QuizSynthesizer for TemplateSynthesizer {
    fn name(&self) -> &'static str {
        "template"
    }

    fn synthesize(&self, title: &str, _summary: &str) -> SynthesizedQuiz {
        SynthesizedQuiz {
            questions: template_questions(title),
            related_topics: related_topics(title),
        }
    }
}

fn template_questions(title: &str) -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            format!("What best describes {}?", title),
            [
                "A widely used concept with real-world applications",
                "A minor historical reference",
                "An outdated and unused idea",
                "A purely theoretical assumption",
            ],
            "A widely used concept with real-world applications",
            Difficulty::Easy,
            format!(
                "The article highlights {} as an important and commonly used concept.",
                title
            ),
        ),
        QuestionRecord::new(
            format!("In which domain is {} most commonly applied?", title),
            [
                "Computer Science and Technology",
                "Fine Arts",
                "Sports and Fitness",
                "Political Science",
            ],
            "Computer Science and Technology",
            Difficulty::Medium,
            format!(
                "{} is primarily discussed in technical and computational contexts.",
                title
            ),
        ),
        QuestionRecord::new(
            format!("Why is {} considered important?", title),
            [
                "It enables flexibility and scalability",
                "It is rarely used today",
                "It replaced all older technologies",
                "It has only academic value",
            ],
            "It enables flexibility and scalability",
            Difficulty::Medium,
            "Its importance comes from adaptability and wide applicability.",
        ),
        QuestionRecord::new(
            format!("Which characteristic is strongly associated with {}?", title),
            ["Versatility", "Fragility", "Irrelevance", "Limited scope"],
            "Versatility",
            Difficulty::Hard,
            format!(
                "{} is known for being adaptable across multiple use cases.",
                title
            ),
        ),
        QuestionRecord::new(
            format!("What is a realistic real-world use of {}?", title),
            [
                "Building scalable applications",
                "Designing physical buildings",
                "Conducting medical surgery",
                "Managing sports tournaments",
            ],
            "Building scalable applications",
            Difficulty::Hard,
            "The article refers to practical implementations in real-world systems.",
        ),
    ]
}

fn related_topics(title: &str) -> Vec<String> {
    vec![
        format!("Introduction to {}", title),
        format!("Applications of {}", title),
        format!("History of {}", title),
    ]
}

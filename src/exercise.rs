// Exercise deck - a small stand-in for the lesson engine
//
// The result screen only consumes three percent-encoded text fields; who
// produces them is not its concern. This module is the producing side: a
// fixed deck of translation prompts, graded by exact comparison, emitting
// the same encoded triple a real lesson backend would put on the route.

use crate::result::CORRECT_TOKEN;

/// One translation prompt
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Sentence shown to the user
    pub source: &'static str,
    /// Expected translation
    pub expected: &'static str,
}

/// The raw navigation fields that activate the result screen.
/// Values are percent-encoded exactly as they would appear in a query
/// string; the result interpreter decodes them.
#[derive(Debug, Clone, Default)]
pub struct ActivationParams {
    pub outcome: Option<String>,
    pub expected: Option<String>,
    pub answer: Option<String>,
}

/// Built-in prompt deck, served round-robin
pub struct Deck {
    prompts: Vec<Prompt>,
    cursor: usize,
}

impl Deck {
    pub fn builtin() -> Self {
        Self {
            prompts: vec![
                Prompt {
                    source: "Dear Ana, how are you?",
                    expected: "Querida Ana, ¿cómo estás?",
                },
                Prompt {
                    source: "The coffee is cold.",
                    expected: "El café está frío.",
                },
                Prompt {
                    source: "I read a book every week.",
                    expected: "Leo un libro cada semana.",
                },
                Prompt {
                    source: "Where is the train station?",
                    expected: "¿Dónde está la estación de tren?",
                },
            ],
            cursor: 0,
        }
    }

    /// The prompt currently being asked
    pub fn current(&self) -> &Prompt {
        &self.prompts[self.cursor]
    }

    /// Move on to the next prompt (wraps around)
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.prompts.len();
    }

    /// Grade a submission and build the activation fields for the result
    /// screen. Grading lives here, on the lesson side - the result screen
    /// never compares answers itself.
    pub fn grade(&self, submitted: &str) -> ActivationParams {
        let prompt = self.current();
        let outcome = if submitted.trim() == prompt.expected {
            CORRECT_TOKEN
        } else {
            "incorrect"
        };
        ActivationParams {
            outcome: Some(outcome.to_string()),
            expected: Some(urlencoding::encode(prompt.expected).into_owned()),
            answer: Some(urlencoding::encode(submitted).into_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{interpret, Outcome};

    #[test]
    fn exact_match_grades_correct() {
        let deck = Deck::builtin();
        let params = deck.grade("Querida Ana, ¿cómo estás?");
        assert_eq!(params.outcome.as_deref(), Some("correct"));
    }

    #[test]
    fn mismatch_grades_incorrect() {
        let deck = Deck::builtin();
        let params = deck.grade("Hola Ana");
        assert_eq!(params.outcome.as_deref(), Some("incorrect"));
    }

    #[test]
    fn graded_fields_survive_the_interpreter() {
        // End-to-end over the encoded channel: what the deck emits is what
        // the result screen decodes
        let deck = Deck::builtin();
        let params = deck.grade("Querida Ana, como estas?");
        let state = interpret(
            params.outcome.as_deref(),
            params.expected.as_deref(),
            params.answer.as_deref(),
        );
        assert_eq!(state.outcome, Outcome::Incorrect);
        assert_eq!(state.expected_answer, "Querida Ana, ¿cómo estás?");
        assert_eq!(state.submitted_answer, "Querida Ana, como estas?");
    }

    #[test]
    fn advance_wraps_around() {
        let mut deck = Deck::builtin();
        let first = deck.current().source;
        for _ in 0..deck.prompts.len() {
            deck.advance();
        }
        assert_eq!(deck.current().source, first);
    }
}

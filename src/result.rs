// Result interpretation - turning raw navigation fields into a typed state
//
// The result screen is activated with three untrusted, percent-encoded text
// fields (outcome token, expected answer, submitted answer). This module
// parses them into an immutable ResultState. Parsing never fails: missing or
// undecodable values degrade to safe defaults instead of erroring the screen.

use std::borrow::Cow;

/// The exact token the lesson engine sends for a correct answer.
/// Anything else - including absence - is treated as incorrect.
pub const CORRECT_TOKEN: &str = "correct";

/// Binary verdict for one submitted exercise answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    /// Parse the raw outcome token. Fail-safe: only the exact sentinel
    /// yields Correct, so a dropped or mangled field can never show the
    /// celebration screen by accident.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(CORRECT_TOKEN) => Outcome::Correct,
            _ => Outcome::Incorrect,
        }
    }

    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }
}

/// Everything the result screen knows about one activation.
///
/// Constructed exactly once when the screen is entered and never mutated;
/// a new activation builds a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultState {
    pub outcome: Outcome,
    /// Decoded expected answer; empty if the field was absent
    pub expected_answer: String,
    /// Decoded answer the user submitted; empty if the field was absent
    pub submitted_answer: String,
}

/// Build a `ResultState` from the three raw navigation fields.
///
/// No side effects, no failure path. Percent-decoding errors fall back to
/// the raw text rather than dropping it.
pub fn interpret(
    outcome: Option<&str>,
    expected: Option<&str>,
    answer: Option<&str>,
) -> ResultState {
    ResultState {
        outcome: Outcome::from_token(outcome),
        expected_answer: decode_field(expected),
        submitted_answer: decode_field(answer),
    }
}

/// Percent-decode a field, degrading gracefully: absent becomes empty,
/// an invalid encoding keeps the raw bytes as-is.
fn decode_field(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some(s) => match urlencoding::decode(s) {
            Ok(Cow::Borrowed(b)) => b.to_string(),
            Ok(Cow::Owned(o)) => o,
            Err(_) => s.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_token_is_correct() {
        let state = interpret(Some("correct"), Some("Hola"), Some("Hello"));
        assert_eq!(state.outcome, Outcome::Correct);
        assert_eq!(state.expected_answer, "Hola");
        assert_eq!(state.submitted_answer, "Hello");
    }

    #[test]
    fn anything_else_is_incorrect() {
        for token in ["incorrect", "Correct", "CORRECT", "correct ", "", "true", "1"] {
            assert_eq!(
                Outcome::from_token(Some(token)),
                Outcome::Incorrect,
                "token {:?} must not pass",
                token
            );
        }
        assert_eq!(Outcome::from_token(None), Outcome::Incorrect);
    }

    #[test]
    fn all_fields_missing_degrades_to_defaults() {
        let state = interpret(None, None, None);
        assert_eq!(state.outcome, Outcome::Incorrect);
        assert_eq!(state.expected_answer, "");
        assert_eq!(state.submitted_answer, "");
    }

    #[test]
    fn percent_encoded_fields_are_decoded() {
        let state = interpret(
            Some("correct"),
            Some("%C2%BFC%C3%B3mo%20est%C3%A1s%3F"),
            Some("How%20are%20you%3F"),
        );
        assert_eq!(state.expected_answer, "¿Cómo estás?");
        assert_eq!(state.submitted_answer, "How are you?");
    }

    #[test]
    fn invalid_encoding_keeps_raw_text() {
        // %ZZ is not a valid escape; the field survives verbatim
        let state = interpret(None, Some("100%ZZ"), None);
        assert_eq!(state.expected_answer, "100%ZZ");
    }

    #[test]
    fn encode_decode_round_trip_with_reserved_chars() {
        for text in ["Querida Ana, ¿cómo estás?", "a&b=c?d#e", "100% sûr", "日本語 テスト"] {
            let encoded = urlencoding::encode(text).to_string();
            let state = interpret(Some("correct"), Some(&encoded), Some(&encoded));
            assert_eq!(state.expected_answer, text);
            assert_eq!(state.submitted_answer, text);
        }
    }
}

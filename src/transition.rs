// Transition control - where the result screen goes when the user is done
//
// Only one destination is reachable from the result screen: the lesson's
// answer-entry screen. What varies is the carried instruction telling that
// screen how to initialize - after a wrong answer the stale input must be
// cleared so the rejected text is not pre-filled for the next attempt.

use crate::result::Outcome;

/// Navigation destinations reachable from the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The lesson's translate / answer-entry screen
    AnswerEntry,
}

/// A navigation request plus the instruction carried to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTransition {
    pub target: NavTarget,
    /// Tells the destination to discard any previously typed answer
    pub clear_input: bool,
}

impl NavigationTransition {
    fn clean() -> Self {
        Self {
            target: NavTarget::AnswerEntry,
            clear_input: false,
        }
    }
}

/// The single acknowledgment action ("Continue" / "Got it").
///
/// A correct answer returns to a clean entry screen; an incorrect one
/// additionally instructs the entry screen to clear the rejected input.
pub fn acknowledge(outcome: Outcome) -> NavigationTransition {
    NavigationTransition {
        target: NavTarget::AnswerEntry,
        clear_input: !outcome.is_correct(),
    }
}

/// The secondary close/exit action. Always available, always returns to a
/// clean entry screen regardless of outcome - giving up, not acknowledging.
pub fn dismiss() -> NavigationTransition {
    NavigationTransition::clean()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledge_correct_carries_nothing() {
        let t = acknowledge(Outcome::Correct);
        assert_eq!(t.target, NavTarget::AnswerEntry);
        assert!(!t.clear_input);
    }

    #[test]
    fn acknowledge_incorrect_clears_input() {
        let t = acknowledge(Outcome::Incorrect);
        assert_eq!(t.target, NavTarget::AnswerEntry);
        assert!(t.clear_input);
    }

    #[test]
    fn dismiss_never_carries_an_instruction() {
        for _outcome in [Outcome::Correct, Outcome::Incorrect] {
            let t = dismiss();
            assert_eq!(t.target, NavTarget::AnswerEntry);
            assert!(!t.clear_input);
        }
    }
}

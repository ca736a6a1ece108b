// TUI application state
//
// Holds the current screen, the exercise deck, and the feedback machinery.
// Screen changes only ever happen through a NavigationTransition, so the
// carried clear-input instruction is honored in exactly one place.

use super::theme::Theme;
use super::toast::Toast;
use crate::exercise::{ActivationParams, Deck};
use crate::feedback::{copy_expected_answer, AudioPlayer, CueGate, SoundCue};
use crate::logging::LogBuffer;
use crate::result::{interpret, Outcome, ResultState};
use crate::transition::{self, NavTarget, NavigationTransition};
use std::time::{Duration, Instant};
use tracing::info;

/// Debounce duration for action keys (Enter, Esc)
/// Prevents rapid-fire triggers on terminals that don't send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Celebration lines for the correct presentation; one is pinned per
/// activation so re-renders don't flicker through them
const CELEBRATIONS: &[&str] = &[
    "Great job!",
    "Nailed it!",
    "You're on fire!",
    "Keep it up!",
    "Flawless!",
];

/// The screens this app can show
#[derive(Debug)]
pub enum Screen {
    /// The lesson's translate / answer-entry screen
    AnswerEntry,
    /// The result screen for one activation
    Result {
        state: ResultState,
        /// Celebration line pinned at activation (correct presentation only)
        celebration: &'static str,
    },
}

/// Main application state for the TUI
pub struct App {
    /// Current screen
    pub screen: Screen,

    /// Prompt deck (the lesson-engine stand-in)
    pub deck: Deck,

    /// Text typed on the answer-entry screen; survives dismissal,
    /// cleared only when a transition carries the instruction
    pub input: String,

    /// Change-detection guard for the sound cue
    cue_gate: CueGate,

    /// Sound playback seam
    player: Box<dyn AudioPlayer>,

    /// Copy confirmation overlay
    pub toast: Option<Toast>,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for the hint bar's warning line
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last time an action key was triggered (for debouncing)
    last_action_time: Option<Instant>,
}

impl App {
    pub fn new(theme: Theme, player: Box<dyn AudioPlayer>, log_buffer: LogBuffer) -> Self {
        Self {
            screen: Screen::AnswerEntry,
            deck: Deck::builtin(),
            input: String::new(),
            cue_gate: CueGate::new(),
            player,
            toast: None,
            theme,
            log_buffer,
            should_quit: false,
            last_action_time: None,
        }
    }

    /// Check if an action should be debounced
    /// Returns true if the action should be blocked (too soon since last)
    pub fn should_debounce_action(&mut self) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_action_time {
            if now.duration_since(last) < ACTION_DEBOUNCE {
                return true;
            }
        }
        self.last_action_time = Some(now);
        false
    }

    /// Activate the result screen from raw navigation fields.
    ///
    /// Interpretation happens exactly once per activation; the sound cue is
    /// armed through the gate so later re-renders cannot re-trigger it.
    pub fn activate_result(&mut self, params: &ActivationParams) {
        let state = interpret(
            params.outcome.as_deref(),
            params.expected.as_deref(),
            params.answer.as_deref(),
        );
        info!("result activated: {:?}", state.outcome);

        if self.cue_gate.observe(state.outcome) {
            self.player.play(SoundCue::for_outcome(state.outcome));
        }

        let celebration = CELEBRATIONS[pick_index(CELEBRATIONS.len())];
        self.screen = Screen::Result { state, celebration };
    }

    /// Submit the typed answer to the deck for grading and show the result
    pub fn submit_answer(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let submitted = self.input.clone();
        let params = self.deck.grade(&submitted);
        self.activate_result(&params);
    }

    /// The acknowledgment action ("Continue" / "Got it")
    pub fn acknowledge(&mut self) {
        if let Screen::Result { state, .. } = &self.screen {
            let outcome = state.outcome;
            // Moving on to the next prompt is the lesson side's policy:
            // only a correct answer advances the deck
            if outcome.is_correct() {
                self.deck.advance();
            }
            self.apply_transition(transition::acknowledge(outcome));
        }
    }

    /// The close/exit action - give up on the result without acknowledging
    pub fn dismiss_result(&mut self) {
        if matches!(self.screen, Screen::Result { .. }) {
            self.apply_transition(transition::dismiss());
        }
    }

    /// Copy the expected answer to the clipboard. Only offered on the
    /// incorrect presentation; failure stays silent, success shows a toast.
    pub fn copy_answer(&mut self) {
        if let Screen::Result { state, .. } = &self.screen {
            if state.outcome.is_correct() {
                return;
            }
            if copy_expected_answer(&state.expected_answer).is_ok() {
                self.toast = Some(Toast::new("Copied correct answer"));
            }
        }
    }

    /// The router: apply a navigation transition and its carried instruction
    fn apply_transition(&mut self, t: NavigationTransition) {
        match t.target {
            NavTarget::AnswerEntry => {
                if t.clear_input {
                    self.input.clear();
                }
                // Leaving the result screen ends the activation
                self.cue_gate.reset();
                self.screen = Screen::AnswerEntry;
            }
        }
    }

    /// Drop the toast once it has run its course
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// The result state currently on screen, if any
    pub fn result_state(&self) -> Option<&ResultState> {
        match &self.screen {
            Screen::Result { state, .. } => Some(state),
            Screen::AnswerEntry => None,
        }
    }

    /// Label of the acknowledge button for the current outcome
    pub fn continue_label(&self) -> &'static str {
        match self.result_state().map(|s| s.outcome) {
            Some(Outcome::Correct) => "CONTINUE",
            _ => "GOT IT",
        }
    }
}

/// Pick a stable-enough random index without a rand dependency
fn pick_index(len: usize) -> usize {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};
    (RandomState::new().build_hasher().finish() as usize) % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::SilentPlayer;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingPlayer(Arc<AtomicUsize>);

    impl AudioPlayer for CountingPlayer {
        fn play(&self, _cue: SoundCue) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn app() -> App {
        App::new(Theme::auto(), Box::new(SilentPlayer), LogBuffer::new())
    }

    fn app_with_counter() -> (App, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let app = App::new(
            Theme::auto(),
            Box::new(CountingPlayer(count.clone())),
            LogBuffer::new(),
        );
        (app, count)
    }

    fn correct_params() -> ActivationParams {
        ActivationParams {
            outcome: Some("correct".to_string()),
            expected: Some("Hola".to_string()),
            answer: Some("Hola".to_string()),
        }
    }

    fn incorrect_params() -> ActivationParams {
        ActivationParams {
            outcome: Some("incorrect".to_string()),
            expected: Some("Hola".to_string()),
            answer: Some("Hello".to_string()),
        }
    }

    #[test]
    fn activation_builds_state_from_params() {
        let mut app = app();
        app.activate_result(&correct_params());
        let state = app.result_state().unwrap();
        assert_eq!(state.outcome, Outcome::Correct);
        assert_eq!(state.expected_answer, "Hola");
    }

    #[test]
    fn cue_fires_once_per_activation() {
        let (mut app, count) = app_with_counter();
        app.activate_result(&correct_params());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Each activation is bounded by entry and exit; a fresh one after
        // leaving the screen fires again even with the same outcome
        app.acknowledge();
        app.activate_result(&correct_params());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn acknowledge_incorrect_clears_the_input() {
        let mut app = app();
        app.input = "Hello".to_string();
        app.activate_result(&incorrect_params());
        app.acknowledge();
        assert!(matches!(app.screen, Screen::AnswerEntry));
        assert_eq!(app.input, "");
    }

    #[test]
    fn acknowledge_correct_keeps_input_untouched() {
        // No clear instruction is carried after a correct answer; the
        // entry screen starts the next prompt with whatever policy it has
        let mut app = app();
        app.input = "Hola".to_string();
        app.activate_result(&correct_params());
        app.acknowledge();
        assert!(matches!(app.screen, Screen::AnswerEntry));
        assert_eq!(app.input, "Hola");
    }

    #[test]
    fn dismiss_keeps_the_rejected_input() {
        let mut app = app();
        app.input = "Hello".to_string();
        app.activate_result(&incorrect_params());
        app.dismiss_result();
        assert!(matches!(app.screen, Screen::AnswerEntry));
        assert_eq!(app.input, "Hello");
    }

    #[test]
    fn correct_acknowledge_advances_the_deck() {
        let mut app = app();
        let first = app.deck.current().source;
        app.activate_result(&correct_params());
        app.acknowledge();
        assert_ne!(app.deck.current().source, first);
    }

    #[test]
    fn incorrect_acknowledge_retries_the_same_prompt() {
        let mut app = app();
        let first = app.deck.current().source;
        app.activate_result(&incorrect_params());
        app.acknowledge();
        assert_eq!(app.deck.current().source, first);
    }

    #[test]
    fn copy_is_a_no_op_on_the_correct_presentation() {
        let mut app = app();
        app.activate_result(&correct_params());
        app.copy_answer();
        // No affordance exists for correct outcomes; no toast either way
        assert!(app.toast.is_none());
    }

    #[test]
    fn continue_label_differs_by_outcome() {
        let mut app = app();
        app.activate_result(&correct_params());
        assert_eq!(app.continue_label(), "CONTINUE");
        app.acknowledge();
        app.activate_result(&incorrect_params());
        assert_eq!(app.continue_label(), "GOT IT");
    }

    #[test]
    fn submit_ignores_blank_input() {
        let mut app = app();
        app.input = "   ".to_string();
        app.submit_answer();
        assert!(matches!(app.screen, Screen::AnswerEntry));
    }

    #[test]
    fn submit_grades_through_the_deck() {
        let mut app = app();
        app.input = app.deck.current().expected.to_string();
        app.submit_answer();
        assert_eq!(app.result_state().unwrap().outcome, Outcome::Correct);
    }
}

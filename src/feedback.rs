// Feedback orchestration - sound cues and the copy-answer affordance
//
// Both side effects here are best-effort by design: a blocked sound device
// or a denied clipboard must never surface as a user-visible error, never
// block rendering, and never affect navigation. Failures are logged at
// debug for diagnostics and otherwise swallowed.

use crate::result::Outcome;
use anyhow::{Context, Result};
use arboard::Clipboard;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::debug;

/// The two sound assets the result screen can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    CorrectChime,
    IncorrectBuzz,
}

impl SoundCue {
    /// Cue selection is a pure function of the outcome
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => SoundCue::CorrectChime,
            Outcome::Incorrect => SoundCue::IncorrectBuzz,
        }
    }
}

/// Seam for sound playback so the once-per-activation behavior is testable
/// without a sound device. `play` is fire-and-forget: implementations must
/// not block and must not propagate failure.
pub trait AudioPlayer: Send {
    fn play(&self, cue: SoundCue);
}

/// Plays cues by spawning an external player command (paplay, afplay, ...).
///
/// The child is detached with its output discarded; a missing binary or a
/// missing asset file only produces a debug log line.
pub struct ProcessPlayer {
    command: String,
    correct_asset: PathBuf,
    incorrect_asset: PathBuf,
}

impl ProcessPlayer {
    pub fn new(command: String, correct_asset: PathBuf, incorrect_asset: PathBuf) -> Self {
        Self {
            command,
            correct_asset,
            incorrect_asset,
        }
    }

    fn asset(&self, cue: SoundCue) -> &Path {
        match cue {
            SoundCue::CorrectChime => &self.correct_asset,
            SoundCue::IncorrectBuzz => &self.incorrect_asset,
        }
    }
}

impl AudioPlayer for ProcessPlayer {
    fn play(&self, cue: SoundCue) {
        let result = tokio::process::Command::new(&self.command)
            .arg(self.asset(cue))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(_child) => debug!("sound cue {:?} started", cue),
            // Playback is best-effort; the screen renders fine in silence
            Err(e) => debug!("sound cue {:?} not played: {}", cue, e),
        }
    }
}

/// Player used when sound is disabled (config or --no-sound)
pub struct SilentPlayer;

impl AudioPlayer for SilentPlayer {
    fn play(&self, _cue: SoundCue) {}
}

/// Change-detection guard that fires the cue exactly once per activation.
///
/// Keyed on the observed outcome rather than on render cycles: a re-render
/// with an unchanged outcome never re-triggers, while a fresh activation
/// (after `reset` on screen exit) always does.
#[derive(Debug, Default)]
pub struct CueGate {
    last_observed: Option<Outcome>,
}

impl CueGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the outcome currently on screen. Returns true when the cue
    /// should fire, i.e. this outcome was not the last one observed.
    pub fn observe(&mut self, outcome: Outcome) -> bool {
        if self.last_observed == Some(outcome) {
            return false;
        }
        self.last_observed = Some(outcome);
        true
    }

    /// Forget the observed outcome. Called when the screen is exited so the
    /// next activation fires again even for the same outcome.
    pub fn reset(&mut self) {
        self.last_observed = None;
    }
}

/// Copy the decoded expected answer to the system clipboard.
///
/// A fresh `arboard` handle is created per copy so no resource is held
/// between activations. Returns a Result the caller is free to discard; a
/// denial or headless environment is logged and otherwise ignored.
pub fn copy_expected_answer(expected_answer: &str) -> Result<()> {
    write_clipboard(expected_answer).inspect_err(|e| {
        debug!("clipboard copy failed: {:#}", e);
    })
}

fn write_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Test double that counts plays per cue
    struct CountingPlayer {
        chimes: Arc<AtomicUsize>,
        buzzes: Arc<AtomicUsize>,
    }

    impl AudioPlayer for CountingPlayer {
        fn play(&self, cue: SoundCue) {
            match cue {
                SoundCue::CorrectChime => self.chimes.fetch_add(1, Ordering::SeqCst),
                SoundCue::IncorrectBuzz => self.buzzes.fetch_add(1, Ordering::SeqCst),
            };
        }
    }

    #[test]
    fn cue_selection_is_pure() {
        assert_eq!(SoundCue::for_outcome(Outcome::Correct), SoundCue::CorrectChime);
        assert_eq!(SoundCue::for_outcome(Outcome::Incorrect), SoundCue::IncorrectBuzz);
    }

    #[test]
    fn gate_fires_once_per_activation() {
        let mut gate = CueGate::new();
        assert!(gate.observe(Outcome::Correct));
        // Re-render with the same state: no re-trigger
        assert!(!gate.observe(Outcome::Correct));
        assert!(!gate.observe(Outcome::Correct));
    }

    #[test]
    fn gate_fires_again_after_reset() {
        let mut gate = CueGate::new();
        assert!(gate.observe(Outcome::Incorrect));
        gate.reset();
        // New activation, same outcome: fires again
        assert!(gate.observe(Outcome::Incorrect));
    }

    #[test]
    fn gate_fires_on_outcome_change() {
        let mut gate = CueGate::new();
        assert!(gate.observe(Outcome::Correct));
        assert!(gate.observe(Outcome::Incorrect));
        assert!(!gate.observe(Outcome::Incorrect));
    }

    #[test]
    fn gated_playback_drives_the_player_once() {
        let chimes = Arc::new(AtomicUsize::new(0));
        let buzzes = Arc::new(AtomicUsize::new(0));
        let player = CountingPlayer {
            chimes: chimes.clone(),
            buzzes: buzzes.clone(),
        };
        let mut gate = CueGate::new();

        for _render in 0..5 {
            if gate.observe(Outcome::Correct) {
                player.play(SoundCue::for_outcome(Outcome::Correct));
            }
        }
        assert_eq!(chimes.load(Ordering::SeqCst), 1);
        assert_eq!(buzzes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn clipboard_copy_never_panics() {
        // Headless test environments deny clipboard access; the call must
        // come back as a discardable Result either way
        let _ = copy_expected_answer("Querida Ana, ¿cómo estás?");
    }

    #[test]
    fn missing_player_binary_is_swallowed() {
        // Spawning a nonexistent command must not panic or error out
        let player = ProcessPlayer::new(
            "definitely-not-a-real-player".to_string(),
            PathBuf::from("correct.wav"),
            PathBuf::from("incorrect.wav"),
        );
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            player.play(SoundCue::CorrectChime);
        });
    }
}

//! Typing indicator and typewriter reveal for the active question.
//!
//! Purely cosmetic: the phase only decides what is drawn and whether the
//! input surface is shown yet. It never touches the quiz session.

use std::time::{Duration, Instant};

/// Timing of the reveal effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// How long the typing indicator shows before text appears.
    pub thinking: Duration,
    /// Delay between revealed characters.
    pub per_char: Duration,
}

impl RevealTiming {
    /// Show every question immediately.
    pub fn instant() -> Self {
        Self {
            thinking: Duration::ZERO,
            per_char: Duration::ZERO,
        }
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            thinking: Duration::from_millis(600),
            per_char: Duration::from_millis(10),
        }
    }
}

/// What to draw for the question bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase<'a> {
    Thinking,
    Typing(&'a str),
    Idle,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    timing: RevealTiming,
    started: Instant,
    skipped: bool,
}

impl Reveal {
    pub fn new(timing: RevealTiming, now: Instant) -> Self {
        Self {
            timing,
            started: now,
            skipped: false,
        }
    }

    /// Start over for a new question.
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
        self.skipped = false;
    }

    /// Jump straight to the idle phase.
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    pub fn is_idle(&self, text: &str, now: Instant) -> bool {
        self.phase(text, now) == RevealPhase::Idle
    }

    pub fn phase<'a>(&self, text: &'a str, now: Instant) -> RevealPhase<'a> {
        if self.skipped {
            return RevealPhase::Idle;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < self.timing.thinking {
            return RevealPhase::Thinking;
        }
        if self.timing.per_char.is_zero() {
            return RevealPhase::Idle;
        }

        let typing = elapsed - self.timing.thinking;
        let shown = (typing.as_nanos() / self.timing.per_char.as_nanos()) as usize + 1;
        match text.char_indices().nth(shown) {
            Some((end, _)) => RevealPhase::Typing(&text[..end]),
            None => RevealPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> RevealTiming {
        RevealTiming {
            thinking: Duration::from_millis(100),
            per_char: Duration::from_millis(10),
        }
    }

    #[test]
    fn thinking_then_typing_then_idle() {
        let start = Instant::now();
        let reveal = Reveal::new(timing(), start);

        assert_eq!(reveal.phase("Hello", start), RevealPhase::Thinking);
        assert_eq!(
            reveal.phase("Hello", start + Duration::from_millis(100)),
            RevealPhase::Typing("H")
        );
        assert_eq!(
            reveal.phase("Hello", start + Duration::from_millis(125)),
            RevealPhase::Typing("Hel")
        );
        assert_eq!(
            reveal.phase("Hello", start + Duration::from_millis(200)),
            RevealPhase::Idle
        );
    }

    #[test]
    fn instant_timing_is_always_idle() {
        let start = Instant::now();
        let reveal = Reveal::new(RevealTiming::instant(), start);
        assert!(reveal.is_idle("Hello", start));
    }

    #[test]
    fn skip_and_restart() {
        let start = Instant::now();
        let mut reveal = Reveal::new(timing(), start);
        reveal.skip();
        assert!(reveal.is_idle("Hello", start));

        reveal.restart(start);
        assert_eq!(reveal.phase("Hello", start), RevealPhase::Thinking);
    }

    #[test]
    fn typing_respects_char_boundaries() {
        let start = Instant::now();
        let reveal = Reveal::new(timing(), start);
        assert_eq!(
            reveal.phase("héllo", start + Duration::from_millis(110)),
            RevealPhase::Typing("hé")
        );
    }
}

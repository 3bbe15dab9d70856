//! Typewriter placeholder cycle
//!
//! Types an example phrase one character at a time, waits, deletes it again
//! and moves on to the next phrase, looping forever. This module only holds
//! the state machine; the timer that drives it lives in `ui::typewriter`.

use std::time::Duration;

use thiserror::Error;

/// Timing constants for the typewriter effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Delay between two typed characters
    pub typing_interval: Duration,
    /// Delay between two deleted characters
    pub deleting_interval: Duration,
    /// How long a fully typed phrase stays on screen
    pub pause: Duration,
}

impl TypewriterConfig {
    pub const DEFAULT_TYPING_MS: u64 = 120;
    pub const DEFAULT_DELETING_MS: u64 = 60;
    pub const DEFAULT_PAUSE_MS: u64 = 2000;

    pub fn new(typing_interval: Duration, deleting_interval: Duration, pause: Duration) -> Self {
        Self {
            typing_interval,
            deleting_interval,
            pause,
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(Self::DEFAULT_TYPING_MS),
            Duration::from_millis(Self::DEFAULT_DELETING_MS),
            Duration::from_millis(Self::DEFAULT_PAUSE_MS),
        )
    }
}

/// Which way the buffer is currently moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Typing,
    Deleting,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

/// State of a looping typewriter over a fixed list of phrases.
///
/// The visible buffer is always a prefix of the current phrase, measured in
/// characters so multi-byte text is never split.
#[derive(Debug, Clone)]
pub struct PlaceholderCycle {
    phrases: Vec<String>,
    index: usize,
    /// Characters of the current phrase that are visible
    shown: usize,
    direction: Direction,
    config: TypewriterConfig,
}

impl PlaceholderCycle {
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }

        Ok(Self {
            phrases,
            index: 0,
            shown: 0,
            direction: Direction::Typing,
            config,
        })
    }

    /// Advance by one character and return the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        match self.direction {
            Direction::Typing => {
                let target = self.current_len();
                if self.shown < target {
                    self.shown += 1;
                }
                if self.shown >= target {
                    self.direction = Direction::Deleting;
                    self.config.pause
                } else {
                    self.config.typing_interval
                }
            }
            Direction::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.direction = Direction::Typing;
                    self.config.typing_interval
                } else {
                    self.config.deleting_interval
                }
            }
        }
    }

    /// Text currently visible
    pub fn display(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn config(&self) -> TypewriterConfig {
        self.config
    }

    fn current_len(&self) -> usize {
        self.current_phrase().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> TypewriterConfig {
        TypewriterConfig::new(
            Duration::from_millis(10),
            Duration::from_millis(5),
            Duration::from_millis(100),
        )
    }

    #[test]
    fn test_empty_phrase_list_is_rejected() {
        let result = PlaceholderCycle::new(Vec::<String>::new(), fast_config());
        assert_eq!(result.unwrap_err(), TypewriterError::NoPhrases);
    }

    #[test]
    fn test_starts_empty_and_typing() {
        let cycle = PlaceholderCycle::new(["hello"], fast_config()).unwrap();
        assert_eq!(cycle.display(), "");
        assert_eq!(cycle.direction(), Direction::Typing);
        assert_eq!(cycle.current_index(), 0);
    }

    #[test]
    fn test_tick_delays_follow_direction() {
        let mut cycle = PlaceholderCycle::new(["ab"], fast_config()).unwrap();

        assert_eq!(cycle.tick(), Duration::from_millis(10)); // "a"
        assert_eq!(cycle.tick(), Duration::from_millis(100)); // "ab", pause
        assert_eq!(cycle.direction(), Direction::Deleting);
        assert_eq!(cycle.tick(), Duration::from_millis(5)); // "a"
        assert_eq!(cycle.tick(), Duration::from_millis(10)); // "", next phrase
        assert_eq!(cycle.direction(), Direction::Typing);
    }

    #[test]
    fn test_default_config_types_slower_than_it_deletes() {
        let config = TypewriterConfig::default();
        assert!(config.typing_interval > config.deleting_interval);
        assert!(config.pause > config.typing_interval);
    }

    #[test]
    fn test_multibyte_phrase_is_never_split() {
        let mut cycle = PlaceholderCycle::new(["héllo 🚀"], fast_config()).unwrap();
        let mut seen = Vec::new();
        for _ in 0..7 {
            cycle.tick();
            seen.push(cycle.display().to_string());
        }
        assert_eq!(seen[1], "hé");
        assert_eq!(seen[6], "héllo 🚀");
        assert_eq!(cycle.direction(), Direction::Deleting);
    }

    #[test]
    fn test_empty_phrase_does_not_stall() {
        let mut cycle = PlaceholderCycle::new(["", "x"], fast_config()).unwrap();

        assert_eq!(cycle.tick(), Duration::from_millis(100));
        assert_eq!(cycle.direction(), Direction::Deleting);
        cycle.tick();
        assert_eq!(cycle.current_index(), 1);
        cycle.tick();
        assert_eq!(cycle.display(), "x");
    }

    #[test]
    fn test_single_phrase_wraps_to_itself() {
        let mut cycle = PlaceholderCycle::new(["go"], fast_config()).unwrap();
        for _ in 0..4 {
            cycle.tick();
        }
        assert_eq!(cycle.current_index(), 0);
        assert_eq!(cycle.display(), "");
        cycle.tick();
        assert_eq!(cycle.display(), "g");
    }
}

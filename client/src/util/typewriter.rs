//! Typewriter text effect for rotating hero sub-headings.
//!
//! DESIGN
//! ======
//! The effect is a tick-driven state machine: one character per tick while
//! typing, `hold_ticks` ticks of rest on the full phrase, one character per
//! tick while deleting, then the next phrase (wrapping). Character counts are
//! in `char`s so multi-byte phrases never split a code point.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use leptos::prelude::*;

pub const DEFAULT_TICK_MS: u32 = 90;
pub const DEFAULT_HOLD_TICKS: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    hold_ticks: u32,
    phase: Phase,
    text: String,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, hold_ticks: u32) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            hold_ticks,
            phase: Phase::Typing,
            text: String::new(),
        }
    }

    /// Currently visible prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Advance one tick and return the visible text.
    pub fn tick(&mut self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return &self.text;
        };
        let len = phrase.chars().count();

        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding(self.hold_ticks);
                }
            }
            Phase::Holding(0) => self.phase = Phase::Deleting,
            Phase::Holding(left) => self.phase = Phase::Holding(left - 1),
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }

        let shown = self.shown;
        self.text = self.phrases[self.index].chars().take(shown).collect();
        &self.text
    }
}

/// Drive a `Typewriter` from a timer and expose its text as a signal.
///
/// Without `hydrate` the signal stays at the first full phrase so server
/// output is stable.
pub fn use_typewriter(phrases: Vec<String>, tick_ms: u32, hold_ticks: u32) -> ReadSignal<String> {
    #[cfg(feature = "hydrate")]
    {
        let (text, set_text) = signal(String::new());
        let mut writer = Typewriter::new(phrases, hold_ticks);
        let interval = gloo_timers::callback::Interval::new(tick_ms, move || {
            set_text.set(writer.tick().to_owned());
        });
        // Dropping the interval cancels it.
        let interval = StoredValue::new_local(Some(interval));
        on_cleanup(move || interval.set_value(None));
        text
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tick_ms, hold_ticks);
        signal(phrases.into_iter().next().unwrap_or_default()).0
    }
}

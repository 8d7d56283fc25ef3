//! PIN-sharing simulator
//!
//! Dramatizes what happens after handing a verification code to a stranger.
//! Nothing is sent anywhere: the "sending" stage is a fixed delay and the
//! consequences are a fixed list revealed on a staggered timer.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use super::schedule::Timeline;

/// Digits a PIN must have before it can be shared
pub const PIN_LENGTH: usize = 6;

/// Errors from the simulator
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum PinError {
    /// The PIN does not have enough digits yet
    #[error("PIN has {len} of {required} digits")]
    Incomplete {
        /// Digits entered
        len: usize,
        /// Digits required
        required: usize,
    },

    /// The PIN was already shared; reset first
    #[error("PIN already shared")]
    AlreadyShared,
}

/// Simulator stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum PinStage {
    /// Typing the PIN
    Input,
    /// PIN "on its way" to the attacker
    Sending,
    /// Consequences are being revealed
    Revealed {
        /// How many consequences are visible
        shown: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PinEvent {
    Delivered,
    Reveal(usize),
}

/// Timings of the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinTimings {
    /// How long the sending stage lasts
    pub sending: Duration,
    /// Gap between consecutive consequences
    pub reveal_interval: Duration,
}

/// PIN-sharing simulator
#[derive(Debug)]
pub struct PinSimulator {
    pin: String,
    stage: PinStage,
    consequences: &'static [&'static str],
    timings: PinTimings,
    timeline: Timeline<PinEvent>,
}

impl PinSimulator {
    /// Create a simulator revealing `consequences` in order
    #[must_use]
    pub fn new(consequences: &'static [&'static str], timings: PinTimings) -> Self {
        Self {
            pin: String::new(),
            stage: PinStage::Input,
            consequences,
            timings,
            timeline: Timeline::new(),
        }
    }

    /// Replace the typed PIN; keeps ASCII digits only, truncated to [`PIN_LENGTH`]
    ///
    /// Ignored outside the input stage.
    pub fn enter(&mut self, raw: &str) -> &str {
        if self.stage == PinStage::Input {
            self.pin = raw.chars().filter(char::is_ascii_digit).take(PIN_LENGTH).collect();
        }
        &self.pin
    }

    /// The typed PIN
    #[must_use]
    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Current stage
    #[must_use]
    pub const fn stage(&self) -> PinStage {
        self.stage
    }

    /// Whether the share action is enabled
    #[must_use]
    pub fn can_share(&self) -> bool {
        self.stage == PinStage::Input && self.pin.len() == PIN_LENGTH
    }

    /// Share the PIN at time `now`
    pub fn share(&mut self, now: Duration) -> Result<(), PinError> {
        if self.stage != PinStage::Input {
            return Err(PinError::AlreadyShared);
        }
        if self.pin.len() < PIN_LENGTH {
            return Err(PinError::Incomplete {
                len: self.pin.len(),
                required: PIN_LENGTH,
            });
        }
        self.stage = PinStage::Sending;
        self.timeline.schedule(now, self.timings.sending, PinEvent::Delivered);
        log::debug!("pin simulator: sending");
        Ok(())
    }

    /// Deliver due timers; returns the consequences that became visible
    pub fn tick(&mut self, now: Duration) -> Vec<&'static str> {
        let mut revealed = Vec::new();
        loop {
            let due = self.timeline.poll_timed(now);
            if due.is_empty() {
                break;
            }
            for (at, event) in due {
                self.apply(at, event, &mut revealed);
            }
        }
        revealed
    }

    fn apply(&mut self, at: Duration, event: PinEvent, revealed: &mut Vec<&'static str>) {
        match (event, self.stage) {
            (PinEvent::Delivered, PinStage::Sending) => {
                self.stage = PinStage::Revealed { shown: 0 };
                // Stagger from the delivery deadline so a late poll does not
                // stretch the sequence.
                let mut delay = Duration::ZERO;
                for n in 1..=self.consequences.len() {
                    delay += self.timings.reveal_interval;
                    self.timeline.schedule(at, delay, PinEvent::Reveal(n));
                }
                log::debug!("pin simulator: delivered");
            },
            (PinEvent::Reveal(n), PinStage::Revealed { shown }) if n > shown => {
                revealed.extend_from_slice(&self.consequences[shown..n]);
                self.stage = PinStage::Revealed { shown: n };
            },
            _ => {},
        }
    }

    /// Consequences visible right now
    #[must_use]
    pub fn visible(&self) -> &'static [&'static str] {
        match self.stage {
            PinStage::Revealed { shown } => &self.consequences[..shown],
            PinStage::Input | PinStage::Sending => &[],
        }
    }

    /// Whether every consequence is visible
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.stage, PinStage::Revealed { shown } if shown == self.consequences.len())
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    /// Back to an empty input, from any stage
    pub fn reset(&mut self) {
        self.timeline.cancel_all();
        self.pin.clear();
        self.stage = PinStage::Input;
    }
}

//! Sequential quiz with transient feedback
//!
//! A quiz walks a fixed list of items in order. Each answer is scored
//! immediately and shown as feedback; the next item only becomes visible once
//! the feedback has cleared. There is no skipping and no going back.

use std::time::Duration;

use serde::Serialize;

use super::schedule::Timeline;
use super::{WidgetError, percent};

/// One quiz item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizItem<A> {
    /// Statement or message shown to the player
    pub prompt: &'static str,
    /// Correct answer
    pub answer: A,
    /// Explanation shown after answering
    pub explanation: &'static str,
}

/// Quiz progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    /// Waiting for an answer to item `index`
    Asking {
        /// Item on screen
        index: usize,
        /// Correct answers so far
        score: usize,
    },
    /// Item `index` was just answered; feedback is on screen
    Feedback {
        /// Item that was answered
        index: usize,
        /// Correct answers including this one
        score: usize,
        /// Whether the answer was right
        correct: bool,
    },
    /// Every item was answered
    Complete {
        /// Correct answers
        score: usize,
        /// Number of items
        total: usize,
    },
}

/// Feedback for a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Whether the answer was right
    pub correct: bool,
    /// Explanation of the right answer
    pub explanation: &'static str,
}

/// Quiz state machine
#[derive(Debug, Clone)]
pub struct Quiz<A> {
    items: Vec<QuizItem<A>>,
    state: QuizState,
}

impl<A: Copy + PartialEq> Quiz<A> {
    /// Start a quiz over `items`
    #[must_use]
    pub fn new(items: &[QuizItem<A>]) -> Self {
        let mut quiz = Self {
            items: items.to_vec(),
            state: QuizState::Asking { index: 0, score: 0 },
        };
        quiz.settle();
        quiz
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> QuizState {
        self.state
    }

    /// Number of items
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Item whose prompt is on screen (the answered one during feedback)
    #[must_use]
    pub fn current(&self) -> Option<&QuizItem<A>> {
        match self.state {
            QuizState::Asking { index, .. } | QuizState::Feedback { index, .. } => {
                self.items.get(index)
            },
            QuizState::Complete { .. } => None,
        }
    }

    /// Submit an answer for the item on screen
    pub fn answer(&mut self, value: A) -> Result<Feedback, WidgetError> {
        let QuizState::Asking { index, score } = self.state else {
            return Err(WidgetError::Busy);
        };
        let item = self.items.get(index).ok_or(WidgetError::Busy)?;
        let correct = item.answer == value;
        let score = if correct { score + 1 } else { score };

        self.state = QuizState::Feedback {
            index,
            score,
            correct,
        };
        Ok(Feedback {
            correct,
            explanation: item.explanation,
        })
    }

    /// Clear the feedback and move to the next item; no-op outside feedback
    pub fn advance(&mut self) {
        if let QuizState::Feedback { index, score, .. } = self.state {
            self.state = QuizState::Asking {
                index: index + 1,
                score,
            };
            self.settle();
        }
    }

    /// Start over
    pub fn reset(&mut self) {
        self.state = QuizState::Asking { index: 0, score: 0 };
        self.settle();
    }

    /// Whether every item was answered
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Complete { .. })
    }

    /// Correct answers so far
    #[must_use]
    pub const fn score(&self) -> usize {
        match self.state {
            QuizState::Asking { score, .. }
            | QuizState::Feedback { score, .. }
            | QuizState::Complete { score, .. } => score,
        }
    }

    /// Final percentage, rounded half up
    #[must_use]
    pub fn percent(&self) -> u8 {
        percent(self.score(), self.total())
    }

    /// Percentage of the way through the quiz, counting the item on screen
    #[must_use]
    pub fn progress(&self) -> u8 {
        match self.state {
            QuizState::Asking { index, .. } | QuizState::Feedback { index, .. } => {
                percent(index + 1, self.total())
            },
            QuizState::Complete { .. } => 100,
        }
    }

    fn settle(&mut self) {
        if let QuizState::Asking { index, score } = self.state {
            if index >= self.items.len() {
                self.state = QuizState::Complete {
                    score,
                    total: self.items.len(),
                };
            }
        }
    }
}

/// Quiz event delivered by the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizEvent {
    ClearFeedback,
}

/// A quiz paired with the timer that clears its feedback
#[derive(Debug)]
pub struct QuizSession<A> {
    quiz: Quiz<A>,
    timeline: Timeline<QuizEvent>,
    feedback_delay: Duration,
}

impl<A: Copy + PartialEq> QuizSession<A> {
    /// Start a session; feedback stays on screen for `feedback_delay`
    #[must_use]
    pub fn new(items: &[QuizItem<A>], feedback_delay: Duration) -> Self {
        Self {
            quiz: Quiz::new(items),
            timeline: Timeline::new(),
            feedback_delay,
        }
    }

    /// The underlying quiz
    #[must_use]
    pub const fn quiz(&self) -> &Quiz<A> {
        &self.quiz
    }

    /// Submit an answer at time `now`
    pub fn answer(&mut self, now: Duration, value: A) -> Result<Feedback, WidgetError> {
        let feedback = self.quiz.answer(value)?;
        self.timeline.schedule(now, self.feedback_delay, QuizEvent::ClearFeedback);
        Ok(feedback)
    }

    /// Deliver due timers; returns true if the visible item changed
    pub fn tick(&mut self, now: Duration) -> bool {
        let events = self.timeline.poll(now);
        for event in &events {
            match event {
                QuizEvent::ClearFeedback => self.quiz.advance(),
            }
        }
        !events.is_empty()
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    /// Start over, dropping any pending feedback timer
    pub fn reset(&mut self) {
        self.timeline.cancel_all();
        self.quiz.reset();
    }
}

//! Presentation navigation
//!
//! [`Deck`] keeps track of the section on screen; [`Accordion`] is the
//! one-open-at-a-time expansion used by the risk cards.

use thiserror::Error;

use crate::core::models::Section;

use super::percent;

/// Errors from navigation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// No section matches the given id or number
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

/// Ordered sections with a cursor
#[derive(Debug, Clone, Copy)]
pub struct Deck {
    sections: &'static [Section],
    current: usize,
}

impl Deck {
    /// Start at the first section
    #[must_use]
    pub const fn new(sections: &'static [Section]) -> Self {
        Self {
            sections,
            current: 0,
        }
    }

    /// All sections
    #[must_use]
    pub const fn sections(&self) -> &'static [Section] {
        self.sections
    }

    /// Index of the section on screen
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current
    }

    /// Section on screen
    #[must_use]
    pub fn current(&self) -> Option<&'static Section> {
        self.sections.get(self.current)
    }

    /// Move by `delta` sections, clamped to the ends; returns true if it moved
    pub fn step(&mut self, delta: isize) -> bool {
        let last = self.sections.len().saturating_sub(1);
        let target = self.current.saturating_add_signed(delta).min(last);
        let moved = target != self.current;
        self.current = target;
        moved
    }

    /// Next section
    pub fn next_section(&mut self) -> bool {
        self.step(1)
    }

    /// Previous section
    pub fn prev_section(&mut self) -> bool {
        self.step(-1)
    }

    /// Resolve an anchor id or a 1-based section number
    pub fn find(&self, key: &str) -> Result<usize, DeckError> {
        let key = key.trim().trim_start_matches('#');
        if let Ok(n) = key.parse::<usize>() {
            if (1..=self.sections.len()).contains(&n) {
                return Ok(n - 1);
            }
        }
        self.sections
            .iter()
            .position(|s| s.id.eq_ignore_ascii_case(key) || s.label.eq_ignore_ascii_case(key))
            .ok_or_else(|| DeckError::UnknownSection(key.to_string()))
    }

    /// Jump to an anchor id or a 1-based section number
    pub fn jump(&mut self, key: &str) -> Result<&'static Section, DeckError> {
        let index = self.find(key)?;
        self.current = index;
        log::debug!("deck: jumped to {}", self.sections[index].id);
        Ok(&self.sections[index])
    }

    /// How far through the deck the cursor is, rounded half up
    #[must_use]
    pub fn progress(&self) -> u8 {
        percent(self.current, self.sections.len().saturating_sub(1))
    }
}

/// At most one expanded item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Toggle item `index`: opens it (closing any other) or closes it if open
    pub const fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = match self.open {
            Some(open) if open == index => None,
            _ => Some(index),
        };
        self.open
    }

    /// Expanded item
    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    /// Collapse everything
    pub const fn close(&mut self) {
        self.open = None;
    }
}

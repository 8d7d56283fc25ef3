//! Checklist and bingo boards
//!
//! Both are fixed-size sets of independent flags. A bingo board additionally
//! knows a set of lines and is complete as soon as any line is fully marked.

use serde::Serialize;

use super::{WidgetError, percent};

/// Fixed-size set of independent toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    marks: Vec<bool>,
}

impl Checklist {
    /// Create an unchecked list of `len` items
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![false; len],
        }
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Flip item `index`; returns its new value
    pub fn toggle(&mut self, index: usize) -> Result<bool, WidgetError> {
        let len = self.marks.len();
        let mark = self.marks.get_mut(index).ok_or(WidgetError::OutOfRange { index, len })?;
        *mark = !*mark;
        Ok(*mark)
    }

    /// Whether item `index` is checked
    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Number of checked items
    #[must_use]
    pub fn checked(&self) -> usize {
        self.marks.iter().filter(|m| **m).count()
    }

    /// Completion percentage, rounded half up
    #[must_use]
    pub fn percent(&self) -> u8 {
        percent(self.checked(), self.len())
    }

    /// Whether every item is checked
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|m| *m)
    }

    /// All flags in order
    #[must_use]
    pub fn marks(&self) -> &[bool] {
        &self.marks
    }
}

/// Checklist whose completion is decided by lines of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bingo {
    board: Checklist,
    lines: Vec<Vec<usize>>,
}

impl Bingo {
    /// Create a board of `cells` cells with the given lines
    pub fn new(cells: usize, lines: Vec<Vec<usize>>) -> Result<Self, WidgetError> {
        if lines.is_empty() {
            return Err(WidgetError::NoLines);
        }
        for line in &lines {
            if line.is_empty() {
                return Err(WidgetError::NoLines);
            }
            if let Some(&index) = line.iter().find(|&&i| i >= cells) {
                return Err(WidgetError::OutOfRange { index, len: cells });
            }
        }
        Ok(Self {
            board: Checklist::new(cells),
            lines,
        })
    }

    /// Square board of `side` x `side` cells: every row, column and both diagonals
    pub fn square(side: usize) -> Result<Self, WidgetError> {
        let mut lines = Vec::with_capacity(2 * side + 2);
        for r in 0..side {
            lines.push((0..side).map(|c| r * side + c).collect());
        }
        for c in 0..side {
            lines.push((0..side).map(|r| r * side + c).collect());
        }
        if side > 0 {
            lines.push((0..side).map(|i| i * side + i).collect());
            lines.push((0..side).map(|i| i * side + (side - 1 - i)).collect());
        }
        Self::new(side * side, lines)
    }

    /// Flip cell `index`; returns its new value
    pub fn toggle(&mut self, index: usize) -> Result<bool, WidgetError> {
        self.board.toggle(index)
    }

    /// Underlying cells
    #[must_use]
    pub const fn board(&self) -> &Checklist {
        &self.board
    }

    /// Indices of lines whose cells are all marked
    #[must_use]
    pub fn completed_lines(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.iter().all(|&i| self.board.is_checked(i)))
            .map(|(n, _)| n)
            .collect()
    }

    /// Whether at least one line is fully marked
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.lines.iter().any(|line| line.iter().all(|&i| self.board.is_checked(i)))
    }

    /// Lines of the board
    #[must_use]
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }
}

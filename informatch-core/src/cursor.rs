//! Walk a [`MatchResult`] one candidate at a time.
//!
//! The cursor is a plain value owned by the presentation layer. It only moves
//! forward: both approving and rejecting a candidate advance it by one, and
//! once it passes the last entry it stays exhausted until it is reset for a
//! fresh ranking.

use log::info;

use crate::{MatchResult, RankedCandidate};

/// Position within a [`MatchResult`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use informatch_core::{Cursor, PersonRecord, WeightConfig, extract_traits, rank};
///
/// let people = vec![
///     PersonRecord::new("U01", Coord { x: 0.0, y: 0.0 }),
///     PersonRecord::new("U02", Coord { x: 0.0, y: 0.0 }),
/// ];
/// let traits = extract_traits(&people);
/// let result = rank(&"U01".into(), &people, WeightConfig::default(), &traits)
///     .expect("U01 is present");
///
/// let mut cursor = Cursor::new();
/// let liked = cursor.approve(&result).expect("one candidate to approve");
/// assert_eq!(liked.candidate.id.as_str(), "U02");
/// assert!(cursor.current(&result).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    /// A cursor on the first entry.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current index into the result.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The entry under the cursor, or `None` once exhausted.
    #[must_use]
    pub fn current<'r, 'a>(&self, result: &'r MatchResult<'a>) -> Option<&'r RankedCandidate<'a>> {
        result.get(self.index)
    }

    /// Report whether the cursor has moved past the last entry.
    #[must_use]
    pub fn is_exhausted(&self, result: &MatchResult<'_>) -> bool {
        self.index >= result.len()
    }

    /// Move to the next entry. Never wraps.
    pub const fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    /// Return to the first entry, for use with a freshly ranked result.
    pub const fn reset(&mut self) {
        self.index = 0;
    }

    /// Pass on the current candidate.
    pub const fn reject(&mut self) {
        self.advance();
    }

    /// Approve the current candidate and advance.
    ///
    /// Returns the approved entry so the presentation layer can announce the
    /// like; returns `None` when already exhausted. The cursor advances in
    /// both cases.
    pub fn approve<'r, 'a>(&mut self, result: &'r MatchResult<'a>) -> Option<&'r RankedCandidate<'a>> {
        let approved = self.current(result);
        if let Some(entry) = approved {
            info!(
                "Person {} approved candidate {} (score {:.2})",
                result.person().id,
                entry.candidate.id,
                entry.score
            );
        }
        self.advance();
        approved
    }
}

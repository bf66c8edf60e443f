//! Section tracking for `.ls` programs.
//!
//! A program is split by marker lines such as `/PROG`, `/ATTR`, `/MN`, `/POS`
//! and `/END`. The tracker follows one marker: it opens on a line whose
//! trimmed content is exactly that marker and closes on the next line that
//! starts with `/` and is anything else. Markers are not validated, so
//! unbalanced or repeated sections are tolerated.

pub const MAIN_MARKER: &[u8] = b"/MN";
pub const POSITIONS_MARKER: &[u8] = b"/POS";

/// Where a line sits relative to the tracked section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// The marker line that opens the section.
    Opening,
    /// A line inside the section.
    Body,
    /// Anything else, including the line that closed the section.
    Outside,
}

#[derive(Debug, Clone)]
pub struct SectionTracker {
    marker: &'static [u8],
    active: bool,
}

impl SectionTracker {
    pub fn new(marker: &'static [u8]) -> Self {
        Self {
            marker,
            active: false,
        }
    }

    /// Classify the next line and update the open/closed state.
    pub fn observe(&mut self, line: &[u8]) -> LineRole {
        let trimmed = line.trim_ascii();

        if trimmed == self.marker {
            self.active = true;
            return LineRole::Opening;
        }

        if self.active && trimmed.starts_with(b"/") {
            self.active = false;
        }

        if self.active {
            LineRole::Body
        } else {
            LineRole::Outside
        }
    }
}

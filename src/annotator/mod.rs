//! Weld-spot annotation of Fanuc `.ls` programs.
//!
//! The annotator is a pure function over the lines of one program:
//!
//! ```text
//! lines ──► pass 1 (/MN)  ──► lines' + SpotMap
//!                                  │
//! lines' ─► pass 2 (/POS) ◄────────┘ ──► annotated lines + ChangeStats
//! ```
//!
//! Pass 1 pairs every weld-spot comment (`!T1-00042 ;`) with the motion line
//! right below it and tags the motion point: `L P[12]` becomes `L P[12:42]`.
//! Pass 2 tags the matching position declaration: `P[12]{` becomes
//! `P[12:"42"]{`. A colon already inside the brackets means the token was
//! tagged by an earlier run; it is left alone and counted as skipped, which
//! makes the whole operation idempotent.
//!
//! Lines that match nothing are passed through byte for byte, and the output
//! always has exactly as many lines as the input.

mod patterns;
mod section;
mod spot_map;


use serde::Serialize;

use crate::document::{Document, Line};
use patterns::{motion_point, position_points, splice, weld_spot};
pub use section::{LineRole, MAIN_MARKER, POSITIONS_MARKER, SectionTracker};
pub use spot_map::{SpotMap, SpotRef};

/// Tunables for a single annotation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Tag with the raw comment digits (`00042`) instead of the spot number (`42`).
    pub keep_leading_zeros: bool,
}

/// Per-file counts of tagged and already-tagged points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStats {
    pub changed_mn: usize,
    pub changed_pos: usize,
    pub skipped_mn: usize,
    pub skipped_pos: usize,
}

impl ChangeStats {
    pub fn changed(&self) -> usize {
        self.changed_mn + self.changed_pos
    }

    pub fn skipped(&self) -> usize {
        self.skipped_mn + self.skipped_pos
    }
}

impl std::ops::AddAssign for ChangeStats {
    fn add_assign(&mut self, other: Self) {
        self.changed_mn += other.changed_mn;
        self.changed_pos += other.changed_pos;
        self.skipped_mn += other.skipped_mn;
        self.skipped_pos += other.skipped_pos;
    }
}

/// Output of [`annotate`].
#[derive(Debug, Clone)]
pub struct Annotated {
    pub lines: Vec<Line>,
    pub stats: ChangeStats,
    /// Pairings collected from `/MN`, in first-seen order.
    pub spots: SpotMap,
}

impl Annotated {
    pub fn into_document(self) -> Document {
        Document::from_lines(self.lines)
    }
}

/// Annotate one program. Never fails; unmatched input passes through.
pub fn annotate(lines: &[Line], options: AnnotateOptions) -> Annotated {
    let mut stats = ChangeStats::default();
    let mut spots = SpotMap::new();

    let main = annotate_main(lines, options, &mut spots, &mut stats);
    let lines = annotate_positions(main, &spots, &mut stats);

    Annotated {
        lines,
        stats,
        spots,
    }
}

pub fn annotate_document(document: &Document, options: AnnotateOptions) -> Annotated {
    annotate(document.lines(), options)
}

/// Normalize the digit run of a weld-spot comment.
///
/// Leading zeros are dropped unless `keep_leading_zeros` is set; an all-zero
/// run becomes `0`.
pub fn spot_identifier(digits: &[u8], keep_leading_zeros: bool) -> String {
    let raw = String::from_utf8_lossy(digits);
    if keep_leading_zeros {
        return raw.into_owned();
    }
    match raw.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Pass 1: pair weld-spot comments with the motion line that follows them.
fn annotate_main(
    lines: &[Line],
    options: AnnotateOptions,
    spots: &mut SpotMap,
    stats: &mut ChangeStats,
) -> Vec<Line> {
    let mut out = Vec::with_capacity(lines.len());
    let mut section = SectionTracker::new(MAIN_MARKER);
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];

        if section.observe(line) == LineRole::Body
            && let Some(digits) = weld_spot(line)
            && let Some(next) = lines.get(i + 1)
            && let Some(token) = motion_point(next)
        {
            let point = String::from_utf8_lossy(token.index).into_owned();
            let spot = spot_identifier(digits, options.keep_leading_zeros);

            out.push(line.clone());
            if token.is_annotated() {
                out.push(next.clone());
                stats.skipped_mn += 1;
            } else {
                let replacement = format!("P[{}:{}]", point, spot);
                out.push(splice(next, [&token.span], replacement.as_bytes()));
                stats.changed_mn += 1;
            }
            // Tagged pairs still feed /POS so a half-tagged file gets finished.
            spots.insert(point, spot);

            i += 2;
            continue;
        }

        out.push(line.clone());
        i += 1;
    }

    out
}

/// Pass 2: tag position declarations for every point paired in pass 1.
fn annotate_positions(lines: Vec<Line>, spots: &SpotMap, stats: &mut ChangeStats) -> Vec<Line> {
    let mut section = SectionTracker::new(POSITIONS_MARKER);

    lines
        .into_iter()
        .map(|line| {
            if section.observe(&line) != LineRole::Body || spots.is_empty() {
                return line;
            }
            tag_position(&line, spots, stats).unwrap_or(line)
        })
        .collect()
}

/// Rewrite one `/POS` line, or `None` when it stays as it is.
///
/// The first point in map order that appears on the line decides the outcome.
fn tag_position(line: &[u8], spots: &SpotMap, stats: &mut ChangeStats) -> Option<Line> {
    let tokens = position_points(line);
    let spot_ref = spots
        .iter()
        .find(|s| tokens.iter().any(|t| t.index == s.point.as_bytes()))?;

    let matching: Vec<_> = tokens
        .iter()
        .filter(|t| t.index == spot_ref.point.as_bytes())
        .collect();

    if matching.first()?.is_annotated() {
        stats.skipped_pos += 1;
        return None;
    }

    let replacement = format!("P[{}:\"{}\"]{{", spot_ref.point, spot_ref.spot);
    let spans = matching
        .iter()
        .copied()
        .filter(|t| !t.is_annotated())
        .map(|t| &t.span);
    stats.changed_pos += 1;
    Some(splice(line, spans, replacement.as_bytes()))
}

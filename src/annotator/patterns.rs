//! Line patterns recognised inside `/MN` and `/POS`.
//!
//! All patterns run on raw bytes with Unicode disabled (`(?-u)`), so `.` and
//! character classes match single Latin-1 bytes and never fail on bytes that
//! are not valid UTF-8.

use std::ops::Range;
use std::sync::LazyLock;

use regex::bytes::Regex;

/// `1:  !T1-00042 ;` - a weld-spot comment. Group 1 is the spot digit run.
static WELD_SPOT_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)(?:\d+\s*)?:\s*!\s*T.*-(\d+)\s*;").unwrap()
});

/// `2:  L P[12] 100mm/sec CNT100` - a linear or joint move to a point.
/// Group 1 is the whole point token, group 2 the index, group 3 an existing
/// annotation suffix.
static MOTION_POINT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)(?:\d+\s*:)?\s*[LJ]\s+(P\s*\[\s*(\d+)\s*(:[^\]]*)?\])").unwrap()
});

/// `P[12]{` - a position declaration. Group 1 is the index, group 2 an
/// existing annotation suffix.
static POSITION_POINT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)P\s*\[\s*(\d+)\s*(:[^\]]*)?\]\s*\{").unwrap());

/// A `P[...]` reference found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointToken<'a> {
    /// Byte range of the text to replace when annotating.
    pub span: Range<usize>,
    pub index: &'a [u8],
    /// Everything from the `:` up to the closing bracket, if present.
    pub suffix: Option<&'a [u8]>,
}

impl PointToken<'_> {
    /// A colon inside the brackets is the only sign of a previous run.
    pub fn is_annotated(&self) -> bool {
        self.suffix.is_some()
    }
}

/// Return the weld-spot digit run of a comment line.
pub fn weld_spot(line: &[u8]) -> Option<&[u8]> {
    WELD_SPOT_COMMENT_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}

/// Return the point token of an `L`/`J` motion line.
pub fn motion_point(line: &[u8]) -> Option<PointToken<'_>> {
    let caps = MOTION_POINT_REGEX.captures(line)?;
    let token = caps.get(1)?;
    Some(PointToken {
        span: token.range(),
        index: caps.get(2)?.as_bytes(),
        suffix: caps.get(3).map(|m| m.as_bytes()),
    })
}

/// Return every `P[...]{` declaration on a line, in order.
///
/// The span covers the opening brace.
pub fn position_points(line: &[u8]) -> Vec<PointToken<'_>> {
    POSITION_POINT_REGEX
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(PointToken {
                span: whole.range(),
                index: caps.get(1)?.as_bytes(),
                suffix: caps.get(2).map(|m| m.as_bytes()),
            })
        })
        .collect()
}

/// Replace each span (ascending, non-overlapping) with `replacement`.
pub fn splice<'a>(
    line: &[u8],
    spans: impl IntoIterator<Item = &'a Range<usize>>,
    replacement: &[u8],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len() + replacement.len());
    let mut cursor = 0;
    for span in spans {
        out.extend_from_slice(&line[cursor..span.start]);
        out.extend_from_slice(replacement);
        cursor = span.end;
    }
    out.extend_from_slice(&line[cursor..]);
    out
}

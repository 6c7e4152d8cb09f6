//! Start/end marker blocks.

use std::ops::Range;

/// A block bounded by literal start and end markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimited<'a> {
    /// Byte range covering both markers
    pub outer: Range<usize>,
    /// Text between the markers, untrimmed
    pub inner: &'a str,
}

/// Locate the first `start` marker and the first `end` marker after it.
///
/// Returns `None` if either marker is missing.
pub fn find_delimited<'a>(text: &'a str, start: &str, end: &str) -> Option<Delimited<'a>> {
    let open = text.find(start)?;
    let inner_start = open + start.len();
    let close = inner_start + text[inner_start..].find(end)?;
    Some(Delimited {
        outer: open..close + end.len(),
        inner: &text[inner_start..close],
    })
}

//! Defines the `Cue` struct, the output of the parser.

use chrono::NaiveTime;

/// One subtitle entry.
///
/// Cues are returned in file order exactly as declared: the parser does not
/// renumber, reorder or deduplicate indices, and does not check that
/// `start` comes before `end`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Cue {
    /// The ordinal written in the file.
    pub index: usize,
    /// When the cue appears.
    pub start: NaiveTime,
    /// When the cue disappears.
    pub end: NaiveTime,
    /// The body lines, joined with `\n`.
    pub text: String,
}

//! Derived cut commands.
//!
//! Computed locally and deterministically from validated highlight data,
//! without further external calls. These are pure functions: no I/O, no
//! side effects, identical inputs always yield identical strings.

use vidgenius_models::Highlight;

/// Fallback when a highlight timestamp is malformed: a full-file lossless
/// copy instead of a timed cut. Not an error path.
pub const FALLBACK_CUT_COMMAND: &str = "ffmpeg -i input.mp4 -c copy clip.mp4";

/// Build the shell command that cuts one highlight out of `input.mp4`.
///
/// `timestamp` is expected as `"MM:SS - MM:SS"`; `index` is the zero-based
/// highlight position and names the output with the 1-based clip number.
/// A timestamp that does not split into exactly two marks degrades to
/// [`FALLBACK_CUT_COMMAND`].
pub fn derive_cut_command(timestamp: &str, index: usize) -> String {
    let times: Vec<&str> = timestamp.split('-').map(str::trim).collect();
    if times.len() != 2 {
        return FALLBACK_CUT_COMMAND.to_string();
    }
    format!(
        "ffmpeg -i input.mp4 -ss {} -to {} -c copy clip_{}.mp4",
        times[0],
        times[1],
        index + 1
    )
}

/// Cut commands for every highlight of a result, in order.
pub fn cut_commands_for(highlights: &[Highlight]) -> Vec<String> {
    highlights
        .iter()
        .enumerate()
        .map(|(index, h)| derive_cut_command(&h.timestamp, index))
        .collect()
}

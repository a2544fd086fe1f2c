//! Shared types and constants used across testvid.
//! Includes the frame file naming scheme (`frame_file_name`, `FRAME_NAME_WIDTH`)
//! and the `WorkDirKind` tag reported by the orchestrator.
use std::fmt;

/// Number of digits in a frame file stem, e.g. `000042.svg`.
pub const FRAME_NAME_WIDTH: usize = 6;

/// Largest frame count whose file names still sort numerically.
pub const MAX_FRAMES: u64 = 999_999;

pub const FRAME_EXTENSION: &str = "svg";

/// File name for a 1-based frame index, zero-padded so that lexicographic and
/// numeric ordering coincide.
pub fn frame_file_name(index: u64) -> String {
    format!("{:0width$}.{}", index, FRAME_EXTENSION, width = FRAME_NAME_WIDTH)
}

/// Glob over every frame file in a directory, as handed to the encoder.
pub fn frame_glob() -> String {
    format!("*.{}", FRAME_EXTENSION)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WorkDirKind {
    /// Supplied by the user; never removed.
    User,
    /// Allocated for this run; removed when the run ends.
    Temporary,
}

impl fmt::Display for WorkDirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkDirKind::User => "user",
            WorkDirKind::Temporary => "temporary",
        };
        write!(f, "{}", s)
    }
}

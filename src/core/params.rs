use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT: &str = "output.mp4";
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_DURATION_SECS: u32 = 1;
pub const DEFAULT_FRAMENO_ID: &str = "frame_no";
pub const DEFAULT_ENCODER: &str = "/usr/local/bin/ffmpeg";

/// Unvalidated request for one test video, as typed by the user or built by an
/// embedding application. Paths may be relative or start with `~`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoParams {
    pub template: PathBuf,
    pub output: PathBuf,
    pub fps: u32,
    pub duration_secs: u32,
    /// None means a temporary directory is allocated for the run
    pub workdir: Option<PathBuf>,
    /// `id` attribute of the `<text>` element that shows the frame number
    pub frameno_id: String,
    pub encoder: PathBuf,
}

impl VideoParams {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    /// fps × duration, without clamping.
    pub fn frame_count(&self) -> u64 {
        u64::from(self.fps) * u64::from(self.duration_secs)
    }
}

impl Default for VideoParams {
    fn default() -> Self {
        Self {
            template: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            fps: DEFAULT_FPS,
            duration_secs: DEFAULT_DURATION_SECS,
            workdir: None,
            frameno_id: DEFAULT_FRAMENO_ID.to_string(),
            encoder: PathBuf::from(DEFAULT_ENCODER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let p = VideoParams::new("tmpl.svg");
        assert_eq!(p.template, PathBuf::from("tmpl.svg"));
        assert_eq!(p.output, PathBuf::from("output.mp4"));
        assert_eq!(p.fps, 60);
        assert_eq!(p.duration_secs, 1);
        assert_eq!(p.workdir, None);
        assert_eq!(p.frameno_id, "frame_no");
        assert_eq!(p.encoder, PathBuf::from("/usr/local/bin/ffmpeg"));
        assert_eq!(p.frame_count(), 60);
    }

    #[test]
    fn frame_count_does_not_overflow_u32() {
        let p = VideoParams {
            fps: u32::MAX,
            duration_secs: 2,
            ..VideoParams::default()
        };
        assert_eq!(p.frame_count(), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let p: VideoParams =
            serde_json::from_str(r#"{"template": "a.svg", "fps": 24}"#).unwrap();
        assert_eq!(p.template, PathBuf::from("a.svg"));
        assert_eq!(p.fps, 24);
        assert_eq!(p.duration_secs, 1);
        assert_eq!(p.frameno_id, "frame_no");
    }
}

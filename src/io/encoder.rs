//! External video encoder (ffmpeg) invocation over the frame glob.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output};

use tracing::{debug, error, info, info_span};

use crate::error::Result;
use crate::types::frame_glob;

pub const VIDEO_CODEC: &str = "libx264";
pub const PIXEL_FORMAT: &str = "yuv420p";

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub encoder: PathBuf,
    pub frames_dir: PathBuf,
    pub out_path: PathBuf,
    pub fps: u32,
}

impl EncodeConfig {
    /// `<frames_dir>/*.svg`, handed to the encoder in glob pattern mode.
    pub fn input_pattern(&self) -> PathBuf {
        self.frames_dir.join(frame_glob())
    }

    /// Arguments after the program name.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-y".into(),
            "-r".into(),
            self.fps.to_string().into(),
            "-pattern_type".into(),
            "glob".into(),
            "-i".into(),
            self.input_pattern().into_os_string(),
            "-vcodec".into(),
            VIDEO_CODEC.into(),
            "-pix_fmt".into(),
            PIXEL_FORMAT.into(),
            self.out_path.clone().into_os_string(),
        ]
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.encoder);
        cmd.args(self.args());
        cmd
    }
}

/// Outcome of one encoder run with its captured output streams.
#[derive(Debug, Clone)]
pub struct EncodeReport {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl EncodeReport {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

impl From<Output> for EncodeReport {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run the encoder to completion, capturing both streams.
///
/// A non-zero exit is logged and reported, not returned as an error; only a
/// failure to start the process is.
pub fn create_test_video(
    frames_dir: &Path,
    out_path: &Path,
    fps: u32,
    encoder: &Path,
) -> Result<EncodeReport> {
    let cfg = EncodeConfig {
        encoder: encoder.to_path_buf(),
        frames_dir: frames_dir.to_path_buf(),
        out_path: out_path.to_path_buf(),
        fps,
    };
    run(&cfg)
}

pub fn run(cfg: &EncodeConfig) -> Result<EncodeReport> {
    let _span = info_span!("encode", fps = cfg.fps).entered();
    debug!("Running {:?} {:?}", cfg.encoder, cfg.args());

    let report = EncodeReport::from(cfg.command().output()?);

    if report.success() {
        info!("Encoded {:?}", cfg.out_path);
    } else {
        error!("Encoder failed with {} for {:?}", report.status, cfg.out_path);
        let stdout = report.stdout.trim();
        if !stdout.is_empty() {
            debug!("encoder stdout:\n{}", stdout);
        }
        let stderr = report.stderr.trim();
        if !stderr.is_empty() {
            error!("encoder stderr:\n{}", stderr);
        }
    }
    Ok(report)
}

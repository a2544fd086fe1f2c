//! High-level, ergonomic API for producing a test video in one call.
//!
//! [`render_test_video`] runs the whole pipeline (validate, generate frames,
//! encode). [`run_with_settings`] runs the last two phases on settings that
//! were validated separately, which lets callers inspect the working directory
//! before anything is written.
use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::frames::{FrameSet, create_frame_images};
use crate::core::params::VideoParams;
use crate::core::settings::RunSettings;
use crate::error::Result;
use crate::io::EncodeReport;
use crate::io::encoder::create_test_video;

/// Summary of a completed run. When the working directory was temporary,
/// `frames.dir` has already been removed.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Resolved, absolute path of the video
    pub output: PathBuf,
    pub frames: FrameSet,
    pub encode: EncodeReport,
}

impl RunReport {
    /// True only when the encoder exited with status zero.
    pub fn encoded(&self) -> bool {
        self.encode.success()
    }
}

/// Validate `params`, then generate frames and encode them.
pub fn render_test_video(params: &VideoParams) -> Result<RunReport> {
    let settings = RunSettings::resolve(params)?;
    run_with_settings(settings)
}

/// Generate frames and invoke the encoder using validated settings.
///
/// The working directory guard is held for the whole call and released on
/// return, so a temporary directory is gone whether this succeeds or fails.
pub fn run_with_settings(settings: RunSettings) -> Result<RunReport> {
    let RunSettings {
        template,
        output,
        fps,
        frame_count,
        workdir,
        frameno_id,
        encoder,
    } = settings;

    debug!("Generating frame images from template");
    let frames = create_frame_images(&template, frame_count, workdir.path(), &frameno_id)?;

    debug!("Encoding frame images into {:?}", output);
    let encode = create_test_video(workdir.path(), &output, fps, &encoder)?;

    // removal failures are logged by `close`
    let _ = workdir.close();
    info!("Done: {} frames -> {:?}", frames.count, output);
    Ok(RunReport {
        output,
        frames,
        encode,
    })
}

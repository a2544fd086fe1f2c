//! Frame generation: one SVG file per frame index, named so the encoder's glob
//! yields them in playback order.
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::error::{Error, Result};
use crate::io::SvgTemplate;
use crate::types::{MAX_FRAMES, frame_file_name};

const PROGRESS_EVERY: u64 = 10;

/// Files written by a frame generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    pub dir: PathBuf,
    pub count: u64,
}

impl FrameSet {
    /// Paths of every frame, in playback order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (1..=self.count).map(|i| self.dir.join(frame_file_name(i)))
    }
}

/// Load the template once and write frames `1..=frame_count` into `workdir`.
pub fn create_frame_images(
    template_path: &Path,
    frame_count: u64,
    workdir: &Path,
    frameno_id: &str,
) -> Result<FrameSet> {
    let template = SvgTemplate::load(template_path, frameno_id)?;
    write_frames(&template, frame_count, workdir)
}

/// Write frames `1..=frame_count` from an already parsed template.
///
/// Files already written stay in place if a later frame fails.
pub fn write_frames(template: &SvgTemplate, frame_count: u64, workdir: &Path) -> Result<FrameSet> {
    let _span = info_span!("frames", count = frame_count).entered();

    if frame_count > MAX_FRAMES {
        return Err(Error::TooManyFrames {
            count: frame_count,
            max: MAX_FRAMES,
        });
    }

    for frame in 1..=frame_count {
        let path = workdir.join(frame_file_name(frame));
        if frame % PROGRESS_EVERY == 0 {
            debug!("Writing frame {} to {:?}", frame, path);
        }
        template.write_frame_file(frame, &path)?;
    }

    info!("Wrote {} frame images to {:?}", frame_count, workdir);
    Ok(FrameSet {
        dir: workdir.to_path_buf(),
        count: frame_count,
    })
}

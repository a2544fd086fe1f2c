//! Validation of a [`VideoParams`] request into absolute, checked [`RunSettings`].
//!
//! All existence checks run before anything is created on disk, so a rejected
//! request leaves no output directory and no working directory behind.
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, info_span};

use crate::core::params::VideoParams;
use crate::core::paths::resolve;
use crate::error::{Error, Result};
use crate::io::WorkDir;
use crate::types::MAX_FRAMES;

#[derive(Debug)]
pub struct RunSettings {
    pub template: PathBuf,
    pub output: PathBuf,
    pub fps: u32,
    pub frame_count: u64,
    pub workdir: WorkDir,
    pub frameno_id: String,
    pub encoder: PathBuf,
}

impl RunSettings {
    pub fn resolve(params: &VideoParams) -> Result<Self> {
        let _span = info_span!("validate").entered();
        debug!("Checking inputs: {:?}", params);

        let template = resolve(&params.template)?;
        if !template.is_file() {
            return Err(Error::TemplateNotFound { path: template });
        }
        info!("Template: {:?}", template);

        let encoder = resolve(&params.encoder)?;
        if !encoder.is_file() {
            return Err(Error::EncoderNotFound { path: encoder });
        }

        if params.fps == 0 {
            return Err(Error::InvalidArgument {
                arg: "fps",
                value: params.fps.to_string(),
            });
        }
        if params.duration_secs == 0 {
            return Err(Error::InvalidArgument {
                arg: "duration",
                value: params.duration_secs.to_string(),
            });
        }
        let frame_count = params.frame_count();
        if frame_count > MAX_FRAMES {
            return Err(Error::TooManyFrames {
                count: frame_count,
                max: MAX_FRAMES,
            });
        }

        let output = resolve(&params.output)?;
        if let Some(parent) = output.parent() {
            if !parent.is_dir() {
                debug!("Output directory {:?} does not exist, creating it", parent);
                fs::create_dir_all(parent)?;
            }
        }
        info!("Output: {:?}", output);
        info!("FPS: {}", params.fps);
        info!("Frames: {}", frame_count);

        let workdir = match &params.workdir {
            Some(path) => WorkDir::user(resolve(path)?)?,
            None => WorkDir::temporary()?,
        };
        info!("Working directory ({}): {:?}", workdir.kind(), workdir.path());
        info!("Frame number id: {}", params.frameno_id);
        info!("Encoder: {:?}", encoder);

        Ok(Self {
            template,
            output,
            fps: params.fps,
            frame_count,
            workdir,
            frameno_id: params.frameno_id.clone(),
            encoder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkDirKind;

    struct Fixture {
        root: tempfile::TempDir,
        params: VideoParams,
    }

    fn fixture() -> Fixture {
        let root = tempfile::tempdir().unwrap();
        let template = root.path().join("tmpl.svg");
        fs::write(&template, r#"<svg><text id="frame_no">0</text></svg>"#).unwrap();
        let encoder = root.path().join("ffmpeg");
        fs::write(&encoder, "").unwrap();
        let params = VideoParams {
            template,
            output: root.path().join("out/video.mp4"),
            fps: 2,
            duration_secs: 3,
            workdir: None,
            frameno_id: "frame_no".to_string(),
            encoder,
        };
        Fixture { root, params }
    }

    #[test]
    fn resolves_and_creates_directories() {
        let mut f = fixture();
        f.params.workdir = Some(f.root.path().join("work/./frames"));
        let s = RunSettings::resolve(&f.params).unwrap();
        assert_eq!(s.frame_count, 6);
        assert!(s.output.parent().unwrap().is_dir());
        assert_eq!(s.workdir.kind(), WorkDirKind::User);
        assert_eq!(s.workdir.path(), f.root.path().join("work/frames"));
        assert!(s.workdir.path().is_dir());
    }

    #[test]
    fn allocates_temporary_workdir_when_none_given() {
        let f = fixture();
        let s = RunSettings::resolve(&f.params).unwrap();
        assert_eq!(s.workdir.kind(), WorkDirKind::Temporary);
        let path = s.workdir.path().to_path_buf();
        assert!(path.is_dir());
        drop(s);
        assert!(!path.exists());
    }

    #[test]
    fn missing_template_has_no_side_effects() {
        let mut f = fixture();
        f.params.template = f.root.path().join("missing.svg");
        f.params.workdir = Some(f.root.path().join("work"));
        let err = RunSettings::resolve(&f.params).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
        assert!(!f.root.path().join("out").exists());
        assert!(!f.root.path().join("work").exists());
    }

    #[test]
    fn missing_encoder_has_no_side_effects() {
        let mut f = fixture();
        f.params.encoder = f.root.path().join("bin/ffmpeg");
        f.params.workdir = Some(f.root.path().join("work"));
        let err = RunSettings::resolve(&f.params).unwrap_err();
        assert!(matches!(err, Error::EncoderNotFound { .. }));
        assert!(err.is_validation());
        assert!(!f.root.path().join("out").exists());
        assert!(!f.root.path().join("work").exists());
    }

    #[test]
    fn directory_is_not_a_template() {
        let mut f = fixture();
        f.params.template = f.root.path().to_path_buf();
        assert!(matches!(
            RunSettings::resolve(&f.params),
            Err(Error::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn zero_and_oversized_counts_are_rejected() {
        let mut f = fixture();
        f.params.fps = 0;
        assert!(matches!(
            RunSettings::resolve(&f.params),
            Err(Error::InvalidArgument { arg: "fps", .. })
        ));

        f.params.fps = 60;
        f.params.duration_secs = 0;
        assert!(matches!(
            RunSettings::resolve(&f.params),
            Err(Error::InvalidArgument { arg: "duration", .. })
        ));

        f.params.duration_secs = 60 * 60 * 5;
        assert!(matches!(
            RunSettings::resolve(&f.params),
            Err(Error::TooManyFrames { count: 1_080_000, .. })
        ));
    }
}

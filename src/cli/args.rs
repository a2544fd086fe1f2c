use clap::Parser;
use std::path::PathBuf;

use testvid::VideoParams;
use testvid::core::params::{
    DEFAULT_DURATION_SECS, DEFAULT_ENCODER, DEFAULT_FPS, DEFAULT_FRAMENO_ID, DEFAULT_OUTPUT,
};

#[derive(Parser, Debug)]
#[command(
    name = "testvid",
    version,
    about = "Create a test video of the given length from a template SVG image"
)]
pub struct CliArgs {
    /// Template SVG file
    #[arg(
        short = 't',
        long = "template_svg",
        visible_alias = "template-svg",
        value_name = "SVG_FILE"
    )]
    pub template_svg: PathBuf,

    /// Output video file
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Frames per second of the output video
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Length of the output video in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECS, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// Working directory for frame images (a temporary directory is used if omitted)
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// `id` of the <text> element holding the frame number
    #[arg(long = "frameno_id", visible_alias = "frameno-id", default_value = DEFAULT_FRAMENO_ID)]
    pub frameno_id: String,

    /// Path to the ffmpeg binary
    #[arg(long, default_value = DEFAULT_ENCODER)]
    pub ffmpeg: PathBuf,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn to_params(&self) -> VideoParams {
        VideoParams {
            template: self.template_svg.clone(),
            output: self.output.clone(),
            fps: self.fps,
            duration_secs: self.duration,
            workdir: self.workdir.clone(),
            frameno_id: self.frameno_id.clone(),
            encoder: self.ffmpeg.clone(),
        }
    }
}

#![doc = r##"
testvid — frame-numbered test videos from an SVG template.

This crate takes one SVG template containing a `<text>` element with a known `id`,
writes one SVG per frame with that element showing the frame number (1, 2, 3, ...),
and hands the sequence to ffmpeg to produce a video. It powers the `testvid` CLI
and can be embedded in your own Rust applications.

Requirements
------------
- An `ffmpeg` binary built with glob pattern support and an SVG decoder (librsvg).
- Rust 2024 edition toolchain.

Quick start: one call
---------------------
```rust,no_run
use testvid::{render_test_video, VideoParams};

fn main() -> testvid::Result<()> {
    let params = VideoParams {
        output: "out/countdown.mp4".into(),
        fps: 30,
        duration_secs: 2,
        encoder: "/usr/bin/ffmpeg".into(),
        ..VideoParams::new("card.svg")
    };

    let report = render_test_video(&params)?;
    println!("frames={} encoded={}", report.frames.count, report.encoded());
    Ok(())
}
```

Frames only
-----------
```rust
use testvid::SvgTemplate;

fn main() -> testvid::Result<()> {
    let template = SvgTemplate::parse(
        r#"<svg><text id="frame_no"><tspan>0</tspan></text></svg>"#,
        "frame_no",
    )?;
    let frame = template.render_frame(7)?;
    assert_eq!(frame, br#"<svg><text id="frame_no"><tspan>7</tspan></text></svg>"#);
    Ok(())
}
```

Error handling
--------------
All public functions return `testvid::Result<T>`; match on `testvid::Error` to handle
specific cases. `Error::is_validation` is true for precondition failures detected before
any file is written.

```rust,no_run
use testvid::{render_test_video, Error, VideoParams};

fn main() {
    match render_test_video(&VideoParams::new("missing.svg")) {
        Ok(report) if !report.encoded() => eprintln!("ffmpeg failed: {}", report.encode.stderr),
        Ok(_) => {}
        Err(Error::TemplateNotFound { path }) => eprintln!("no template at {}", path.display()),
        Err(Error::FrameNumberNotFound { id, .. }) => eprintln!("no <text id={id:?}>"),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — one-call pipeline entry points.
- [`core`] — parameters, path resolution, validation and frame generation.
- [`io`] — SVG template reader/writer, working directory, encoder invocation.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::VideoParams;
pub use crate::core::settings::RunSettings;
pub use error::{Error, Result};
pub use types::{FRAME_NAME_WIDTH, MAX_FRAMES, WorkDirKind, frame_file_name};

// Building blocks
pub use crate::core::frames::{FrameSet, create_frame_images, write_frames};
pub use io::{EncodeConfig, EncodeReport, FrameNumberSlot, SvgTemplate, WorkDir};

// High-level API re-exports
pub use api::{RunReport, render_test_video, run_with_settings};

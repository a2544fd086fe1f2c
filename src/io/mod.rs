//! I/O layer: the SVG `template` reader/writer, the per-run `workdir`, and the
//! external `encoder` invocation.
pub mod template;
pub use template::{FrameNumberSlot, SvgTemplate};

pub mod workdir;
pub use workdir::WorkDir;

pub mod encoder;
pub use encoder::{EncodeConfig, EncodeReport};

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="320" height="180">
  <rect width="320" height="180" fill="black"/>
  <text id="frame_no" x="160" y="100" fill="white">0</text>
</svg>
"#;

pub const TSPAN_TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="180">
  <text id="frame_no" x="160" y="100"><tspan sodipodi:role="line" xmlns:sodipodi="urn:x">0</tspan></text>
</svg>
"#;

pub fn write_template(dir: &Path, xml: &str) -> PathBuf {
    let path = dir.join("tmpl.svg");
    fs::write(&path, xml).unwrap();
    path
}

/// Executable script standing in for ffmpeg. It records its arguments (one per
/// line) to `<script>.args` and the names of the frame files visible at call
/// time to `<script>.frames`, then exits with `exit_code`.
#[cfg(unix)]
pub fn fake_encoder(dir: &Path, exit_code: i32) -> PathBuf {
    fake_encoder_with(dir, exit_code, "")
}

/// Like [`fake_encoder`], additionally running `on_frames_dir` with `$d` set
/// to the frames directory.
#[cfg(unix)]
pub fn fake_encoder_with(dir: &Path, exit_code: i32, on_frames_dir: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-ffmpeg");
    let script = format!(
        r#"#!/bin/sh
prev=""
: > "$0.args"
for a in "$@"; do
  printf '%s\n' "$a" >> "$0.args"
  if [ "$prev" = "-i" ]; then
    ls "$(dirname "$a")" > "$0.frames"
    dirname "$a" > "$0.dir"
    d="$(dirname "$a")"
    {on_frames_dir}
  fi
  prev="$a"
done
echo "encoder says hello"
echo "encoder went boom" >&2
exit {exit_code}
"#
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn recorded_lines(encoder: &Path, suffix: &str) -> Vec<String> {
    let mut p = encoder.as_os_str().to_owned();
    p.push(suffix);
    fs::read_to_string(PathBuf::from(p))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

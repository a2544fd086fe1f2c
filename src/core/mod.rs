//! Core building blocks: request parameters, path resolution, validation into
//! run settings, and frame generation. These are consumed by the high-level
//! `api` module.
pub mod frames;
pub mod params;
pub mod paths;
pub mod settings;

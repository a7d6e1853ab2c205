/// Dataset augmentation by horizontal mirroring
///
/// This module handles:
/// - Finding supported images directly inside a folder (scan.rs)
/// - Mirroring a decoded image left to right (mirror.rs)
/// - Driving a whole folder through decode, mirror and encode (batch.rs)

pub mod batch;
pub mod mirror;
pub mod scan;

pub use batch::{flip_folder, FlipSummary};

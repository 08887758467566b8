//! Shared utilities.

/// Frame delta time and FPS tracking for host loops.
pub mod frame_timing;

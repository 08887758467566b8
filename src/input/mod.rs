//! Input handling: platform-agnostic events, the per-frame input snapshot
//! handed to the rig, and the sampler that turns raw positions into
//! discrete look directions.

/// Platform-agnostic input events.
pub mod event;
/// Debounced direction sampling for pointer and touch sources.
pub mod sampler;
/// Per-frame view of pointer and touch state.
pub mod snapshot;

pub use event::{InputEvent, TouchPhase};
pub use sampler::{DirectionSampler, InputMode, DEBOUNCE_THRESHOLD};
pub use snapshot::{FrameInput, InputSnapshot, TouchPoint};

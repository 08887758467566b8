use glam::Vec2;

use super::event::{InputEvent, TouchPhase};

/// A single touch point as seen during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform identifier of the touch.
    pub id: u64,
    /// Screen position in physical pixels (y-up).
    pub position: Vec2,
    /// Phase reported most recently for this touch.
    pub phase: TouchPhase,
}

/// Read-only view of input device state for one frame.
///
/// The rig never polls global state: the host hands it an implementation
/// of this trait on every update.
pub trait InputSnapshot {
    /// Current pointer position in screen space (y-up).
    fn pointer_position(&self) -> Vec2;

    /// Touch points present this frame, in the order they went down.
    fn touches(&self) -> &[TouchPoint];

    /// Number of touch points present this frame.
    fn touch_count(&self) -> usize {
        self.touches().len()
    }

    /// The touch that went down first, if any.
    fn first_touch(&self) -> Option<&TouchPoint> {
        self.touches().first()
    }
}

/// [`InputSnapshot`] built up from [`InputEvent`]s between frames.
///
/// Touches that end during a frame stay visible until [`end_frame`]
/// so the frame that saw the lift still sees the final position.
///
/// [`end_frame`]: Self::end_frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pointer: Vec2,
    touches: Vec<TouchPoint>,
}

impl FrameInput {
    /// Empty input: pointer at the origin, no touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the snapshot.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::Touch { id, x, y, phase } => {
                self.handle_touch(id, Vec2::new(x, y), phase);
            }
        }
    }

    fn handle_touch(&mut self, id: u64, position: Vec2, phase: TouchPhase) {
        if let Some(touch) = self.touches.iter_mut().find(|t| t.id == id) {
            touch.position = position;
            touch.phase = phase;
            return;
        }
        // A lift for a touch we never saw carries no information
        if phase.is_active() {
            self.touches.push(TouchPoint {
                id,
                position,
                phase,
            });
        } else {
            log::trace!("ignoring {phase:?} for unknown touch {id}");
        }
    }

    /// Drop touches that ended or were cancelled. Call once per frame
    /// after the rig has read the snapshot.
    pub fn end_frame(&mut self) {
        self.touches.retain(|t| t.phase.is_active());
    }
}

impl InputSnapshot for FrameInput {
    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn touches(&self) -> &[TouchPoint] {
        &self.touches
    }
}

/// Platform-agnostic input events.
///
/// These are fed into a [`FrameInput`](super::FrameInput), which the rig
/// reads once per frame through the [`InputSnapshot`](super::InputSnapshot)
/// trait.
///
/// Positions are in screen space with the origin at the bottom-left and
/// y growing upward. Window systems that report y-down coordinates must
/// flip them first.
///
/// # Example
///
/// ```
/// use orbitcam::input::{FrameInput, InputEvent, InputSnapshot};
///
/// let mut input = FrameInput::new();
/// input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// assert_eq!(input.pointer_position().x, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (y-up).
        y: f32,
    },
    /// A touch point started, moved, or was lifted.
    Touch {
        /// Platform identifier, stable for the lifetime of one touch.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (y-up).
        y: f32,
        /// Lifecycle phase of the touch.
        phase: TouchPhase,
    },
}

/// Lifecycle phase of a touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger went down.
    Started,
    /// Finger moved while down.
    Moved,
    /// Finger lifted.
    Ended,
    /// The platform cancelled the touch.
    Cancelled,
}

impl TouchPhase {
    /// Whether the touch is still on the screen.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Started | Self::Moved)
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event into an [`InputEvent`].
    ///
    /// winit reports y-down coordinates; `surface_height` (in physical
    /// pixels) is used to flip them. Returns `None` for events the rig
    /// does not consume.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
        surface_height: f32,
    ) -> Option<Self> {
        match event {
            winit::event::WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: surface_height - position.y as f32,
                })
            }
            winit::event::WindowEvent::Touch(touch) => Some(Self::Touch {
                id: touch.id,
                x: touch.location.x as f32,
                y: surface_height - touch.location.y as f32,
                phase: touch.phase.into(),
            }),
            _ => None,
        }
    }
}

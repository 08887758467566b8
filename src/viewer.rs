//! Standalone window that drives an [`OrbitRig`] from live input.
//!
//! Nothing is rendered: the current camera pose is shown in the window
//! title and logged at `trace` level, which is enough to tune option
//! presets by hand.
//!
//! ```no_run
//! # use orbitcam::Viewer;
//! Viewer::builder()
//!     .with_title("orbit preview")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::OrbitError,
    input::{FrameInput, InputEvent},
    options::Options,
    util::frame_timing::FrameTiming,
    OrbitRig,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    target: Vec3,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "orbitcam", default
    /// options, target at the origin).
    fn new() -> Self {
        Self {
            options: None,
            title: "orbitcam".into(),
            target: Vec3::ZERO,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the world position the camera orbits.
    #[must_use]
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
            target: self.target,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window whose cursor and touch input drive an orbit rig.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
    target: Vec3,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), OrbitError> {
        let event_loop =
            EventLoop::new().map_err(|e| OrbitError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            rig: OrbitRig::new(self.options),
            input: FrameInput::new(),
            timing: FrameTiming::new(60),
            title: self.title,
            target: self.target,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| OrbitError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    rig: OrbitRig,
    input: FrameInput,
    timing: FrameTiming,
    title: String,
    target: Vec3,
}

impl ViewerApp {
    fn surface_height(&self) -> f32 {
        self.window
            .as_ref()
            .map_or(0.0, |w| w.inner_size().height as f32)
    }

    /// Run one rig update and publish the pose.
    fn frame(&mut self) {
        let dt = self.timing.tick();
        let pose = self.rig.update(dt, &self.input, self.target);
        self.input.end_frame();

        let rot = pose.rotation_euler;
        let pos = pose.position;
        log::trace!("pose rotation {rot} position {pos}");

        if let Some(window) = &self.window {
            window.set_title(&format!(
                "{} | rot ({:.1}, {:.1}) | pos ({:.2}, {:.2}, {:.2}) | \
                 {:.0} fps",
                self.title,
                rot.x,
                rot.y,
                pos.x,
                pos.y,
                pos.z,
                self.timing.fps(),
            ));
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(960, 640));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        log::info!(
            "viewer started with {:?} input",
            self.rig.options().input.mode
        );
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Focused(focused) => {
                self.rig.set_enabled(focused);
            }

            WindowEvent::RedrawRequested => {
                if self.timing.should_render() {
                    self.frame();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            other => {
                let height = self.surface_height();
                if let Some(input) =
                    InputEvent::from_window_event(&other, height)
                {
                    self.input.handle_event(input);
                }
            }
        }
    }
}

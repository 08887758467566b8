// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests use unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Orbit camera rig driven by pointer or single-finger touch input.
//!
//! Each frame the rig turns raw device movement into a discrete look
//! direction, accumulates it into clamped rotation angles, smooth-damps the
//! displayed rotation toward them and places the camera a fixed distance
//! behind the target.
//!
//! # Key entry points
//!
//! - [`OrbitRig`] - the per-frame rig
//! - [`input::InputSnapshot`] - the input view handed to each update
//! - [`options::Options`] - configuration with TOML presets
//! - [`camera::smooth_damp`] - the critically damped smoother
//!
//! With the `viewer` feature, [`Viewer`] opens a winit window that drives a
//! rig from live cursor and touch input.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{CameraPose, OrbitRig, RotationState, Transform};
pub use error::OrbitError;
pub use input::{FrameInput, InputEvent, InputMode, InputSnapshot};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};

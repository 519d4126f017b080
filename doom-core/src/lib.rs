//! # doom core
//!
//! Platform independent half of the doom OpenGL exercises: colors and the
//! rainbow palette, window and context configuration, triangle geometry and
//! the two frame loops.
//!
//! The frame loops only talk to the window system and GL through the
//! [`Platform`] and [`Surface`] traits, so they can be driven by a real GLFW
//! window or by a test double.
//!
//! ## Logging
//!
//! Lifecycle events are emitted through `tracing`. Install a subscriber in the
//! application to see them:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
//!     .init();
//! ```

mod app;
mod color;
mod error;
mod geometry;
mod platform;
mod toggle;
mod window;

pub use {
    app::{FrameStats, TRIANGLE_EDGE, run_color_toggle, run_triangle},
    color::{Color, PALETTE_LEN, Palette, Spectrum, VIBGYOR},
    error::Error,
    geometry::{Vertex, equilateral_triangle},
    platform::{Platform, Surface},
    toggle::ColorToggle,
    window::{AppConfig, ContextConfig, Profile, WindowDescriptor},
};

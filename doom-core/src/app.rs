use crate::{
    AppConfig, Color, ColorToggle, Error, Platform, Surface, WindowDescriptor,
    equilateral_triangle,
};
use tracing::{debug, info, instrument};

pub const TRIANGLE_EDGE: f32 = 1.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
}

/// Clears the window with [`Color::SKY`] once, then alternates with
/// [`Color::BROWNISH`] every frame until the window is asked to close.
///
/// The platform is consumed: it is shut down before this returns, whatever the
/// outcome.
#[instrument(skip_all, fields(title = config.window.title()))]
pub fn run_color_toggle<P: Platform>(
    mut platform: P,
    config: &AppConfig,
) -> Result<FrameStats, Error> {
    let mut surface = open_surface(&mut platform, &config.window)?;

    let mut toggle = ColorToggle::new(Color::SKY, Color::BROWNISH);
    surface.clear(toggle.current());
    surface.swap_buffers();

    debug!("entering frame loop");
    let mut stats = FrameStats::default();
    while !surface.should_close() {
        surface.poll_events();
        surface.clear(toggle.advance());
        surface.swap_buffers();
        stats.frames += 1;
    }

    info!(frames = stats.frames, "window closed");
    Ok(stats)
}

/// Draws a unit equilateral triangle over `clear_color` every frame until the
/// window is asked to close.
#[instrument(skip_all, fields(title = config.window.title()))]
pub fn run_triangle<P: Platform>(
    mut platform: P,
    config: &AppConfig,
    clear_color: Color,
) -> Result<FrameStats, Error> {
    let mut surface = open_surface(&mut platform, &config.window)?;
    // Declared after the surface so it is deleted first
    let mesh = surface.create_triangle(&equilateral_triangle(TRIANGLE_EDGE))?;

    surface.clear(clear_color);
    surface.swap_buffers();

    debug!("entering frame loop");
    let mut stats = FrameStats::default();
    while !surface.should_close() {
        surface.clear(clear_color);
        surface.draw(&mesh);
        surface.swap_buffers();
        surface.poll_events();
        stats.frames += 1;
    }

    info!(frames = stats.frames, "window closed");
    Ok(stats)
}

fn open_surface<P: Platform>(
    platform: &mut P,
    descriptor: &WindowDescriptor,
) -> Result<P::Surface, Error> {
    let Some(mut surface) = platform.create_surface(descriptor) else {
        debug!("windowing layer refused to create the window");
        return Err(Error::WindowCreation);
    };

    surface.make_current();

    surface.set_viewport(0, 0, descriptor.width(), descriptor.height());

    debug!(
        width = descriptor.width(),
        height = descriptor.height(),
        "window open"
    );

    Ok(surface)
}

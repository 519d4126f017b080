use doom_core::{Color, ContextConfig, Error, Platform, Profile, Surface, Vertex, WindowDescriptor};
use doom_opengl::TriangleMesh;
use glfw::{Context as _, Glfw, GlfwReceiver, OpenGlProfileHint, PWindow, WindowEvent, WindowHint};
use std::ffi::c_void;
use tracing::{debug, error, trace};

fn log_glfw_error(error: glfw::Error, description: String) {
    error!(?error, "GLFW: {description}");
}

pub struct GlfwPlatform {
    glfw: Glfw,
    context: ContextConfig,
}

impl GlfwPlatform {
    pub fn init(context: ContextConfig) -> Result<Self, glfw::InitError> {
        let mut glfw = glfw::init(log_glfw_error)?;

        glfw.window_hint(WindowHint::ContextVersion(
            context.version_major,
            context.version_minor,
        ));
        glfw.window_hint(WindowHint::OpenGlProfile(match context.profile {
            Profile::Core => OpenGlProfileHint::Core,
            Profile::Compat => OpenGlProfileHint::Compat,
            Profile::Any => OpenGlProfileHint::Any,
        }));
        #[cfg(target_os = "macos")]
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));

        debug!(
            major = context.version_major,
            minor = context.version_minor,
            profile = ?context.profile,
            "GLFW initialized"
        );

        Ok(Self { glfw, context })
    }
}

impl Platform for GlfwPlatform {
    type Surface = GlfwSurface;

    fn create_surface(&mut self, descriptor: &WindowDescriptor) -> Option<GlfwSurface> {
        let (window, events) = self.glfw.create_window(
            descriptor.width(),
            descriptor.height(),
            descriptor.title(),
            glfw::WindowMode::Windowed,
        )?;

        Some(GlfwSurface {
            context: GlfwContextWrapper { window },
            events,
            vsync: self.context.vsync,
        })
    }
}

impl Drop for GlfwPlatform {
    fn drop(&mut self) {
        // GLFW terminates once the last handle, this one, goes away
        debug!("shutting GLFW down");
    }
}

pub struct GlfwSurface {
    context: GlfwContextWrapper,
    events: GlfwReceiver<(f64, WindowEvent)>,
    vsync: bool,
}

impl Surface for GlfwSurface {
    type Mesh = TriangleMesh;

    fn make_current(&mut self) {
        doom_opengl::load(&mut self.context);

        let window = &mut self.context.window;
        window.set_close_polling(true);
        window.glfw.set_swap_interval(if self.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });
    }

    // GL calls below rely on the context made current in `make_current`,
    // which no other window ever takes over.

    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        unsafe { doom_opengl::set_viewport(x, y, width, height) }
    }

    fn clear(&mut self, color: Color) {
        unsafe { doom_opengl::clear(color) }
    }

    fn create_triangle(&mut self, vertices: &[Vertex; 3]) -> Result<TriangleMesh, Error> {
        unsafe { TriangleMesh::new(vertices) }.map_err(Into::into)
    }

    fn draw(&mut self, mesh: &TriangleMesh) {
        unsafe { mesh.draw() }
    }

    fn should_close(&self) -> bool {
        self.context.window.should_close()
    }

    fn poll_events(&mut self) {
        self.context.window.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            trace!(?event, "window event");
        }
    }

    fn swap_buffers(&mut self) {
        self.context.window.swap_buffers();
    }
}

impl Drop for GlfwSurface {
    fn drop(&mut self) {
        debug!("destroying window");
    }
}

pub struct GlfwContextWrapper {
    window: PWindow,
}

impl doom_opengl::Context for GlfwContextWrapper {
    fn get_proc_address(&mut self, procname: &str) -> *const c_void {
        self.window.get_proc_address(procname) as *const c_void
    }

    fn make_current(&mut self) {
        self.window.make_current();
    }
}

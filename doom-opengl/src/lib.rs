//! OpenGL objects for the doom exercises, on top of the `gl` function table.
//!
//! Every GL object here is owned by exactly one value and deleted when that
//! value is dropped.

mod buffer;
mod error;
mod mesh;
mod shader;
mod shader_program;

use core::ffi::c_void;
use doom_core::Color;

pub use buffer::{VertexArray, VertexBuffer};
pub use error::Error;
pub use mesh::TriangleMesh;
pub use shader::{
    FragmentShader, Shader, TRIANGLE_FRAGMENT_SOURCE, TRIANGLE_VERTEX_SOURCE, VertexShader,
};
pub use shader_program::ShaderProgram;

/// A windowing layer that owns a GL context.
pub trait Context {
    fn get_proc_address(&mut self, procname: &str) -> *const c_void;

    fn make_current(&mut self);
}

/// Makes `context` current and loads the GL function table from it.
pub fn load<C: Context>(context: &mut C) {
    context.make_current();
    gl::load_with(|procname| context.get_proc_address(procname));
}

/// # Safety
///
/// A GL context must be current and its functions loaded.
pub unsafe fn set_viewport(x: i32, y: i32, width: u32, height: u32) {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    unsafe {
        gl::Viewport(x, y, width, height);
    }
}

/// # Safety
///
/// A GL context must be current and its functions loaded.
pub unsafe fn clear(color: Color) {
    unsafe {
        gl::ClearColor(color.r(), color.g(), color.b(), color.a());
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

use crate::{Color, Error, Vertex, WindowDescriptor};

/// An initialized windowing and graphics context.
///
/// Dropping the value shuts the context down, after every [`Surface`] it
/// created has been dropped.
pub trait Platform {
    type Surface: Surface;

    /// Opens a window with its own GL context. `None` means the windowing
    /// layer refused to create it.
    fn create_surface(&mut self, descriptor: &WindowDescriptor) -> Option<Self::Surface>;
}

/// One open window and its GL context. Dropping it destroys the window.
pub trait Surface {
    /// GPU objects backing a triangle: vertex array, vertex buffer and shader
    /// program. Dropping it deletes them.
    type Mesh;

    /// Makes the context current and loads the GL function table.
    fn make_current(&mut self);

    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32);

    fn clear(&mut self, color: Color);

    fn create_triangle(&mut self, vertices: &[Vertex; 3]) -> Result<Self::Mesh, Error>;

    fn draw(&mut self, mesh: &Self::Mesh);

    fn should_close(&self) -> bool;

    fn poll_events(&mut self);

    fn swap_buffers(&mut self);
}

use super::buffer::{VertexArray, VertexBuffer};
use super::shader::{
    FragmentShader, TRIANGLE_FRAGMENT_SOURCE, TRIANGLE_VERTEX_SOURCE, VertexShader,
};
use super::shader_program::ShaderProgram;
use super::Error;
use doom_core::Vertex;
use gl::types::*;

const POSITION_ATTRIBUTE: GLuint = 0;
const VERTEX_COUNT: GLsizei = 3;

/// Everything needed to draw the exercise triangle. Fields drop in
/// declaration order: vertex array, vertex buffer, program.
pub struct TriangleMesh {
    vertex_array: VertexArray,
    _vertex_buffer: VertexBuffer,
    program: ShaderProgram,
}

impl TriangleMesh {
    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn new(vertices: &[Vertex; 3]) -> Result<Self, Error> {
        unsafe {
            let vertex_shader = VertexShader::new(TRIANGLE_VERTEX_SOURCE)?;
            let fragment_shader = FragmentShader::new(TRIANGLE_FRAGMENT_SOURCE)?;
            let program = ShaderProgram::new(vertex_shader, fragment_shader)?;

            let vertex_array = VertexArray::new();
            vertex_array.bind();
            let vertex_buffer = VertexBuffer::with_data(vertices.as_flattened());
            vertex_array.float_attribute(POSITION_ATTRIBUTE, 3);

            // Nothing else may modify this layout by accident
            VertexBuffer::unbind();
            VertexArray::unbind();

            tracing::debug!("triangle uploaded");

            Ok(Self {
                vertex_array,
                _vertex_buffer: vertex_buffer,
                program,
            })
        }
    }

    /// # Safety
    ///
    /// The context the mesh was created in must be current.
    pub unsafe fn draw(&self) {
        unsafe {
            self.program.use_program();
            self.vertex_array.bind();
            gl::DrawArrays(gl::TRIANGLES, 0, VERTEX_COUNT);
        }
    }
}

use core::ptr;
use gl::types::*;

/// Vertex array object: remembers the attribute layout of the buffers bound
/// while it was bound.
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }
        Self { id }
    }

    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Describes attribute `index` as `components` tightly packed floats per
    /// vertex, starting at offset zero of the bound array buffer, and enables
    /// it.
    ///
    /// # Safety
    ///
    /// A GL context must be current and this vertex array bound.
    pub unsafe fn float_attribute(&self, index: GLuint, components: GLint) {
        let stride = components * GLint::try_from(size_of::<GLfloat>()).unwrap_or(4);
        unsafe {
            gl::VertexAttribPointer(index, components, gl::FLOAT, gl::FALSE, stride, ptr::null());
            gl::EnableVertexAttribArray(index);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}

/// An `ARRAY_BUFFER` filled once with `STATIC_DRAW` data.
pub struct VertexBuffer {
    id: GLuint,
}

impl VertexBuffer {
    /// Creates the buffer, binds it and uploads `data`. The buffer stays bound
    /// so an attribute layout can be recorded against it.
    ///
    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn with_data(data: &[GLfloat]) -> Self {
        let mut id = 0;
        let size = GLsizeiptr::try_from(size_of_val(data)).unwrap_or(GLsizeiptr::MAX);
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);
            gl::BufferData(gl::ARRAY_BUFFER, size, data.as_ptr().cast(), gl::STATIC_DRAW);
        }
        Self { id }
    }

    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn unbind() {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

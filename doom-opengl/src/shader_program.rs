use super::Error;
use super::shader::{FragmentShader, VertexShader};
use gl::types::*;

pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Links both stages. The shader objects are consumed and deleted once the
    /// link has run, the program keeps its own copy of the binaries.
    ///
    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn new(
        vertex_shader: VertexShader,
        fragment_shader: FragmentShader,
    ) -> Result<Self, Error> {
        unsafe {
            let id = gl::CreateProgram();
            gl::AttachShader(id, vertex_shader.id());
            gl::AttachShader(id, fragment_shader.id());
            gl::LinkProgram(id);
            // Get the link status
            let mut status = GLint::from(gl::FALSE);
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);

            if status == GLint::from(gl::TRUE) {
                return Ok(Self { id });
            }

            let mut len: GLint = 0;
            gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0_u8; usize::try_from(len).unwrap_or_default()];
            let mut written = 0;
            gl::GetProgramInfoLog(id, len, &mut written, buf.as_mut_ptr().cast::<GLchar>());
            buf.truncate(usize::try_from(written).unwrap_or_default());
            gl::DeleteProgram(id);

            Err(Error::ShaderLink {
                msg: String::from_utf8_lossy(&buf).into_owned(),
            })
        }
    }

    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn use_program(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

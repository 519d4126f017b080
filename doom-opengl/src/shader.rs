use super::Error;
use core::ptr;
use gl::types::*;

pub const TRIANGLE_VERTEX_SOURCE: &str = include_str!("../shader/triangle.vert");
pub const TRIANGLE_FRAGMENT_SOURCE: &str = include_str!("../shader/triangle.frag");

pub type VertexShader = Shader<{ gl::VERTEX_SHADER }>;
pub type FragmentShader = Shader<{ gl::FRAGMENT_SHADER }>;

pub struct Shader<const SHADER_TYPE: GLenum> {
    id: GLuint,
}

impl<const SHADER_TYPE: GLenum> Shader<SHADER_TYPE> {
    /// # Safety
    ///
    /// A GL context must be current and its functions loaded.
    pub unsafe fn new(source: &str) -> Result<Self, Error> {
        unsafe {
            let id = gl::CreateShader(SHADER_TYPE);
            // Attempt to compile the shader
            let mut c_string = source.as_bytes().to_vec();
            c_string.push(b'\0');
            gl::ShaderSource(id, 1, &c_string.as_ptr().cast::<GLchar>(), ptr::null());
            gl::CompileShader(id);

            // Get the compile status
            let mut status = GLint::from(gl::FALSE);
            gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);

            if status == GLint::from(gl::TRUE) {
                return Ok(Self { id });
            }

            let mut len = 0;
            gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0_u8; usize::try_from(len).unwrap_or_default()];
            let mut written = 0;
            gl::GetShaderInfoLog(id, len, &mut written, buf.as_mut_ptr().cast::<GLchar>());
            buf.truncate(usize::try_from(written).unwrap_or_default());
            gl::DeleteShader(id);

            Err(Error::ShaderCompile {
                msg: String::from_utf8_lossy(&buf).into_owned(),
            })
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl<const SHADER_TYPE: GLenum> Drop for Shader<SHADER_TYPE> {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}

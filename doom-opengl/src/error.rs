extern crate alloc;

use alloc::string::String;
use core::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum Error {
    ShaderCompile { msg: String },
    ShaderLink { msg: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use Error::*;
        match self {
            ShaderCompile { msg } => write!(f, "opengl couldn't compile shaders: {msg}"),
            ShaderLink { msg } => write!(f, "opengl couldn't link shaders: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<Error> for doom_core::Error {
    fn from(error: Error) -> Self {
        Self::Graphics {
            msg: alloc::string::ToString::to_string(&error),
        }
    }
}

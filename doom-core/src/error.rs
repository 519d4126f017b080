use core::{error, fmt};
use fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyTitle,
    Graphics { msg: String },
    InvalidWindowSize { width: u32, height: u32 },
    WindowCreation,
}

impl Error {
    /// Process exit status for a run that ended with this error.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::WindowCreation => -1,
            Self::EmptyTitle | Self::Graphics { .. } | Self::InvalidWindowSize { .. } => 1,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "window title must not be empty"),
            Self::Graphics { msg } => write!(f, "{msg}"),
            Self::InvalidWindowSize { width, height } => {
                write!(f, "invalid window size {width}x{height}, both sides must be positive")
            }
            Self::WindowCreation => write!(f, "Failed to create window"),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_creation_exits_with_minus_one() {
        assert_eq!(Error::WindowCreation.exit_code(), -1);
        assert_eq!(Error::WindowCreation.to_string(), "Failed to create window");
    }

    #[test]
    fn other_errors_exit_with_one() {
        assert_eq!(Error::EmptyTitle.exit_code(), 1);
        assert_eq!(
            Error::Graphics {
                msg: "opengl couldn't link shaders: bad".into()
            }
            .exit_code(),
            1
        );
        assert_eq!(
            Error::InvalidWindowSize {
                width: 0,
                height: 600
            }
            .to_string(),
            "invalid window size 0x600, both sides must be positive"
        );
    }
}

use crate::Error;

/// Size and title of the window to open. Only consumed by window creation,
/// it has no link to the OS window afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    width: u32,
    height: u32,
    title: String,
}

impl WindowDescriptor {
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidWindowSize { width, height });
        }

        let title = title.into();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        Ok(Self {
            width,
            height,
            title,
        })
    }

    #[must_use]
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    #[default]
    Core,
    Compat,
    Any,
}

/// Context hints applied before the window is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    pub version_major: u32,
    pub version_minor: u32,
    pub profile: Profile,
    pub vsync: bool,
}

impl Default for ContextConfig {
    #[inline]
    fn default() -> Self {
        Self {
            version_major: 3,
            version_minor: 3,
            profile: Profile::Core,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub window: WindowDescriptor,
    pub context: ContextConfig,
}

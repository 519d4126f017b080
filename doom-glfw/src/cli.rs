use doom_core::{AppConfig, Color, ContextConfig, Error, Profile, Spectrum, WindowDescriptor};

const ABOUT: &str = "Two small OpenGL exercises: a window whose background flips between \
    two colors every frame, and a single equilateral triangle.";
const AFTER_HELP: &str = "Set RUST_LOG=debug to follow the window lifecycle.";

pub trait AppOption: Default + Clone + Copy + clap::ValueEnum {
    fn str(self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Exercise {
    Toggle,
    #[default]
    Triangle,
}

impl Exercise {
    #[must_use]
    #[inline]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Toggle => "Doom 3D",
            Self::Triangle => "Doom 3D Triangle",
        }
    }
}

impl AppOption for Exercise {
    #[inline]
    fn str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Triangle => "triangle",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ProfileOption {
    #[default]
    Core,
    Compat,
    Any,
}

impl AppOption for ProfileOption {
    #[inline]
    fn str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Compat => "compat",
            Self::Any => "any",
        }
    }
}

impl From<ProfileOption> for Profile {
    #[inline]
    fn from(profile: ProfileOption) -> Self {
        match profile {
            ProfileOption::Core => Self::Core,
            ProfileOption::Compat => Self::Compat,
            ProfileOption::Any => Self::Any,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ClearColor {
    Violet,
    Indigo,
    #[default]
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl AppOption for ClearColor {
    #[inline]
    fn str(self) -> &'static str {
        match self {
            Self::Violet => "violet",
            Self::Indigo => "indigo",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl From<ClearColor> for Spectrum {
    #[inline]
    fn from(color: ClearColor) -> Self {
        match color {
            ClearColor::Violet => Self::Violet,
            ClearColor::Indigo => Self::Indigo,
            ClearColor::Blue => Self::Blue,
            ClearColor::Green => Self::Green,
            ClearColor::Yellow => Self::Yellow,
            ClearColor::Orange => Self::Orange,
            ClearColor::Red => Self::Red,
        }
    }
}

#[derive(clap::Parser)]
#[command(name = super::DOOM_BIN, about = ABOUT, after_help = AFTER_HELP)]
pub struct Cli {
    #[arg(
        help = "Exercise to run",
        default_value = Exercise::default().str(),
        value_enum
    )]
    exercise: Exercise,
    #[arg(long, help = "Window width in pixels", default_value_t = 1920)]
    width: u32,
    #[arg(long, help = "Window height in pixels", default_value_t = 1080)]
    height: u32,
    #[arg(
        long,
        help = "Window title",
        long_help = "Window title. Defaults to \"Doom 3D\" for the toggle exercise and \
           \"Doom 3D Triangle\" for the triangle exercise."
    )]
    title: Option<String>,
    #[arg(long, help = "Requested OpenGL major version", default_value_t = 3)]
    gl_major: u32,
    #[arg(long, help = "Requested OpenGL minor version", default_value_t = 3)]
    gl_minor: u32,
    #[arg(
        long,
        help = "OpenGL profile",
        default_value = ProfileOption::default().str(),
        value_enum
    )]
    profile: ProfileOption,
    #[arg(
        short,
        long,
        help = "Background behind the triangle",
        default_value = ClearColor::default().str(),
        value_enum
    )]
    clear_color: ClearColor,
    #[arg(long, help = "Don't wait for vertical sync when swapping buffers")]
    no_vsync: bool,
}

impl Cli {
    #[must_use]
    #[inline]
    pub const fn exercise(&self) -> Exercise {
        self.exercise
    }

    #[must_use]
    #[inline]
    pub fn clear_color(&self) -> Color {
        Spectrum::from(self.clear_color).color()
    }

    pub fn app_config(&self) -> Result<AppConfig, Error> {
        let title = self
            .title
            .as_deref()
            .unwrap_or_else(|| self.exercise.default_title());

        Ok(AppConfig {
            window: WindowDescriptor::new(self.width, self.height, title)?,
            context: ContextConfig {
                version_major: self.gl_major,
                version_minor: self.gl_minor,
                profile: self.profile.into(),
                vsync: !self.no_vsync,
            },
        })
    }
}

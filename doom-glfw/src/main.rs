mod cli;
mod error;
mod glfw_platform;

use clap::Parser;
use cli::{Cli, Exercise};
use glfw_platform::GlfwPlatform;
use tracing_subscriber::EnvFilter;

pub const DOOM_BIN: &str = "doom";

fn main() {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.app_config().unwrap_or_else(|e| error::print(e));
    let platform = GlfwPlatform::init(config.context).unwrap_or_else(|e| error::print(e));

    let result = match args.exercise() {
        Exercise::Toggle => doom_core::run_color_toggle(platform, &config),
        Exercise::Triangle => doom_core::run_triangle(platform, &config, args.clear_color()),
    };

    if let Err(e) = result {
        error::exit(&e);
    }
}

use colorful::{Color, Colorful};
use std::{
    fmt::Display,
    io::{self, Write},
};

pub fn write_report<W: Write, E: Display>(out: &mut W, error: &E) -> io::Result<()> {
    writeln!(
        out,
        "{}{} {} {}",
        super::DOOM_BIN.bold(),
        ":".bold(),
        "error:".color(Color::Red).bold(),
        error
    )
}

pub fn report<E: Display>(error: &E) {
    // Nothing left to tell if stderr itself is gone
    let _ = write_report(&mut io::stderr().lock(), error);
}

pub fn print<E: Display>(error: E) -> ! {
    report(&error);
    std::process::exit(1);
}

/// Reports `error` and exits with its status code.
pub fn exit(error: &doom_core::Error) -> ! {
    report(error);
    std::process::exit(error.exit_code());
}

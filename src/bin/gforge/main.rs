use std::process::ExitCode;

use gpf_forge::io::Error as IoError;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod util;

/// Exit status shared with clap's usage errors.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::parse();
    let ctx = display::Context::detect().with_quiet(cli.output.quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<IoError>() {
        Some(IoError::OutputExists(_)) => ExitCode::from(EXIT_USAGE),
        _ => ExitCode::FAILURE,
    }
}

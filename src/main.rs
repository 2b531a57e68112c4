use std::process::ExitCode;

use tempname::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = tempname::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

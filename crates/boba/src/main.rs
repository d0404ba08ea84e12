use std::process::ExitCode;

mod app;
mod config;
mod error;
mod events;
mod filesystem;
mod keymap;
mod logging;
mod panes;
mod theme;
mod ui;

#[cfg(test)]
mod test_utils;

fn main() -> ExitCode {
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("boba: {err}");
            ExitCode::FAILURE
        }
    }
}

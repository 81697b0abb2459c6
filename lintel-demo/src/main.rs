//! Scripted walk-through of the lintel widgets.
//!
//! Builds a sign-up form and a users table, drives them through a fixed
//! sequence of interactions, and prints each re-rendered state.

mod error;
mod form;
mod paths;
mod sample;
mod terminal;
mod users;
mod validation;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::DemoError;
use crate::terminal::Printer;

fn init_logging() -> Result<PathBuf, DemoError> {
    let path = paths::log_file();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    Ok(path)
}

fn run() -> Result<(), DemoError> {
    let log_path = init_logging()?;
    log::info!("lintel demo starting");

    let mut out = Printer::stdout();
    form::run(&mut out)?;
    users::run(&mut out)?;

    out.note(&format!("Debug log written to {}", log_path.display()))?;
    log::info!("lintel demo finished");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

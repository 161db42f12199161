mod app;
mod cli;
mod report;
mod samples;

use clap::Parser;
use env_logger::Env;
use std::io::{self, Write};

use crate::cli::Cli;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Usage errors share the error exit code instead of clap's default
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { app::EXIT_ERROR } else { 0 });
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match app::run(&cli, &mut out) {
        Ok(code) => code,
        Err(err) => {
            let _ = out.flush();
            eprintln!("error: {:#}", err);
            app::EXIT_ERROR
        }
    };

    let _ = out.flush();
    std::process::exit(code);
}
